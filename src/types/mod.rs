mod general;
mod users;

pub use general::{ErrorResponse, USER_DEACTIVATED_MESSAGE};
pub use users::{User, UserCreateRequest, UserListResponse};
