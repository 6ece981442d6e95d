mod users;
mod utils;

pub use users::user_routes;
