use serde::{Deserialize, Serialize};

pub const USER_DEACTIVATED_MESSAGE: &str = "User Deactivated";

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
