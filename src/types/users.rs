use serde::{Deserialize, Serialize};

use crate::entities::user;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    #[serde(rename = "addr")]
    pub address: String,
    pub active: bool,
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            firstname: model.firstname,
            lastname: model.lastname,
            phone: model.phone,
            address: model.addr,
            active: model.active,
        }
    }
}

/// Body of `POST /users`. Absent fields deserialize to empty strings and are
/// rejected by validation rather than by the JSON parser.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UserCreateRequest {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub addr: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserListResponse {
    pub data: Vec<User>,
}
