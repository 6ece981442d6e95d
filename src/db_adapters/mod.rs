mod memory_user_adapter;
mod user_adapter;

pub use memory_user_adapter::MemoryUserAdapter;
pub use user_adapter::UserAdapter;

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};

use crate::types::User;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Db(DbErr),
    #[error("{0}")]
    Unavailable(String),
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => StoreError::Duplicate(message),
            _ => StoreError::Db(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub address: String,
}

/// Persistence for `kuser` rows as seen by the request handlers.
///
/// Nothing here validates names or phones. Callers other than the HTTP
/// handlers must run `utils::validation::validate_new_user` themselves.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows. An empty table gives an empty vector.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Inserts one row with `active = true`.
    async fn create_user(&self, params: CreateUserParams) -> Result<(), StoreError>;

    /// Sets `active = false` for the row with this phone. Matching zero rows is
    /// not an error.
    async fn deactivate_user(&self, phone: &str) -> Result<(), StoreError>;
}

/// Fixture reset, kept apart from `UserStore` so handlers cannot reach it.
#[async_trait]
pub trait UserFixtures: Send + Sync {
    async fn delete_all_users(&self) -> Result<(), StoreError>;
}
