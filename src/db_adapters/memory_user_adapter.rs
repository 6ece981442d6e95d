use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::types::User;

use super::{CreateUserParams, StoreError, UserFixtures, UserStore};

/// In-process `UserStore` with the same contract as `UserAdapter`.
///
/// Rows are kept in insertion order. `fail_with` makes every operation return
/// `StoreError::Unavailable` until `recover` is called.
#[derive(Debug, Default)]
pub struct MemoryUserAdapter {
    users: Mutex<Vec<User>>,
    failure: Mutex<Option<String>>,
}

impl MemoryUserAdapter {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: &str) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.to_string());
        }
    }

    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    fn users(&self) -> Result<MutexGuard<'_, Vec<User>>, StoreError> {
        let failure = self
            .failure
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if let Some(message) = failure.as_ref() {
            return Err(StoreError::Unavailable(message.clone()));
        }
        self.users
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserAdapter {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users()?.clone())
    }

    async fn create_user(&self, params: CreateUserParams) -> Result<(), StoreError> {
        let mut users = self.users()?;
        if users.iter().any(|user| user.phone == params.phone) {
            return Err(StoreError::Duplicate(format!(
                "phone {} already exists",
                params.phone
            )));
        }
        users.push(User {
            firstname: params.firstname,
            lastname: params.lastname,
            phone: params.phone,
            address: params.address,
            active: true,
        });
        Ok(())
    }

    async fn deactivate_user(&self, phone: &str) -> Result<(), StoreError> {
        self.users()?
            .iter_mut()
            .filter(|user| user.phone == phone)
            .for_each(|user| user.active = false);
        Ok(())
    }
}

#[async_trait]
impl UserFixtures for MemoryUserAdapter {
    async fn delete_all_users(&self) -> Result<(), StoreError> {
        self.users()?.clear();
        Ok(())
    }
}
