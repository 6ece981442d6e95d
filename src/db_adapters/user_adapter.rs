use async_trait::async_trait;
use sea_orm::{sea_query::Expr, ColumnTrait, DbConn, EntityTrait, QueryFilter, Set};

use crate::{
    entities::user::{ActiveModel, Column, Entity},
    types::User,
};

use super::{CreateUserParams, StoreError, UserFixtures, UserStore};

/// `UserStore` over the `kuser` table.
#[derive(Clone, Debug)]
pub struct UserAdapter {
    pub db: DbConn,
}

impl UserAdapter {
    pub fn init(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserAdapter {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }

    async fn create_user(&self, params: CreateUserParams) -> Result<(), StoreError> {
        let user = ActiveModel {
            firstname: Set(params.firstname),
            lastname: Set(params.lastname),
            phone: Set(params.phone),
            addr: Set(params.address),
            active: Set(true),
        };
        Entity::insert(user)
            .exec_without_returning(&self.db)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }

    async fn deactivate_user(&self, phone: &str) -> Result<(), StoreError> {
        Entity::update_many()
            .col_expr(Column::Active, Expr::value(false))
            .filter(Column::Phone.eq(phone))
            .exec(&self.db)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl UserFixtures for UserAdapter {
    async fn delete_all_users(&self) -> Result<(), StoreError> {
        Entity::delete_many()
            .exec(&self.db)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
