use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kuser")]
pub struct Model {
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub phone: String,
    pub addr: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
