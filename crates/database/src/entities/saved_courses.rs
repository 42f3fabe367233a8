use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A course bookmarked via the search form. Only the course label is
/// stored; there is no reference to the user who saved it, so the bookmark
/// list is global.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saved_courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub course: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
