use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{TrainingCategory, TrainingDifficulty};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "training_modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub duration_minutes: i32,
    pub difficulty: TrainingDifficulty,
    pub category: TrainingCategory,
    #[sea_orm(column_type = "Text", nullable)]
    pub prerequisites: Option<String>,
    pub is_required: bool,
    pub created_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::training_progress::Entity")]
    TrainingProgress,
}

impl Related<super::training_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
