use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{TaskStatus, TaskUrgency};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "volunteer_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub shelter_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub required_skills: Option<String>,
    pub urgency: TaskUrgency,
    pub task_date: Option<DateTime>,
    pub status: TaskStatus,
    pub created_by: Option<i32>,
    pub assigned_to: Option<i32>,
    pub assigned_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shelters::Entity",
        from = "Column::ShelterId",
        to = "super::shelters::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Shelters,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssignedTo",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    AssignedTo,
}

impl Related<super::shelters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shelters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
