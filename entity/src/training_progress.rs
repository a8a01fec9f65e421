use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TrainingStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "training_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub module_id: i32,
    pub status: TrainingStatus,
    pub progress_percentage: i32,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::training_modules::Entity",
        from = "Column::ModuleId",
        to = "super::training_modules::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TrainingModules,
}

impl Related<super::training_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingModules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
