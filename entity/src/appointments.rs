use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AppointmentStatus, AppointmentType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub pet_id: Option<i32>,
    pub shelter_id: Option<i32>,
    pub appointment_type: AppointmentType,
    pub appointment_datetime: DateTime,
    pub status: AppointmentStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
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
        belongs_to = "super::pets::Entity",
        from = "Column::PetId",
        to = "super::pets::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Pets,
    #[sea_orm(
        belongs_to = "super::shelters::Entity",
        from = "Column::ShelterId",
        to = "super::shelters::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Shelters,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::pets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl Related<super::shelters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shelters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
