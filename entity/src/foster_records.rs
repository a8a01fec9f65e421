use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::FosterStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "foster_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    pub foster_parent_id: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub status: FosterStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub application_date: Date,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pets::Entity",
        from = "Column::PetId",
        to = "super::pets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pets,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::FosterParentId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FosterParent,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ApprovedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ApprovedBy,
    #[sea_orm(has_many = "super::supply_requests::Entity")]
    SupplyRequests,
}

impl Related<super::pets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl Related<super::supply_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
