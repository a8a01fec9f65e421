use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{PetGender, PetStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: PetGender,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: PetStatus,
    pub shelter_id: Option<i32>,
    pub image_url: Option<String>,
    pub added_by_staff_id: Option<i32>,
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
        from = "Column::AddedByStaffId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    AddedByStaff,
}

impl Related<super::shelters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shelters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
