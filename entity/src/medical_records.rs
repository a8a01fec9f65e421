use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MedicalRecordType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pet_id: i32,
    pub record_date: Date,
    pub record_type: MedicalRecordType,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub next_due_date: Option<Date>,
    pub vet_id: Option<i32>,
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
        from = "Column::VetId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Vet,
}

impl Related<super::pets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
