use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{SupplyCategory, SupplyStatus, SupplyUrgency};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "supply_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub foster_record_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub category: SupplyCategory,
    pub urgency: SupplyUrgency,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub estimated_cost: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub actual_cost: Option<f64>,
    pub status: SupplyStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub delivered_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::foster_records::Entity",
        from = "Column::FosterRecordId",
        to = "super::foster_records::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FosterRecords,
}

impl Related<super::foster_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FosterRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
