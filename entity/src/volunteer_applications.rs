use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{VolunteerApplicationStatus, VolunteerApplicationType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "volunteer_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub application_type: VolunteerApplicationType,
    #[sea_orm(column_type = "Text")]
    pub availability: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub experience: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub motivation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: VolunteerApplicationStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub reviewed_by: Option<i32>,
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
        belongs_to = "super::users::Entity",
        from = "Column::ReviewedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Reviewer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
