use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ApplicationStatus, PetStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub user_id: i32,
    pub pet_id: i32,
    pub pet_name: Option<String>,
    #[schema(value_type = String, example = "pending")]
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ApplicationDto {
    pub fn from_model(
        application: entity::applications::Model,
        pet: Option<entity::pets::Model>,
    ) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            pet_id: application.pet_id,
            pet_name: pet.map(|p| p.name),
            status: application.status,
            notes: application.notes,
            reviewed_by: application.reviewed_by,
            reviewed_at: application.reviewed_at,
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}

/// Result of an application status change.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDecisionDto {
    pub application: ApplicationDto,
    /// Status of the pet after the change
    #[schema(value_type = String, example = "adopted")]
    pub pet_status: PetStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    pub pet_id: i32,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusDto {
    #[schema(value_type = String, example = "approved")]
    pub status: ApplicationStatus,
}
