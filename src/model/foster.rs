use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{FosterStatus, PetStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FosterRecordDto {
    pub id: i32,
    pub pet_id: i32,
    pub pet_name: Option<String>,
    pub foster_parent_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = String, example = "pending")]
    pub status: FosterStatus,
    pub notes: Option<String>,
    pub application_date: NaiveDate,
    pub approved_by: Option<i32>,
    pub approved_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FosterRecordDto {
    pub fn from_model(
        record: entity::foster_records::Model,
        pet: Option<entity::pets::Model>,
    ) -> Self {
        Self {
            id: record.id,
            pet_id: record.pet_id,
            pet_name: pet.map(|p| p.name),
            foster_parent_id: record.foster_parent_id,
            start_date: record.start_date,
            end_date: record.end_date,
            status: record.status,
            notes: record.notes,
            application_date: record.application_date,
            approved_by: record.approved_by,
            approved_at: record.approved_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Result of a foster record status change.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FosterDecisionDto {
    pub foster_record: FosterRecordDto,
    /// Status of the pet after the change
    #[schema(value_type = String, example = "fostered")]
    pub pet_status: PetStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFosterRecordDto {
    pub pet_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateFosterStatusDto {
    #[schema(value_type = String, example = "active")]
    pub status: FosterStatus,
}
