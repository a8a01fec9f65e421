use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::MedicalRecordType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicalRecordDto {
    pub id: i32,
    pub pet_id: i32,
    pub record_date: NaiveDate,
    #[schema(value_type = String, example = "vaccination")]
    pub record_type: MedicalRecordType,
    pub details: String,
    pub next_due_date: Option<NaiveDate>,
    pub vet_id: Option<i32>,
    pub vet_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl MedicalRecordDto {
    pub fn from_model(
        record: entity::medical_records::Model,
        vet: Option<entity::users::Model>,
    ) -> Self {
        Self {
            id: record.id,
            pet_id: record.pet_id,
            record_date: record.record_date,
            record_type: record.record_type,
            details: record.details,
            next_due_date: record.next_due_date,
            vet_id: record.vet_id,
            vet_name: vet.map(|v| v.name.unwrap_or(v.username)),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Body of medical record create and update requests. Updates accept any subset of the fields.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicalRecordInputDto {
    pub pet_id: i32,
    pub record_date: NaiveDate,
    #[schema(value_type = String, example = "checkup")]
    pub record_type: MedicalRecordType,
    pub details: String,
    pub next_due_date: Option<NaiveDate>,
    /// Defaults to the caller when the caller is a vet
    pub vet_id: Option<i32>,
}
