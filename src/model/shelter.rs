use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShelterDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::shelters::Model> for ShelterDto {
    fn from(shelter: entity::shelters::Model) -> Self {
        Self {
            id: shelter.id,
            name: shelter.name,
            address: shelter.address,
            phone: shelter.phone,
            email: shelter.email,
            website: shelter.website,
            operating_hours: shelter.operating_hours,
            created_at: shelter.created_at,
            updated_at: shelter.updated_at,
        }
    }
}

/// Body of shelter create and update requests. Updates accept any subset of the fields.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShelterInputDto {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
}
