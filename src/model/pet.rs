use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{PetGender, PetStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    #[schema(value_type = String, example = "female")]
    pub gender: PetGender,
    pub description: Option<String>,
    #[schema(value_type = String, example = "available")]
    pub status: PetStatus,
    pub shelter_id: Option<i32>,
    /// Name of the owning shelter, when the pet is assigned to one
    pub shelter_name: Option<String>,
    pub image_url: Option<String>,
    pub added_by_staff_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PetDto {
    pub fn from_model(
        pet: entity::pets::Model,
        shelter: Option<entity::shelters::Model>,
    ) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            age: pet.age,
            gender: pet.gender,
            description: pet.description,
            status: pet.status,
            shelter_id: pet.shelter_id,
            shelter_name: shelter.map(|s| s.name),
            image_url: pet.image_url,
            added_by_staff_id: pet.added_by_staff_id,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

impl From<entity::pets::Model> for PetDto {
    fn from(pet: entity::pets::Model) -> Self {
        Self::from_model(pet, None)
    }
}

/// Body of pet create and update requests. Updates accept any subset of the fields.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PetInputDto {
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    /// Defaults to `unknown`
    #[schema(value_type = Option<String>, example = "female")]
    pub gender: Option<PetGender>,
    pub description: Option<String>,
    /// Defaults to `available`
    #[schema(value_type = Option<String>, example = "available")]
    pub status: Option<PetStatus>,
    pub shelter_id: Option<i32>,
    pub image_url: Option<String>,
}
