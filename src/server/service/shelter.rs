use sea_orm::DatabaseConnection;

use crate::{
    model::shelter::ShelterDto,
    server::{
        data::shelter::{NewShelter, ShelterRepository, ShelterUpdate},
        error::Error,
    },
};

pub struct ShelterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShelterService<'a> {
    /// Creates a new instance of [`ShelterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All shelters ordered by name.
    pub async fn list(&self) -> Result<Vec<ShelterDto>, Error> {
        let shelters = ShelterRepository::new(self.db).list().await?;

        Ok(shelters.into_iter().map(ShelterDto::from).collect())
    }

    pub async fn get(&self, shelter_id: i32) -> Result<ShelterDto, Error> {
        ShelterRepository::new(self.db)
            .get(shelter_id)
            .await?
            .map(ShelterDto::from)
            .ok_or_else(|| Error::not_found("Shelter"))
    }

    pub async fn create(&self, shelter: NewShelter) -> Result<ShelterDto, Error> {
        let shelter = ShelterRepository::new(self.db).create(shelter).await?;

        tracing::info!(shelter_id = shelter.id, "Created shelter {}", shelter.name);

        Ok(ShelterDto::from(shelter))
    }

    pub async fn update(&self, shelter_id: i32, update: ShelterUpdate) -> Result<ShelterDto, Error> {
        ShelterRepository::new(self.db)
            .update(shelter_id, update)
            .await?
            .map(ShelterDto::from)
            .ok_or_else(|| Error::not_found("Shelter"))
    }

    /// Deletes a shelter; its pets stay with no shelter assigned.
    pub async fn delete(&self, shelter_id: i32) -> Result<(), Error> {
        let result = ShelterRepository::new(self.db).delete(shelter_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Shelter"));
        }

        tracing::info!(shelter_id, "Deleted shelter");

        Ok(())
    }
}
