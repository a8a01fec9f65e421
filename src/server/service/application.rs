use entity::sea_orm_active_enums::{ApplicationStatus, PetStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::application::ApplicationDto,
    server::{
        data::{application::ApplicationRepository, pet::PetRepository},
        error::Error,
    },
};

/// Adoption applications submitted by users. Decisions go through
/// [`TransitionService::decide_application`](super::transition::TransitionService::decide_application).
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application to adopt `pet_id`.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)`: The pending application
    /// - `Err(Error::NotFound)`: No pet with `pet_id`
    /// - `Err(Error::Conflict)`: The pet is not available, or the user already has a pending
    ///   application for it
    pub async fn create(
        &self,
        user_id: i32,
        pet_id: i32,
        notes: Option<String>,
    ) -> Result<ApplicationDto, Error> {
        let pet = PetRepository::new(self.db)
            .get(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        if pet.status != PetStatus::Available {
            return Err(Error::Conflict(
                "Pet is not available for adoption".to_string(),
            ));
        }

        let application_repo = ApplicationRepository::new(self.db);
        if application_repo.find_pending(user_id, pet_id).await?.is_some() {
            return Err(Error::Conflict(
                "You already have a pending application for this pet".to_string(),
            ));
        }

        let application = application_repo.create(user_id, pet_id, notes).await?;

        tracing::info!(
            application_id = application.id,
            user_id,
            pet_id,
            "Submitted adoption application"
        );

        Ok(ApplicationDto::from_model(application, Some(pet)))
    }

    /// Applications newest first, limited to `user_id` when given.
    pub async fn list(
        &self,
        user_id: Option<i32>,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .list(user_id, status)
            .await?;

        Ok(applications
            .into_iter()
            .map(|(application, pet)| ApplicationDto::from_model(application, pet))
            .collect())
    }
}
