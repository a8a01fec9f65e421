use entity::sea_orm_active_enums::PetStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ListDto, pet::PetDto},
    server::{
        data::{
            pet::{NewPet, PetFilter, PetRepository, PetUpdate},
            shelter::ShelterRepository,
            Page,
        },
        error::Error,
        service::transition::pet::check_pet_status,
        validation::ValidationErrors,
    },
};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    /// Creates a new instance of [`PetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: PetFilter, page: Page) -> Result<ListDto<PetDto>, Error> {
        let (pets, total_count) = PetRepository::new(self.db).list(filter, page).await?;

        Ok(ListDto {
            total_count,
            items: pets
                .into_iter()
                .map(|(pet, shelter)| PetDto::from_model(pet, shelter))
                .collect(),
        })
    }

    /// Available pets with their shelter, up to [`Page::MAX_LIMIT`].
    pub async fn list_available(&self) -> Result<Vec<PetDto>, Error> {
        let filter = PetFilter {
            status: Some(PetStatus::Available),
            ..Default::default()
        };
        let page = Page::new(Some(Page::MAX_LIMIT), None);

        Ok(self.list(filter, page).await?.items)
    }

    pub async fn get(&self, pet_id: i32) -> Result<PetDto, Error> {
        let (pet, shelter) = PetRepository::new(self.db)
            .get_with_shelter(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        Ok(PetDto::from_model(pet, shelter))
    }

    /// Adds a pet; any initial status is accepted.
    ///
    /// # Returns
    /// - `Ok(PetDto)`: The created pet
    /// - `Err(Error::ValidationError)`: `shelter_id` names a shelter that does not exist
    pub async fn create(&self, pet: NewPet) -> Result<PetDto, Error> {
        self.check_shelter(pet.shelter_id).await?;

        let pet = PetRepository::new(self.db).create(pet).await?;

        tracing::info!(pet_id = pet.id, "Added pet {} as {}", pet.name, pet.status);

        self.get(pet.id).await
    }

    /// Applies a partial update; a status change must be allowed by the pet transition table.
    ///
    /// # Returns
    /// - `Ok(PetDto)`: The updated pet
    /// - `Err(Error::NotFound)`: No pet with `pet_id`
    /// - `Err(Error::TransitionError)`: The status change is not allowed
    /// - `Err(Error::ValidationError)`: `shelter_id` names a shelter that does not exist
    pub async fn update(&self, pet_id: i32, update: PetUpdate) -> Result<PetDto, Error> {
        let pet_repo = PetRepository::new(self.db);

        let pet = pet_repo
            .get(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        if let Some(status) = update.status {
            check_pet_status(pet.status, status)?;
        }
        if let Some(shelter_id) = update.shelter_id {
            self.check_shelter(shelter_id).await?;
        }

        let pet = pet_repo.update(pet, update).await?;

        self.get(pet.id).await
    }

    pub async fn delete(&self, pet_id: i32) -> Result<(), Error> {
        let result = PetRepository::new(self.db).delete(pet_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Pet"));
        }

        tracing::info!(pet_id, "Deleted pet");

        Ok(())
    }

    async fn check_shelter(&self, shelter_id: Option<i32>) -> Result<(), Error> {
        let Some(shelter_id) = shelter_id else {
            return Ok(());
        };

        if ShelterRepository::new(self.db).get(shelter_id).await?.is_none() {
            return Err(ValidationErrors::single(
                "shelter_id",
                "The selected shelter_id is invalid.",
            )
            .into());
        }

        Ok(())
    }
}
