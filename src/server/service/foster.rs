use chrono::NaiveDate;
use entity::sea_orm_active_enums::{FosterStatus, PetStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::foster::FosterRecordDto,
    server::{
        data::{
            foster_record::{FosterRecordRepository, NewFosterRecord},
            pet::PetRepository,
        },
        error::Error,
        validation::ValidationErrors,
    },
};

pub struct FosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FosterService<'a> {
    /// Creates a new instance of [`FosterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests to foster `pet_id` from `start_date`.
    ///
    /// # Returns
    /// - `Ok(FosterRecordDto)`: The pending foster record
    /// - `Err(Error::ValidationError)`: `end_date` is before `start_date`
    /// - `Err(Error::NotFound)`: No pet with `pet_id`
    /// - `Err(Error::Conflict)`: The pet is not available
    pub async fn create(
        &self,
        foster_parent_id: i32,
        pet_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Result<FosterRecordDto, Error> {
        if end_date.is_some_and(|end| end < start_date) {
            return Err(ValidationErrors::single(
                "end_date",
                "The end_date field must be a date after or equal to start_date.",
            )
            .into());
        }

        let pet = PetRepository::new(self.db)
            .get(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        if pet.status != PetStatus::Available {
            return Err(Error::Conflict(
                "Pet is not available for fostering".to_string(),
            ));
        }

        let record = FosterRecordRepository::new(self.db)
            .create(NewFosterRecord {
                pet_id,
                foster_parent_id,
                start_date,
                end_date,
                notes,
            })
            .await?;

        tracing::info!(
            foster_record_id = record.id,
            foster_parent_id,
            pet_id,
            "Submitted foster request"
        );

        Ok(FosterRecordDto::from_model(record, Some(pet)))
    }

    pub async fn list(
        &self,
        foster_parent_id: Option<i32>,
        status: Option<FosterStatus>,
    ) -> Result<Vec<FosterRecordDto>, Error> {
        let records = FosterRecordRepository::new(self.db)
            .list(foster_parent_id, status)
            .await?;

        Ok(records
            .into_iter()
            .map(|(record, pet)| FosterRecordDto::from_model(record, pet))
            .collect())
    }
}
