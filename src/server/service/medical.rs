use sea_orm::DatabaseConnection;

use crate::{
    model::medical::MedicalRecordDto,
    server::{
        data::{
            medical_record::{MedicalRecordRepository, MedicalRecordUpdate, NewMedicalRecord},
            pet::PetRepository,
            user::UserRepository,
        },
        error::Error,
        validation::ValidationErrors,
    },
};

pub struct MedicalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicalService<'a> {
    /// Creates a new instance of [`MedicalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a medical event for a pet.
    ///
    /// # Returns
    /// - `Ok(MedicalRecordDto)`: The created record
    /// - `Err(Error::NotFound)`: No pet with `record.pet_id`
    /// - `Err(Error::ValidationError)`: `record.vet_id` names a user that does not exist
    pub async fn create(&self, record: NewMedicalRecord) -> Result<MedicalRecordDto, Error> {
        PetRepository::new(self.db)
            .get(record.pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        let vet = self.find_vet(record.vet_id).await?;

        let record = MedicalRecordRepository::new(self.db).create(record).await?;

        tracing::info!(
            medical_record_id = record.id,
            pet_id = record.pet_id,
            "Recorded {}",
            record.record_type
        );

        Ok(MedicalRecordDto::from_model(record, vet))
    }

    /// A pet's records, newest first.
    pub async fn list_by_pet(&self, pet_id: i32) -> Result<Vec<MedicalRecordDto>, Error> {
        PetRepository::new(self.db)
            .get(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        let records = MedicalRecordRepository::new(self.db)
            .list_by_pet(pet_id)
            .await?;

        Ok(records
            .into_iter()
            .map(|(record, vet)| MedicalRecordDto::from_model(record, vet))
            .collect())
    }

    pub async fn update(
        &self,
        record_id: i32,
        update: MedicalRecordUpdate,
    ) -> Result<MedicalRecordDto, Error> {
        let record_repo = MedicalRecordRepository::new(self.db);

        let record = record_repo
            .get(record_id)
            .await?
            .ok_or_else(|| Error::not_found("Medical record"))?;

        if let Some(vet_id) = update.vet_id {
            self.find_vet(vet_id).await?;
        }

        let record = record_repo.update(record, update).await?;
        let vet = match record.vet_id {
            Some(vet_id) => UserRepository::new(self.db).get(vet_id).await?,
            None => None,
        };

        Ok(MedicalRecordDto::from_model(record, vet))
    }

    pub async fn delete(&self, record_id: i32) -> Result<(), Error> {
        let result = MedicalRecordRepository::new(self.db)
            .delete(record_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Medical record"));
        }

        Ok(())
    }

    async fn find_vet(&self, vet_id: Option<i32>) -> Result<Option<entity::users::Model>, Error> {
        let Some(vet_id) = vet_id else {
            return Ok(None);
        };

        match UserRepository::new(self.db).get(vet_id).await? {
            Some(vet) => Ok(Some(vet)),
            None => Err(
                ValidationErrors::single("vet_id", "The selected vet_id is invalid.").into(),
            ),
        }
    }
}
