use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

/// Fields of a shelter, used both to create and to replace optional columns.
pub struct NewShelter {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub operating_hours: Option<String>,
}

/// Partial shelter update; `None` leaves a column untouched.
#[derive(Default)]
pub struct ShelterUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub operating_hours: Option<Option<String>>,
}

pub struct ShelterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShelterRepository<'a, C> {
    /// Creates a new instance of [`ShelterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, shelter: NewShelter) -> Result<entity::shelters::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::shelters::ActiveModel {
            name: ActiveValue::Set(shelter.name),
            address: ActiveValue::Set(shelter.address),
            phone: ActiveValue::Set(shelter.phone),
            email: ActiveValue::Set(shelter.email),
            website: ActiveValue::Set(shelter.website),
            operating_hours: ActiveValue::Set(shelter.operating_hours),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, shelter_id: i32) -> Result<Option<entity::shelters::Model>, DbErr> {
        entity::prelude::Shelters::find_by_id(shelter_id)
            .one(self.db)
            .await
    }

    /// All shelters ordered by name.
    pub async fn list(&self) -> Result<Vec<entity::shelters::Model>, DbErr> {
        entity::prelude::Shelters::find()
            .order_by_asc(entity::shelters::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        shelter_id: i32,
        update: ShelterUpdate,
    ) -> Result<Option<entity::shelters::Model>, DbErr> {
        let Some(shelter) = self.get(shelter_id).await? else {
            return Ok(None);
        };

        let mut shelter_am = shelter.into_active_model();

        if let Some(name) = update.name {
            shelter_am.name = ActiveValue::Set(name);
        }
        if let Some(address) = update.address {
            shelter_am.address = ActiveValue::Set(address);
        }
        if let Some(phone) = update.phone {
            shelter_am.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = update.email {
            shelter_am.email = ActiveValue::Set(email);
        }
        if let Some(website) = update.website {
            shelter_am.website = ActiveValue::Set(website);
        }
        if let Some(operating_hours) = update.operating_hours {
            shelter_am.operating_hours = ActiveValue::Set(operating_hours);
        }
        shelter_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        Ok(Some(shelter_am.update(self.db).await?))
    }

    /// Deletes a shelter; pets pointing at it keep existing with no shelter.
    pub async fn delete(&self, shelter_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Shelters::delete_by_id(shelter_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    fn harbor() -> super::NewShelter {
        super::NewShelter {
            name: "Harbor Shelter".to_string(),
            address: "1 Harbor Road".to_string(),
            phone: Some("555-0100".to_string()),
            email: Some("hello@harbor.example.org".to_string()),
            website: Some("https://harbor.example.org".to_string()),
            operating_hours: Some("9am - 5pm".to_string()),
        }
    }

    mod create {
        use pawhaven_test_utils::prelude::*;

        use super::harbor;
        use crate::server::data::shelter::ShelterRepository;

        /// Expect a created shelter to read back with identical fields
        #[tokio::test]
        async fn round_trips_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_pet_tables().build().await?;

            let shelter_repo = ShelterRepository::new(&test.db);
            let created = shelter_repo.create(harbor()).await?;
            let fetched = shelter_repo.get(created.id).await?;

            assert_eq!(fetched, Some(created));

            Ok(())
        }
    }

    mod list {
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::shelter::ShelterRepository;

        /// Expect shelters ordered by name
        #[tokio::test]
        async fn orders_by_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_pet_tables().build().await?;
            test.shelter().insert_shelter("Zephyr Rescue").await?;
            test.shelter().insert_shelter("Alder House").await?;

            let shelters = ShelterRepository::new(&test.db).list().await?;

            let names: Vec<_> = shelters.into_iter().map(|s| s.name).collect();
            assert_eq!(names, vec!["Alder House", "Zephyr Rescue"]);

            Ok(())
        }
    }

    mod update {
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::shelter::{ShelterRepository, ShelterUpdate};

        /// Expect only the given columns to change
        #[tokio::test]
        async fn applies_partial_update() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_pet_tables().build().await?;
            let shelter = test.shelter().insert_shelter("Harbor").await?;

            let updated = ShelterRepository::new(&test.db)
                .update(
                    shelter.id,
                    ShelterUpdate {
                        phone: Some(None),
                        ..Default::default()
                    },
                )
                .await?
                .unwrap();

            assert_eq!(updated.name, "Harbor");
            assert_eq!(updated.phone, None);

            Ok(())
        }
    }

    mod delete {
        use entity::sea_orm_active_enums::PetStatus;
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::{pet::PetRepository, shelter::ShelterRepository};

        /// Expect pets of a deleted shelter to remain without a shelter
        #[tokio::test]
        async fn detaches_pets() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_pet_tables().build().await?;
            let shelter = test.shelter().insert_shelter("Harbor").await?;
            let pet = test
                .pet()
                .insert_pet_in_shelter("Biscuit", PetStatus::Available, Some(shelter.id))
                .await?;

            let result = ShelterRepository::new(&test.db).delete(shelter.id).await?;
            let pet = PetRepository::new(&test.db).get(pet.id).await?.unwrap();

            assert_eq!(result.rows_affected, 1);
            assert_eq!(pet.shelter_id, None);

            Ok(())
        }
    }
}
