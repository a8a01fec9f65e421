use chrono::Utc;
use entity::sea_orm_active_enums::{PetGender, PetStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn pet<'a>(&'a mut self) -> PetFixtures<'a> {
        PetFixtures { setup: self }
    }
}

pub struct PetFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PetFixtures<'a> {
    /// Insert a dog with the given status and no shelter.
    pub async fn insert_pet(
        &self,
        name: &str,
        status: PetStatus,
    ) -> Result<entity::pets::Model, TestError> {
        self.insert_pet_in_shelter(name, status, None).await
    }

    pub async fn insert_pet_in_shelter(
        &self,
        name: &str,
        status: PetStatus,
        shelter_id: Option<i32>,
    ) -> Result<entity::pets::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Pets::insert(entity::pets::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                species: ActiveValue::Set(Some("dog".to_string())),
                breed: ActiveValue::Set(Some("mixed".to_string())),
                age: ActiveValue::Set(Some(3)),
                gender: ActiveValue::Set(PetGender::Unknown),
                description: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                shelter_id: ActiveValue::Set(shelter_id),
                image_url: ActiveValue::Set(None),
                added_by_staff_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
