use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn shelter<'a>(&'a mut self) -> ShelterFixtures<'a> {
        ShelterFixtures { setup: self }
    }
}

pub struct ShelterFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ShelterFixtures<'a> {
    pub async fn insert_shelter(&self, name: &str) -> Result<entity::shelters::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Shelters::insert(entity::shelters::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                address: ActiveValue::Set("1 Harbor Road".to_string()),
                phone: ActiveValue::Set(Some("555-0100".to_string())),
                email: ActiveValue::Set(None),
                website: ActiveValue::Set(None),
                operating_hours: ActiveValue::Set(Some("9am - 5pm".to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
