use chrono::Utc;
use entity::sea_orm_active_enums::{ApplicationStatus, FosterStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn record<'a>(&'a mut self) -> RecordFixtures<'a> {
        RecordFixtures { setup: self }
    }
}

pub struct RecordFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> RecordFixtures<'a> {
    pub async fn insert_application(
        &self,
        user_id: i32,
        pet_id: i32,
        status: ApplicationStatus,
    ) -> Result<entity::applications::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Applications::insert(entity::applications::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                pet_id: ActiveValue::Set(pet_id),
                status: ActiveValue::Set(status),
                notes: ActiveValue::Set(None),
                reviewed_by: ActiveValue::Set(None),
                reviewed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a foster record starting today.
    pub async fn insert_foster_record(
        &self,
        foster_parent_id: i32,
        pet_id: i32,
        status: FosterStatus,
    ) -> Result<entity::foster_records::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::FosterRecords::insert(entity::foster_records::ActiveModel {
                pet_id: ActiveValue::Set(pet_id),
                foster_parent_id: ActiveValue::Set(foster_parent_id),
                start_date: ActiveValue::Set(now.date()),
                end_date: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                notes: ActiveValue::Set(None),
                application_date: ActiveValue::Set(now.date()),
                approved_by: ActiveValue::Set(None),
                approved_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
