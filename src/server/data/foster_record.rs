use chrono::NaiveDate;
use entity::sea_orm_active_enums::FosterStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct NewFosterRecord {
    pub pet_id: i32,
    pub foster_parent_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

pub struct FosterRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FosterRecordRepository<'a, C> {
    /// Creates a new instance of [`FosterRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending foster record applied for today.
    pub async fn create(
        &self,
        record: NewFosterRecord,
    ) -> Result<entity::foster_records::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::foster_records::ActiveModel {
            pet_id: ActiveValue::Set(record.pet_id),
            foster_parent_id: ActiveValue::Set(record.foster_parent_id),
            start_date: ActiveValue::Set(record.start_date),
            end_date: ActiveValue::Set(record.end_date),
            status: ActiveValue::Set(FosterStatus::Pending),
            notes: ActiveValue::Set(record.notes),
            application_date: ActiveValue::Set(now.date()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        record_id: i32,
    ) -> Result<Option<entity::foster_records::Model>, DbErr> {
        entity::prelude::FosterRecords::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Lists records newest first with their pet, optionally narrowed to one foster parent.
    pub async fn list(
        &self,
        foster_parent_id: Option<i32>,
        status: Option<FosterStatus>,
    ) -> Result<
        Vec<(
            entity::foster_records::Model,
            Option<entity::pets::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::FosterRecords::find();

        if let Some(foster_parent_id) = foster_parent_id {
            query = query
                .filter(entity::foster_records::Column::FosterParentId.eq(foster_parent_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::foster_records::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::foster_records::Column::CreatedAt)
            .order_by_desc(entity::foster_records::Column::Id)
            .find_also_related(entity::prelude::Pets)
            .all(self.db)
            .await
    }

    /// Sets the status, stamping the approver when one is given.
    pub async fn update_status(
        &self,
        record: entity::foster_records::Model,
        status: FosterStatus,
        approved_by: Option<i32>,
    ) -> Result<entity::foster_records::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut record_am = record.into_active_model();
        record_am.status = ActiveValue::Set(status);
        if let Some(approved_by) = approved_by {
            record_am.approved_by = ActiveValue::Set(Some(approved_by));
            record_am.approved_at = ActiveValue::Set(Some(now));
        }
        record_am.updated_at = ActiveValue::Set(now);

        record_am.update(self.db).await
    }
}
