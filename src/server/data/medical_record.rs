use chrono::NaiveDate;
use entity::sea_orm_active_enums::MedicalRecordType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct NewMedicalRecord {
    pub pet_id: i32,
    pub record_date: NaiveDate,
    pub record_type: MedicalRecordType,
    pub details: String,
    pub next_due_date: Option<NaiveDate>,
    pub vet_id: Option<i32>,
}

/// Partial medical record update; `None` leaves a column untouched.
#[derive(Default)]
pub struct MedicalRecordUpdate {
    pub record_date: Option<NaiveDate>,
    pub record_type: Option<MedicalRecordType>,
    pub details: Option<String>,
    pub next_due_date: Option<Option<NaiveDate>>,
    pub vet_id: Option<Option<i32>>,
}

pub struct MedicalRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedicalRecordRepository<'a, C> {
    /// Creates a new instance of [`MedicalRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        record: NewMedicalRecord,
    ) -> Result<entity::medical_records::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::medical_records::ActiveModel {
            pet_id: ActiveValue::Set(record.pet_id),
            record_date: ActiveValue::Set(record.record_date),
            record_type: ActiveValue::Set(record.record_type),
            details: ActiveValue::Set(record.details),
            next_due_date: ActiveValue::Set(record.next_due_date),
            vet_id: ActiveValue::Set(record.vet_id),
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
    ) -> Result<Option<entity::medical_records::Model>, DbErr> {
        entity::prelude::MedicalRecords::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Records of a pet, newest record date first, with the attending vet.
    pub async fn list_by_pet(
        &self,
        pet_id: i32,
    ) -> Result<
        Vec<(
            entity::medical_records::Model,
            Option<entity::users::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::MedicalRecords::find()
            .filter(entity::medical_records::Column::PetId.eq(pet_id))
            .order_by_desc(entity::medical_records::Column::RecordDate)
            .order_by_desc(entity::medical_records::Column::Id)
            .find_also_related(entity::prelude::Users)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        record: entity::medical_records::Model,
        update: MedicalRecordUpdate,
    ) -> Result<entity::medical_records::Model, DbErr> {
        let mut record_am = record.into_active_model();

        if let Some(record_date) = update.record_date {
            record_am.record_date = ActiveValue::Set(record_date);
        }
        if let Some(record_type) = update.record_type {
            record_am.record_type = ActiveValue::Set(record_type);
        }
        if let Some(details) = update.details {
            record_am.details = ActiveValue::Set(details);
        }
        if let Some(next_due_date) = update.next_due_date {
            record_am.next_due_date = ActiveValue::Set(next_due_date);
        }
        if let Some(vet_id) = update.vet_id {
            record_am.vet_id = ActiveValue::Set(vet_id);
        }
        record_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        record_am.update(self.db).await
    }

    pub async fn delete(&self, record_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MedicalRecords::delete_by_id(record_id)
            .exec(self.db)
            .await
    }

    /// Number of records dated on or after `since`.
    pub async fn count_since(&self, since: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::MedicalRecords::find()
            .filter(entity::medical_records::Column::RecordDate.gte(since))
            .count(self.db)
            .await
    }

    /// Number of records whose next due date falls within `from..=until`.
    pub async fn count_due_between(&self, from: NaiveDate, until: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::MedicalRecords::find()
            .filter(entity::medical_records::Column::NextDueDate.between(from, until))
            .count(self.db)
            .await
    }
}
