use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct NewAppointment {
    pub user_id: i32,
    pub pet_id: Option<i32>,
    pub shelter_id: Option<i32>,
    pub appointment_type: AppointmentType,
    pub appointment_datetime: NaiveDateTime,
    pub notes: Option<String>,
}

pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    /// Creates a new instance of [`AppointmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a scheduled appointment.
    pub async fn create(
        &self,
        appointment: NewAppointment,
    ) -> Result<entity::appointments::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::appointments::ActiveModel {
            user_id: ActiveValue::Set(appointment.user_id),
            pet_id: ActiveValue::Set(appointment.pet_id),
            shelter_id: ActiveValue::Set(appointment.shelter_id),
            appointment_type: ActiveValue::Set(appointment.appointment_type),
            appointment_datetime: ActiveValue::Set(appointment.appointment_datetime),
            status: ActiveValue::Set(AppointmentStatus::Scheduled),
            notes: ActiveValue::Set(appointment.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        appointment_id: i32,
    ) -> Result<Option<entity::appointments::Model>, DbErr> {
        entity::prelude::Appointments::find_by_id(appointment_id)
            .one(self.db)
            .await
    }

    /// Whether the user already holds a non-cancelled appointment at exactly `datetime`.
    pub async fn has_conflict(&self, user_id: i32, datetime: NaiveDateTime) -> Result<bool, DbErr> {
        let count = entity::prelude::Appointments::find()
            .filter(entity::appointments::Column::UserId.eq(user_id))
            .filter(entity::appointments::Column::AppointmentDatetime.eq(datetime))
            .filter(entity::appointments::Column::Status.ne(AppointmentStatus::Cancelled))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists appointments soonest first, optionally narrowed to one user.
    pub async fn list(
        &self,
        user_id: Option<i32>,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<entity::appointments::Model>, DbErr> {
        let mut query = entity::prelude::Appointments::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::appointments::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::appointments::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::appointments::Column::AppointmentDatetime)
            .order_by_asc(entity::appointments::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of the user's scheduled or confirmed appointments after `now`.
    pub async fn count_upcoming(&self, user_id: i32, now: NaiveDateTime) -> Result<u64, DbErr> {
        entity::prelude::Appointments::find()
            .filter(entity::appointments::Column::UserId.eq(user_id))
            .filter(entity::appointments::Column::AppointmentDatetime.gt(now))
            .filter(entity::appointments::Column::Status.is_in([
                AppointmentStatus::Scheduled,
                AppointmentStatus::Confirmed,
            ]))
            .count(self.db)
            .await
    }

    /// Sets the status, replacing the notes when new ones are given.
    pub async fn update_status(
        &self,
        appointment: entity::appointments::Model,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> Result<entity::appointments::Model, DbErr> {
        let mut appointment_am = appointment.into_active_model();
        appointment_am.status = ActiveValue::Set(status);
        if let Some(notes) = notes {
            appointment_am.notes = ActiveValue::Set(Some(notes));
        }
        appointment_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        appointment_am.update(self.db).await
    }
}
