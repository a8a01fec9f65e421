use entity::sea_orm_active_enums::{VolunteerApplicationStatus, VolunteerApplicationType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Statuses that block a user from submitting another volunteer application.
pub const BLOCKING_STATUSES: [VolunteerApplicationStatus; 4] = [
    VolunteerApplicationStatus::Pending,
    VolunteerApplicationStatus::UnderReview,
    VolunteerApplicationStatus::InterviewScheduled,
    VolunteerApplicationStatus::Approved,
];

pub struct NewVolunteerApplication {
    pub user_id: i32,
    pub application_type: VolunteerApplicationType,
    pub availability: String,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub motivation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

pub struct VolunteerApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VolunteerApplicationRepository<'a, C> {
    /// Creates a new instance of [`VolunteerApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending volunteer application.
    pub async fn create(
        &self,
        application: NewVolunteerApplication,
    ) -> Result<entity::volunteer_applications::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::volunteer_applications::ActiveModel {
            user_id: ActiveValue::Set(application.user_id),
            application_type: ActiveValue::Set(application.application_type),
            availability: ActiveValue::Set(application.availability),
            experience: ActiveValue::Set(application.experience),
            skills: ActiveValue::Set(application.skills),
            motivation: ActiveValue::Set(application.motivation),
            emergency_contact_name: ActiveValue::Set(application.emergency_contact_name),
            emergency_contact_phone: ActiveValue::Set(application.emergency_contact_phone),
            status: ActiveValue::Set(VolunteerApplicationStatus::Pending),
            notes: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::volunteer_applications::Model>, DbErr> {
        entity::prelude::VolunteerApplications::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// The user's application in one of [`BLOCKING_STATUSES`], if any.
    pub async fn find_blocking(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::volunteer_applications::Model>, DbErr> {
        entity::prelude::VolunteerApplications::find()
            .filter(entity::volunteer_applications::Column::UserId.eq(user_id))
            .filter(entity::volunteer_applications::Column::Status.is_in(BLOCKING_STATUSES))
            .one(self.db)
            .await
    }

    /// Lists applications newest first, optionally narrowed to one user.
    pub async fn list(
        &self,
        user_id: Option<i32>,
        status: Option<VolunteerApplicationStatus>,
    ) -> Result<Vec<entity::volunteer_applications::Model>, DbErr> {
        let mut query = entity::prelude::VolunteerApplications::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::volunteer_applications::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::volunteer_applications::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::volunteer_applications::Column::CreatedAt)
            .order_by_desc(entity::volunteer_applications::Column::Id)
            .all(self.db)
            .await
    }

    /// Records a review, replacing the notes when new ones are given.
    pub async fn update_status(
        &self,
        application: entity::volunteer_applications::Model,
        status: VolunteerApplicationStatus,
        notes: Option<String>,
        reviewed_by: i32,
    ) -> Result<entity::volunteer_applications::Model, DbErr> {
        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status);
        if let Some(notes) = notes {
            application_am.notes = ActiveValue::Set(Some(notes));
        }
        application_am.reviewed_by = ActiveValue::Set(Some(reviewed_by));
        application_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        application_am.update(self.db).await
    }
}
