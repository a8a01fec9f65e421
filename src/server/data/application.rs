use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending application.
    pub async fn create(
        &self,
        user_id: i32,
        pet_id: i32,
        notes: Option<String>,
    ) -> Result<entity::applications::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::applications::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            pet_id: ActiveValue::Set(pet_id),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            notes: ActiveValue::Set(notes),
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
    ) -> Result<Option<entity::applications::Model>, DbErr> {
        entity::prelude::Applications::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// The user's pending application for the pet, if any.
    pub async fn find_pending(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<Option<entity::applications::Model>, DbErr> {
        entity::prelude::Applications::find()
            .filter(entity::applications::Column::UserId.eq(user_id))
            .filter(entity::applications::Column::PetId.eq(pet_id))
            .filter(entity::applications::Column::Status.eq(ApplicationStatus::Pending))
            .one(self.db)
            .await
    }

    /// Lists applications newest first with their pet, optionally narrowed to one user.
    pub async fn list(
        &self,
        user_id: Option<i32>,
        status: Option<ApplicationStatus>,
    ) -> Result<
        Vec<(
            entity::applications::Model,
            Option<entity::pets::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::Applications::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::applications::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::applications::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::applications::Column::CreatedAt)
            .order_by_desc(entity::applications::Column::Id)
            .find_also_related(entity::prelude::Pets)
            .all(self.db)
            .await
    }

    /// Records a decision on the application.
    pub async fn update_status(
        &self,
        application: entity::applications::Model,
        status: ApplicationStatus,
        reviewed_by: i32,
    ) -> Result<entity::applications::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status);
        application_am.reviewed_by = ActiveValue::Set(Some(reviewed_by));
        application_am.reviewed_at = ActiveValue::Set(Some(now));
        application_am.updated_at = ActiveValue::Set(now);

        application_am.update(self.db).await
    }
}
