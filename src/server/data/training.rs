use entity::sea_orm_active_enums::{TrainingCategory, TrainingDifficulty, TrainingStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TryIntoModel,
};

pub struct NewTrainingModule {
    pub title: String,
    pub description: String,
    pub content: String,
    pub duration_minutes: i32,
    pub difficulty: TrainingDifficulty,
    pub category: TrainingCategory,
    pub prerequisites: Option<String>,
    pub is_required: bool,
    pub created_by: i32,
}

#[derive(Default)]
pub struct TrainingModuleFilter {
    pub category: Option<TrainingCategory>,
    pub difficulty: Option<TrainingDifficulty>,
    pub required_only: bool,
}

/// Progress values to store for one user and module.
pub struct ProgressUpdate {
    pub status: TrainingStatus,
    pub progress_percentage: i32,
    pub started_at: Option<chrono::NaiveDateTime>,
    pub completed_at: Option<chrono::NaiveDateTime>,
}

pub struct TrainingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingRepository<'a, C> {
    /// Creates a new instance of [`TrainingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_module(
        &self,
        module: NewTrainingModule,
    ) -> Result<entity::training_modules::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::training_modules::ActiveModel {
            title: ActiveValue::Set(module.title),
            description: ActiveValue::Set(module.description),
            content: ActiveValue::Set(module.content),
            duration_minutes: ActiveValue::Set(module.duration_minutes),
            difficulty: ActiveValue::Set(module.difficulty),
            category: ActiveValue::Set(module.category),
            prerequisites: ActiveValue::Set(module.prerequisites),
            is_required: ActiveValue::Set(module.is_required),
            created_by: ActiveValue::Set(Some(module.created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_module(
        &self,
        module_id: i32,
    ) -> Result<Option<entity::training_modules::Model>, DbErr> {
        entity::prelude::TrainingModules::find_by_id(module_id)
            .one(self.db)
            .await
    }

    /// Lists modules, required ones first, each with `user_id`'s progress.
    pub async fn list_modules(
        &self,
        user_id: i32,
        filter: TrainingModuleFilter,
    ) -> Result<
        Vec<(
            entity::training_modules::Model,
            Option<entity::training_progress::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::TrainingModules::find();

        if let Some(category) = filter.category {
            query = query.filter(entity::training_modules::Column::Category.eq(category));
        }
        if let Some(difficulty) = filter.difficulty {
            query = query.filter(entity::training_modules::Column::Difficulty.eq(difficulty));
        }
        if filter.required_only {
            query = query.filter(entity::training_modules::Column::IsRequired.eq(true));
        }

        let modules = query
            .order_by_desc(entity::training_modules::Column::IsRequired)
            .order_by_asc(entity::training_modules::Column::Title)
            .all(self.db)
            .await?;

        let progress = entity::prelude::TrainingProgress::find()
            .filter(entity::training_progress::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(modules
            .into_iter()
            .map(|module| {
                let own = progress.iter().find(|p| p.module_id == module.id).cloned();
                (module, own)
            })
            .collect())
    }

    pub async fn get_progress(
        &self,
        user_id: i32,
        module_id: i32,
    ) -> Result<Option<entity::training_progress::Model>, DbErr> {
        entity::prelude::TrainingProgress::find()
            .filter(entity::training_progress::Column::UserId.eq(user_id))
            .filter(entity::training_progress::Column::ModuleId.eq(module_id))
            .one(self.db)
            .await
    }

    /// Inserts or replaces the progress row of `user_id` for `module_id`.
    pub async fn upsert_progress(
        &self,
        user_id: i32,
        module_id: i32,
        update: ProgressUpdate,
    ) -> Result<entity::training_progress::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut progress_am = match self.get_progress(user_id, module_id).await? {
            Some(existing) => existing.into_active_model(),
            None => entity::training_progress::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                module_id: ActiveValue::Set(module_id),
                ..Default::default()
            },
        };

        progress_am.status = ActiveValue::Set(update.status);
        progress_am.progress_percentage = ActiveValue::Set(update.progress_percentage);
        progress_am.started_at = ActiveValue::Set(update.started_at);
        progress_am.completed_at = ActiveValue::Set(update.completed_at);
        progress_am.updated_at = ActiveValue::Set(now);

        progress_am.save(self.db).await?.try_into_model()
    }

    pub async fn count_completed(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TrainingProgress::find()
            .filter(entity::training_progress::Column::UserId.eq(user_id))
            .filter(entity::training_progress::Column::Status.eq(TrainingStatus::Completed))
            .count(self.db)
            .await
    }
}
