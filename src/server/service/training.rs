use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::TrainingStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::training::{TrainingModuleDto, TrainingProgressDto},
    server::{
        data::training::{
            NewTrainingModule, ProgressUpdate, TrainingModuleFilter, TrainingRepository,
        },
        error::Error,
    },
};

/// Computes the stored progress from the previous row and the requested change.
///
/// Without an explicit status it follows the percentage: 100 or more is completed, anything
/// above zero is in progress. Completion always stores 100 percent. `started_at` is set the
/// first time progress leaves zero and `completed_at` is kept only while completed.
fn next_progress(
    previous: Option<&entity::training_progress::Model>,
    percentage: Option<i32>,
    status: Option<TrainingStatus>,
    now: NaiveDateTime,
) -> ProgressUpdate {
    let previous_percentage = previous.map_or(0, |p| p.progress_percentage);
    let previous_status = previous.map_or(TrainingStatus::NotStarted, |p| p.status);

    let mut progress_percentage = percentage.unwrap_or(previous_percentage).clamp(0, 100);
    let status = match (status, percentage) {
        (Some(status), _) => status,
        (None, Some(p)) if p >= 100 => TrainingStatus::Completed,
        (None, Some(p)) if p > 0 => TrainingStatus::InProgress,
        (None, Some(_)) => TrainingStatus::NotStarted,
        (None, None) => previous_status,
    };

    let completed_at = if status == TrainingStatus::Completed {
        progress_percentage = 100;
        previous.and_then(|p| p.completed_at).or(Some(now))
    } else {
        None
    };

    let started = progress_percentage > 0 || status != TrainingStatus::NotStarted;
    let started_at = previous
        .and_then(|p| p.started_at)
        .or_else(|| started.then_some(now));

    ProgressUpdate {
        status,
        progress_percentage,
        started_at,
        completed_at,
    }
}

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    /// Creates a new instance of [`TrainingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_module(&self, module: NewTrainingModule) -> Result<TrainingModuleDto, Error> {
        let module = TrainingRepository::new(self.db).create_module(module).await?;

        tracing::info!(module_id = module.id, "Created training module {}", module.title);

        Ok(TrainingModuleDto::from_model(module, None))
    }

    /// Modules matching `filter`, required ones first, each with the user's progress.
    pub async fn list_modules(
        &self,
        user_id: i32,
        filter: TrainingModuleFilter,
    ) -> Result<Vec<TrainingModuleDto>, Error> {
        let modules = TrainingRepository::new(self.db)
            .list_modules(user_id, filter)
            .await?;

        Ok(modules
            .into_iter()
            .map(|(module, progress)| TrainingModuleDto::from_model(module, progress))
            .collect())
    }

    /// Records the user's progress through a module.
    ///
    /// # Returns
    /// - `Ok(TrainingProgressDto)`: The stored progress
    /// - `Err(Error::NotFound)`: No module with `module_id`
    pub async fn update_progress(
        &self,
        user_id: i32,
        module_id: i32,
        percentage: Option<i32>,
        status: Option<TrainingStatus>,
    ) -> Result<TrainingProgressDto, Error> {
        let txn = self.db.begin().await?;
        let training_repo = TrainingRepository::new(&txn);

        training_repo
            .get_module(module_id)
            .await?
            .ok_or_else(|| Error::not_found("Training module"))?;

        let previous = training_repo.get_progress(user_id, module_id).await?;
        let update = next_progress(
            previous.as_ref(),
            percentage,
            status,
            chrono::Utc::now().naive_utc(),
        );

        let progress = training_repo
            .upsert_progress(user_id, module_id, update)
            .await?;

        txn.commit().await?;

        Ok(TrainingProgressDto::from(progress))
    }
}
