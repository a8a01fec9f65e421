use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{TrainingCategory, TrainingDifficulty, TrainingStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainingModuleDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub duration_minutes: i32,
    #[schema(value_type = String, example = "beginner")]
    pub difficulty: TrainingDifficulty,
    #[schema(value_type = String, example = "animal_care")]
    pub category: TrainingCategory,
    pub prerequisites: Option<String>,
    pub is_required: bool,
    pub created_at: NaiveDateTime,
    /// The caller's progress through this module
    pub progress: TrainingProgressDto,
}

impl TrainingModuleDto {
    pub fn from_model(
        module: entity::training_modules::Model,
        progress: Option<entity::training_progress::Model>,
    ) -> Self {
        Self {
            id: module.id,
            title: module.title,
            description: module.description,
            content: module.content,
            duration_minutes: module.duration_minutes,
            difficulty: module.difficulty,
            category: module.category,
            prerequisites: module.prerequisites,
            is_required: module.is_required,
            created_at: module.created_at,
            progress: progress
                .map(TrainingProgressDto::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainingProgressDto {
    #[schema(value_type = String, example = "in_progress")]
    pub status: TrainingStatus,
    pub progress_percentage: i32,
    pub started_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

impl Default for TrainingProgressDto {
    fn default() -> Self {
        Self {
            status: TrainingStatus::NotStarted,
            progress_percentage: 0,
            started_at: None,
            completed_at: None,
        }
    }
}

impl From<entity::training_progress::Model> for TrainingProgressDto {
    fn from(progress: entity::training_progress::Model) -> Self {
        Self {
            status: progress.status,
            progress_percentage: progress.progress_percentage,
            started_at: progress.started_at,
            completed_at: progress.completed_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTrainingModuleDto {
    pub title: String,
    pub description: String,
    pub content: String,
    pub duration_minutes: i32,
    #[schema(value_type = String, example = "beginner")]
    pub difficulty: TrainingDifficulty,
    #[schema(value_type = String, example = "safety")]
    pub category: TrainingCategory,
    pub prerequisites: Option<String>,
    pub is_required: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProgressDto {
    /// 0 to 100
    pub progress_percentage: Option<i32>,
    /// Derived from the percentage when omitted
    #[schema(value_type = Option<String>, example = "in_progress")]
    pub status: Option<TrainingStatus>,
}
