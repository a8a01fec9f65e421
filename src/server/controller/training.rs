use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{TrainingCategory, TrainingDifficulty, TrainingStatus};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        training::{
            CreateTrainingModuleDto, TrainingModuleDto, TrainingProgressDto, UpdateProgressDto,
        },
    },
    server::{
        data::training::{NewTrainingModule, TrainingModuleFilter},
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES},
        },
        service::training::TrainingService,
        validation::{Input, Query, Rule, Schema, ValidationErrors},
    },
};

pub static TRAINING_TAG: &str = "training";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrainingModuleListParams {
    #[param(value_type = Option<String>)]
    pub category: Option<TrainingCategory>,
    #[param(value_type = Option<String>)]
    pub difficulty: Option<TrainingDifficulty>,
    /// Only modules every volunteer must complete
    #[serde(default)]
    pub required_only: bool,
}

#[utoipa::path(
    post,
    path = "/api/training/modules",
    tag = TRAINING_TAG,
    request_body = CreateTrainingModuleDto,
    responses(
        (status = 201, description = "Training module created", body = ApiResponse<TrainingModuleDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_training_module(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field(
            "title",
            [Rule::Required, Rule::String, Rule::Min(5), Rule::Max(255)],
        )
        .field("description", [Rule::Required, Rule::String, Rule::Min(10)])
        .field("content", [Rule::Required, Rule::String, Rule::Min(50)])
        .field("duration_minutes", [Rule::Required, Rule::Integer])
        .field(
            "difficulty",
            [Rule::Required, Rule::In(TrainingDifficulty::VALUES)],
        )
        .field("category", [Rule::Required, Rule::In(TrainingCategory::VALUES)])
        .field("prerequisites", [Rule::String])
        .field("is_required", [Rule::Boolean])
        .validate(&input)?;

    let module = NewTrainingModule {
        title: input.string("title")?,
        description: input.string("description")?,
        content: input.string("content")?,
        duration_minutes: input.require_id("duration_minutes")?,
        difficulty: input.require_with("difficulty", TrainingDifficulty::parse)?,
        category: input.require_with("category", TrainingCategory::parse)?,
        prerequisites: input.opt_string("prerequisites"),
        is_required: input.boolean("is_required").unwrap_or(false),
        created_by: user.id,
    };

    let module = TrainingService::new(&state.db)
        .create_module(module)
        .await?;

    Ok(ApiResponse::created(
        "Training module created successfully",
        module,
    ))
}

/// Lists training modules with the caller's progress on each
///
/// Required modules come first. Modules the caller has not opened report `not_started`.
#[utoipa::path(
    get,
    path = "/api/training/modules",
    tag = TRAINING_TAG,
    params(TrainingModuleListParams),
    responses(
        (status = 200, description = "Training modules", body = ApiResponse<Vec<TrainingModuleDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_training_modules(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<TrainingModuleListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = TrainingModuleFilter {
        category: params.category,
        difficulty: params.difficulty,
        required_only: params.required_only,
    };

    let modules = TrainingService::new(&state.db)
        .list_modules(user.id, filter)
        .await?;

    Ok(ApiResponse::ok("Training modules retrieved", modules))
}

/// Records the caller's progress on a module
///
/// Without a `status` it follows from the percentage; `completed` always stores 100.
#[utoipa::path(
    put,
    path = "/api/training/modules/{id}/progress",
    tag = TRAINING_TAG,
    params(("id" = i32, Path, description = "Training module ID")),
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress saved", body = ApiResponse<TrainingProgressDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Training module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_training_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(module_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("progress_percentage", [Rule::Integer])
        .field("status", [Rule::In(TrainingStatus::VALUES)])
        .validate(&input)?;

    let percentage = input.integer("progress_percentage");
    if percentage.is_some_and(|percentage| !(0..=100).contains(&percentage)) {
        return Err(ValidationErrors::single(
            "progress_percentage",
            "The progress_percentage field must be between 0 and 100.",
        )
        .into());
    }

    let progress = TrainingService::new(&state.db)
        .update_progress(
            user.id,
            module_id,
            percentage.and_then(|percentage| i32::try_from(percentage).ok()),
            input.parse_with("status", TrainingStatus::parse),
        )
        .await?;

    Ok(ApiResponse::ok("Training progress updated", progress))
}
