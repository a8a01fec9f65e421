use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        application::{
            ApplicationDecisionDto, ApplicationDto, CreateApplicationDto,
            UpdateApplicationStatusDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES},
        },
        service::{application::ApplicationService, transition::TransitionService},
        validation::{Input, Query, Rule, Schema},
    },
};

pub static APPLICATION_TAG: &str = "applications";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<ApplicationStatus>,
}

/// Applies to adopt an available pet
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApiResponse<ApplicationDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 409, description = "Pet unavailable or application already pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("pet_id", [Rule::Required, Rule::Integer])
        .field("notes", [Rule::String])
        .validate(&input)?;

    let application = ApplicationService::new(&state.db)
        .create(user.id, input.require_id("pet_id")?, input.opt_string("notes"))
        .await?;

    Ok(ApiResponse::created(
        "Application submitted successfully",
        application,
    ))
}

/// Lists the logged in user's applications
#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Applications", body = ApiResponse<Vec<ApplicationDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_applications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db)
        .list(Some(user.id), None)
        .await?;

    Ok(ApiResponse::ok("Applications retrieved", applications))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(ApplicationListParams),
    responses(
        (status = 200, description = "Applications", body = ApiResponse<Vec<ApplicationDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ApplicationListParams>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    let applications = ApplicationService::new(&state.db)
        .list(None, params.status)
        .await?;

    Ok(ApiResponse::ok("Applications retrieved", applications))
}

/// Approves, rejects or withdraws an application
///
/// Approving marks the pet as adopted and notifies the applicant. Only `pending`
/// applications can be decided.
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Application updated", body = ApiResponse<ApplicationDecisionDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(application_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field("status", [Rule::Required, Rule::In(ApplicationStatus::VALUES)])
        .validate(&input)?;
    let status = input.require_with("status", ApplicationStatus::parse)?;

    let decision = TransitionService::new(&state.db)
        .decide_application(application_id, status, &user)
        .await?;

    Ok(ApiResponse::ok(
        "Application status updated successfully",
        decision,
    ))
}
