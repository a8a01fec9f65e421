use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::FosterStatus;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        foster::{
            CreateFosterRecordDto, FosterDecisionDto, FosterRecordDto, UpdateFosterStatusDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES},
        },
        service::{foster::FosterService, transition::TransitionService},
        validation::{Input, Query, Rule, Schema},
    },
};

pub static FOSTER_TAG: &str = "foster-records";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FosterListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<FosterStatus>,
}

/// Requests to foster an available pet
#[utoipa::path(
    post,
    path = "/api/foster-records",
    tag = FOSTER_TAG,
    request_body = CreateFosterRecordDto,
    responses(
        (status = 201, description = "Foster request submitted", body = ApiResponse<FosterRecordDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 409, description = "Pet not available for fostering", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_foster_record(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("pet_id", [Rule::Required, Rule::Integer])
        .field("start_date", [Rule::Required, Rule::Date])
        .field("end_date", [Rule::Date])
        .field("notes", [Rule::String])
        .validate(&input)?;

    let record = FosterService::new(&state.db)
        .create(
            user.id,
            input.require_id("pet_id")?,
            input.require_date("start_date")?,
            input.date("end_date"),
            input.opt_string("notes"),
        )
        .await?;

    Ok(ApiResponse::created(
        "Foster request submitted successfully",
        record,
    ))
}

#[utoipa::path(
    get,
    path = "/api/foster-records/mine",
    tag = FOSTER_TAG,
    responses(
        (status = 200, description = "Foster records", body = ApiResponse<Vec<FosterRecordDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_foster_records(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let records = FosterService::new(&state.db).list(Some(user.id), None).await?;

    Ok(ApiResponse::ok("Foster records retrieved", records))
}

#[utoipa::path(
    get,
    path = "/api/foster-records",
    tag = FOSTER_TAG,
    params(FosterListParams),
    responses(
        (status = 200, description = "Foster records", body = ApiResponse<Vec<FosterRecordDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_foster_records(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<FosterListParams>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    let records = FosterService::new(&state.db)
        .list(None, params.status)
        .await?;

    Ok(ApiResponse::ok("Foster records retrieved", records))
}

/// Moves a foster record through its lifecycle
///
/// Activating a placement marks the pet as fostered; completing or cancelling an active
/// one makes the pet available again.
#[utoipa::path(
    put,
    path = "/api/foster-records/{id}/status",
    tag = FOSTER_TAG,
    params(("id" = i32, Path, description = "Foster record ID")),
    request_body = UpdateFosterStatusDto,
    responses(
        (status = 200, description = "Foster record updated", body = ApiResponse<FosterDecisionDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Foster record not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_foster_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(record_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field("status", [Rule::Required, Rule::In(FosterStatus::VALUES)])
        .validate(&input)?;
    let status = input.require_with("status", FosterStatus::parse)?;

    let decision = TransitionService::new(&state.db)
        .decide_foster_record(record_id, status, &user)
        .await?;

    Ok(ApiResponse::ok(
        "Foster record status updated successfully",
        decision,
    ))
}
