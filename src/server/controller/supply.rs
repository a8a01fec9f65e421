use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{SupplyCategory, SupplyStatus, SupplyUrgency};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        supply::{CreateSupplyRequestDto, SupplyRequestDto, UpdateSupplyStatusDto},
    },
    server::{
        data::supply_request::NewSupplyRequest,
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES},
        },
        service::{supply::SupplyService, transition::TransitionService},
        validation::{Input, Query, Rule, Schema, ValidationErrors},
    },
};

pub static SUPPLY_TAG: &str = "supply-requests";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SupplyListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<SupplyStatus>,
}

/// Requests supplies for one of the caller's active foster placements
#[utoipa::path(
    post,
    path = "/api/supply-requests",
    tag = SUPPLY_TAG,
    request_body = CreateSupplyRequestDto,
    responses(
        (status = 201, description = "Supply request submitted", body = ApiResponse<SupplyRequestDto>),
        (status = 400, description = "Validation failed or foster record not active", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Foster record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_supply_request(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("foster_record_id", [Rule::Required, Rule::Integer])
        .field("item_name", [Rule::Required, Rule::String, Rule::Min(2)])
        .field("quantity", [Rule::Required, Rule::Integer])
        .field("category", [Rule::In(SupplyCategory::VALUES)])
        .field("urgency", [Rule::In(SupplyUrgency::VALUES)])
        .field("description", [Rule::String])
        .field("estimated_cost", [Rule::Numeric])
        .validate(&input)?;

    let quantity = input.require_id("quantity")?;
    if quantity < 1 {
        return Err(
            ValidationErrors::single("quantity", "The quantity field must be at least 1.").into(),
        );
    }

    let request = NewSupplyRequest {
        foster_record_id: input.require_id("foster_record_id")?,
        item_name: input.string("item_name")?,
        quantity,
        category: input
            .parse_with("category", SupplyCategory::parse)
            .unwrap_or(SupplyCategory::Other),
        urgency: input
            .parse_with("urgency", SupplyUrgency::parse)
            .unwrap_or(SupplyUrgency::Medium),
        description: input.opt_string("description"),
        estimated_cost: input.number("estimated_cost"),
    };

    let supply_request = SupplyService::new(&state.db)
        .create(&user, request)
        .await?;

    Ok(ApiResponse::created(
        "Supply request submitted successfully",
        supply_request,
    ))
}

/// Lists supply requests
///
/// Staff and admins see every request, foster parents only their own.
#[utoipa::path(
    get,
    path = "/api/supply-requests",
    tag = SUPPLY_TAG,
    params(SupplyListParams),
    responses(
        (status = 200, description = "Supply requests", body = ApiResponse<Vec<SupplyRequestDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_supply_requests(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SupplyListParams>,
) -> Result<impl IntoResponse, Error> {
    let requests = SupplyService::new(&state.db)
        .list(&user, params.status)
        .await?;

    Ok(ApiResponse::ok("Supply requests retrieved", requests))
}

/// Moves a supply request through approval, ordering and delivery
#[utoipa::path(
    put,
    path = "/api/supply-requests/{id}/status",
    tag = SUPPLY_TAG,
    params(("id" = i32, Path, description = "Supply request ID")),
    request_body = UpdateSupplyStatusDto,
    responses(
        (status = 200, description = "Supply request updated", body = ApiResponse<SupplyRequestDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Supply request not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_supply_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(request_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field("status", [Rule::Required, Rule::In(SupplyStatus::VALUES)])
        .field("actual_cost", [Rule::Numeric])
        .field("reason", [Rule::String])
        .validate(&input)?;
    let status = input.require_with("status", SupplyStatus::parse)?;
    let reason = input.opt_string("reason");

    let supply_request = TransitionService::new(&state.db)
        .update_supply_status(
            request_id,
            status,
            input.number("actual_cost"),
            reason.as_deref(),
            &user,
        )
        .await?;

    Ok(ApiResponse::ok(
        "Supply request status updated successfully",
        supply_request,
    ))
}
