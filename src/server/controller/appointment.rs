use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentStatusDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::{
            appointment::{AppointmentRequest, AppointmentService},
            transition::TransitionService,
        },
        validation::{Input, Query, Rule, Schema},
    },
};

pub static APPOINTMENT_TAG: &str = "appointments";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<AppointmentStatus>,
}

/// Books an appointment for the logged in user
///
/// Staff and admins are notified of every new appointment.
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment scheduled", body = ApiResponse<AppointmentDto>),
        (status = 400, description = "Validation failed or not in the future", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet or shelter not found", body = ErrorDto),
        (status = 409, description = "Another appointment at the same time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field(
            "appointment_type",
            [Rule::Required, Rule::In(AppointmentType::VALUES)],
        )
        .field("appointment_date", [Rule::Required, Rule::Date])
        .field("appointment_time", [Rule::Required, Rule::Time])
        .field("pet_id", [Rule::Integer])
        .field("shelter_id", [Rule::Integer])
        .field("notes", [Rule::String])
        .validate(&input)?;

    let appointment_datetime = input
        .require_date("appointment_date")?
        .and_time(input.require_time("appointment_time")?);

    let request = AppointmentRequest {
        appointment_type: input.require_with("appointment_type", AppointmentType::parse)?,
        appointment_datetime,
        pet_id: input.id("pet_id"),
        shelter_id: input.id("shelter_id"),
        notes: input.opt_string("notes"),
    };

    let appointment = AppointmentService::new(&state.db)
        .create(user.id, request)
        .await?;

    Ok(ApiResponse::created(
        "Appointment scheduled successfully",
        appointment,
    ))
}

/// Lists appointments
///
/// Staff, admins and vets see every appointment, everyone else only their own.
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    params(AppointmentListParams),
    responses(
        (status = 200, description = "Appointments", body = ApiResponse<Vec<AppointmentDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AppointmentListParams>,
) -> Result<impl IntoResponse, Error> {
    let appointments = AppointmentService::new(&state.db)
        .list(&user, params.status)
        .await?;

    Ok(ApiResponse::ok("Appointments retrieved", appointments))
}

/// Confirms, completes or cancels an appointment
///
/// Owners may only cancel their own appointments; other changes need a staff role.
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/status",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentStatusDto,
    responses(
        (status = 200, description = "Appointment updated", body = ApiResponse<AppointmentDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Not allowed to change this appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(appointment_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("status", [Rule::Required, Rule::In(AppointmentStatus::VALUES)])
        .field("notes", [Rule::String])
        .validate(&input)?;
    let status = input.require_with("status", AppointmentStatus::parse)?;

    let appointment = TransitionService::new(&state.db)
        .update_appointment_status(appointment_id, status, input.opt_string("notes"), &user)
        .await?;

    Ok(ApiResponse::ok(
        "Appointment status updated successfully",
        appointment,
    ))
}
