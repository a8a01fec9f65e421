use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{MedicalRecordType, Role};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        medical::{MedicalRecordDto, MedicalRecordInputDto},
    },
    server::{
        data::medical_record::{MedicalRecordUpdate, NewMedicalRecord},
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, MEDICAL_ROLES},
        },
        service::medical::MedicalService,
        validation::{Input, Rule, Schema},
    },
};

pub static MEDICAL_TAG: &str = "medical-records";

fn medical_schema(required: bool) -> Schema {
    let required = required.then_some(Rule::Required);

    Schema::new()
        .field("pet_id", required.into_iter().chain([Rule::Integer]))
        .field("record_date", required.into_iter().chain([Rule::Date]))
        .field(
            "record_type",
            required
                .into_iter()
                .chain([Rule::In(MedicalRecordType::VALUES)]),
        )
        .field("details", required.into_iter().chain([Rule::String]))
        .field("next_due_date", [Rule::Date])
        .field("vet_id", [Rule::Integer])
}

/// Adds a medical record to a pet
///
/// Vets who leave out `vet_id` are recorded as the treating vet.
#[utoipa::path(
    post,
    path = "/api/medical-records",
    tag = MEDICAL_TAG,
    request_body = MedicalRecordInputDto,
    responses(
        (status = 201, description = "Medical record created", body = ApiResponse<MedicalRecordDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff, vet or admin only", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medical_record(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MEDICAL_ROLES)?;

    medical_schema(true).validate(&input)?;

    let vet_id = input
        .id("vet_id")
        .or((user.role == Role::Vet).then_some(user.id));

    let record = MedicalService::new(&state.db)
        .create(NewMedicalRecord {
            pet_id: input.require_id("pet_id")?,
            record_date: input.require_date("record_date")?,
            record_type: input.require_with("record_type", MedicalRecordType::parse)?,
            details: input.string("details")?,
            next_due_date: input.date("next_due_date"),
            vet_id,
        })
        .await?;

    Ok(ApiResponse::created(
        "Medical record created successfully",
        record,
    ))
}

#[utoipa::path(
    put,
    path = "/api/medical-records/{id}",
    tag = MEDICAL_TAG,
    params(("id" = i32, Path, description = "Medical record ID")),
    request_body = MedicalRecordInputDto,
    responses(
        (status = 200, description = "Medical record updated", body = ApiResponse<MedicalRecordDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff, vet or admin only", body = ErrorDto),
        (status = 404, description = "Medical record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medical_record(
    State(state): State<AppState>,
    user: AuthUser,
    Path(record_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MEDICAL_ROLES)?;

    medical_schema(false).validate(&input)?;

    let update = MedicalRecordUpdate {
        record_date: input.date("record_date"),
        record_type: input.parse_with("record_type", MedicalRecordType::parse),
        details: input.opt_string("details"),
        next_due_date: input.patch("next_due_date", Input::date),
        vet_id: input.patch("vet_id", Input::id),
    };

    let record = MedicalService::new(&state.db)
        .update(record_id, update)
        .await?;

    Ok(ApiResponse::ok("Medical record updated successfully", record))
}

#[utoipa::path(
    delete,
    path = "/api/medical-records/{id}",
    tag = MEDICAL_TAG,
    params(("id" = i32, Path, description = "Medical record ID")),
    responses(
        (status = 200, description = "Medical record deleted", body = MessageDto),
        (status = 403, description = "Staff, vet or admin only", body = ErrorDto),
        (status = 404, description = "Medical record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medical_record(
    State(state): State<AppState>,
    user: AuthUser,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(MEDICAL_ROLES)?;

    MedicalService::new(&state.db).delete(record_id).await?;

    Ok(MessageDto::ok("Medical record deleted successfully"))
}
