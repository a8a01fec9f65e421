use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{PetGender, PetStatus};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ListDto, MessageDto},
        medical::MedicalRecordDto,
        pet::{PetDto, PetInputDto},
    },
    server::{
        data::{
            pet::{NewPet, PetFilter, PetUpdate},
            Page,
        },
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES},
        },
        service::{medical::MedicalService, pet::PetService},
        validation::{Input, Query, Rule, Schema},
    },
};

pub static PET_TAG: &str = "pets";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<PetStatus>,
    pub species: Option<String>,
    pub shelter_id: Option<i32>,
    /// Defaults to 50, at most 100
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

fn pet_schema(required: bool) -> Schema {
    let required = required.then_some(Rule::Required);

    Schema::new()
        .field("name", required.into_iter().chain([Rule::String, Rule::Max(100)]))
        .field("species", [Rule::String, Rule::Max(50)])
        .field("breed", [Rule::String, Rule::Max(50)])
        .field("age", [Rule::Integer])
        .field("gender", [Rule::In(PetGender::VALUES)])
        .field("status", [Rule::In(PetStatus::VALUES)])
        .field("description", [Rule::String])
        .field("shelter_id", [Rule::Integer])
        .field("image_url", [Rule::Url, Rule::Max(255)])
}

fn age(input: &Input, key: &str) -> Option<i32> {
    input.integer(key).and_then(|age| i32::try_from(age).ok())
}

/// Lists pets newest first
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    params(PetListParams),
    responses(
        (status = 200, description = "Pets", body = ApiResponse<ListDto<PetDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pets(
    State(state): State<AppState>,
    Query(params): Query<PetListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = PetFilter {
        status: params.status,
        species: params.species,
        shelter_id: params.shelter_id,
    };

    let pets = PetService::new(&state.db)
        .list(filter, Page::new(params.limit, params.offset))
        .await?;

    Ok(ApiResponse::ok("Pets retrieved", pets))
}

/// Lists pets available for adoption
#[utoipa::path(
    get,
    path = "/api/pets/available",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Available pets", body = ApiResponse<Vec<PetDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_available_pets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let pets = PetService::new(&state.db).list_available().await?;

    Ok(ApiResponse::ok("Available pets retrieved", pets))
}

#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet", body = ApiResponse<PetDto>),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pet = PetService::new(&state.db).get(pet_id).await?;

    Ok(ApiResponse::ok("Pet retrieved", pet))
}

/// Adds a pet, recording the staff member who added it
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = PetInputDto,
    responses(
        (status = 201, description = "Pet created", body = ApiResponse<PetDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    pet_schema(true).validate(&input)?;

    let pet = PetService::new(&state.db)
        .create(NewPet {
            name: input.string("name")?,
            species: input.opt_string("species"),
            breed: input.opt_string("breed"),
            age: age(&input, "age"),
            gender: input
                .parse_with("gender", PetGender::parse)
                .unwrap_or(PetGender::Unknown),
            description: input.opt_string("description"),
            status: input
                .parse_with("status", PetStatus::parse)
                .unwrap_or(PetStatus::Available),
            shelter_id: input.id("shelter_id"),
            image_url: input.opt_string("image_url"),
            added_by_staff_id: Some(user.id),
        })
        .await?;

    Ok(ApiResponse::created("Pet created successfully", pet))
}

/// Updates the given fields of a pet
///
/// A status change must be one staff may apply directly, e.g. `medical_hold` can only
/// return to `available`.
#[utoipa::path(
    put,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = PetInputDto,
    responses(
        (status = 200, description = "Pet updated", body = ApiResponse<PetDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    user: AuthUser,
    Path(pet_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    pet_schema(false).validate(&input)?;

    let update = PetUpdate {
        name: input.opt_string("name"),
        species: input.patch("species", Input::opt_string),
        breed: input.patch("breed", Input::opt_string),
        age: input.patch("age", age),
        gender: input.parse_with("gender", PetGender::parse),
        description: input.patch("description", Input::opt_string),
        status: input.parse_with("status", PetStatus::parse),
        shelter_id: input.patch("shelter_id", Input::id),
        image_url: input.patch("image_url", Input::opt_string),
    };

    let pet = PetService::new(&state.db).update(pet_id, update).await?;

    Ok(ApiResponse::ok("Pet updated successfully", pet))
}

#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet deleted", body = MessageDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    user: AuthUser,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    PetService::new(&state.db).delete(pet_id).await?;

    Ok(MessageDto::ok("Pet deleted successfully"))
}

/// Lists a pet's medical records, newest first
#[utoipa::path(
    get,
    path = "/api/pets/{id}/medical-records",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Medical records", body = ApiResponse<Vec<MedicalRecordDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pet_medical_records(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let records = MedicalService::new(&state.db).list_by_pet(pet_id).await?;

    Ok(ApiResponse::ok("Medical records retrieved", records))
}
