use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        shelter::{ShelterDto, ShelterInputDto},
    },
    server::{
        data::shelter::{NewShelter, ShelterUpdate},
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, ADMIN_ROLES},
        },
        service::shelter::ShelterService,
        validation::{Input, Rule, Schema},
    },
};

pub static SHELTER_TAG: &str = "shelters";

/// Rules shared by create and update; create additionally requires name and address.
fn shelter_schema(required: bool) -> Schema {
    let required = required.then_some(Rule::Required);

    Schema::new()
        .field("name", required.into_iter().chain([Rule::String, Rule::Max(100)]))
        .field("address", required.into_iter().chain([Rule::String]))
        .field("phone", [Rule::Phone, Rule::Max(20)])
        .field("email", [Rule::Email, Rule::Max(100)])
        .field("website", [Rule::Url, Rule::Max(255)])
        .field("operating_hours", [Rule::String, Rule::Max(255)])
}

/// Lists all shelters by name
#[utoipa::path(
    get,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    responses(
        (status = 200, description = "Shelters", body = ApiResponse<Vec<ShelterDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shelters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let shelters = ShelterService::new(&state.db).list().await?;

    Ok(ApiResponse::ok("Shelters retrieved", shelters))
}

#[utoipa::path(
    get,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    responses(
        (status = 200, description = "Shelter", body = ApiResponse<ShelterDto>),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter(
    State(state): State<AppState>,
    Path(shelter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let shelter = ShelterService::new(&state.db).get(shelter_id).await?;

    Ok(ApiResponse::ok("Shelter retrieved", shelter))
}

#[utoipa::path(
    post,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    request_body = ShelterInputDto,
    responses(
        (status = 201, description = "Shelter created", body = ApiResponse<ShelterDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shelter(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(ADMIN_ROLES)?;

    shelter_schema(true).validate(&input)?;

    let shelter = ShelterService::new(&state.db)
        .create(NewShelter {
            name: input.string("name")?,
            address: input.string("address")?,
            phone: input.opt_string("phone"),
            email: input.opt_string("email"),
            website: input.opt_string("website"),
            operating_hours: input.opt_string("operating_hours"),
        })
        .await?;

    Ok(ApiResponse::created("Shelter created successfully", shelter))
}

/// Updates the given fields of a shelter
#[utoipa::path(
    put,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    request_body = ShelterInputDto,
    responses(
        (status = 200, description = "Shelter updated", body = ApiResponse<ShelterDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shelter(
    State(state): State<AppState>,
    user: AuthUser,
    Path(shelter_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(ADMIN_ROLES)?;

    shelter_schema(false).validate(&input)?;

    let shelter = ShelterService::new(&state.db)
        .update(
            shelter_id,
            ShelterUpdate {
                name: input.opt_string("name"),
                address: input.opt_string("address"),
                phone: input.patch("phone", Input::opt_string),
                email: input.patch("email", Input::opt_string),
                website: input.patch("website", Input::opt_string),
                operating_hours: input.patch("operating_hours", Input::opt_string),
            },
        )
        .await?;

    Ok(ApiResponse::ok("Shelter updated successfully", shelter))
}

/// Deletes a shelter; its pets remain without a shelter
#[utoipa::path(
    delete,
    path = "/api/shelters/{id}",
    tag = SHELTER_TAG,
    params(("id" = i32, Path, description = "Shelter ID")),
    responses(
        (status = 200, description = "Shelter deleted", body = MessageDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shelter(
    State(state): State<AppState>,
    user: AuthUser,
    Path(shelter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(ADMIN_ROLES)?;

    ShelterService::new(&state.db).delete(shelter_id).await?;

    Ok(MessageDto::ok("Shelter deleted successfully"))
}
