use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::favorite::FavoriteService,
        validation::{Input, Rule, Schema},
    },
};

pub static FAVORITE_TAG: &str = "favorites";

#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Pet added to favorites", body = ApiResponse<FavoriteDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 409, description = "Pet already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("pet_id", [Rule::Required, Rule::Integer])
        .validate(&input)?;

    let favorite = FavoriteService::new(&state.db)
        .add(user.id, input.require_id("pet_id")?)
        .await?;

    Ok(ApiResponse::created("Pet added to favorites", favorite))
}

/// Lists the logged in user's favorite pets, most recent first
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorites", body = ApiResponse<Vec<FavoriteDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list(user.id).await?;

    Ok(ApiResponse::ok("Favorites retrieved", favorites))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{pet_id}",
    tag = FAVORITE_TAG,
    params(("pet_id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet removed from favorites", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Pet not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db).remove(user.id, pet_id).await?;

    Ok(MessageDto::ok("Pet removed from favorites"))
}
