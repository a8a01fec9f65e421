use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::Role;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ListDto, MessageDto},
        user::{UpdateProfileDto, UpdateRoleDto, UserDto, UserStatsDto},
    },
    server::{
        data::Page,
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, ADMIN_ROLES, STAFF_ROLES},
        },
        service::user::{ProfileChanges, UserService},
        validation::{Input, Query, Rule, Schema},
    },
};

pub static USER_TAG: &str = "users";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParams {
    /// Only users with this role
    #[param(value_type = Option<String>)]
    pub role: Option<Role>,
    /// Defaults to 50, at most 100
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Updates the logged in user's own profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("name", [Rule::String, Rule::Max(100)])
        .field("email", [Rule::Email, Rule::Max(100)])
        .field("phone", [Rule::Phone, Rule::Max(20)])
        .field("address", [Rule::String])
        .field("password", [Rule::String, Rule::Min(6)])
        .validate(&input)?;

    let changes = ProfileChanges {
        name: input.patch("name", Input::opt_string),
        email: input.opt_string("email"),
        phone: input.patch("phone", Input::opt_string),
        address: input.patch("address", Input::opt_string),
        password: input.opt_string("password"),
    };

    let user = UserService::new(&state.db)
        .update_profile(user.id, changes)
        .await?;

    Ok(ApiResponse::ok("Profile updated successfully", user))
}

/// Lists user accounts
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListParams),
    responses(
        (status = 200, description = "Users", body = ApiResponse<ListDto<UserDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    let users = UserService::new(&state.db)
        .list(params.role, Page::new(params.limit, params.offset))
        .await?;

    Ok(ApiResponse::ok("Users retrieved", users))
}

/// Changes a user's role
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(ADMIN_ROLES)?;

    Schema::new()
        .field("role", [Rule::Required, Rule::In(Role::VALUES)])
        .validate(&input)?;
    let role = input.require_with("role", Role::parse)?;

    let updated = UserService::new(&state.db)
        .update_role(user_id, role)
        .await?;

    Ok(ApiResponse::ok("User role updated successfully", updated))
}

/// Deletes a user account
///
/// Rows owned by the user are deleted with it; references from other rows are cleared.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 403, description = "Admin only, or deleting own account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(ADMIN_ROLES)?;

    UserService::new(&state.db).delete(user.id, user_id).await?;

    Ok(MessageDto::ok("User deleted successfully"))
}

/// Activity counters of the logged in user
#[utoipa::path(
    get,
    path = "/api/users/stats",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Counters", body = ApiResponse<UserStatsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let stats = UserService::new(&state.db).stats(user.id).await?;

    Ok(ApiResponse::ok("User statistics retrieved", stats))
}
