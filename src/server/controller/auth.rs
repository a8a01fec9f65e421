use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, session::user::SessionUserId},
        service::{
            auth::{AuthService, Registration},
            user::UserService,
        },
        validation::{Input, Rule, Schema},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Creates an adopter account and logs it in
///
/// # Responses
/// - 201 (Created): The new account
/// - 400 (Bad Request): Validation failed
/// - 409 (Conflict): Username or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("username", [Rule::Required, Rule::String, Rule::Min(3), Rule::Max(50)])
        .field("email", [Rule::Required, Rule::Email, Rule::Max(100)])
        .field("password", [Rule::Required, Rule::String, Rule::Min(8)])
        .field("name", [Rule::String, Rule::Max(100)])
        .field("phone", [Rule::Phone, Rule::Max(20)])
        .field("address", [Rule::String])
        .validate(&input)?;

    let user = AuthService::new(&state.db)
        .register(Registration {
            username: input.string("username")?,
            email: input.string("email")?,
            password: input.string("password")?,
            name: input.opt_string("name"),
            phone: input.opt_string("phone"),
            address: input.opt_string("address"),
        })
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok(ApiResponse::created(
        "User registered successfully",
        UserDto::from(user),
    ))
}

/// Logs in with username and password
///
/// # Responses
/// - 200 (OK): The logged in user
/// - 400 (Bad Request): Validation failed
/// - 401 (Unauthorized): Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("username", [Rule::Required, Rule::String])
        .field("password", [Rule::Required, Rule::String])
        .validate(&input)?;

    let user = AuthService::new(&state.db)
        .login(&input.string("username")?, &input.string("password")?)
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(ApiResponse::ok("Login successful", UserDto::from(user)))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(user: AuthUser, session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    tracing::debug!(user_id = user.id, "User logged out");

    Ok(MessageDto::ok("Logged out successfully"))
}

/// Returns the profile of the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .get_user(user.id)
        .await?
        .ok_or_else(|| Error::not_found("User"))?;

    Ok(ApiResponse::ok("User retrieved", UserDto::from(user)))
}
