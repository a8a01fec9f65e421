use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::Role;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed for username {0:?}")]
    InvalidCredentials(String),
    #[error("User ID {user_id} with role {role} attempted an action requiring one of {required:?}")]
    InsufficientRole {
        user_id: i32,
        role: Role,
        required: &'static [Role],
    },
    #[error("{0}")]
    Forbidden(String),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        ErrorDto::new(message).respond(StatusCode::UNAUTHORIZED)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized("Authentication required")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthorized("Session expired, please log in again")
            }
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid username or password")
            }
            Self::InsufficientRole { .. } => {
                tracing::debug!("{}", self);

                ErrorDto::new("Insufficient permissions").respond(StatusCode::FORBIDDEN)
            }
            Self::Forbidden(message) => {
                tracing::debug!("{}", message);

                ErrorDto::new(message).respond(StatusCode::FORBIDDEN)
            }
        }
    }
}
