//! Error types for the PawHaven server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, validation, status transitions). All errors
//! implement `IntoResponse` for Axum HTTP responses and render the canonical
//! `{success, message, errors?}` envelope. Errors without a client-facing meaning are logged
//! in full and answered with a generic 500 body.

pub mod auth;
pub mod config;
pub mod retry;
pub mod transition;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, transition::TransitionError},
        validation::ValidationErrors,
    },
};

/// Main error type for the PawHaven server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `#[from]` enables conversion from underlying error types via the `?`
/// operator and the `IntoResponse` implementation maps each to an HTTP response.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication and authorization errors (401/403)
/// - Validation errors (400 with per-field messages)
/// - Status transition errors (409 conflicts)
/// - Request level outcomes (404 not found, 409 conflict, 400 bad request)
/// - External library errors (database, sessions, password hashing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// One or more request fields failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),
    /// Requested status change is not allowed.
    #[error(transparent)]
    TransitionError(#[from] TransitionError),
    /// Requested resource does not exist; the message is shown to the client.
    #[error("{0}")]
    NotFound(String),
    /// Request conflicts with existing state; the message is shown to the client.
    #[error("{0}")]
    Conflict(String),
    /// Request is malformed or breaks a business rule; the message is shown to the client.
    #[error("{0}")]
    BadRequest(String),
    /// Internal error indicating a bug in PawHaven's code.
    #[error("Internal error with PawHaven's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a 404 naming the missing resource, e.g. `Error::not_found("Pet")`.
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{} not found", resource))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed requests
/// - 401/403 - Authentication and authorization failures
/// - 404 Not Found - Missing resources
/// - 409 Conflict - Duplicates and illegal status transitions
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::TransitionError(err) => err.into_response(),
            Self::NotFound(message) => {
                tracing::debug!("{}", message);

                ErrorDto::new(message).respond(StatusCode::NOT_FOUND)
            }
            Self::Conflict(message) => {
                tracing::debug!("{}", message);

                ErrorDto::new(message).respond(StatusCode::CONFLICT)
            }
            Self::BadRequest(message) => {
                tracing::debug!("{}", message);

                ErrorDto::new(message).respond(StatusCode::BAD_REQUEST)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details such as driver error text.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        ErrorDto::new("Internal server error").respond(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
