use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::PetStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections raised by the status transition tables.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The transition table has no entry from the current status to the requested one.
    #[error("Cannot change {entity} status from {from} to {to}")]
    Illegal {
        entity: &'static str,
        from: String,
        to: String,
    },
    /// A foster placement needs the pet to be available or already fostered.
    #[error("Cannot approve foster for a pet that is currently not available (status: {0})")]
    PetUnavailable(PetStatus),
    /// A volunteer task action requires a different task status.
    #[error("Task must be {expected} to {action}. Current status: {current}")]
    TaskState {
        action: &'static str,
        expected: String,
        current: String,
    },
}

impl IntoResponse for TransitionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        ErrorDto::new(self.to_string()).respond(StatusCode::CONFLICT)
    }
}
