use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Field name to the list of validation messages for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Envelope wrapping every successful API response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for this type
    pub success: bool,
    /// Human readable outcome
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Builds a `200 OK` response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Response {
        (StatusCode::OK, Json(Self::new(message, data))).into_response()
    }

    /// Builds a `201 Created` response carrying `data`.
    pub fn created(message: impl Into<String>, data: T) -> Response {
        (StatusCode::CREATED, Json(Self::new(message, data))).into_response()
    }
}

/// Successful response without a payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                message: message.into(),
            }),
        )
            .into_response()
    }
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false` for this type
    pub success: bool,
    /// The error message
    pub message: String,
    /// Per-field validation messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }

    /// Pairs the envelope with a status code.
    pub fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// One page of a filtered listing.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    /// Number of rows matching the filters, ignoring limit and offset
    pub total_count: u64,
    pub items: Vec<T>,
}

/// Identifier of a newly created row.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub id: i32,
}
