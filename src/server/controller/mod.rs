//! HTTP controller endpoints for the PawHaven web API.
//!
//! Each module holds the Axum handlers of one resource. Handlers authenticate through the
//! [`AuthUser`](crate::server::model::auth::AuthUser) extractor, check roles, validate the
//! JSON body against a [`Schema`](crate::server::validation::Schema) and hand the typed values
//! to a service. Every handler carries a utoipa annotation that feeds the OpenAPI document.

pub mod application;
pub mod appointment;
pub mod auth;
pub mod favorite;
pub mod foster;
pub mod medical;
pub mod notification;
pub mod pet;
pub mod report;
pub mod shelter;
pub mod supply;
pub mod training;
pub mod user;
pub mod util;
pub mod volunteer;
