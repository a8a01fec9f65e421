//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying role checks,
//! request validation and the status code of each outcome.

mod application;
mod appointment;
mod auth;
mod foster;
mod notification;
mod pet;
mod report;
mod shelter;
mod supply;
mod training;
mod user;
mod volunteer;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pawhaven::server::model::{app::AppState, auth::AuthUser};
use pawhaven_test_utils::prelude::*;
use serde_json::json;

use crate::util::{body_json, input};
