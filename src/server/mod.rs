//! Server application core modules.
//!
//! This module contains all server-side functionality for PawHaven: HTTP routing, session
//! authentication, request validation, database access and the status transition workflow
//! that keeps pets consistent with adoption and foster decisions.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validation;
