//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application
//! state, session data structures and the authenticated request context handed to handlers.

pub mod app;
pub mod auth;
pub mod session;
