//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The session only ever holds the authenticated user's ID; everything else
//! about the user, including their role, is read from the database on each request.

pub mod user;
