//! Service layer for business logic.
//!
//! Services sit between the controllers and the data repositories. They take already
//! validated, typed arguments, enforce the rules that need the database (existence,
//! ownership, duplicates) and return DTOs. Status changes with legality rules or side
//! effects live in [`transition`]; every other write is a plain create, update or delete.

pub mod application;
pub mod appointment;
pub mod auth;
pub mod favorite;
pub mod foster;
pub mod medical;
pub mod notification;
pub mod pet;
pub mod report;
pub mod retry;
pub mod shelter;
pub mod supply;
pub mod training;
pub mod transition;
pub mod user;
pub mod volunteer;
