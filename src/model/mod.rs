//! Data transfer objects returned by and accepted from the HTTP API.

pub mod api;
pub mod application;
pub mod appointment;
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
pub mod volunteer;
