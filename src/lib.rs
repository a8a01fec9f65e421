//! PawHaven shelter management API.
//!
//! The crate is split into the wire-level data transfer objects in [`model`] and the
//! server implementation in [`server`].

pub mod model;
pub mod server;
