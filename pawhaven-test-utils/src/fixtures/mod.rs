//! Test fixture modules for database row creation.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a fixture
//! helper that inserts rows with standard test values:
//!
//! - `user` - accounts with a given role
//! - `shelter` - shelters
//! - `pet` - pets with a given status, optionally inside a shelter
//! - `record` - applications and foster records linking users and pets

pub mod pet;
pub mod record;
pub mod shelter;
pub mod user;
