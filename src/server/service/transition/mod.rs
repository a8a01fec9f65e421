//! Status transition workflow.
//!
//! Every status change with legality rules or side effects goes through [`TransitionService`].
//! Each entity has an explicit [`TransitionTable`] listing the allowed `from -> to` changes and
//! the effect each has on the concerned pet. A change, its pet effect and the notifications it
//! sends are written in one database transaction, so either all of them persist or none do.
//!
//! The pet row update is guarded by its current status (`WHERE status = ...`); together with
//! the transaction this is the only concurrency control two racing decisions rely on.

pub mod application;
pub mod appointment;
pub mod foster;
pub mod pet;
pub mod supply;
pub mod table;
pub mod volunteer;

use sea_orm::{ConnectionTrait, DatabaseConnection};

pub use table::{PetEffect, Transition, TransitionTable};

use crate::server::{data::pet::PetRepository, error::Error};

/// Applies status changes of applications, foster records, appointments, supply requests
/// and volunteer applications and tasks.
pub struct TransitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransitionService<'a> {
    /// Creates a new instance of [`TransitionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Loads the pet a record points at.
///
/// The foreign keys cascade, so a missing pet means the database is inconsistent.
async fn referenced_pet<C: ConnectionTrait>(
    db: &C,
    pet_id: i32,
    referrer: &str,
) -> Result<entity::pets::Model, Error> {
    PetRepository::new(db).get(pet_id).await?.ok_or_else(|| {
        Error::InternalError(format!(
            "Pet ID {} referenced by {} does not exist",
            pet_id, referrer
        ))
    })
}
