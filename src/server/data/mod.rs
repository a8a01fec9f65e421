//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one per table. Each
//! is generic over `ConnectionTrait` so the same queries run on the pooled connection or
//! inside a transaction opened by a service.

pub mod application;
pub mod appointment;
pub mod favorite;
pub mod foster_record;
pub mod medical_record;
pub mod notification;
pub mod pet;
pub mod shelter;
pub mod supply_request;
pub mod training;
pub mod user;
pub mod volunteer_application;
pub mod volunteer_task;

use std::collections::BTreeMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select};

/// Limit and offset of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 50;
    pub const MAX_LIMIT: u64 = 100;
    /// Largest offset the database driver can bind as a signed 64-bit integer.
    pub const MAX_OFFSET: u64 = i64::MAX as u64;

    /// Applies the default limit when none is given and caps it at [`Self::MAX_LIMIT`].
    ///
    /// The offset is capped at [`Self::MAX_OFFSET`]; anything past it yields an empty page.
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT),
            offset: offset.unwrap_or(0).min(Self::MAX_OFFSET),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Counts the rows of `select` grouped by the string value of `column`.
///
/// Values without rows are absent from the map rather than reported as zero.
pub async fn count_by<C, E>(
    db: &C,
    select: Select<E>,
    column: E::Column,
) -> Result<BTreeMap<String, u64>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let rows: Vec<(String, i64)> = select
        .select_only()
        .column(column)
        .column_as(column.count(), "count")
        .group_by(column)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(value, count)| (value, u64::try_from(count).unwrap_or_default()))
        .collect())
}
