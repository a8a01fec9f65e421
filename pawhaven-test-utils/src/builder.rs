//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all table
//! creation queued and executed during the final `build()` call.

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Table groups in foreign key order, each including the tables of the groups before it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TableGroup {
    None,
    Users,
    Pets,
    All,
}

/// Builder for declarative test initialization.
///
/// SQLite enforces foreign keys on insert, so referenced tables must be created before the
/// tables pointing at them. The group methods take care of that; tables added through
/// `with_table` are created after the group tables in the order they were added.
pub struct TestBuilder {
    group: TableGroup,
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            group: TableGroup::None,
            tables: Vec::new(),
        }
    }

    /// Add the `users` table.
    pub fn with_user_tables(mut self) -> Self {
        self.group = self.group.max(TableGroup::Users);
        self
    }

    /// Add the `users`, `shelters` and `pets` tables.
    pub fn with_pet_tables(mut self) -> Self {
        self.group = self.group.max(TableGroup::Pets);
        self
    }

    /// Add every table of the schema.
    pub fn with_all_tables(mut self) -> Self {
        self.group = TableGroup::All;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pawhaven_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pawhaven_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_pet_tables()
    ///     .with_table(Applications)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating group tables first and custom tables after.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let schema = Schema::new(DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.group >= TableGroup::Users {
            all_tables.push(schema.create_table_from_entity(Users));
        }

        if self.group >= TableGroup::Pets {
            all_tables.push(schema.create_table_from_entity(Shelters));
            all_tables.push(schema.create_table_from_entity(Pets));
        }

        if self.group >= TableGroup::All {
            all_tables.extend([
                schema.create_table_from_entity(Applications),
                schema.create_table_from_entity(FosterRecords),
                schema.create_table_from_entity(MedicalRecords),
                schema.create_table_from_entity(Appointments),
                schema.create_table_from_entity(Favorites),
                schema.create_table_from_entity(Notifications),
                schema.create_table_from_entity(SupplyRequests),
                schema.create_table_from_entity(VolunteerApplications),
                schema.create_table_from_entity(VolunteerTasks),
                schema.create_table_from_entity(TrainingModules),
                schema.create_table_from_entity(TrainingProgress),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
