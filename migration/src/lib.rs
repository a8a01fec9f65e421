pub use sea_orm_migration::prelude::*;

mod foreign_key;
mod m20251101_000001_create_users_table;
mod m20251101_000002_create_shelters_table;
mod m20251101_000003_create_pets_table;
mod m20251101_000004_create_applications_table;
mod m20251101_000005_create_foster_records_table;
mod m20251101_000006_create_medical_records_table;
mod m20251101_000007_create_appointments_table;
mod m20251101_000008_create_favorites_table;
mod m20251101_000009_create_notifications_table;
mod m20251101_000010_create_supply_requests_table;
mod m20251101_000011_create_volunteer_applications_table;
mod m20251101_000012_create_volunteer_tasks_table;
mod m20251101_000013_create_training_modules_table;
mod m20251101_000014_create_training_progress_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_users_table::Migration),
            Box::new(m20251101_000002_create_shelters_table::Migration),
            Box::new(m20251101_000003_create_pets_table::Migration),
            Box::new(m20251101_000004_create_applications_table::Migration),
            Box::new(m20251101_000005_create_foster_records_table::Migration),
            Box::new(m20251101_000006_create_medical_records_table::Migration),
            Box::new(m20251101_000007_create_appointments_table::Migration),
            Box::new(m20251101_000008_create_favorites_table::Migration),
            Box::new(m20251101_000009_create_notifications_table::Migration),
            Box::new(m20251101_000010_create_supply_requests_table::Migration),
            Box::new(m20251101_000011_create_volunteer_applications_table::Migration),
            Box::new(m20251101_000012_create_volunteer_tasks_table::Migration),
            Box::new(m20251101_000013_create_training_modules_table::Migration),
            Box::new(m20251101_000014_create_training_progress_table::Migration),
        ]
    }
}
