//! sea-orm entities for the shelter database.

pub mod prelude;

pub mod applications;
pub mod appointments;
pub mod favorites;
pub mod foster_records;
pub mod medical_records;
pub mod notifications;
pub mod pets;
pub mod sea_orm_active_enums;
pub mod shelters;
pub mod supply_requests;
pub mod training_modules;
pub mod training_progress;
pub mod users;
pub mod volunteer_applications;
pub mod volunteer_tasks;
