pub use super::applications::Entity as Applications;
pub use super::appointments::Entity as Appointments;
pub use super::favorites::Entity as Favorites;
pub use super::foster_records::Entity as FosterRecords;
pub use super::medical_records::Entity as MedicalRecords;
pub use super::notifications::Entity as Notifications;
pub use super::pets::Entity as Pets;
pub use super::shelters::Entity as Shelters;
pub use super::supply_requests::Entity as SupplyRequests;
pub use super::training_modules::Entity as TrainingModules;
pub use super::training_progress::Entity as TrainingProgress;
pub use super::users::Entity as Users;
pub use super::volunteer_applications::Entity as VolunteerApplications;
pub use super::volunteer_tasks::Entity as VolunteerTasks;
