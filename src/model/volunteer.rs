use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{
    TaskStatus, TaskUrgency, VolunteerApplicationStatus, VolunteerApplicationType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct VolunteerApplicationDto {
    pub id: i32,
    pub user_id: i32,
    #[schema(value_type = String, example = "animal_care")]
    pub application_type: VolunteerApplicationType,
    pub availability: String,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub motivation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    #[schema(value_type = String, example = "pending")]
    pub status: VolunteerApplicationStatus,
    pub notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::volunteer_applications::Model> for VolunteerApplicationDto {
    fn from(application: entity::volunteer_applications::Model) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            application_type: application.application_type,
            availability: application.availability,
            experience: application.experience,
            skills: application.skills,
            motivation: application.motivation,
            emergency_contact_name: application.emergency_contact_name,
            emergency_contact_phone: application.emergency_contact_phone,
            status: application.status,
            notes: application.notes,
            reviewed_by: application.reviewed_by,
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct VolunteerTaskDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub shelter_id: Option<i32>,
    pub required_skills: Option<String>,
    #[schema(value_type = String, example = "medium")]
    pub urgency: TaskUrgency,
    pub task_date: Option<NaiveDateTime>,
    #[schema(value_type = String, example = "open")]
    pub status: TaskStatus,
    pub created_by: Option<i32>,
    pub assigned_to: Option<i32>,
    pub assigned_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::volunteer_tasks::Model> for VolunteerTaskDto {
    fn from(task: entity::volunteer_tasks::Model) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            shelter_id: task.shelter_id,
            required_skills: task.required_skills,
            urgency: task.urgency,
            task_date: task.task_date,
            status: task.status,
            created_by: task.created_by,
            assigned_to: task.assigned_to,
            assigned_at: task.assigned_at,
            completed_at: task.completed_at,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVolunteerApplicationDto {
    #[schema(value_type = String, example = "animal_care")]
    pub application_type: VolunteerApplicationType,
    pub availability: String,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub motivation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateVolunteerApplicationStatusDto {
    #[schema(value_type = String, example = "approved")]
    pub status: VolunteerApplicationStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVolunteerTaskDto {
    pub title: String,
    pub description: Option<String>,
    pub shelter_id: Option<i32>,
    pub required_skills: Option<String>,
    #[schema(value_type = Option<String>, example = "medium")]
    pub urgency: Option<TaskUrgency>,
    #[schema(example = "2030-06-01 09:00:00")]
    pub task_date: Option<String>,
    #[schema(value_type = Option<String>, example = "open")]
    pub status: Option<TaskStatus>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignTaskDto {
    /// Defaults to the caller
    pub volunteer_id: Option<i32>,
}
