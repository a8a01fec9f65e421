use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub user_id: i32,
    pub pet_id: Option<i32>,
    pub shelter_id: Option<i32>,
    #[schema(value_type = String, example = "meet_greet")]
    pub appointment_type: AppointmentType,
    pub appointment_datetime: NaiveDateTime,
    #[schema(value_type = String, example = "scheduled")]
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::appointments::Model> for AppointmentDto {
    fn from(appointment: entity::appointments::Model) -> Self {
        Self {
            id: appointment.id,
            user_id: appointment.user_id,
            pet_id: appointment.pet_id,
            shelter_id: appointment.shelter_id,
            appointment_type: appointment.appointment_type,
            appointment_datetime: appointment.appointment_datetime,
            status: appointment.status,
            notes: appointment.notes,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    #[schema(value_type = String, example = "meet_greet")]
    pub appointment_type: AppointmentType,
    #[schema(example = "2030-06-01")]
    pub appointment_date: String,
    #[schema(example = "14:30")]
    pub appointment_time: String,
    pub pet_id: Option<i32>,
    /// Defaults to the pet's shelter
    pub shelter_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatusDto {
    #[schema(value_type = String, example = "confirmed")]
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}
