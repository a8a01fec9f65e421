use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[schema(value_type = String, example = "adopter")]
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl From<entity::users::Model> for UserDto {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            phone: user.phone,
            address: user.address,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Activity counters for the logged in user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserStatsDto {
    pub applications_total: u64,
    pub applications_pending: u64,
    pub applications_approved: u64,
    pub foster_records_total: u64,
    pub foster_records_active: u64,
    pub favorites: u64,
    pub unread_notifications: u64,
    pub appointments_upcoming: u64,
    pub training_completed: u64,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    /// At least 8 characters
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Body of `PUT /api/users/profile`; only the given fields change.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// At least 6 characters
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    #[schema(value_type = String, example = "staff")]
    pub role: Role,
}
