use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::NotificationType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    #[schema(value_type = String, example = "appointment_update")]
    pub notification_type: NotificationType,
    /// Label for `notification_type`, e.g. `Appointment Update`
    pub type_display: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub read_at: Option<NaiveDateTime>,
}

impl From<entity::notifications::Model> for NotificationDto {
    fn from(notification: entity::notifications::Model) -> Self {
        Self {
            id: notification.id,
            type_display: notification.notification_type.display(),
            title: notification.title,
            message: notification.message,
            notification_type: notification.notification_type,
            is_read: notification.is_read,
            created_at: notification.created_at,
            read_at: notification.read_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub total_count: u64,
    pub unread_count: u64,
    pub notifications: Vec<NotificationDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkedReadDto {
    pub marked_count: u64,
}

/// Body of `PUT /api/notifications/read`: either `mark_all` or a list of IDs.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkReadDto {
    pub mark_all: Option<bool>,
    pub notification_ids: Option<Vec<i32>>,
}
