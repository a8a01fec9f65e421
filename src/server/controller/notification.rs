use axum::{extract::State, response::IntoResponse};
use entity::sea_orm_active_enums::NotificationType;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        notification::{MarkReadDto, MarkedReadDto, NotificationListDto},
    },
    server::{
        data::{notification::NotificationFilter, Page},
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::notification::{MarkRead, NotificationService},
        validation::{Input, Query, Rule, Schema, ValidationErrors},
    },
};

pub static NOTIFICATION_TAG: &str = "notifications";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationListParams {
    /// Only unread notifications
    #[serde(default)]
    pub unread_only: bool,
    #[serde(rename = "type")]
    #[param(rename = "type", value_type = Option<String>)]
    pub notification_type: Option<NotificationType>,
    /// Defaults to 50, at most 100
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Lists the logged in user's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationListParams),
    responses(
        (status = 200, description = "Notifications with unread count", body = ApiResponse<NotificationListDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<NotificationListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = NotificationFilter {
        unread_only: params.unread_only,
        notification_type: params.notification_type,
    };

    let notifications = NotificationService::new(&state.db)
        .list(user.id, filter, Page::new(params.limit, params.offset))
        .await?;

    Ok(ApiResponse::ok("Notifications retrieved", notifications))
}

/// Marks notifications as read
///
/// Either `mark_all: true` or a list of `notification_ids` is required. Only the caller's
/// own notifications are touched.
#[utoipa::path(
    put,
    path = "/api/notifications/read",
    tag = NOTIFICATION_TAG,
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Notifications marked as read", body = ApiResponse<MarkedReadDto>),
        (status = 400, description = "Nothing to mark or invalid ids", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field("mark_all", [Rule::Boolean])
        .field("notification_ids", [Rule::Array])
        .validate(&input)?;

    let target = if input.boolean("mark_all").unwrap_or(false) {
        MarkRead::All
    } else {
        let ids = input.id_list("notification_ids").unwrap_or_default();
        if ids.is_empty() {
            return Err(Error::BadRequest(
                "Either mark_all must be true or notification_ids must be provided".to_string(),
            ));
        }
        if input
            .get("notification_ids")
            .and_then(|ids| ids.as_array())
            .is_some_and(|raw| raw.len() != ids.len())
        {
            return Err(ValidationErrors::single(
                "notification_ids",
                "All notification IDs must be numeric",
            )
            .into());
        }

        MarkRead::Ids(ids)
    };

    let marked = NotificationService::new(&state.db)
        .mark_read(user.id, target)
        .await?;

    Ok(ApiResponse::ok("Notifications marked as read", marked))
}
