use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::notification::{MarkedReadDto, NotificationDto, NotificationListDto},
    server::{
        data::{
            notification::{NewNotification, NotificationFilter, NotificationRepository},
            user::UserRepository,
            Page,
        },
        error::Error,
        model::auth::STAFF_ROLES,
    },
};

/// Which notifications a mark-as-read request covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkRead {
    All,
    Ids(Vec<i32>),
}

/// Sends `notification` to every staff and admin account.
///
/// Runs on whatever connection it is given so a creating transaction can include it.
pub async fn notify_staff<C: ConnectionTrait>(
    db: &C,
    notification: NewNotification,
) -> Result<(), DbErr> {
    let staff_ids = UserRepository::new(db).ids_with_roles(STAFF_ROLES).await?;

    NotificationRepository::new(db)
        .create_for_users(&staff_ids, notification)
        .await
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's notifications together with their unread count.
    pub async fn list(
        &self,
        user_id: i32,
        filter: NotificationFilter,
        page: Page,
    ) -> Result<NotificationListDto, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let (notifications, total_count) = notification_repo.list(user_id, filter, page).await?;
        let unread_count = notification_repo.count_unread(user_id).await?;

        Ok(NotificationListDto {
            total_count,
            unread_count,
            notifications: notifications.into_iter().map(NotificationDto::from).collect(),
        })
    }

    pub async fn mark_read(&self, user_id: i32, target: MarkRead) -> Result<MarkedReadDto, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        let marked_count = match target {
            MarkRead::All => notification_repo.mark_read(user_id, None).await?,
            MarkRead::Ids(ids) if ids.is_empty() => 0,
            MarkRead::Ids(ids) => notification_repo.mark_read(user_id, Some(&ids)).await?,
        };

        Ok(MarkedReadDto { marked_count })
    }
}
