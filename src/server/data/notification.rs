use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::Page;

/// Content of a notification sent to one or more users.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
}

#[derive(Default)]
pub struct NotificationFilter {
    pub unread_only: bool,
    pub notification_type: Option<NotificationType>,
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        notification: NewNotification,
    ) -> Result<entity::notifications::Model, DbErr> {
        Self::active_model(user_id, notification).insert(self.db).await
    }

    /// Inserts one unread copy of `notification` per user.
    pub async fn create_for_users(
        &self,
        user_ids: &[i32],
        notification: NewNotification,
    ) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let rows = user_ids
            .iter()
            .map(|user_id| Self::active_model(*user_id, notification.clone()));

        entity::prelude::Notifications::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    fn active_model(
        user_id: i32,
        notification: NewNotification,
    ) -> entity::notifications::ActiveModel {
        entity::notifications::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(notification.title),
            message: ActiveValue::Set(notification.message),
            notification_type: ActiveValue::Set(notification.notification_type),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            read_at: ActiveValue::Set(None),
            ..Default::default()
        }
    }

    /// Lists the user's notifications newest first with the total matching `filter`.
    pub async fn list(
        &self,
        user_id: i32,
        filter: NotificationFilter,
        page: Page,
    ) -> Result<(Vec<entity::notifications::Model>, u64), DbErr> {
        let mut query = entity::prelude::Notifications::find()
            .filter(entity::notifications::Column::UserId.eq(user_id));

        if filter.unread_only {
            query = query.filter(entity::notifications::Column::IsRead.eq(false));
        }
        if let Some(notification_type) = filter.notification_type {
            query = query
                .filter(entity::notifications::Column::NotificationType.eq(notification_type));
        }

        let total = query.clone().count(self.db).await?;
        let notifications = query
            .order_by_desc(entity::notifications::Column::CreatedAt)
            .order_by_desc(entity::notifications::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((notifications, total))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notifications::find()
            .filter(entity::notifications::Column::UserId.eq(user_id))
            .filter(entity::notifications::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks the user's unread notifications as read, all of them when `ids` is `None`.
    ///
    /// IDs belonging to other users are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of notifications that changed from unread to read
    pub async fn mark_read(&self, user_id: i32, ids: Option<&[i32]>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Notifications::update_many()
            .col_expr(entity::notifications::Column::IsRead, Expr::value(true))
            .col_expr(
                entity::notifications::Column::ReadAt,
                Expr::value(chrono::Utc::now().naive_utc()),
            )
            .filter(entity::notifications::Column::UserId.eq(user_id))
            .filter(entity::notifications::Column::IsRead.eq(false));

        if let Some(ids) = ids {
            query = query.filter(entity::notifications::Column::Id.is_in(ids.iter().copied()));
        }

        Ok(query.exec(self.db).await?.rows_affected)
    }
}
