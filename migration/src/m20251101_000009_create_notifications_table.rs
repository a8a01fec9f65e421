use sea_orm_migration::{prelude::*, schema::*};

use crate::{foreign_key::references, m20251101_000001_create_users_table::Users};

static IDX_NOTIFICATIONS_USER_ID: &str = "idx_notifications_user_id";
static FK_NOTIFICATIONS_USER_ID: &str = "fk_notifications_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(pk_auto(Notifications::Id))
                    .col(integer(Notifications::UserId))
                    .col(string_len(Notifications::Title, 255))
                    .col(text(Notifications::Message))
                    .col(string_len(Notifications::NotificationType, 64))
                    .col(boolean(Notifications::IsRead).default(false))
                    .col(timestamp(Notifications::CreatedAt))
                    .col(timestamp_null(Notifications::ReadAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATIONS_USER_ID)
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_NOTIFICATIONS_USER_ID,
                Notifications::Table,
                Notifications::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    UserId,
    Title,
    Message,
    NotificationType,
    IsRead,
    CreatedAt,
    ReadAt,
}
