use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000013_create_training_modules_table::TrainingModules,
};

static IDX_TRAINING_PROGRESS_USER_MODULE: &str = "idx_training_progress_user_id_module_id";
static FK_TRAINING_PROGRESS_USER_ID: &str = "fk_training_progress_user_id";
static FK_TRAINING_PROGRESS_MODULE_ID: &str = "fk_training_progress_module_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingProgress::Id))
                    .col(integer(TrainingProgress::UserId))
                    .col(integer(TrainingProgress::ModuleId))
                    .col(string_len(TrainingProgress::Status, 32).default("not_started"))
                    .col(integer(TrainingProgress::ProgressPercentage).default(0))
                    .col(timestamp_null(TrainingProgress::StartedAt))
                    .col(timestamp_null(TrainingProgress::CompletedAt))
                    .col(timestamp(TrainingProgress::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAINING_PROGRESS_USER_MODULE)
                    .table(TrainingProgress::Table)
                    .col(TrainingProgress::UserId)
                    .col(TrainingProgress::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_TRAINING_PROGRESS_USER_ID,
                TrainingProgress::Table,
                TrainingProgress::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        manager
            .create_foreign_key(references(
                FK_TRAINING_PROGRESS_MODULE_ID,
                TrainingProgress::Table,
                TrainingProgress::ModuleId,
                TrainingModules::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrainingProgress {
    Table,
    Id,
    UserId,
    ModuleId,
    Status,
    ProgressPercentage,
    StartedAt,
    CompletedAt,
    UpdatedAt,
}
