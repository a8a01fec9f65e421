use sea_orm_migration::{prelude::*, schema::*};

use crate::{foreign_key::references, m20251101_000001_create_users_table::Users};

static FK_TRAINING_MODULES_CREATED_BY: &str = "fk_training_modules_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingModules::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingModules::Id))
                    .col(string_len(TrainingModules::Title, 255))
                    .col(text(TrainingModules::Description))
                    .col(text(TrainingModules::Content))
                    .col(integer(TrainingModules::DurationMinutes))
                    .col(string_len(TrainingModules::Difficulty, 32))
                    .col(string_len(TrainingModules::Category, 32))
                    .col(text_null(TrainingModules::Prerequisites))
                    .col(boolean(TrainingModules::IsRequired).default(false))
                    .col(integer_null(TrainingModules::CreatedBy))
                    .col(timestamp(TrainingModules::CreatedAt))
                    .col(timestamp(TrainingModules::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_TRAINING_MODULES_CREATED_BY,
                TrainingModules::Table,
                TrainingModules::CreatedBy,
                Users::Table,
                ForeignKeyAction::SetNull,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingModules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingModules {
    Table,
    Id,
    Title,
    Description,
    Content,
    DurationMinutes,
    Difficulty,
    Category,
    Prerequisites,
    IsRequired,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
