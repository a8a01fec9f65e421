use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000003_create_pets_table::Pets,
};

static IDX_APPLICATIONS_PET_ID: &str = "idx_applications_pet_id";
static FK_APPLICATIONS_USER_ID: &str = "fk_applications_user_id";
static FK_APPLICATIONS_PET_ID: &str = "fk_applications_pet_id";
static FK_APPLICATIONS_REVIEWED_BY: &str = "fk_applications_reviewed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(pk_auto(Applications::Id))
                    .col(integer(Applications::UserId))
                    .col(integer(Applications::PetId))
                    .col(string_len(Applications::Status, 32).default("pending"))
                    .col(text_null(Applications::Notes))
                    .col(integer_null(Applications::ReviewedBy))
                    .col(timestamp_null(Applications::ReviewedAt))
                    .col(timestamp(Applications::CreatedAt))
                    .col(timestamp(Applications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATIONS_PET_ID)
                    .table(Applications::Table)
                    .col(Applications::PetId)
                    .to_owned(),
            )
            .await?;

        for fk in [
            references(
                FK_APPLICATIONS_USER_ID,
                Applications::Table,
                Applications::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ),
            references(
                FK_APPLICATIONS_PET_ID,
                Applications::Table,
                Applications::PetId,
                Pets::Table,
                ForeignKeyAction::Cascade,
            ),
            references(
                FK_APPLICATIONS_REVIEWED_BY,
                Applications::Table,
                Applications::ReviewedBy,
                Users::Table,
                ForeignKeyAction::SetNull,
            ),
        ] {
            manager.create_foreign_key(fk).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applications {
    Table,
    Id,
    UserId,
    PetId,
    Status,
    Notes,
    ReviewedBy,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
