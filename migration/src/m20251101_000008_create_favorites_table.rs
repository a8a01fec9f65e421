use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000003_create_pets_table::Pets,
};

static IDX_FAVORITES_USER_PET: &str = "idx_favorites_user_id_pet_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static FK_FAVORITES_PET_ID: &str = "fk_favorites_pet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::PetId))
                    .col(timestamp(Favorites::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_PET)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_FAVORITES_USER_ID,
                Favorites::Table,
                Favorites::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        manager
            .create_foreign_key(references(
                FK_FAVORITES_PET_ID,
                Favorites::Table,
                Favorites::PetId,
                Pets::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PetId,
    CreatedAt,
}
