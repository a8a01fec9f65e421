use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_users_table::Users, m20251101_000002_create_shelters_table::Shelters,
};

static IDX_PETS_STATUS: &str = "idx_pets_status";
static IDX_PETS_SHELTER_ID: &str = "idx_pets_shelter_id";
static FK_PETS_SHELTER_ID: &str = "fk_pets_shelter_id";
static FK_PETS_ADDED_BY_STAFF_ID: &str = "fk_pets_added_by_staff_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(pk_auto(Pets::Id))
                    .col(string_len(Pets::Name, 100))
                    .col(string_len_null(Pets::Species, 50))
                    .col(string_len_null(Pets::Breed, 50))
                    .col(integer_null(Pets::Age))
                    .col(string_len(Pets::Gender, 32).default("unknown"))
                    .col(text_null(Pets::Description))
                    .col(string_len(Pets::Status, 32).default("available"))
                    .col(integer_null(Pets::ShelterId))
                    .col(string_len_null(Pets::ImageUrl, 255))
                    .col(integer_null(Pets::AddedByStaffId))
                    .col(timestamp(Pets::CreatedAt))
                    .col(timestamp(Pets::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PETS_STATUS)
                    .table(Pets::Table)
                    .col(Pets::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PETS_SHELTER_ID)
                    .table(Pets::Table)
                    .col(Pets::ShelterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PETS_SHELTER_ID)
                    .from_tbl(Pets::Table)
                    .from_col(Pets::ShelterId)
                    .to_tbl(Shelters::Table)
                    .to_col(Shelters::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PETS_ADDED_BY_STAFF_ID)
                    .from_tbl(Pets::Table)
                    .from_col(Pets::AddedByStaffId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PETS_ADDED_BY_STAFF_ID)
                    .table(Pets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PETS_SHELTER_ID)
                    .table(Pets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pets {
    Table,
    Id,
    Name,
    Species,
    Breed,
    Age,
    Gender,
    Description,
    Status,
    ShelterId,
    ImageUrl,
    AddedByStaffId,
    CreatedAt,
    UpdatedAt,
}
