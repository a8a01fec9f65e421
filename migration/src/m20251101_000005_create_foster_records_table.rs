use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000003_create_pets_table::Pets,
};

static IDX_FOSTER_RECORDS_PET_ID: &str = "idx_foster_records_pet_id";
static FK_FOSTER_RECORDS_PET_ID: &str = "fk_foster_records_pet_id";
static FK_FOSTER_RECORDS_FOSTER_PARENT_ID: &str = "fk_foster_records_foster_parent_id";
static FK_FOSTER_RECORDS_APPROVED_BY: &str = "fk_foster_records_approved_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FosterRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(FosterRecords::Id))
                    .col(integer(FosterRecords::PetId))
                    .col(integer(FosterRecords::FosterParentId))
                    .col(date(FosterRecords::StartDate))
                    .col(date_null(FosterRecords::EndDate))
                    .col(string_len(FosterRecords::Status, 32).default("pending"))
                    .col(text_null(FosterRecords::Notes))
                    .col(date(FosterRecords::ApplicationDate))
                    .col(integer_null(FosterRecords::ApprovedBy))
                    .col(timestamp_null(FosterRecords::ApprovedAt))
                    .col(timestamp(FosterRecords::CreatedAt))
                    .col(timestamp(FosterRecords::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOSTER_RECORDS_PET_ID)
                    .table(FosterRecords::Table)
                    .col(FosterRecords::PetId)
                    .to_owned(),
            )
            .await?;

        for fk in [
            references(
                FK_FOSTER_RECORDS_PET_ID,
                FosterRecords::Table,
                FosterRecords::PetId,
                Pets::Table,
                ForeignKeyAction::Cascade,
            ),
            references(
                FK_FOSTER_RECORDS_FOSTER_PARENT_ID,
                FosterRecords::Table,
                FosterRecords::FosterParentId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ),
            references(
                FK_FOSTER_RECORDS_APPROVED_BY,
                FosterRecords::Table,
                FosterRecords::ApprovedBy,
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
            .drop_table(Table::drop().table(FosterRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FosterRecords {
    Table,
    Id,
    PetId,
    FosterParentId,
    StartDate,
    EndDate,
    Status,
    Notes,
    ApplicationDate,
    ApprovedBy,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
}
