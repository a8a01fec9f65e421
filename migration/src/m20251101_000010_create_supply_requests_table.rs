use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000005_create_foster_records_table::FosterRecords,
};

static FK_SUPPLY_REQUESTS_FOSTER_RECORD_ID: &str = "fk_supply_requests_foster_record_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupplyRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(SupplyRequests::Id))
                    .col(integer(SupplyRequests::FosterRecordId))
                    .col(string_len(SupplyRequests::ItemName, 255))
                    .col(integer(SupplyRequests::Quantity))
                    .col(string_len(SupplyRequests::Category, 32).default("other"))
                    .col(string_len(SupplyRequests::Urgency, 32).default("medium"))
                    .col(text_null(SupplyRequests::Description))
                    .col(double_null(SupplyRequests::EstimatedCost))
                    .col(double_null(SupplyRequests::ActualCost))
                    .col(string_len(SupplyRequests::Status, 32).default("pending"))
                    .col(timestamp(SupplyRequests::CreatedAt))
                    .col(timestamp(SupplyRequests::UpdatedAt))
                    .col(timestamp_null(SupplyRequests::DeliveredAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_SUPPLY_REQUESTS_FOSTER_RECORD_ID,
                SupplyRequests::Table,
                SupplyRequests::FosterRecordId,
                FosterRecords::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupplyRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SupplyRequests {
    Table,
    Id,
    FosterRecordId,
    ItemName,
    Quantity,
    Category,
    Urgency,
    Description,
    EstimatedCost,
    ActualCost,
    Status,
    CreatedAt,
    UpdatedAt,
    DeliveredAt,
}
