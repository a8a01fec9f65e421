use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shelters::Table)
                    .if_not_exists()
                    .col(pk_auto(Shelters::Id))
                    .col(string_len(Shelters::Name, 100))
                    .col(text(Shelters::Address))
                    .col(string_len_null(Shelters::Phone, 20))
                    .col(string_len_null(Shelters::Email, 100))
                    .col(string_len_null(Shelters::Website, 255))
                    .col(string_len_null(Shelters::OperatingHours, 255))
                    .col(timestamp(Shelters::CreatedAt))
                    .col(timestamp(Shelters::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shelters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shelters {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Email,
    Website,
    OperatingHours,
    CreatedAt,
    UpdatedAt,
}
