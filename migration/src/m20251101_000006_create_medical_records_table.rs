use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000003_create_pets_table::Pets,
};

static IDX_MEDICAL_RECORDS_PET_ID: &str = "idx_medical_records_pet_id";
static FK_MEDICAL_RECORDS_PET_ID: &str = "fk_medical_records_pet_id";
static FK_MEDICAL_RECORDS_VET_ID: &str = "fk_medical_records_vet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecords::Id))
                    .col(integer(MedicalRecords::PetId))
                    .col(date(MedicalRecords::RecordDate))
                    .col(string_len(MedicalRecords::RecordType, 32))
                    .col(text(MedicalRecords::Details))
                    .col(date_null(MedicalRecords::NextDueDate))
                    .col(integer_null(MedicalRecords::VetId))
                    .col(timestamp(MedicalRecords::CreatedAt))
                    .col(timestamp(MedicalRecords::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDICAL_RECORDS_PET_ID)
                    .table(MedicalRecords::Table)
                    .col(MedicalRecords::PetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_MEDICAL_RECORDS_PET_ID,
                MedicalRecords::Table,
                MedicalRecords::PetId,
                Pets::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        manager
            .create_foreign_key(references(
                FK_MEDICAL_RECORDS_VET_ID,
                MedicalRecords::Table,
                MedicalRecords::VetId,
                Users::Table,
                ForeignKeyAction::SetNull,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MedicalRecords {
    Table,
    Id,
    PetId,
    RecordDate,
    RecordType,
    Details,
    NextDueDate,
    VetId,
    CreatedAt,
    UpdatedAt,
}
