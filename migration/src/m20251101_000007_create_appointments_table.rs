use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000002_create_shelters_table::Shelters, m20251101_000003_create_pets_table::Pets,
};

static IDX_APPOINTMENTS_USER_DATETIME: &str = "idx_appointments_user_id_appointment_datetime";
static FK_APPOINTMENTS_USER_ID: &str = "fk_appointments_user_id";
static FK_APPOINTMENTS_PET_ID: &str = "fk_appointments_pet_id";
static FK_APPOINTMENTS_SHELTER_ID: &str = "fk_appointments_shelter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointments::Id))
                    .col(integer(Appointments::UserId))
                    .col(integer_null(Appointments::PetId))
                    .col(integer_null(Appointments::ShelterId))
                    .col(string_len(Appointments::AppointmentType, 32))
                    .col(timestamp(Appointments::AppointmentDatetime))
                    .col(string_len(Appointments::Status, 32).default("scheduled"))
                    .col(text_null(Appointments::Notes))
                    .col(timestamp(Appointments::CreatedAt))
                    .col(timestamp(Appointments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENTS_USER_DATETIME)
                    .table(Appointments::Table)
                    .col(Appointments::UserId)
                    .col(Appointments::AppointmentDatetime)
                    .to_owned(),
            )
            .await?;

        for fk in [
            references(
                FK_APPOINTMENTS_USER_ID,
                Appointments::Table,
                Appointments::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ),
            references(
                FK_APPOINTMENTS_PET_ID,
                Appointments::Table,
                Appointments::PetId,
                Pets::Table,
                ForeignKeyAction::SetNull,
            ),
            references(
                FK_APPOINTMENTS_SHELTER_ID,
                Appointments::Table,
                Appointments::ShelterId,
                Shelters::Table,
                ForeignKeyAction::SetNull,
            ),
        ] {
            manager.create_foreign_key(fk).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    UserId,
    PetId,
    ShelterId,
    AppointmentType,
    AppointmentDatetime,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
