use sea_orm_migration::{prelude::*, schema::*};

use crate::{foreign_key::references, m20251101_000001_create_users_table::Users};

static IDX_VOLUNTEER_APPLICATIONS_USER_ID: &str = "idx_volunteer_applications_user_id";
static FK_VOLUNTEER_APPLICATIONS_USER_ID: &str = "fk_volunteer_applications_user_id";
static FK_VOLUNTEER_APPLICATIONS_REVIEWED_BY: &str = "fk_volunteer_applications_reviewed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerApplications::Table)
                    .if_not_exists()
                    .col(pk_auto(VolunteerApplications::Id))
                    .col(integer(VolunteerApplications::UserId))
                    .col(string_len(VolunteerApplications::ApplicationType, 32))
                    .col(text(VolunteerApplications::Availability))
                    .col(text_null(VolunteerApplications::Experience))
                    .col(text_null(VolunteerApplications::Skills))
                    .col(text(VolunteerApplications::Motivation))
                    .col(string_len(VolunteerApplications::EmergencyContactName, 100))
                    .col(string_len(VolunteerApplications::EmergencyContactPhone, 20))
                    .col(string_len(VolunteerApplications::Status, 32).default("pending"))
                    .col(text_null(VolunteerApplications::Notes))
                    .col(integer_null(VolunteerApplications::ReviewedBy))
                    .col(timestamp(VolunteerApplications::CreatedAt))
                    .col(timestamp(VolunteerApplications::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VOLUNTEER_APPLICATIONS_USER_ID)
                    .table(VolunteerApplications::Table)
                    .col(VolunteerApplications::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(references(
                FK_VOLUNTEER_APPLICATIONS_USER_ID,
                VolunteerApplications::Table,
                VolunteerApplications::UserId,
                Users::Table,
                ForeignKeyAction::Cascade,
            ))
            .await?;

        manager
            .create_foreign_key(references(
                FK_VOLUNTEER_APPLICATIONS_REVIEWED_BY,
                VolunteerApplications::Table,
                VolunteerApplications::ReviewedBy,
                Users::Table,
                ForeignKeyAction::SetNull,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolunteerApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VolunteerApplications {
    Table,
    Id,
    UserId,
    ApplicationType,
    Availability,
    Experience,
    Skills,
    Motivation,
    EmergencyContactName,
    EmergencyContactPhone,
    Status,
    Notes,
    ReviewedBy,
    CreatedAt,
    UpdatedAt,
}
