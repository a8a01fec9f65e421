use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    foreign_key::references, m20251101_000001_create_users_table::Users,
    m20251101_000002_create_shelters_table::Shelters,
};

static IDX_VOLUNTEER_TASKS_ASSIGNED_TO: &str = "idx_volunteer_tasks_assigned_to";
static FK_VOLUNTEER_TASKS_SHELTER_ID: &str = "fk_volunteer_tasks_shelter_id";
static FK_VOLUNTEER_TASKS_CREATED_BY: &str = "fk_volunteer_tasks_created_by";
static FK_VOLUNTEER_TASKS_ASSIGNED_TO: &str = "fk_volunteer_tasks_assigned_to";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerTasks::Table)
                    .if_not_exists()
                    .col(pk_auto(VolunteerTasks::Id))
                    .col(string_len(VolunteerTasks::Title, 255))
                    .col(text_null(VolunteerTasks::Description))
                    .col(integer_null(VolunteerTasks::ShelterId))
                    .col(text_null(VolunteerTasks::RequiredSkills))
                    .col(string_len(VolunteerTasks::Urgency, 32).default("medium"))
                    .col(timestamp_null(VolunteerTasks::TaskDate))
                    .col(string_len(VolunteerTasks::Status, 32).default("open"))
                    .col(integer_null(VolunteerTasks::CreatedBy))
                    .col(integer_null(VolunteerTasks::AssignedTo))
                    .col(timestamp_null(VolunteerTasks::AssignedAt))
                    .col(timestamp_null(VolunteerTasks::CompletedAt))
                    .col(timestamp(VolunteerTasks::CreatedAt))
                    .col(timestamp(VolunteerTasks::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VOLUNTEER_TASKS_ASSIGNED_TO)
                    .table(VolunteerTasks::Table)
                    .col(VolunteerTasks::AssignedTo)
                    .to_owned(),
            )
            .await?;

        for fk in [
            references(
                FK_VOLUNTEER_TASKS_SHELTER_ID,
                VolunteerTasks::Table,
                VolunteerTasks::ShelterId,
                Shelters::Table,
                ForeignKeyAction::SetNull,
            ),
            references(
                FK_VOLUNTEER_TASKS_CREATED_BY,
                VolunteerTasks::Table,
                VolunteerTasks::CreatedBy,
                Users::Table,
                ForeignKeyAction::SetNull,
            ),
            references(
                FK_VOLUNTEER_TASKS_ASSIGNED_TO,
                VolunteerTasks::Table,
                VolunteerTasks::AssignedTo,
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
            .drop_table(Table::drop().table(VolunteerTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VolunteerTasks {
    Table,
    Id,
    Title,
    Description,
    ShelterId,
    RequiredSkills,
    Urgency,
    TaskDate,
    Status,
    CreatedBy,
    AssignedTo,
    AssignedAt,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}
