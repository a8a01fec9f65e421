use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    model::report::{DashboardStatsDto, MedicalSummaryDto},
    server::{
        data::{count_by, medical_record::MedicalRecordRepository},
        error::Error,
        model::auth::{AuthUser, MEDICAL_SUMMARY_ROLES},
    },
};

/// Window in days of the medical summary, both backwards and forwards from today.
const MEDICAL_WINDOW_DAYS: i64 = 30;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Row counts by status across the system, plus the medical summary for vets and admins.
    pub async fn dashboard(&self, viewer: &AuthUser) -> Result<DashboardStatsDto, Error> {
        use entity::prelude::*;

        let medical = if viewer.is_any(MEDICAL_SUMMARY_ROLES) {
            Some(self.medical_summary().await?)
        } else {
            None
        };

        Ok(DashboardStatsDto {
            pets: count_by(self.db, Pets::find(), entity::pets::Column::Status).await?,
            applications: count_by(
                self.db,
                Applications::find(),
                entity::applications::Column::Status,
            )
            .await?,
            foster_records: count_by(
                self.db,
                FosterRecords::find(),
                entity::foster_records::Column::Status,
            )
            .await?,
            appointments: count_by(
                self.db,
                Appointments::find(),
                entity::appointments::Column::Status,
            )
            .await?,
            supply_requests: count_by(
                self.db,
                SupplyRequests::find(),
                entity::supply_requests::Column::Status,
            )
            .await?,
            volunteer_applications: count_by(
                self.db,
                VolunteerApplications::find(),
                entity::volunteer_applications::Column::Status,
            )
            .await?,
            volunteer_tasks: count_by(
                self.db,
                VolunteerTasks::find(),
                entity::volunteer_tasks::Column::Status,
            )
            .await?,
            users: count_by(self.db, Users::find(), entity::users::Column::Role).await?,
            medical,
        })
    }

    async fn medical_summary(&self) -> Result<MedicalSummaryDto, Error> {
        let today = Utc::now().date_naive();
        let window = Duration::days(MEDICAL_WINDOW_DAYS);
        let record_repo = MedicalRecordRepository::new(self.db);

        Ok(MedicalSummaryDto {
            recent_records: record_repo.count_since(today - window).await?,
            upcoming_due: record_repo.count_due_between(today, today + window).await?,
        })
    }
}
