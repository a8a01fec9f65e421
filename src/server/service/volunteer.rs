use entity::sea_orm_active_enums::{TaskStatus, VolunteerApplicationStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::volunteer::{VolunteerApplicationDto, VolunteerTaskDto},
    server::{
        data::{
            shelter::ShelterRepository,
            volunteer_application::{NewVolunteerApplication, VolunteerApplicationRepository},
            volunteer_task::{NewVolunteerTask, VolunteerTaskRepository},
        },
        error::Error,
        validation::ValidationErrors,
    },
};

/// Volunteer applications and tasks. Reviews and task actions go through
/// [`TransitionService`](super::transition::TransitionService).
pub struct VolunteerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerService<'a> {
    /// Creates a new instance of [`VolunteerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a volunteer application.
    ///
    /// # Returns
    /// - `Ok(VolunteerApplicationDto)`: The pending application
    /// - `Err(Error::Conflict)`: The user already has an open or approved application
    pub async fn apply(
        &self,
        application: NewVolunteerApplication,
    ) -> Result<VolunteerApplicationDto, Error> {
        let application_repo = VolunteerApplicationRepository::new(self.db);

        if let Some(existing) = application_repo.find_blocking(application.user_id).await? {
            return Err(Error::Conflict(format!(
                "You already have a volunteer application with status: {}",
                existing.status
            )));
        }

        let application = application_repo.create(application).await?;

        tracing::info!(
            volunteer_application_id = application.id,
            user_id = application.user_id,
            "Submitted volunteer application"
        );

        Ok(VolunteerApplicationDto::from(application))
    }

    pub async fn list_applications(
        &self,
        user_id: Option<i32>,
        status: Option<VolunteerApplicationStatus>,
    ) -> Result<Vec<VolunteerApplicationDto>, Error> {
        let applications = VolunteerApplicationRepository::new(self.db)
            .list(user_id, status)
            .await?;

        Ok(applications
            .into_iter()
            .map(VolunteerApplicationDto::from)
            .collect())
    }

    /// Creates a task.
    ///
    /// # Returns
    /// - `Ok(VolunteerTaskDto)`: The created task
    /// - `Err(Error::ValidationError)`: `shelter_id` names a shelter that does not exist
    pub async fn create_task(&self, task: NewVolunteerTask) -> Result<VolunteerTaskDto, Error> {
        if let Some(shelter_id) = task.shelter_id {
            if ShelterRepository::new(self.db).get(shelter_id).await?.is_none() {
                return Err(ValidationErrors::single(
                    "shelter_id",
                    "The selected shelter_id is invalid.",
                )
                .into());
            }
        }

        let task = VolunteerTaskRepository::new(self.db).create(task).await?;

        tracing::info!(volunteer_task_id = task.id, "Created task {}", task.title);

        Ok(VolunteerTaskDto::from(task))
    }

    /// Tasks ordered by date, limited to those assigned to `assigned_to` when given.
    pub async fn list_tasks(
        &self,
        assigned_to: Option<i32>,
        status: Option<TaskStatus>,
    ) -> Result<Vec<VolunteerTaskDto>, Error> {
        let tasks = VolunteerTaskRepository::new(self.db)
            .list(assigned_to, status)
            .await?;

        Ok(tasks.into_iter().map(VolunteerTaskDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    mod apply {
        use entity::{
            prelude::*,
            sea_orm_active_enums::{VolunteerApplicationStatus, VolunteerApplicationType},
        };
        use pawhaven_test_utils::prelude::*;

        use crate::server::{
            data::volunteer_application::{
                NewVolunteerApplication, VolunteerApplicationRepository,
            },
            error::Error,
            service::volunteer::VolunteerService,
        };

        fn application(user_id: i32) -> NewVolunteerApplication {
            NewVolunteerApplication {
                user_id,
                application_type: VolunteerApplicationType::AnimalCare,
                availability: "Weekends".to_string(),
                experience: None,
                skills: Some("Dog walking".to_string()),
                motivation: "I love animals".to_string(),
                emergency_contact_name: "Sam".to_string(),
                emergency_contact_phone: "555-0100".to_string(),
            }
        }

        /// Expect a second application to conflict while the first is open
        #[tokio::test]
        async fn rejects_while_open() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_user_tables()
                .with_table(VolunteerApplications)
                .build()
                .await?;
            let user = test.user().insert_user("jane").await?;
            let service = VolunteerService::new(&test.db);

            service.apply(application(user.id)).await.unwrap();
            let result = service.apply(application(user.id)).await;

            assert!(
                matches!(result, Err(Error::Conflict(message)) if message.ends_with("pending"))
            );

            Ok(())
        }

        /// Expect a rejected applicant to be able to apply again
        #[tokio::test]
        async fn allows_after_rejection() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_user_tables()
                .with_table(VolunteerApplications)
                .build()
                .await?;
            let user = test.user().insert_user("jane").await?;
            let reviewer = test.user().insert_user("sam").await?;
            let service = VolunteerService::new(&test.db);

            let first = service.apply(application(user.id)).await.unwrap();
            let repo = VolunteerApplicationRepository::new(&test.db);
            let first = repo.get(first.id).await?.unwrap();
            repo.update_status(first, VolunteerApplicationStatus::Rejected, None, reviewer.id)
                .await?;

            let result = service.apply(application(user.id)).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod create_task {
        use entity::{
            prelude::*,
            sea_orm_active_enums::{Role, TaskStatus, TaskUrgency},
        };
        use pawhaven_test_utils::prelude::*;

        use crate::server::{
            data::volunteer_task::NewVolunteerTask, error::Error,
            service::volunteer::VolunteerService,
        };

        /// Expect a field error for a shelter that does not exist
        #[tokio::test]
        async fn rejects_unknown_shelter() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(VolunteerTasks)
                .build()
                .await?;
            let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;

            let result = VolunteerService::new(&test.db)
                .create_task(NewVolunteerTask {
                    title: "Walk the dogs".to_string(),
                    description: None,
                    shelter_id: Some(12),
                    required_skills: None,
                    urgency: TaskUrgency::Medium,
                    task_date: None,
                    status: TaskStatus::Open,
                    created_by: staff.id,
                })
                .await;

            assert!(
                matches!(result, Err(Error::ValidationError(errors)) if errors.0.contains_key("shelter_id"))
            );

            Ok(())
        }
    }
}
