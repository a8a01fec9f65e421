use entity::sea_orm_active_enums::{
    NotificationType, Role, TaskStatus, VolunteerApplicationStatus,
};
use sea_orm::TransactionTrait;

use super::{Transition, TransitionService, TransitionTable};
use crate::{
    model::volunteer::{VolunteerApplicationDto, VolunteerTaskDto},
    server::{
        data::{
            notification::{NewNotification, NotificationRepository},
            user::UserRepository,
            volunteer_application::VolunteerApplicationRepository,
            volunteer_task::VolunteerTaskRepository,
        },
        error::{auth::AuthError, transition::TransitionError, Error},
        model::auth::AuthUser,
    },
};

pub static VOLUNTEER_APPLICATION_TRANSITIONS: TransitionTable<VolunteerApplicationStatus> =
    TransitionTable::new(
        "volunteer application",
        &[
            Transition::new(
                &[VolunteerApplicationStatus::Pending],
                VolunteerApplicationStatus::UnderReview,
            ),
            Transition::new(
                &[
                    VolunteerApplicationStatus::Pending,
                    VolunteerApplicationStatus::UnderReview,
                ],
                VolunteerApplicationStatus::InterviewScheduled,
            ),
            Transition::new(
                &[
                    VolunteerApplicationStatus::Pending,
                    VolunteerApplicationStatus::UnderReview,
                    VolunteerApplicationStatus::InterviewScheduled,
                ],
                VolunteerApplicationStatus::Approved,
            ),
            Transition::new(
                &[
                    VolunteerApplicationStatus::Pending,
                    VolunteerApplicationStatus::UnderReview,
                    VolunteerApplicationStatus::InterviewScheduled,
                ],
                VolunteerApplicationStatus::Rejected,
            ),
        ],
    );

pub static TASK_TRANSITIONS: TransitionTable<TaskStatus> = TransitionTable::new(
    "volunteer task",
    &[
        Transition::new(&[TaskStatus::Open], TaskStatus::Assigned),
        Transition::new(&[TaskStatus::Assigned], TaskStatus::InProgress),
        Transition::new(
            &[TaskStatus::Assigned, TaskStatus::InProgress],
            TaskStatus::Completed,
        ),
        Transition::new(
            &[TaskStatus::Open, TaskStatus::Assigned, TaskStatus::InProgress],
            TaskStatus::Cancelled,
        ),
    ],
);

/// Action taken on a volunteer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Assign to the given user.
    Assign(i32),
    Start,
    Complete,
    Cancel,
}

impl TaskAction {
    fn target(&self) -> TaskStatus {
        match self {
            Self::Assign(_) => TaskStatus::Assigned,
            Self::Start => TaskStatus::InProgress,
            Self::Complete => TaskStatus::Completed,
            Self::Cancel => TaskStatus::Cancelled,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Assign(_) => "assign",
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }
}

impl<'a> TransitionService<'a> {
    /// Records a review of a volunteer application.
    ///
    /// Approval promotes an adopter account to volunteer; other roles keep theirs. The
    /// applicant is notified of approvals and rejections.
    ///
    /// # Returns
    /// - `Ok(VolunteerApplicationDto)`: The updated application
    /// - `Err(Error::NotFound)`: No volunteer application with `application_id`
    /// - `Err(Error::TransitionError)`: The change is not in [`VOLUNTEER_APPLICATION_TRANSITIONS`]
    pub async fn review_volunteer_application(
        &self,
        application_id: i32,
        status: VolunteerApplicationStatus,
        notes: Option<String>,
        reviewer: &AuthUser,
    ) -> Result<VolunteerApplicationDto, Error> {
        let txn = self.db.begin().await?;

        let application_repo = VolunteerApplicationRepository::new(&txn);
        let application = application_repo
            .get(application_id)
            .await?
            .ok_or_else(|| Error::not_found("Volunteer application"))?;

        VOLUNTEER_APPLICATION_TRANSITIONS.find(application.status, status)?;

        let application = application_repo
            .update_status(application, status, notes, reviewer.id)
            .await?;

        let notification = match status {
            VolunteerApplicationStatus::Approved => {
                let user_repo = UserRepository::new(&txn);
                let applicant = user_repo.get(application.user_id).await?;
                if applicant.is_some_and(|user| user.role == Role::Adopter) {
                    user_repo
                        .update_role(application.user_id, Role::Volunteer)
                        .await?;
                }

                Some((
                    "Volunteer Application Approved",
                    "Congratulations! Your volunteer application has been approved.".to_string(),
                ))
            }
            VolunteerApplicationStatus::Rejected => Some((
                "Volunteer Application Update",
                match &application.notes {
                    Some(notes) => format!(
                        "Your volunteer application has been reviewed. Notes: {}",
                        notes
                    ),
                    None => "Your volunteer application has been reviewed and was not approved at this time.".to_string(),
                },
            )),
            _ => None,
        };

        if let Some((title, message)) = notification {
            NotificationRepository::new(&txn)
                .create(
                    application.user_id,
                    NewNotification {
                        notification_type: NotificationType::VolunteerApplicationUpdate,
                        title: title.to_string(),
                        message,
                    },
                )
                .await?;
        }

        txn.commit().await?;

        Ok(VolunteerApplicationDto::from(application))
    }

    /// Applies `action` to a volunteer task.
    ///
    /// - Assign: the task must be open; volunteers may only assign themselves
    /// - Start and complete: only the assignee or staff
    /// - Cancel: staff only, checked by the caller's role guard
    ///
    /// # Returns
    /// - `Ok(VolunteerTaskDto)`: The updated task
    /// - `Err(Error::NotFound)`: No task with `task_id`, or the assignee does not exist
    /// - `Err(Error::AuthError)`: The actor may not act on this task
    /// - `Err(Error::TransitionError)`: The task is not in a status the action applies to
    pub async fn act_on_task(
        &self,
        task_id: i32,
        action: TaskAction,
        actor: &AuthUser,
    ) -> Result<VolunteerTaskDto, Error> {
        let txn = self.db.begin().await?;

        let task_repo = VolunteerTaskRepository::new(&txn);
        let task = task_repo
            .get(task_id)
            .await?
            .ok_or_else(|| Error::not_found("Task"))?;

        match action {
            TaskAction::Assign(user_id) => {
                if actor.role == Role::Volunteer && user_id != actor.id {
                    return Err(AuthError::Forbidden(
                        "Volunteers can only assign tasks to themselves".to_string(),
                    )
                    .into());
                }
                if UserRepository::new(&txn).get(user_id).await?.is_none() {
                    return Err(Error::not_found("User"));
                }
            }
            TaskAction::Start | TaskAction::Complete => {
                if !actor.is_staff() && task.assigned_to != Some(actor.id) {
                    return Err(AuthError::Forbidden(
                        "Only the assigned volunteer or staff can update this task".to_string(),
                    )
                    .into());
                }
            }
            TaskAction::Cancel => {}
        }

        let target = action.target();
        if !TASK_TRANSITIONS.allows(task.status, target) {
            return Err(TransitionError::TaskState {
                action: action.name(),
                expected: TASK_TRANSITIONS
                    .sources(target)
                    .iter()
                    .map(|status| status.to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
                current: task.status.to_string(),
            }
            .into());
        }

        let task = match action {
            TaskAction::Assign(user_id) => task_repo.assign(task, user_id).await?,
            _ => task_repo.update_status(task, target).await?,
        };

        txn.commit().await?;

        tracing::info!(
            task_id = task.id,
            actor_id = actor.id,
            "Volunteer task {} applied, status now {}",
            action.name(),
            task.status
        );

        Ok(VolunteerTaskDto::from(task))
    }
}
