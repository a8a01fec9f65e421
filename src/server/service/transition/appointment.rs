use entity::sea_orm_active_enums::{AppointmentStatus, NotificationType};
use sea_orm::TransactionTrait;

use super::{Transition, TransitionService, TransitionTable};
use crate::{
    model::appointment::AppointmentDto,
    server::{
        data::{
            appointment::AppointmentRepository,
            notification::{NewNotification, NotificationRepository},
        },
        error::{auth::AuthError, Error},
        model::auth::AuthUser,
    },
};

pub static APPOINTMENT_TRANSITIONS: TransitionTable<AppointmentStatus> = TransitionTable::new(
    "appointment",
    &[
        Transition::new(&[AppointmentStatus::Scheduled], AppointmentStatus::Confirmed),
        Transition::new(
            &[AppointmentStatus::Scheduled, AppointmentStatus::Confirmed],
            AppointmentStatus::InProgress,
        ),
        Transition::new(
            &[AppointmentStatus::Confirmed, AppointmentStatus::InProgress],
            AppointmentStatus::Completed,
        ),
        Transition::new(
            &[AppointmentStatus::Scheduled, AppointmentStatus::Confirmed],
            AppointmentStatus::Cancelled,
        ),
        Transition::new(
            &[AppointmentStatus::Scheduled, AppointmentStatus::Confirmed],
            AppointmentStatus::NoShow,
        ),
    ],
);

/// Title and message sent to the owner for `status`, `None` for statuses without one.
fn owner_notification(
    appointment: &entity::appointments::Model,
    status: AppointmentStatus,
) -> Option<NewNotification> {
    let kind = appointment.appointment_type.as_str().replace('_', " ");
    let when = appointment
        .appointment_datetime
        .format("%b %-d, %Y at %-I:%M %p");

    let (title, message) = match status {
        AppointmentStatus::Confirmed => (
            "Appointment Confirmed",
            format!("Your {} appointment has been confirmed for {}.", kind, when),
        ),
        AppointmentStatus::Cancelled => (
            "Appointment Cancelled",
            format!("Your {} appointment for {} has been cancelled.", kind, when),
        ),
        AppointmentStatus::Completed => (
            "Appointment Completed",
            format!("Your {} appointment has been completed. Thank you!", kind),
        ),
        AppointmentStatus::NoShow => (
            "Missed Appointment",
            format!(
                "You missed your {} appointment. Please contact us to reschedule.",
                kind
            ),
        ),
        _ => return None,
    };

    Some(NewNotification {
        notification_type: NotificationType::AppointmentUpdate,
        title: title.to_string(),
        message,
    })
}

impl<'a> TransitionService<'a> {
    /// Changes an appointment's status.
    ///
    /// Staff and admins may apply any listed change; the appointment's owner may only cancel
    /// it. The owner is notified of confirmations, cancellations, completions and no-shows
    /// made by someone else.
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The updated appointment
    /// - `Err(Error::NotFound)`: No appointment with `appointment_id`
    /// - `Err(Error::AuthError)`: The actor may not make this change
    /// - `Err(Error::TransitionError)`: The change is not in [`APPOINTMENT_TRANSITIONS`]
    pub async fn update_appointment_status(
        &self,
        appointment_id: i32,
        status: AppointmentStatus,
        notes: Option<String>,
        actor: &AuthUser,
    ) -> Result<AppointmentDto, Error> {
        let txn = self.db.begin().await?;

        let appointment_repo = AppointmentRepository::new(&txn);
        let appointment = appointment_repo
            .get(appointment_id)
            .await?
            .ok_or_else(|| Error::not_found("Appointment"))?;

        let is_owner = appointment.user_id == actor.id;
        if !actor.is_staff() && !(is_owner && status == AppointmentStatus::Cancelled) {
            return Err(AuthError::Forbidden(
                "Insufficient permissions to update this appointment".to_string(),
            )
            .into());
        }

        APPOINTMENT_TRANSITIONS.find(appointment.status, status)?;

        let appointment = appointment_repo
            .update_status(appointment, status, notes)
            .await?;

        if !is_owner {
            if let Some(notification) = owner_notification(&appointment, status) {
                NotificationRepository::new(&txn)
                    .create(appointment.user_id, notification)
                    .await?;
            }
        }

        txn.commit().await?;

        Ok(AppointmentDto::from(appointment))
    }
}

#[cfg(test)]
mod tests {
    mod update_appointment_status {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType, Role};
        use pawhaven_test_utils::prelude::*;

        use crate::server::{
            data::{
                appointment::{AppointmentRepository, NewAppointment},
                notification::NotificationRepository,
            },
            error::{auth::AuthError, transition::TransitionError, Error},
            model::auth::AuthUser,
            service::transition::TransitionService,
        };

        async fn book(
            test: &TestContext,
            user_id: i32,
        ) -> Result<entity::appointments::Model, TestError> {
            Ok(AppointmentRepository::new(&test.db)
                .create(NewAppointment {
                    user_id,
                    pet_id: None,
                    shelter_id: None,
                    appointment_type: AppointmentType::MeetGreet,
                    appointment_datetime: (Utc::now() + Duration::days(3)).naive_utc(),
                    notes: None,
                })
                .await?)
        }

        /// Expect staff confirmation to notify the owner
        #[tokio::test]
        async fn staff_confirmation_notifies_owner() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let staff = test.user().insert_user_with_role("staff", Role::Staff).await?;
            let owner = test.user().insert_user("jane").await?;
            let appointment = book(&test, owner.id).await?;

            let service = TransitionService::new(&test.db);
            let updated = service
                .update_appointment_status(
                    appointment.id,
                    AppointmentStatus::Confirmed,
                    Some("Bring the leash".to_string()),
                    &AuthUser::from(&staff),
                )
                .await
                .unwrap();

            assert_eq!(updated.status, AppointmentStatus::Confirmed);
            assert_eq!(updated.notes.as_deref(), Some("Bring the leash"));
            assert_eq!(
                NotificationRepository::new(&test.db).count_unread(owner.id).await?,
                1
            );

            Ok(())
        }

        /// Expect the owner to be able to cancel without notifying themselves
        #[tokio::test]
        async fn owner_may_cancel() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let owner = test.user().insert_user("jane").await?;
            let appointment = book(&test, owner.id).await?;

            let service = TransitionService::new(&test.db);
            let updated = service
                .update_appointment_status(
                    appointment.id,
                    AppointmentStatus::Cancelled,
                    None,
                    &AuthUser::from(&owner),
                )
                .await
                .unwrap();

            assert_eq!(updated.status, AppointmentStatus::Cancelled);
            assert_eq!(
                NotificationRepository::new(&test.db).count_unread(owner.id).await?,
                0
            );

            Ok(())
        }

        /// Expect the owner to be forbidden from confirming their own appointment
        #[tokio::test]
        async fn owner_may_not_confirm() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let owner = test.user().insert_user("jane").await?;
            let appointment = book(&test, owner.id).await?;

            let service = TransitionService::new(&test.db);
            let result = service
                .update_appointment_status(
                    appointment.id,
                    AppointmentStatus::Confirmed,
                    None,
                    &AuthUser::from(&owner),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Forbidden(_)))
            ));

            Ok(())
        }

        /// Expect a scheduled appointment not to be completed directly
        #[tokio::test]
        async fn rejects_skipping_confirmation() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let staff = test.user().insert_user_with_role("admin", Role::Admin).await?;
            let owner = test.user().insert_user("jane").await?;
            let appointment = book(&test, owner.id).await?;

            let service = TransitionService::new(&test.db);
            let result = service
                .update_appointment_status(
                    appointment.id,
                    AppointmentStatus::Completed,
                    None,
                    &AuthUser::from(&staff),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::TransitionError(TransitionError::Illegal { .. }))
            ));

            Ok(())
        }
    }
}
