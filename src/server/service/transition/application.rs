use entity::sea_orm_active_enums::{ApplicationStatus, NotificationType, PetStatus};
use sea_orm::TransactionTrait;

use super::{referenced_pet, PetEffect, Transition, TransitionService, TransitionTable};
use crate::{
    model::application::{ApplicationDecisionDto, ApplicationDto},
    server::{
        data::{
            application::ApplicationRepository,
            notification::{NewNotification, NotificationRepository},
            pet::PetRepository,
        },
        error::Error,
        model::auth::AuthUser,
    },
};

/// Adoption application decisions. Approval adopts the pet if it is still available.
pub static APPLICATION_TRANSITIONS: TransitionTable<ApplicationStatus> = TransitionTable::new(
    "application",
    &[
        Transition::with_effect(
            &[ApplicationStatus::Pending],
            ApplicationStatus::Approved,
            PetEffect::Adopt,
        ),
        Transition::new(&[ApplicationStatus::Pending], ApplicationStatus::Rejected),
        Transition::new(&[ApplicationStatus::Pending], ApplicationStatus::Withdrawn),
        Transition::new(&[ApplicationStatus::Rejected], ApplicationStatus::Pending),
    ],
);

impl<'a> TransitionService<'a> {
    /// Changes an adoption application's status.
    ///
    /// Approval sets the pet from `available` to `adopted`; when the pet is no longer
    /// available only the application changes. Other pending applications for the same pet
    /// are left for staff to decide. The applicant is notified of approvals and rejections.
    ///
    /// # Returns
    /// - `Ok(ApplicationDecisionDto)`: The updated application and the pet's resulting status
    /// - `Err(Error::NotFound)`: No application with `application_id`
    /// - `Err(Error::TransitionError)`: The change is not in [`APPLICATION_TRANSITIONS`]
    /// - `Err(Error::Conflict)`: Reopening while the applicant has another pending application
    ///   for the same pet
    pub async fn decide_application(
        &self,
        application_id: i32,
        status: ApplicationStatus,
        reviewer: &AuthUser,
    ) -> Result<ApplicationDecisionDto, Error> {
        let txn = self.db.begin().await?;

        let application_repo = ApplicationRepository::new(&txn);
        let application = application_repo
            .get(application_id)
            .await?
            .ok_or_else(|| Error::not_found("Application"))?;

        let transition = APPLICATION_TRANSITIONS.find(application.status, status)?;
        if status == ApplicationStatus::Pending
            && application_repo
                .find_pending(application.user_id, application.pet_id)
                .await?
                .is_some()
        {
            return Err(Error::Conflict(
                "The applicant already has a pending application for this pet".to_string(),
            ));
        }

        let application = application_repo
            .update_status(application, status, reviewer.id)
            .await?;

        if transition.effect == PetEffect::Adopt {
            let adopted = PetRepository::new(&txn)
                .set_status_if(
                    application.pet_id,
                    &[PetStatus::Available],
                    PetStatus::Adopted,
                )
                .await?;

            if !adopted {
                tracing::debug!(
                    "Pet ID {} was no longer available when application ID {} was approved",
                    application.pet_id,
                    application.id
                );
            }
        }

        let pet = referenced_pet(&txn, application.pet_id, "application").await?;

        if matches!(
            status,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        ) {
            let title = match status {
                ApplicationStatus::Approved => "Adoption Application Approved",
                _ => "Adoption Application Update",
            };

            NotificationRepository::new(&txn)
                .create(
                    application.user_id,
                    NewNotification {
                        notification_type: NotificationType::ApplicationUpdate,
                        title: title.to_string(),
                        message: format!(
                            "Your adoption application for {} has been {}.",
                            pet.name, status
                        ),
                    },
                )
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            application_id = application.id,
            reviewer_id = reviewer.id,
            "Application status changed to {}",
            status
        );

        Ok(ApplicationDecisionDto {
            pet_status: pet.status,
            application: ApplicationDto::from_model(application, Some(pet)),
        })
    }
}
