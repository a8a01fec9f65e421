use entity::sea_orm_active_enums::{FosterStatus, NotificationType, PetStatus};
use sea_orm::TransactionTrait;

use super::{referenced_pet, PetEffect, Transition, TransitionService, TransitionTable};
use crate::{
    model::foster::{FosterDecisionDto, FosterRecordDto},
    server::{
        data::{
            foster_record::FosterRecordRepository,
            notification::{NewNotification, NotificationRepository},
            pet::PetRepository,
        },
        error::{transition::TransitionError, Error},
        model::auth::AuthUser,
    },
};

/// Pet statuses a foster placement can start from.
const FOSTERABLE: &[PetStatus] = &[PetStatus::Available, PetStatus::Fostered];

/// Foster record decisions.
///
/// Only records that were approved or active release their pet when they end, so ending a
/// placement that never started cannot make an adopted pet available again.
pub static FOSTER_TRANSITIONS: TransitionTable<FosterStatus> = TransitionTable::new(
    "foster record",
    &[
        Transition::with_effect(
            &[FosterStatus::Pending],
            FosterStatus::Approved,
            PetEffect::Foster,
        ),
        Transition::with_effect(
            &[FosterStatus::Pending, FosterStatus::Approved],
            FosterStatus::Active,
            PetEffect::Foster,
        ),
        Transition::new(&[FosterStatus::Pending], FosterStatus::Rejected),
        Transition::new(&[FosterStatus::Pending], FosterStatus::Cancelled),
        Transition::with_effect(
            &[FosterStatus::Approved],
            FosterStatus::Rejected,
            PetEffect::Release,
        ),
        Transition::with_effect(
            &[FosterStatus::Approved, FosterStatus::Active],
            FosterStatus::Cancelled,
            PetEffect::Release,
        ),
        Transition::with_effect(
            &[FosterStatus::Active],
            FosterStatus::Completed,
            PetEffect::Release,
        ),
    ],
);

impl<'a> TransitionService<'a> {
    /// Changes a foster record's status and the fostered pet with it.
    ///
    /// Approval and activation need the pet to be available or already fostered and set it
    /// to fostered; activating an approved record keeps the pet it already holds. Ending an
    /// approved or active record returns a fostered pet to available. The foster parent is
    /// notified of every decision.
    ///
    /// # Returns
    /// - `Ok(FosterDecisionDto)`: The updated record and the pet's resulting status
    /// - `Err(Error::NotFound)`: No foster record with `record_id`
    /// - `Err(Error::TransitionError)`: The change is not in [`FOSTER_TRANSITIONS`] or the pet
    ///   cannot be fostered; nothing is written
    pub async fn decide_foster_record(
        &self,
        record_id: i32,
        status: FosterStatus,
        reviewer: &AuthUser,
    ) -> Result<FosterDecisionDto, Error> {
        let txn = self.db.begin().await?;

        let record_repo = FosterRecordRepository::new(&txn);
        let pet_repo = PetRepository::new(&txn);

        let record = record_repo
            .get(record_id)
            .await?
            .ok_or_else(|| Error::not_found("Foster record"))?;
        let previous = record.status;

        let transition = FOSTER_TRANSITIONS.find(previous, status)?;

        match transition.effect {
            PetEffect::Foster if previous != FosterStatus::Approved => {
                let pet = referenced_pet(&txn, record.pet_id, "foster record").await?;
                if !FOSTERABLE.contains(&pet.status) {
                    return Err(TransitionError::PetUnavailable(pet.status).into());
                }

                if !pet_repo
                    .set_status_if(pet.id, FOSTERABLE, PetStatus::Fostered)
                    .await?
                {
                    let current = referenced_pet(&txn, record.pet_id, "foster record").await?;
                    return Err(TransitionError::PetUnavailable(current.status).into());
                }
            }
            PetEffect::Release => {
                pet_repo
                    .set_status_if(record.pet_id, &[PetStatus::Fostered], PetStatus::Available)
                    .await?;
            }
            _ => {}
        }

        let approved_by = matches!(status, FosterStatus::Approved | FosterStatus::Active)
            .then_some(reviewer.id);
        let record = record_repo.update_status(record, status, approved_by).await?;
        let pet = referenced_pet(&txn, record.pet_id, "foster record").await?;

        NotificationRepository::new(&txn)
            .create(
                record.foster_parent_id,
                NewNotification {
                    notification_type: NotificationType::FosterUpdate,
                    title: "Foster Application Update".to_string(),
                    message: format!(
                        "Your foster record for {} has been changed to {}.",
                        pet.name, status
                    ),
                },
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            foster_record_id = record.id,
            reviewer_id = reviewer.id,
            "Foster record status changed from {} to {}",
            previous,
            status
        );

        Ok(FosterDecisionDto {
            pet_status: pet.status,
            foster_record: FosterRecordDto::from_model(record, Some(pet)),
        })
    }
}
