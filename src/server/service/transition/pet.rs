use entity::sea_orm_active_enums::PetStatus;

use super::{Transition, TransitionTable};
use crate::server::error::transition::TransitionError;

/// Status changes staff may apply to a pet directly. The initial status on creation is free.
pub static PET_TRANSITIONS: TransitionTable<PetStatus> = TransitionTable::new(
    "pet",
    &[
        Transition::new(&[PetStatus::Available], PetStatus::Pending),
        Transition::new(
            &[PetStatus::Available, PetStatus::Pending, PetStatus::Fostered],
            PetStatus::Adopted,
        ),
        Transition::new(&[PetStatus::Available, PetStatus::Pending], PetStatus::Fostered),
        Transition::new(&[PetStatus::Available], PetStatus::MedicalHold),
        Transition::new(
            &[PetStatus::Pending, PetStatus::Fostered, PetStatus::MedicalHold],
            PetStatus::Available,
        ),
    ],
);

/// Checks a staff edit of a pet's status. Keeping the current status is always allowed.
pub fn check_pet_status(from: PetStatus, to: PetStatus) -> Result<(), TransitionError> {
    if from == to {
        return Ok(());
    }

    PET_TRANSITIONS.find(from, to).map(|_| ())
}
