use std::fmt::Display;

use crate::server::error::transition::TransitionError;

/// Effect a status change has on the pet it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetEffect {
    None,
    /// `available -> adopted`, skipped when the pet is no longer available.
    Adopt,
    /// Pet must be available or fostered and becomes fostered.
    Foster,
    /// A fostered pet reverts to available.
    Release,
}

/// One allowed status change.
#[derive(Debug)]
pub struct Transition<S: 'static> {
    pub from: &'static [S],
    pub to: S,
    pub effect: PetEffect,
}

impl<S: 'static> Transition<S> {
    pub const fn new(from: &'static [S], to: S) -> Self {
        Self {
            from,
            to,
            effect: PetEffect::None,
        }
    }

    pub const fn with_effect(from: &'static [S], to: S, effect: PetEffect) -> Self {
        Self { from, to, effect }
    }
}

/// Every allowed status change of one entity. Anything not listed is illegal.
#[derive(Debug)]
pub struct TransitionTable<S: 'static> {
    entity: &'static str,
    transitions: &'static [Transition<S>],
}

impl<S: 'static> TransitionTable<S>
where
    S: Copy + PartialEq + Display + 'static,
{
    pub const fn new(entity: &'static str, transitions: &'static [Transition<S>]) -> Self {
        Self {
            entity,
            transitions,
        }
    }

    /// The entry for `from -> to`.
    ///
    /// # Returns
    /// - `Ok(&Transition)`: The change is allowed, carrying its pet effect
    /// - `Err(TransitionError::Illegal)`: No entry matches
    pub fn find(&self, from: S, to: S) -> Result<&'static Transition<S>, TransitionError> {
        self.transitions
            .iter()
            .find(|transition| transition.to == to && transition.from.contains(&from))
            .ok_or_else(|| TransitionError::Illegal {
                entity: self.entity,
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    pub fn allows(&self, from: S, to: S) -> bool {
        self.find(from, to).is_ok()
    }

    /// Statuses from which `to` can be reached, in table order.
    pub fn sources(&self, to: S) -> Vec<S> {
        self.transitions
            .iter()
            .filter(|transition| transition.to == to)
            .flat_map(|transition| transition.from.iter().copied())
            .collect()
    }

    /// Statuses reachable from `from` in table order.
    pub fn targets(&self, from: S) -> Vec<S> {
        self.transitions
            .iter()
            .filter(|transition| transition.from.contains(&from))
            .map(|transition| transition.to)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::PetStatus;

    use super::{PetEffect, Transition, TransitionTable};
    use crate::server::error::transition::TransitionError;

    static TABLE: TransitionTable<PetStatus> = TransitionTable::new(
        "pet",
        &[
            Transition::new(&[PetStatus::Available], PetStatus::Pending),
            Transition::with_effect(
                &[PetStatus::Available, PetStatus::Pending],
                PetStatus::Adopted,
                PetEffect::Adopt,
            ),
        ],
    );

    #[test]
    fn finds_listed_transition() {
        let transition = TABLE.find(PetStatus::Pending, PetStatus::Adopted).unwrap();

        assert_eq!(transition.effect, PetEffect::Adopt);
    }

    #[test]
    fn rejects_unlisted_transition() {
        let err = TABLE
            .find(PetStatus::Adopted, PetStatus::Available)
            .unwrap_err();

        assert!(matches!(err, TransitionError::Illegal { entity: "pet", .. }));
        assert_eq!(
            err.to_string(),
            "Cannot change pet status from adopted to available"
        );
    }

    #[test]
    fn lists_targets_in_order() {
        assert_eq!(
            TABLE.targets(PetStatus::Available),
            vec![PetStatus::Pending, PetStatus::Adopted]
        );
        assert!(TABLE.targets(PetStatus::Fostered).is_empty());
    }
}
