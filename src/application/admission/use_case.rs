//! Reservation admission
//!
//! The caller supplies a consistent snapshot of existing reservations; this
//! use case holds no state of its own besides the conflict scope.

use tracing::debug;

use crate::domain::entities::Reservation;
use crate::domain::policies::ConflictScope;
use crate::domain::services::first_conflict;

use super::result::AdmissionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationAdmission {
    scope: ConflictScope,
}

impl ReservationAdmission {
    pub fn new(scope: ConflictScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> ConflictScope {
        self.scope
    }

    /// Admit a brand-new reservation
    pub fn admit_new<'a, I>(
        &self,
        candidate: &Reservation,
        existing: I,
    ) -> Result<(), AdmissionError>
    where
        I: IntoIterator<Item = &'a Reservation>,
        I::IntoIter: Clone,
    {
        let existing = existing.into_iter();

        if existing.clone().any(|r| r.code() == candidate.code()) {
            debug!(code = %candidate.code(), "rejected: duplicate code");
            return Err(AdmissionError::DuplicateCode(candidate.code().clone()));
        }

        self.check(candidate, existing)
    }

    /// Admit a changed version of an existing reservation
    ///
    /// The reservation sharing the candidate's code is its previous version
    /// and is not compared against.
    pub fn admit_amendment<'a, I>(
        &self,
        candidate: &Reservation,
        existing: I,
    ) -> Result<(), AdmissionError>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let others = existing
            .into_iter()
            .filter(|r| r.code() != candidate.code());
        self.check(candidate, others)
    }

    fn check<'a, I>(&self, candidate: &Reservation, existing: I) -> Result<(), AdmissionError>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        match first_conflict(candidate, existing, self.scope) {
            Some(hit) => {
                debug!(
                    code = %candidate.code(),
                    conflicts_with = %hit.code(),
                    arrival = %candidate.arrival(),
                    departure = %candidate.departure(),
                    scope = %self.scope,
                    "rejected: overlapping stay"
                );
                Err(AdmissionError::Conflict {
                    candidate: candidate.code().clone(),
                    existing: hit.code().clone(),
                })
            }
            None => {
                debug!(code = %candidate.code(), scope = %self.scope, "admitted");
                Ok(())
            }
        }
    }
}
