//! Booking conflict detection
//!
//! Pure interval logic over [`CalendarDate`]s. Bounds are inclusive, so a
//! stay that ends on the day another begins is a conflict.

use crate::domain::entities::Reservation;
use crate::domain::policies::ConflictScope;
use crate::domain::value_objects::CalendarDate;

/// Whether `[candidate_start, candidate_end]` and `[existing_start, existing_end]`
/// share at least one day
pub fn overlaps(
    candidate_start: &CalendarDate,
    candidate_end: &CalendarDate,
    existing_start: &CalendarDate,
    existing_end: &CalendarDate,
) -> bool {
    candidate_start.sort_key() <= existing_end.sort_key()
        && candidate_end.sort_key() >= existing_start.sort_key()
}

/// First reservation in `existing` that conflicts with `candidate`
///
/// Stops at the first hit. Reservations outside `scope` are skipped.
pub fn first_conflict<'a, I>(
    candidate: &Reservation,
    existing: I,
    scope: ConflictScope,
) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    existing.into_iter().find(|other| {
        scope.applies(candidate, other) && candidate.period().overlaps(other.period())
    })
}
