use crate::models::{Cohort, Participant};

/// Split participants into (undergraduate, postgraduate) cohorts.
///
/// Both lists keep input order and together hold every participant exactly once.
/// The caller's records are cloned, never moved or modified.
pub fn split_by_cohort(participants: &[Participant]) -> (Vec<Participant>, Vec<Participant>) {
    participants
        .iter()
        .cloned()
        .partition(|p| p.cohort() == Cohort::Undergraduate)
}
