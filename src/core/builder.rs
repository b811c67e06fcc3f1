use crate::models::{MatchMode, Participant, ScoringWeights};
use crate::core::filters::{filter_candidates, matches_size_preference, within_size_tolerance};
use crate::core::pool::ParticipantPool;
use crate::core::scoring::select_best_candidate;

/// Grow one team of exactly `target_size` members from the pool (anchor and fill)
///
/// # Steps
/// 1. Take the eligible participants, in pool order
/// 2. The first eligible participant anchors the team
/// 3. Each remaining slot goes to the best scoring candidate that survives the filters
///
/// Returns the pool positions of the members in the order they joined, or `None` when
/// any slot cannot be filled. Partial teams are never returned.
pub fn build_team(
    pool: &ParticipantPool,
    target_size: usize,
    mode: MatchMode,
    weights: &ScoringWeights,
) -> Option<Vec<usize>> {
    let eligible = pool.eligible(|p| match mode {
        MatchMode::Strict => matches_size_preference(p, target_size),
        MatchMode::Relaxed => within_size_tolerance(p, target_size),
    });

    if eligible.len() < target_size {
        tracing::debug!(
            target_size,
            available = eligible.len(),
            "Not enough participants for team size"
        );
        return None;
    }

    let (&anchor, rest) = eligible.split_first()?;
    let mut members = vec![anchor];
    let mut remaining = rest.to_vec();

    if let Some(p) = pool.get(anchor) {
        tracing::debug!(anchor = %p.full_name, ?mode, target_size, "Starting team");
    }

    while members.len() < target_size {
        let team: Vec<&Participant> = members.iter().filter_map(|&i| pool.get(i)).collect();
        let candidates: Vec<&Participant> = remaining.iter().filter_map(|&i| pool.get(i)).collect();

        let filtered = filter_candidates(mode, &team, &candidates, target_size);
        let Some(winner) = select_best_candidate(&team, &filtered, weights) else {
            tracing::debug!(team_size = team.len(), ?mode, "No suitable member found");
            return None;
        };

        let position = remaining
            .iter()
            .position(|&i| pool.get(i).is_some_and(|p| std::ptr::eq(p, winner)))?;
        members.push(remaining.remove(position));
        tracing::debug!(member = %winner.full_name, "Added member");
    }

    (members.len() == target_size).then_some(members)
}
