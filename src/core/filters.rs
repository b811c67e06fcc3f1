use crate::models::{MatchMode, Participant};
use crate::core::availability::{accepted_by_all, accepted_by_any};
use crate::core::scoring::union_of;

/// Narrow the candidates for the next slot of a team
///
/// An empty result means no candidate can fill the slot.
///
/// # Strict pipeline
/// 1. Exact preferred size
/// 2. Availability accepted by every member
/// 3. Case topic novelty, falling back to shared topics
///
/// # Relaxed pipeline
/// 1. Preferred size within one of the target
/// 2. Availability accepted by any member, skipped when nobody passes
pub fn filter_candidates<'a>(
    mode: MatchMode,
    team: &[&Participant],
    candidates: &[&'a Participant],
    target_size: usize,
) -> Vec<&'a Participant> {
    match mode {
        MatchMode::Strict => strict_candidates(team, candidates, target_size),
        MatchMode::Relaxed => relaxed_candidates(team, candidates, target_size),
    }
}

fn strict_candidates<'a>(
    team: &[&Participant],
    candidates: &[&'a Participant],
    target_size: usize,
) -> Vec<&'a Participant> {
    let sized: Vec<&Participant> = candidates
        .iter()
        .copied()
        .filter(|c| matches_size_preference(c, target_size))
        .collect();
    tracing::debug!(remaining = sized.len(), "After strict team size filtering");
    if sized.is_empty() {
        return sized;
    }

    let available: Vec<&Participant> = sized
        .into_iter()
        .filter(|c| accepted_by_all(team, c))
        .collect();
    tracing::debug!(remaining = available.len(), "After strict availability filtering");
    if available.is_empty() {
        return available;
    }

    let diverse = filter_by_case_novelty(team, &available);
    tracing::debug!(remaining = diverse.len(), "After case diversity filtering");
    if !diverse.is_empty() {
        return diverse;
    }

    // No fallback to every available candidate: from 3 members on, an empty shared set ends the fill
    let shared = filter_by_shared_case(team, &available);
    tracing::debug!(remaining = shared.len(), "After relaxed case filtering");
    shared
}

fn relaxed_candidates<'a>(
    team: &[&Participant],
    candidates: &[&'a Participant],
    target_size: usize,
) -> Vec<&'a Participant> {
    let sized: Vec<&Participant> = candidates
        .iter()
        .copied()
        .filter(|c| within_size_tolerance(c, target_size))
        .collect();
    tracing::debug!(remaining = sized.len(), "After flexible team size filtering");
    if sized.is_empty() {
        return sized;
    }

    let available: Vec<&Participant> = sized
        .iter()
        .copied()
        .filter(|c| accepted_by_any(team, c) || team.is_empty())
        .collect();
    tracing::debug!(remaining = available.len(), "After flexible availability filtering");
    if available.is_empty() {
        tracing::debug!("No candidates with flexible availability, using all size-compatible candidates");
        return sized;
    }
    available
}

/// Preferred team size equals the target
#[inline]
pub fn matches_size_preference(candidate: &Participant, target_size: usize) -> bool {
    candidate.size_gap(target_size) == 0
}

/// Preferred team size is at most one away from the target
#[inline]
pub fn within_size_tolerance(candidate: &Participant, target_size: usize) -> bool {
    candidate.size_gap(target_size) <= 1
}

/// Keep candidates bringing at least one case topic the team does not cover yet.
/// Passes everyone while the team has no topics.
pub fn filter_by_case_novelty<'a>(
    team: &[&Participant],
    candidates: &[&'a Participant],
) -> Vec<&'a Participant> {
    let topics = union_of(team, |m| &m.case_preferences);
    if topics.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .copied()
        .filter(|c| c.case_preferences.iter().any(|t| !topics.contains(t.as_str())))
        .collect()
}

/// Keep candidates sharing a case topic with the team. Teams below three members take anyone.
pub fn filter_by_shared_case<'a>(
    team: &[&Participant],
    candidates: &[&'a Participant],
) -> Vec<&'a Participant> {
    let topics = union_of(team, |m| &m.case_preferences);
    if topics.is_empty() || team.len() < 3 {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .copied()
        .filter(|c| c.case_preferences.iter().any(|t| topics.contains(t.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceLevel};

    fn create_candidate(id: &str, size: u8, availability: Availability, topics: &[&str]) -> Participant {
        Participant {
            id: id.to_string(),
            full_name: format!("Candidate {}", id),
            current_year: "3rd Year".to_string(),
            preferred_team_size: size,
            experience: ExperienceLevel::None,
            availability,
            case_preferences: topics.iter().map(|s| s.to_string()).collect(),
            core_strengths: vec![],
            preferred_roles: vec![],
        }
    }

    fn ids(candidates: &[&Participant]) -> Vec<String> {
        candidates.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_strict_requires_exact_size() {
        let anchor = create_candidate("a", 3, Availability::FullyAvailable, &[]);
        let b = create_candidate("b", 3, Availability::FullyAvailable, &[]);
        let c = create_candidate("c", 2, Availability::FullyAvailable, &[]);

        let result = filter_candidates(MatchMode::Strict, &[&anchor], &[&b, &c], 3);
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_strict_availability_requires_every_member() {
        let high = create_candidate("h", 3, Availability::FullyAvailable, &[]);
        let medium = create_candidate("m", 3, Availability::ModeratelyAvailable, &[]);
        let low = create_candidate("l", 3, Availability::LightlyAvailable, &[]);

        let result = filter_candidates(MatchMode::Strict, &[&high, &medium], &[&low], 3);
        assert!(result.is_empty());

        let result = filter_candidates(MatchMode::Strict, &[&medium], &[&low], 3);
        assert_eq!(ids(&result), vec!["l"]);
    }

    #[test]
    fn test_case_novelty_prefers_new_topics() {
        let anchor = create_candidate("a", 4, Availability::FullyAvailable, &["Finance"]);
        let same = create_candidate("b", 4, Availability::FullyAvailable, &["Finance"]);
        let fresh = create_candidate("c", 4, Availability::FullyAvailable, &["Finance", "ESG"]);

        let result = filter_candidates(MatchMode::Strict, &[&anchor], &[&same, &fresh], 4);
        assert_eq!(ids(&result), vec!["c"]);
    }

    #[test]
    fn test_case_fallback_for_small_teams() {
        let anchor = create_candidate("a", 4, Availability::FullyAvailable, &["Finance"]);
        let same = create_candidate("b", 4, Availability::FullyAvailable, &["Finance"]);
        let none = create_candidate("c", 4, Availability::FullyAvailable, &[]);

        // Nobody brings a new topic; a one-member team accepts everyone
        let result = filter_candidates(MatchMode::Strict, &[&anchor], &[&same, &none], 4);
        assert_eq!(ids(&result), vec!["b", "c"]);
    }

    #[test]
    fn test_case_fallback_requires_shared_topic_at_three_members() {
        let a = create_candidate("a", 4, Availability::FullyAvailable, &["Finance"]);
        let b = create_candidate("b", 4, Availability::FullyAvailable, &["Marketing"]);
        let c = create_candidate("c", 4, Availability::FullyAvailable, &["Finance"]);
        let shared = create_candidate("d", 4, Availability::FullyAvailable, &["Marketing"]);
        let none = create_candidate("e", 4, Availability::FullyAvailable, &[]);

        let result = filter_candidates(MatchMode::Strict, &[&a, &b, &c], &[&none, &shared], 4);
        assert_eq!(ids(&result), vec!["d"]);

        let result = filter_candidates(MatchMode::Strict, &[&a, &b, &c], &[&none], 4);
        assert!(result.is_empty());
    }

    #[test]
    fn test_relaxed_size_tolerance() {
        let anchor = create_candidate("a", 3, Availability::FullyAvailable, &[]);
        let two = create_candidate("b", 2, Availability::FullyAvailable, &[]);
        let four = create_candidate("c", 4, Availability::FullyAvailable, &[]);
        let far = create_candidate("d", 5, Availability::FullyAvailable, &[]);

        let result = filter_candidates(MatchMode::Relaxed, &[&anchor], &[&two, &four, &far], 3);
        assert_eq!(ids(&result), vec!["b", "c"]);
    }

    #[test]
    fn test_relaxed_availability_degrades_instead_of_failing() {
        let high = create_candidate("h", 2, Availability::FullyAvailable, &[]);
        let low = create_candidate("l", 2, Availability::InterestedLater, &[]);
        let medium = create_candidate("m", 2, Availability::ModeratelyAvailable, &[]);

        let result = filter_candidates(MatchMode::Relaxed, &[&high], &[&low], 2);
        assert_eq!(ids(&result), vec!["l"]);

        let result = filter_candidates(MatchMode::Relaxed, &[&high], &[&low, &medium], 2);
        assert_eq!(ids(&result), vec!["m"]);
    }
}
