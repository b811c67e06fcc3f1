use indexmap::IndexMap;
use std::collections::{BTreeMap, HashSet};
use crate::models::{MatchingStatistics, OptimizationPath, OverflowPolicy, Participant, ScoringWeights, Team};
use crate::core::scoring::mean_pairwise_score;

/// Most topics listed per team
const MAX_COMMON_CASE_TYPES: usize = 3;

/// Finalize a team formed by the anchor-and-fill builder
pub fn create_anti_bias_team(id: String, members: Vec<Participant>, weights: &ScoringWeights) -> Team {
    let team_size = members.len();
    let compatibility_score = mean_pairwise_score(&members, weights)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);

    let matches = members
        .iter()
        .filter(|m| m.preferred_team_size as usize == team_size)
        .count();
    let preferred_team_size_match = ratio(matches, team_size) * 100.0;

    Team {
        id,
        compatibility_score,
        team_size,
        average_experience: average_experience(&members),
        common_case_types: common_case_types(&members, 2),
        work_style_compatibility: OptimizationPath::AntiBias,
        preferred_team_size_match,
        members,
    }
}

/// Finalize a team packed from leftovers. Scores never drop below the policy floor.
pub fn create_overflow_team(
    id: String,
    members: Vec<Participant>,
    weights: &ScoringWeights,
    policy: &OverflowPolicy,
) -> Team {
    let team_size = members.len();
    let compatibility_score = match mean_pairwise_score(&members, weights) {
        Some(mean) => mean.max(policy.score_floor).min(100.0),
        None => policy.default_score,
    };

    let mean_preference = ratio(
        members.iter().map(|m| m.preferred_team_size as usize).sum(),
        team_size,
    );
    let preferred_team_size_match =
        (100.0 - (mean_preference - team_size as f64).abs() * policy.size_mismatch_penalty).max(0.0);

    let mut common_case_types = common_case_types(&members, 1);
    if common_case_types.is_empty() {
        common_case_types.push(policy.fallback_case_type.clone());
    }

    Team {
        id,
        compatibility_score,
        team_size,
        average_experience: average_experience(&members),
        common_case_types,
        work_style_compatibility: OptimizationPath::RelaxedOverflow,
        preferred_team_size_match,
        members,
    }
}

/// Case topics listed by at least `min_members` members, in first-seen order, at most three
pub fn common_case_types(members: &[Participant], min_members: usize) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for member in members {
        let mut seen = HashSet::new();
        for topic in member.case_preferences.iter().map(String::as_str) {
            if seen.insert(topic) {
                *counts.entry(topic).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= min_members)
        .map(|(topic, _)| topic.to_string())
        .take(MAX_COMMON_CASE_TYPES)
        .collect()
}

pub fn average_experience(members: &[Participant]) -> f64 {
    ratio(
        members.iter().map(|m| m.experience.ordinal() as usize).sum(),
        members.len(),
    )
}

/// Aggregate statistics over all teams of a run
pub fn calculate_statistics(
    total_participants: usize,
    teams: &[Team],
    unmatched: usize,
) -> MatchingStatistics {
    let mut team_size_distribution = BTreeMap::new();
    let mut case_type_distribution = BTreeMap::new();

    for team in teams {
        *team_size_distribution.entry(team.team_size).or_insert(0) += 1;
        for case_type in &team.common_case_types {
            *case_type_distribution.entry(case_type.clone()).or_insert(0) += 1;
        }
    }

    let average_team_size = ratio(teams.iter().map(|t| t.team_size).sum(), teams.len());
    let matching_efficiency =
        ratio(total_participants.saturating_sub(unmatched), total_participants) * 100.0;

    MatchingStatistics {
        total_participants,
        teams_formed: teams.len(),
        average_team_size,
        matching_efficiency,
        team_size_distribution,
        case_type_distribution,
    }
}

/// `numerator / denominator`, zero for an empty denominator
#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
