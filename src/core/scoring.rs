use std::collections::HashSet;
use crate::models::{Participant, ScoringWeights};
use crate::core::availability::accepted_by_any;

/// Score how much a candidate would add to a partially built team
///
/// Scoring formula:
/// score = (
///     experience_novelty   if the candidate's experience level is not on the team yet
///   + shared_case_topic  * topics the candidate shares with the team
///   + unique_skill       * candidate skills the team does not have
///   + availability_match if any member accepts the candidate's availability
///   + unique_role        * candidate roles the team does not have
///   + size_affinity      if the preferred size is within 1 of the team's mean preference
/// )
///
/// Pure: identical inputs always give identical scores.
pub fn calculate_anti_bias_score(
    team: &[&Participant],
    candidate: &Participant,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    if !team.iter().any(|m| m.experience == candidate.experience) {
        score += weights.experience_novelty;
    }

    let team_topics = union_of(team, |m| &m.case_preferences);
    score += weights.shared_case_topic * shared_count(&team_topics, &candidate.case_preferences) as f64;

    let team_skills = union_of(team, |m| &m.core_strengths);
    score += weights.unique_skill * unseen_count(&team_skills, &candidate.core_strengths) as f64;

    if accepted_by_any(team, candidate) {
        score += weights.availability_match;
    }

    let team_roles = union_of(team, |m| &m.preferred_roles);
    score += weights.unique_role * unseen_count(&team_roles, &candidate.preferred_roles) as f64;

    if weights.size_affinity != 0.0 && within_size_affinity(team, candidate) {
        score += weights.size_affinity;
    }

    score
}

/// Mean score over every member pair, each pair scored as a one-member team plus a candidate.
/// `None` when there is no pair to compare.
pub fn mean_pairwise_score(members: &[Participant], weights: &ScoringWeights) -> Option<f64> {
    let mut total = 0.0;
    let mut comparisons = 0usize;

    for (i, first) in members.iter().enumerate() {
        for second in &members[i + 1..] {
            total += calculate_anti_bias_score(&[first], second, weights);
            comparisons += 1;
        }
    }

    (comparisons > 0).then(|| total / comparisons as f64)
}

/// Pick the highest scoring candidate. Ties keep the earliest candidate.
pub fn select_best_candidate<'a>(
    team: &[&Participant],
    candidates: &[&'a Participant],
    weights: &ScoringWeights,
) -> Option<&'a Participant> {
    let mut best: Option<(&'a Participant, f64)> = None;

    for &candidate in candidates {
        let score = calculate_anti_bias_score(team, candidate, weights);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(candidate, score)| {
        tracing::trace!(candidate = %candidate.id, score, "Selected best candidate");
        candidate
    })
}

pub(crate) fn union_of<'a, F>(team: &[&'a Participant], field: F) -> HashSet<&'a str>
where
    F: Fn(&'a Participant) -> &'a Vec<String>,
{
    team.iter()
        .flat_map(|m| field(*m).iter().map(String::as_str))
        .collect()
}

#[inline]
fn shared_count(team_values: &HashSet<&str>, candidate_values: &[String]) -> usize {
    let candidate: HashSet<&str> = candidate_values.iter().map(String::as_str).collect();
    candidate.iter().filter(|v| team_values.contains(*v)).count()
}

#[inline]
fn unseen_count(team_values: &HashSet<&str>, candidate_values: &[String]) -> usize {
    let candidate: HashSet<&str> = candidate_values.iter().map(String::as_str).collect();
    candidate.iter().filter(|v| !team_values.contains(*v)).count()
}

fn within_size_affinity(team: &[&Participant], candidate: &Participant) -> bool {
    if team.is_empty() {
        return false;
    }
    let mean = team.iter().map(|m| m.preferred_team_size as f64).sum::<f64>() / team.len() as f64;
    (candidate.preferred_team_size as f64 - mean).abs() <= 1.0
}
