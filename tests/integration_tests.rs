// Integration tests for Team Matcher

use std::collections::HashSet;
use team_matcher::core::{SequentialIds, TeamMatcher};
use team_matcher::models::{
    Availability, Cohort, ExperienceLevel, MatchMode, MatchingResult, OptimizationPath, Participant,
};
use team_matcher::match_participants_to_teams;

fn create_participant(
    id: &str,
    year: &str,
    size: u8,
    experience: ExperienceLevel,
    availability: Availability,
    topics: &[&str],
) -> Participant {
    Participant {
        id: id.to_string(),
        full_name: format!("Participant {}", id),
        current_year: year.to_string(),
        preferred_team_size: size,
        experience,
        availability,
        case_preferences: topics.iter().map(|s| s.to_string()).collect(),
        core_strengths: vec![],
        preferred_roles: vec![],
    }
}

fn run(participants: &[Participant], mode: MatchMode) -> MatchingResult {
    TeamMatcher::with_default_weights()
        .match_teams(participants, mode, &SequentialIds::new("team"))
        .expect("matching should succeed")
}

fn team_ids(result: &MatchingResult) -> Vec<Vec<String>> {
    result
        .teams
        .iter()
        .map(|t| t.member_ids().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_four_compatible_participants_form_one_team() {
    let participants: Vec<_> = ["Finance", "Marketing", "Operations", "ESG"]
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            create_participant(
                &format!("p{}", i + 1),
                "2nd Year",
                4,
                ExperienceLevel::None,
                Availability::FullyAvailable,
                &[topic],
            )
        })
        .collect();

    let result = run(&participants, MatchMode::Strict);

    assert_eq!(team_ids(&result), vec![vec!["p1", "p2", "p3", "p4"]]);
    let team = &result.teams[0];
    // Every pair only earns the availability bonus
    assert_eq!(team.compatibility_score, 20.0);
    assert_eq!(team.preferred_team_size_match, 100.0);
    assert_eq!(team.average_experience, 0.0);
    assert!(team.common_case_types.is_empty());
    assert_eq!(team.work_style_compatibility, OptimizationPath::AntiBias);

    assert!(result.unmatched.is_empty());
    assert_eq!(result.statistics.matching_efficiency, 100.0);
    assert_eq!(result.statistics.average_team_size, 4.0);
    assert_eq!(result.statistics.team_size_distribution.get(&4), Some(&1));
}

fn mismatched_trio() -> Vec<Participant> {
    vec![
        create_participant("lead", "3rd Year", 2, ExperienceLevel::FinalistOrWinner, Availability::FullyAvailable, &["Finance"]),
        create_participant("later", "3rd Year", 2, ExperienceLevel::None, Availability::InterestedLater, &["Marketing"]),
        create_participant("solo", "3rd Year", 3, ExperienceLevel::Participated1To2, Availability::ModeratelyAvailable, &["ESG"]),
    ]
}

#[test]
fn test_strict_mode_leaves_incompatible_participants_unmatched() {
    let result = run(&mismatched_trio(), MatchMode::Strict);

    assert!(result.teams.is_empty());
    assert_eq!(result.unmatched.len(), 3);
    assert_eq!(result.statistics.matching_efficiency, 0.0);
    assert_eq!(result.statistics.teams_formed, 0);
}

#[test]
fn test_relaxed_mode_pairs_through_availability_fallback() {
    let result = run(&mismatched_trio(), MatchMode::Relaxed);

    assert_eq!(team_ids(&result), vec![vec!["lead", "later"]]);
    assert_eq!(result.teams[0].work_style_compatibility, OptimizationPath::AntiBias);
    assert!(!result.teams[0].id.starts_with("relaxed-"));
    // A single leftover cannot be packed
    assert_eq!(result.unmatched.len(), 1);
    assert_eq!(result.unmatched[0].id, "solo");
}

#[test]
fn test_relaxed_mode_packs_leftovers() {
    let participants = vec![
        create_participant("a", "1st Year", 2, ExperienceLevel::None, Availability::LightlyAvailable, &["Finance"]),
        create_participant("b", "1st Year", 3, ExperienceLevel::FinalistOrWinner, Availability::FullyAvailable, &["Finance"]),
        create_participant("c", "1st Year", 4, ExperienceLevel::None, Availability::FullyAvailable, &[]),
    ];

    let strict = run(&participants, MatchMode::Strict);
    assert!(strict.teams.is_empty());

    let relaxed = run(&participants, MatchMode::Relaxed);
    assert_eq!(relaxed.teams.len(), 1);
    let team = &relaxed.teams[0];
    assert!(team.id.starts_with("relaxed-"));
    assert_eq!(team.work_style_compatibility, OptimizationPath::RelaxedOverflow);
    // Experience first, then availability
    assert_eq!(team.member_ids().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    assert!(team.compatibility_score >= 40.0 && team.compatibility_score <= 100.0);
    assert_eq!(team.common_case_types, vec!["Finance"]);
    assert_eq!(team.preferred_team_size_match, 100.0);
    assert_eq!(relaxed.statistics.matching_efficiency, 100.0);
}

fn availability_trio() -> Vec<Participant> {
    vec![
        create_participant("high", "2nd Year", 3, ExperienceLevel::FinalistOrWinner, Availability::FullyAvailable, &["Finance"]),
        create_participant("medium", "2nd Year", 3, ExperienceLevel::Participated3Plus, Availability::ModeratelyAvailable, &["Marketing"]),
        create_participant("low", "2nd Year", 3, ExperienceLevel::None, Availability::InterestedLater, &["ESG"]),
    ]
}

#[test]
fn test_low_availability_never_joins_high_anchor_in_strict_mode() {
    let result = run(&availability_trio(), MatchMode::Strict);

    for team in &result.teams {
        let ids: HashSet<_> = team.member_ids().collect();
        assert!(!(ids.contains("high") && ids.contains("low")));
    }
    assert!(result.teams.is_empty());
    assert_eq!(result.unmatched.len(), 3);
}

#[test]
fn test_low_availability_joins_through_medium_member_in_relaxed_mode() {
    let result = run(&availability_trio(), MatchMode::Relaxed);

    assert_eq!(team_ids(&result), vec![vec!["high", "medium", "low"]]);
    assert_eq!(result.teams[0].work_style_compatibility, OptimizationPath::AntiBias);
    assert!(result.unmatched.is_empty());
}

#[test]
fn test_empty_input() {
    let result = match_participants_to_teams(&[], false).unwrap();

    assert!(result.teams.is_empty());
    assert!(result.unmatched.is_empty());
    assert_eq!(result.statistics.total_participants, 0);
    assert_eq!(result.statistics.average_team_size, 0.0);
    assert_eq!(result.statistics.matching_efficiency, 0.0);
    assert!(result.statistics.case_type_distribution.is_empty());
}

#[test]
fn test_cohorts_are_matched_separately() {
    let participants = vec![
        create_participant("ug1", "1st Year", 2, ExperienceLevel::None, Availability::FullyAvailable, &["A"]),
        create_participant("pg1", "PG 1st Year", 2, ExperienceLevel::None, Availability::FullyAvailable, &["A"]),
        create_participant("ug2", "2nd Year", 2, ExperienceLevel::None, Availability::FullyAvailable, &["B"]),
        create_participant("pg2", "MBA", 2, ExperienceLevel::None, Availability::FullyAvailable, &["B"]),
    ];

    let result = run(&participants, MatchMode::Strict);

    assert_eq!(team_ids(&result), vec![vec!["ug1", "ug2"], vec!["pg1", "pg2"]]);
    for team in &result.teams {
        let cohorts: HashSet<Cohort> = team.members.iter().map(Participant::cohort).collect();
        assert_eq!(cohorts.len(), 1);
    }
}

#[test]
fn test_result_wire_format() {
    let participants: Vec<_> = (0..2)
        .map(|i| {
            create_participant(&i.to_string(), "1st Year", 2, ExperienceLevel::None, Availability::FullyAvailable, &["Finance"])
        })
        .collect();

    let result = run(&participants, MatchMode::Strict);
    let json = serde_json::to_value(&result).unwrap();

    let team = &json["teams"][0];
    assert_eq!(team["id"], "team-1");
    assert_eq!(team["teamSize"], 2);
    assert_eq!(team["workStyleCompatibility"], "Anti-bias optimized");
    assert_eq!(team["commonCaseTypes"][0], "Finance");
    assert_eq!(team["members"][0]["availability"], "Fully Available (10–15 hrs/week)");
    assert_eq!(json["statistics"]["teamSizeDistribution"]["2"], 1);
    assert_eq!(json["statistics"]["caseTypeDistribution"]["Finance"], 1);
    assert_eq!(json["statistics"]["matchingEfficiency"], 100.0);
}
