use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::Participant;

/// Which pass of the matcher produced a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationPath {
    #[serde(rename = "Anti-bias optimized")]
    AntiBias,
    #[serde(rename = "Relaxed constraints optimized")]
    RelaxedOverflow,
}

/// A formed team. Built once by the matcher and never changed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub members: Vec<Participant>,
    pub compatibility_score: f64,
    pub team_size: usize,
    pub average_experience: f64,
    pub common_case_types: Vec<String>,
    pub work_style_compatibility: OptimizationPath,
    pub preferred_team_size_match: f64,
}

impl Team {
    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }
}

/// Aggregate numbers over every team of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingStatistics {
    pub total_participants: usize,
    pub teams_formed: usize,
    pub average_team_size: f64,
    pub matching_efficiency: f64,
    pub team_size_distribution: BTreeMap<usize, usize>,
    pub case_type_distribution: BTreeMap<String, usize>,
}

/// Output of one matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResult {
    pub teams: Vec<Team>,
    pub unmatched: Vec<Participant>,
    pub statistics: MatchingStatistics,
}
