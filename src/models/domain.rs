use serde::{Deserialize, Serialize};
use validator::Validate;

/// Case competition participant as submitted for matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    /// Free-text year of study, only used to derive the cohort
    pub current_year: String,
    #[validate(range(min = 2, max = 4))]
    pub preferred_team_size: u8,
    pub experience: ExperienceLevel,
    pub availability: Availability,
    #[serde(default)]
    pub case_preferences: Vec<String>,
    #[serde(default)]
    pub core_strengths: Vec<String>,
    #[serde(default)]
    pub preferred_roles: Vec<String>,
}

impl Participant {
    /// Postgraduate and MBA students are matched separately from undergraduates
    pub fn cohort(&self) -> Cohort {
        if self.current_year.contains("PG") || self.current_year.contains("MBA") {
            Cohort::Postgraduate
        } else {
            Cohort::Undergraduate
        }
    }

    /// Distance between the stated preference and a team size
    #[inline]
    pub fn size_gap(&self, team_size: usize) -> usize {
        (self.preferred_team_size as usize).abs_diff(team_size)
    }
}

/// Education cohort. Cohorts never share a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohort {
    Undergraduate,
    Postgraduate,
}

/// Prior case competition experience, ordered from least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Participated in 1–2")]
    Participated1To2,
    #[serde(rename = "Participated in 3+")]
    Participated3Plus,
    #[serde(rename = "Finalist/Winner in at least one")]
    FinalistOrWinner,
}

impl ExperienceLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Participated1To2 => 1,
            Self::Participated3Plus => 2,
            Self::FinalistOrWinner => 3,
        }
    }
}

/// Weekly availability as reported by the participant.
///
/// Labels outside the known four are kept verbatim in `Unlisted`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    FullyAvailable,
    ModeratelyAvailable,
    LightlyAvailable,
    InterestedLater,
    Unlisted(String),
}

const FULLY_AVAILABLE: &str = "Fully Available (10–15 hrs/week)";
const MODERATELY_AVAILABLE: &str = "Moderately Available (5–10 hrs/week)";
const LIGHTLY_AVAILABLE: &str = "Lightly Available (1–4 hrs/week)";
const INTERESTED_LATER: &str = "Not available now, but interested later";

impl Availability {
    pub fn label(&self) -> &str {
        match self {
            Self::FullyAvailable => FULLY_AVAILABLE,
            Self::ModeratelyAvailable => MODERATELY_AVAILABLE,
            Self::LightlyAvailable => LIGHTLY_AVAILABLE,
            Self::InterestedLater => INTERESTED_LATER,
            Self::Unlisted(label) => label,
        }
    }

    /// Ordinal used when packing leftovers; unlisted labels rank with moderate availability
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::FullyAvailable => 3,
            Self::ModeratelyAvailable | Self::Unlisted(_) => 2,
            Self::LightlyAvailable => 1,
            Self::InterestedLater => 0,
        }
    }
}

impl From<&str> for Availability {
    fn from(label: &str) -> Self {
        match label {
            FULLY_AVAILABLE => Self::FullyAvailable,
            MODERATELY_AVAILABLE => Self::ModeratelyAvailable,
            LIGHTLY_AVAILABLE => Self::LightlyAvailable,
            INTERESTED_LATER => Self::InterestedLater,
            other => Self::Unlisted(other.to_string()),
        }
    }
}

impl From<String> for Availability {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Unlisted(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Anti-bias scoring weights.
///
/// Per-item weights are multiplied by a count (shared topics, unseen skills, unseen roles);
/// the others are flat bonuses. `size_affinity` is zero for strict scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub experience_novelty: f64,
    pub shared_case_topic: f64,
    pub unique_skill: f64,
    pub availability_match: f64,
    pub unique_role: f64,
    pub size_affinity: f64,
}

impl ScoringWeights {
    pub const STRICT: ScoringWeights = ScoringWeights {
        experience_novelty: 25.0,
        shared_case_topic: 15.0,
        unique_skill: 10.0,
        availability_match: 20.0,
        unique_role: 8.0,
        size_affinity: 0.0,
    };

    pub const RELAXED: ScoringWeights = ScoringWeights {
        experience_novelty: 20.0,
        shared_case_topic: 12.0,
        unique_skill: 8.0,
        availability_match: 15.0,
        unique_role: 6.0,
        size_affinity: 10.0,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Constraint mode of a matching run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Strict,
    Relaxed,
}

impl From<bool> for MatchMode {
    fn from(relaxed: bool) -> Self {
        if relaxed { Self::Relaxed } else { Self::Strict }
    }
}

/// Parameters for teams packed from leftovers without scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverflowPolicy {
    pub score_floor: f64,
    pub default_score: f64,
    pub size_mismatch_penalty: f64,
    pub fallback_case_type: String,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self {
            score_floor: 40.0,
            default_score: 70.0,
            size_mismatch_penalty: 25.0,
            fallback_case_type: "Consulting".to_string(),
        }
    }
}
