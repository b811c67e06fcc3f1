//! Role archetypes and role labels used by event organizers.
//!
//! These tables describe what a well-rounded team looks like. The matcher does not
//! consume them; they are exposed for reporting and kept in one place.

use serde::{Deserialize, Serialize};

/// Broad contribution profile on a case team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleArchetype {
    Strategist,
    Analyst,
    Communicator,
    Designer,
}

impl RoleArchetype {
    pub const ALL: [RoleArchetype; 4] = [
        Self::Strategist,
        Self::Analyst,
        Self::Communicator,
        Self::Designer,
    ];

    /// Core strengths that qualify a participant for this archetype
    pub fn required_strengths(self) -> &'static [&'static str] {
        match self {
            Self::Strategist => &["Strategy & Structuring", "Innovation & Ideation"],
            Self::Analyst => &[
                "Data Analysis & Research",
                "Financial Modeling",
                "Market Research",
            ],
            Self::Communicator => &[
                "Public Speaking & Pitching",
                "Storytelling",
                "Presentation Design (PPT/Canva)",
            ],
            Self::Designer => &[
                "UI/UX or Product Thinking",
                "Storytelling",
                "Presentation Design (PPT/Canva)",
            ],
        }
    }
}

/// Preferred team role, parsed from its form label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Lead,
    Researcher,
    Analyst,
    Designer,
    Presenter,
    Coordinator,
    Flexible,
}

impl TeamRole {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Team Lead" => Some(Self::Lead),
            "Researcher" => Some(Self::Researcher),
            "Data Analyst" => Some(Self::Analyst),
            "Designer" => Some(Self::Designer),
            "Presenter" => Some(Self::Presenter),
            "Coordinator" => Some(Self::Coordinator),
            "Flexible with any role" => Some(Self::Flexible),
            _ => None,
        }
    }
}

/// Archetypes covered by at least one of the given strengths
pub fn archetypes_covered<S: AsRef<str>>(strengths: &[S]) -> Vec<RoleArchetype> {
    RoleArchetype::ALL
        .into_iter()
        .filter(|archetype| {
            strengths
                .iter()
                .any(|s| archetype.required_strengths().contains(&s.as_ref()))
        })
        .collect()
}
