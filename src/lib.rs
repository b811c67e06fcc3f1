//! Team Matcher - anti-bias team formation for case competitions
//!
//! This library partitions event participants into teams of 2 to 4 under soft
//! constraints (size preference, experience and skill diversity, availability overlap,
//! case topic diversity) using a greedy anchor-and-fill pipeline.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{TeamMatcher, IdGenerator, UuidGenerator, SequentialIds};
pub use crate::error::MatchingError;
pub use crate::models::{Participant, Team, MatchingResult, MatchingStatistics, MatchMode, ScoringWeights, MatchTeamsRequest};

/// Match participants with the default weights and random team identifiers
pub fn match_participants_to_teams(
    participants: &[Participant],
    relaxed_mode: bool,
) -> Result<MatchingResult, MatchingError> {
    TeamMatcher::with_default_weights().match_teams(participants, MatchMode::from(relaxed_mode), &UuidGenerator)
}
