// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Participant, Cohort, ExperienceLevel, Availability, ScoringWeights, MatchMode, OverflowPolicy};
pub use requests::MatchTeamsRequest;
pub use responses::{Team, OptimizationPath, MatchingStatistics, MatchingResult};
