// Core algorithm exports
pub mod archetypes;
pub mod availability;
pub mod builder;
pub mod cohort;
pub mod filters;
pub mod ids;
pub mod matcher;
pub mod overflow;
pub mod pool;
pub mod scoring;
pub mod summary;

pub use availability::{AvailabilityBucket, accepted_by_all, accepted_by_any};
pub use builder::build_team;
pub use cohort::split_by_cohort;
pub use filters::filter_candidates;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use matcher::{ensure_unique_ids, TeamMatcher, CohortOutcome};
pub use overflow::pack_leftovers;
pub use pool::ParticipantPool;
pub use scoring::{calculate_anti_bias_score, mean_pairwise_score, select_best_candidate};
