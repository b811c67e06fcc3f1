use std::collections::HashSet;
use crate::error::MatchingError;
use crate::models::{MatchMode, MatchingResult, OverflowPolicy, Participant, ScoringWeights, Team};
use crate::core::{
    builder::build_team,
    cohort::split_by_cohort,
    ids::IdGenerator,
    overflow::pack_leftovers,
    pool::ParticipantPool,
    summary::{calculate_statistics, create_anti_bias_team, create_overflow_team},
};

/// Team sizes are filled in this order, each from its own bucket
pub const TEAM_SIZES: [usize; 3] = [2, 3, 4];

/// Prefix for identifiers of teams packed from leftovers
pub const OVERFLOW_ID_PREFIX: &str = "relaxed-";

/// Teams and leftovers of one cohort
#[derive(Debug, Default)]
pub struct CohortOutcome {
    pub teams: Vec<Team>,
    pub unmatched: Vec<Participant>,
}

/// Main matching orchestrator - greedy anchor-and-fill team formation
///
/// # Pipeline Stages
/// 1. Cohort split (undergraduate / postgraduate), each matched independently
/// 2. Per cohort, stable sort by experience (most experienced first)
/// 3. Size buckets 2, 3, 4: build teams until the first failure
/// 4. Relaxed mode only: pack the leftovers into chunks of 4, 3, 2
/// 5. Statistics over both cohorts
#[derive(Debug, Clone)]
pub struct TeamMatcher {
    strict_weights: ScoringWeights,
    relaxed_weights: ScoringWeights,
    overflow: OverflowPolicy,
}

impl TeamMatcher {
    pub fn new(strict_weights: ScoringWeights, relaxed_weights: ScoringWeights, overflow: OverflowPolicy) -> Self {
        Self {
            strict_weights,
            relaxed_weights,
            overflow,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::STRICT, ScoringWeights::RELAXED, OverflowPolicy::default())
    }

    /// Partition participants into teams
    ///
    /// # Arguments
    /// * `participants` - Everyone to be matched; never modified
    /// * `mode` - Strict or relaxed constraints
    /// * `ids` - Identifier source, called once per team
    ///
    /// # Returns
    /// Teams, unmatched participants and statistics. Every participant ends up in exactly
    /// one of the two lists.
    ///
    /// # Errors
    /// Duplicate participant ids, or an identifier the generator could not produce.
    pub fn match_teams(
        &self,
        participants: &[Participant],
        mode: MatchMode,
        ids: &dyn IdGenerator,
    ) -> Result<MatchingResult, MatchingError> {
        ensure_unique_ids(participants)?;
        tracing::info!(participants = participants.len(), ?mode, "Starting anti-bias matchmaking");

        let (undergraduates, postgraduates) = split_by_cohort(participants);
        tracing::info!(
            undergraduate = undergraduates.len(),
            postgraduate = postgraduates.len(),
            "Education level separation"
        );

        let mut teams = Vec::new();
        let mut unmatched = Vec::new();
        for cohort in [undergraduates, postgraduates] {
            let outcome = self.form_cohort_teams(cohort, mode, ids)?;
            teams.extend(outcome.teams);
            unmatched.extend(outcome.unmatched);
        }

        let statistics = calculate_statistics(participants.len(), &teams, unmatched.len());
        tracing::info!(
            teams = statistics.teams_formed,
            unmatched = unmatched.len(),
            efficiency = statistics.matching_efficiency,
            "Anti-bias matching complete"
        );

        Ok(MatchingResult {
            teams,
            unmatched,
            statistics,
        })
    }

    /// Match one cohort. The cohort is consumed; unmatched participants are handed back.
    pub fn form_cohort_teams(
        &self,
        mut cohort: Vec<Participant>,
        mode: MatchMode,
        ids: &dyn IdGenerator,
    ) -> Result<CohortOutcome, MatchingError> {
        if cohort.is_empty() {
            return Ok(CohortOutcome::default());
        }

        cohort.sort_by(|a, b| b.experience.cmp(&a.experience));

        let mut buckets: Vec<Vec<Participant>> = vec![Vec::new(); TEAM_SIZES.len()];
        let mut outside = Vec::new();
        for participant in cohort {
            match TEAM_SIZES
                .iter()
                .position(|&size| participant.preferred_team_size as usize == size)
            {
                Some(bucket) => buckets[bucket].push(participant),
                None => outside.push(participant),
            }
        }

        let mut teams = Vec::new();
        let mut leftovers = Vec::new();
        for (size, bucket) in TEAM_SIZES.into_iter().zip(buckets) {
            let outcome = self.form_teams_by_size(ParticipantPool::new(bucket), size, mode, ids)?;
            teams.extend(outcome.teams);
            leftovers.extend(outcome.unmatched);
        }
        leftovers.extend(outside);

        if mode == MatchMode::Relaxed && leftovers.len() >= 2 {
            tracing::info!(remaining = leftovers.len(), "Relaxed mode: packing unmatched participants");
            let (groups, rest) = pack_leftovers(leftovers);
            for members in groups {
                let id = format!("{}{}", OVERFLOW_ID_PREFIX, ids.next_id()?);
                teams.push(create_overflow_team(id, members, &self.relaxed_weights, &self.overflow));
            }
            leftovers = rest;
        } else if mode == MatchMode::Strict {
            tracing::info!(remaining = leftovers.len(), "Strict mode: participants left unmatched");
        }

        Ok(CohortOutcome {
            teams,
            unmatched: leftovers,
        })
    }

    /// Build teams of exactly `target_size` until the first attempt fails
    pub fn form_teams_by_size(
        &self,
        mut pool: ParticipantPool,
        target_size: usize,
        mode: MatchMode,
        ids: &dyn IdGenerator,
    ) -> Result<CohortOutcome, MatchingError> {
        let weights = match mode {
            MatchMode::Strict => &self.strict_weights,
            MatchMode::Relaxed => &self.relaxed_weights,
        };

        let mut teams = Vec::new();
        while pool.len() >= target_size {
            let Some(positions) = build_team(&pool, target_size, mode, weights) else {
                tracing::debug!(target_size, ?mode, "Cannot form more teams of this size");
                break;
            };

            let before = pool.len();
            let members = pool.take(&positions);
            debug_assert_eq!(before - pool.len(), target_size);

            let id = ids.next_id()?;
            // Builder-formed teams are summarized with strict weights in either mode
            teams.push(create_anti_bias_team(id, members, &self.strict_weights));
            tracing::debug!(target_size, ?mode, "Formed team");
        }

        Ok(CohortOutcome {
            teams,
            unmatched: pool.into_remaining(),
        })
    }
}

impl Default for TeamMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Participant ids must be unique within one matching run
pub fn ensure_unique_ids(participants: &[Participant]) -> Result<(), MatchingError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.id.as_str()) {
            return Err(MatchingError::DuplicateParticipant(participant.id.clone()));
        }
    }
    Ok(())
}
