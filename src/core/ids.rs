use std::sync::atomic::{AtomicU64, Ordering};
use crate::error::MatchingError;

/// Source of unique team identifiers. Called once per formed team.
pub trait IdGenerator {
    fn next_id(&self) -> Result<String, MatchingError>;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Result<String, MatchingError> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix-N` identifiers for reproducible runs
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Result<String, MatchingError> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(format!("{}-{}", self.prefix, n))
    }
}
