use thiserror::Error;

/// Errors that can abort a matching request
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Identifier generation failed: {0}")]
    IdGeneration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(String),
}
