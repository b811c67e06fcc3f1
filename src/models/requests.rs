use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::MatchingError;
use crate::models::domain::Participant;

/// Request to partition a participant list into teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchTeamsRequest {
    #[validate(nested)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    #[serde(alias = "relaxed_mode", rename = "relaxedMode")]
    pub relaxed_mode: bool,
}

impl MatchTeamsRequest {
    /// Participant ids must be unique within one request
    pub fn ensure_unique_ids(&self) -> Result<(), MatchingError> {
        crate::core::ensure_unique_ids(&self.participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> MatchTeamsRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_relaxed_mode_defaults_to_false() {
        let req = request(r#"{"participants": []}"#);
        assert!(!req.relaxed_mode);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_team_size() {
        let req = request(
            r#"{"participants": [{
                "id": "a", "fullName": "A", "currentYear": "1st Year",
                "preferredTeamSize": 5, "experience": "None",
                "availability": "Fully Available (10–15 hrs/week)"
            }], "relaxedMode": true}"#,
        );
        assert!(req.relaxed_mode);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let one = r#"{
            "id": "dup", "fullName": "A", "currentYear": "1st Year",
            "preferredTeamSize": 2, "experience": "None",
            "availability": "Fully Available (10–15 hrs/week)"
        }"#;
        let req = request(&format!(r#"{{"participants": [{one}, {one}]}}"#));
        assert!(matches!(
            req.ensure_unique_ids(),
            Err(MatchingError::DuplicateParticipant(id)) if id == "dup"
        ));
    }
}
