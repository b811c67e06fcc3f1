use crate::models::{Availability, Participant};

/// Coarse availability bucket used for compatibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityBucket {
    High,
    Medium,
    Low,
}

impl From<&Availability> for AvailabilityBucket {
    fn from(availability: &Availability) -> Self {
        match availability {
            Availability::FullyAvailable => Self::High,
            Availability::ModeratelyAvailable => Self::Medium,
            Availability::LightlyAvailable | Availability::InterestedLater => Self::Low,
            Availability::Unlisted(_) => Self::Medium,
        }
    }
}

impl AvailabilityBucket {
    #[inline]
    pub fn of(participant: &Participant) -> Self {
        Self::from(&participant.availability)
    }

    /// Whether a member in this bucket accepts a teammate in `other`.
    ///
    /// High and Low never accept each other; Medium accepts everyone.
    #[inline]
    pub fn accepts(self, other: AvailabilityBucket) -> bool {
        !matches!(
            (self, other),
            (Self::High, Self::Low) | (Self::Low, Self::High)
        )
    }
}

/// Every current member accepts the candidate
pub fn accepted_by_all(team: &[&Participant], candidate: &Participant) -> bool {
    let bucket = AvailabilityBucket::of(candidate);
    team.iter().all(|m| AvailabilityBucket::of(m).accepts(bucket))
}

/// At least one current member accepts the candidate. False for an empty team.
pub fn accepted_by_any(team: &[&Participant], candidate: &Participant) -> bool {
    let bucket = AvailabilityBucket::of(candidate);
    team.iter().any(|m| AvailabilityBucket::of(m).accepts(bucket))
}
