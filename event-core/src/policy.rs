use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Optional registration rules. Everything is off by default: registration
/// only requires owning the presented token.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(default)]
pub struct RegistrationPolicy {
    /// Only accept registrations while `start_time <= now <= end_time`
    pub enforce_event_window: bool,
    /// Reject a second registration by the same account for the same event
    pub unique_participant: bool,
    /// Reject a second registration with the same token for the same event
    pub unique_token: bool,
}

impl RegistrationPolicy {
    /// All rules enabled
    pub fn strict() -> Self {
        Self {
            enforce_event_window: true,
            unique_participant: true,
            unique_token: true,
        }
    }

    /// Parse a policy from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
