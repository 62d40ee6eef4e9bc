//! Mapping from the coarse legacy service status onto lifecycle states.
//!
//! Older records predate the fine-grained lifecycle and carry a 4-value
//! status enum. The mapping onto [`LifecycleState`] is one-way and
//! deliberately lossy: an emergency-stopped service is still an operating
//! one as far as the lifecycle is concerned, the stop itself being tracked
//! by a separate flag outside this engine. Never treat the mapping as
//! reversible.

use super::error::LifecycleError;
use super::state::LifecycleState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse service status carried by records that predate the lifecycle.
///
/// Serialized as the legacy SCREAMING tokens (`"PLANNING"`,
/// `"EMERGENCY_STOP"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyStatus {
    Planning,
    Developing,
    Operating,
    EmergencyStop,
}

impl LegacyStatus {
    /// All legacy statuses.
    pub const ALL: [LegacyStatus; 4] = [
        LegacyStatus::Planning,
        LegacyStatus::Developing,
        LegacyStatus::Operating,
        LegacyStatus::EmergencyStop,
    ];

    /// Returns the legacy wire token for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            LegacyStatus::Planning => "PLANNING",
            LegacyStatus::Developing => "DEVELOPING",
            LegacyStatus::Operating => "OPERATING",
            LegacyStatus::EmergencyStop => "EMERGENCY_STOP",
        }
    }

    /// Returns the lifecycle state this status displays as.
    pub fn to_lifecycle(self) -> LifecycleState {
        match self {
            LegacyStatus::Planning => LifecycleState::Draft,
            LegacyStatus::Developing => LifecycleState::InDevelopment,
            // An emergency stop is an operational condition, not a
            // lifecycle position; both map to Operating.
            LegacyStatus::Operating | LegacyStatus::EmergencyStop => LifecycleState::Operating,
        }
    }
}

impl fmt::Display for LegacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegacyStatus {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegacyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LifecycleError::unknown_status(s))
    }
}

/// Maps a legacy status token onto a lifecycle state, best effort.
///
/// Unrecognized tokens map to [`LifecycleState::Draft`]. That is the
/// documented default for migrating unknown historical data, not an error.
///
/// # Examples
///
/// ```
/// use aigov::lifecycle::{map_legacy_status, LifecycleState};
///
/// assert_eq!(map_legacy_status("DEVELOPING"), LifecycleState::InDevelopment);
/// assert_eq!(map_legacy_status("EMERGENCY_STOP"), LifecycleState::Operating);
/// assert_eq!(map_legacy_status("whatever"), LifecycleState::Draft);
/// ```
pub fn map_legacy_status(status: &str) -> LifecycleState {
    status
        .parse::<LegacyStatus>()
        .map(LegacyStatus::to_lifecycle)
        .unwrap_or(LifecycleState::Draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_deterministic_and_lossy() {
        assert_eq!(map_legacy_status("PLANNING"), LifecycleState::Draft);
        assert_eq!(map_legacy_status("DEVELOPING"), LifecycleState::InDevelopment);
        assert_eq!(map_legacy_status("OPERATING"), LifecycleState::Operating);
        assert_eq!(
            map_legacy_status("EMERGENCY_STOP"),
            map_legacy_status("OPERATING")
        );
    }

    #[test]
    fn test_unrecognized_token_defaults_to_draft() {
        assert_eq!(map_legacy_status(""), LifecycleState::Draft);
        assert_eq!(map_legacy_status("operating"), LifecycleState::Draft);
        assert_eq!(map_legacy_status("RETIRED"), LifecycleState::Draft);
    }

    #[test]
    fn test_tokens_round_trip() {
        for status in LegacyStatus::ALL {
            let parsed: LegacyStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!(matches!(
            "STOPPED".parse::<LegacyStatus>().unwrap_err(),
            LifecycleError::UnknownStatus { .. }
        ));
    }

    #[test]
    fn test_serde_uses_legacy_tokens() {
        let json = serde_json::to_string(&LegacyStatus::EmergencyStop).unwrap();
        assert_eq!(json, "\"EMERGENCY_STOP\"");

        let status: LegacyStatus = serde_json::from_str("\"PLANNING\"").unwrap();
        assert_eq!(status, LegacyStatus::Planning);
    }
}
