//! Tunable limits shared by the room and game sessions.

use serde::{Deserialize, Serialize};

/// Default room capacity.
pub const DEFAULT_MAX_PLAYERS: usize = 8;

/// Default round length in seconds (5 minutes).
pub const DEFAULT_ROUND_SECONDS: u32 = 300;

/// Minimum number of alive players required to start an elimination round.
pub const DEFAULT_MIN_ALIVE_TO_START: usize = 3;

/// Minimum lobby size before the host may start.
pub const DEFAULT_MIN_PLAYERS_TO_START: usize = 2;

/// Length of generated room codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Session configuration.
///
/// Every field falls back to its default when missing, so a partial JSON
/// object such as `{"round_seconds": 60}` is a valid override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub max_players: usize,
    pub round_seconds: u32,
    pub min_alive_to_start: usize,
    pub min_players_to_start: usize,
    pub code_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            round_seconds: DEFAULT_ROUND_SECONDS,
            min_alive_to_start: DEFAULT_MIN_ALIVE_TO_START,
            min_players_to_start: DEFAULT_MIN_PLAYERS_TO_START,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Parses a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamps values that would make a session unusable.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.max_players = self.max_players.max(1);
        self.round_seconds = self.round_seconds.max(1);
        self.code_length = self.code_length.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SessionConfig::from_json(r#"{"round_seconds": 60}"#).unwrap();
        assert_eq!(config.round_seconds, 60);
        assert_eq!(config.max_players, DEFAULT_MAX_PLAYERS);
        assert_eq!(config.min_alive_to_start, DEFAULT_MIN_ALIVE_TO_START);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = SessionConfig::from_json(r#"{"round_seconds": 0, "code_length": 0}"#).unwrap();
        assert_eq!(config.round_seconds, 1);
        assert_eq!(config.code_length, 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(SessionConfig::from_json("not json").is_err());
    }
}
