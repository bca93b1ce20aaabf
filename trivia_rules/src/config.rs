//! Engine configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bank::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::error::ConfigError;

/// Name of the leaderboard used when a query names none.
pub const DEFAULT_BOARD: &str = "global";

/// Score distance within which two players are considered a fair match.
pub const DEFAULT_MATCHMAKING_WINDOW: i64 = 100;

/// Tunables for the quiz and score engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    /// Maximum absolute score difference for matchmaking.
    pub matchmaking_window: i64,

    /// Board used by leaderboard queries that name none.
    pub default_board: String,

    /// Lowest difficulty accepted by the generator.
    pub min_difficulty: u8,

    /// Highest difficulty accepted by the generator.
    pub max_difficulty: u8,

    /// Seed for question selection. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            matchmaking_window: DEFAULT_MATCHMAKING_WINDOW,
            default_board: DEFAULT_BOARD.to_string(),
            min_difficulty: MIN_DIFFICULTY,
            max_difficulty: MAX_DIFFICULTY,
            rng_seed: None,
        }
    }
}

impl TriviaConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: TriviaConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matchmaking_window < 0 {
            return Err(ConfigError::Invalid(format!(
                "matchmaking_window must be non-negative, got {}",
                self.matchmaking_window
            )));
        }
        if self.default_board.trim().is_empty() {
            return Err(ConfigError::Invalid("default_board must not be empty".into()));
        }
        let range = MIN_DIFFICULTY..=MAX_DIFFICULTY;
        if !range.contains(&self.min_difficulty)
            || !range.contains(&self.max_difficulty)
            || self.min_difficulty > self.max_difficulty
        {
            return Err(ConfigError::Invalid(format!(
                "difficulty range {}..={} must lie within {}..={}",
                self.min_difficulty, self.max_difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TriviaConfig::default();
        assert_eq!(config.matchmaking_window, 100);
        assert_eq!(config.default_board, "global");
        assert_eq!((config.min_difficulty, config.max_difficulty), (1, 5));
        assert!(config.rng_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TriviaConfig::from_toml_str(
            r#"
            matchmaking_window = 250
            rng_seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.matchmaking_window, 250);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.default_board, "global");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = TriviaConfig::from_toml_str("").unwrap();
        assert_eq!(config, TriviaConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            TriviaConfig::from_toml_str("matchmaking_window = -5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TriviaConfig::from_toml_str("default_board = \"  \""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TriviaConfig::from_toml_str("min_difficulty = 4\nmax_difficulty = 2"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TriviaConfig::from_toml_str("max_difficulty = 9"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TriviaConfig::from_toml_str("matchmaking_window = \"wide\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TriviaConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
