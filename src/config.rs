//! Game configuration loaded from TOML.
//!
//! ```toml
//! mode = "ai"            # ai | pvp | fun
//! human = "black"        # side played by the person in ai mode
//! think_delay_ms = 500   # pause before the engine replies
//!
//! [weights]
//! attack = 10
//! defense = 8
//! center = 2
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::board::Player;
use crate::engine::AIEngine;
use crate::error::ConfigError;
use crate::eval::ScoreWeights;
use crate::session::GameMode;

/// Local play modes selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    Ai,
    Pvp,
    Fun,
}

/// Configuration for a local game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which mode to start.
    pub mode: ModeKind,
    /// Side the person plays against the engine.
    pub human: Player,
    /// Presentation pause before the engine's reply, in milliseconds.
    pub think_delay_ms: u64,
    /// Heuristic weights for the engine.
    pub weights: ScoreWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::Ai,
            human: Player::Black,
            think_delay_ms: 500,
            weights: ScoreWeights::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Session mode described by this configuration.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeKind::Ai => GameMode::VsAi { human: self.human },
            ModeKind::Pvp => GameMode::LocalPvP,
            ModeKind::Fun => GameMode::FunMode,
        }
    }

    /// Engine configured with these weights.
    pub fn engine(&self) -> AIEngine {
        AIEngine::with_weights(self.weights)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.game_mode(), GameMode::VsAi { human: Player::Black });
        assert_eq!(config.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_config() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = "ai"
            human = "white"

            [weights]
            defense = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.game_mode(), GameMode::VsAi { human: Player::White });
        assert_eq!(config.weights.defense, 12);
        assert_eq!(config.weights.attack, 10);
        assert_eq!(config.engine().weights().defense, 12);
    }

    #[test]
    fn test_modes() {
        let pvp = GameConfig::from_toml_str("mode = \"pvp\"").unwrap();
        assert_eq!(pvp.game_mode(), GameMode::LocalPvP);
        let fun = GameConfig::from_toml_str("mode = \"fun\"").unwrap();
        assert_eq!(fun.game_mode(), GameMode::FunMode);
        assert!(GameConfig::from_toml_str("mode = \"online\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "think_delay_ms = 0").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.think_delay_ms, 0);

        let err = GameConfig::from_file("/nonexistent/gomoku.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
