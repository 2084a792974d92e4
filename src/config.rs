use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tournament: TournamentConfig,
}

/// Settings for the demo tournament loop.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of games to play
    pub games: usize,
    /// How many trailing games the "recent win rate" column looks at
    pub recent_window: usize,
    /// Seed for pairing and starting-player draws; omit for OS entropy
    pub seed: Option<u64>,
    /// Print the final grid of every game
    pub show_boards: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tournament: TournamentConfig::default(),
        }
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            games: 1000,
            recent_window: 250,
            seed: None,
            show_boards: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tournament.games == 0 {
            return Err(ConfigError::Validation(
                "tournament.games must be > 0".into(),
            ));
        }
        if self.tournament.recent_window == 0 {
            return Err(ConfigError::Validation(
                "tournament.recent_window must be > 0".into(),
            ));
        }
        Ok(())
    }
}
