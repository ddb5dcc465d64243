// Configuration loading and validation (config/draft.toml).
//
// The file is optional: without it the draft runs with built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rounds per draft when nothing is configured.
pub const DEFAULT_TEAM_SIZE: usize = 6;

/// Config file location, relative to the working directory.
pub const CONFIG_FILE: &str = "config/draft.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub draft: DraftConfig,
    pub rankings: RankingsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DraftConfig {
    /// Number of rounds, i.e. the most contestants any captain can draft.
    pub team_size: usize,
    /// Units of supply per contestant. Defaults to `team_size`.
    pub supply: Option<u32>,
    /// Fixed seed for the pick-order draw. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            team_size: DEFAULT_TEAM_SIZE,
            supply: None,
            seed: None,
        }
    }
}

impl DraftConfig {
    pub fn supply_per_contestant(&self) -> u32 {
        self.supply
            .unwrap_or_else(|| u32::try_from(self.team_size).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingsConfig {
    /// Reject input where captains rank different contestant sets, instead of
    /// drafting over the union of every named contestant.
    pub require_uniform: bool,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate config text. `path` is only used in error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load `config/draft.toml` under `base_dir`, falling back to defaults when
/// the file does not exist.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    parse_config(&text, &path)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::Read {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draft.team_size == 0 {
        return Err(ConfigError::Validation {
            field: "draft.team_size".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.draft.supply == Some(0) {
        return Err(ConfigError::Validation {
            field: "draft.supply".into(),
            message: "must be greater than 0 when set".into(),
        });
    }

    Ok(())
}
