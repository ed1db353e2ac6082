//! Configuration loading.
//!
//! Board settings come from a TOML file (default
//! [`DEFAULT_CONFIG_PATH`]); Trello credentials come from the environment
//! (`TRELLO_API_KEY`, `TRELLO_TOKEN`), optionally seeded from a `.env` file.
//! Everything is validated here, before any board call is made.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rotation::{BoardId, LabelColor, LabelScheme};
use serde::Deserialize;
use thiserror::Error;
use trello::{TrelloConfig, DEFAULT_BASE_URL};

pub const DEFAULT_CONFIG_PATH: &str = ".pair-rotation/config.toml";
pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const TOKEN_VAR: &str = "TRELLO_TOKEN";

/// Failures while loading configuration. All of them stop the CLI before any
/// board call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A setting parsed but failed validation.
    #[error("Configuration error: {message}")]
    Invalid { message: String },

    /// A Trello credential is unset or blank.
    #[error("Environment variable {name} is not set")]
    MissingCredential { name: &'static str },
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    board_id: String,
    #[serde(default = "default_days_into_future")]
    days_into_future: u32,
    #[serde(default)]
    trello: TrelloSection,
    #[serde(default)]
    labels: LabelSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TrelloSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelSection {
    build_pair: Option<String>,
    community_pair: Option<String>,
}

fn default_days_into_future() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Validated configuration
// ---------------------------------------------------------------------------

/// Board settings after validation.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Board holding the roster, tracks and pairing lists.
    pub board_id: BoardId,
    /// Default offset for `publish`, in days after the day's own date.
    pub days_into_future: u32,
    /// Trello API root.
    pub base_url: String,
    /// Per-request timeout; `None` keeps the client default.
    pub timeout: Option<Duration>,
    /// Label colours marking build and community pairs.
    pub labels: LabelScheme,
}

impl BoardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|err| match err {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(err) => err,
        })
    }

    fn parse(text: &str) -> Result<Self, ParseFailure> {
        let file: ConfigFile = toml::from_str(text).map_err(ParseFailure::Toml)?;

        let board_id = BoardId::new(file.board_id.trim())
            .ok_or_else(|| invalid("board_id must not be empty"))?;
        let defaults = LabelScheme::default();
        let labels = LabelScheme {
            build_pair: label_color(
                file.labels.build_pair,
                defaults.build_pair,
                "labels.build_pair",
            )?,
            community_pair: label_color(
                file.labels.community_pair,
                defaults.community_pair,
                "labels.community_pair",
            )?,
        };
        if file.trello.timeout_secs == Some(0) {
            return Err(invalid("trello.timeout_secs must be greater than zero"));
        }
        if labels.build_pair == labels.community_pair {
            return Err(invalid("labels.build_pair and labels.community_pair must differ"));
        }

        Ok(Self {
            board_id,
            days_into_future: file.days_into_future,
            base_url: file
                .trello
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: file.trello.timeout_secs.map(Duration::from_secs),
            labels,
        })
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn invalid(message: &str) -> ParseFailure {
    ParseFailure::Invalid(ConfigError::Invalid {
        message: message.to_string(),
    })
}

fn label_color(
    configured: Option<String>,
    default: LabelColor,
    field: &str,
) -> Result<LabelColor, ParseFailure> {
    match configured {
        None => Ok(default),
        Some(color) => LabelColor::new(color.trim())
            .ok_or_else(|| invalid(&format!("{field} must not be empty"))),
    }
}

/// Builds the Trello connection settings from the environment.
pub fn trello_config(board: &BoardConfig) -> Result<TrelloConfig, ConfigError> {
    trello_config_from(board, |name| std::env::var(name).ok())
}

fn trello_config_from(
    board: &BoardConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TrelloConfig, ConfigError> {
    let credential = |name: &'static str| {
        lookup(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingCredential { name })
    };
    let mut config = TrelloConfig::new(credential(API_KEY_VAR)?, credential(TOKEN_VAR)?)
        .with_base_url(&board.base_url);
    if let Some(timeout) = board.timeout {
        config.timeout = timeout;
    }
    Ok(config)
}
