use serde::Deserialize;
use std::{fs, path::Path};

use chess_board::game::fen::STARTING_FEN;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Position used when a command is given no `--fen`.
    pub start_fen: String,
    /// Use strict FEN parsing by default.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_fen: STARTING_FEN.into(),
            strict: false,
        }
    }
}

impl Config {
    /// Defaults apply when no path is given or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => {
                let display = p.display().to_string();
                let content = fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: display.clone(),
                    source,
                })?;
                Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
                    path: display,
                    source,
                })
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
