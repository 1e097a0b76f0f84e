use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "ts3scan.toml";

/// Connection defaults read from `ts3scan.toml`. Command-line flags win over
/// every field here.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub queryport: Option<u16>,
    pub serverport: Option<u16>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Nearest `ts3scan.toml` in `dir` or any of its ancestors.
    pub fn locate(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|d| d.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Searches upward from the working directory. An unavailable working
    /// directory disables discovery instead of failing the run.
    pub fn discover(cwd: io::Result<PathBuf>) -> Option<PathBuf> {
        match cwd {
            Ok(dir) => Self::locate(&dir),
            Err(e) => {
                tracing::warn!(error = %e, "working directory unavailable, skipping config discovery");
                None
            }
        }
    }
}
