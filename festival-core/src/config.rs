//! Application configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{FestivalError, FestivalResult};

static DEFAULT_DATA_FILE: &str = "festivals.json";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/festival-reminder/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backing file for the festival store. Relative paths resolve against
    /// the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Filter directive for the log subscriber, e.g. "debug" or "festival_core=info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> FestivalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FestivalError::Config("Could not determine config directory".into()))?
            .join("festival-reminder");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the platform config directory, falling back to defaults
    /// when there is no such directory.
    pub fn load() -> FestivalResult<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load from `path`, writing a commented default file first if it's missing.
    ///
    /// Failing to write the default file is not an error; the defaults are
    /// used. A file that exists but can't be parsed is a `Config` error.
    pub fn load_from(path: &Path) -> FestivalResult<Self> {
        if !path.exists() {
            if let Err(e) = Self::create_default_config(path) {
                warn!(path = %path.display(), "{e}; using default configuration");
                return Ok(Self::default());
            }
        }

        let config: AppConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| FestivalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FestivalError::Config(e.to_string()))?;

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// The backing file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FestivalResult<()> {
        let contents = format!(
            "\
# festival-reminder configuration

# Where festivals are stored:
# data_file = \"{DEFAULT_DATA_FILE}\"

# Log filter (trace, debug, info, warn, error):
# log_level = \"{DEFAULT_LOG_LEVEL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FestivalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FestivalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
