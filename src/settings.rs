use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{APP_DIR_NAME, DEFAULT_CELL_PX, MIN_CELL_PX};

const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "gridsnake.log";

/// Failures while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cell size {got} is below the minimum of {min}")]
    CellSizeTooSmall { got: u32, min: u32 },
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Optional values read from the JSON settings file.
///
/// Every field may be omitted; missing fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub cell_size: Option<u32>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Command-line values that override the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cell_size: Option<u32>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cell_px: u32,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Settings {
    /// Loads the settings file (if any) and layers `overrides` on top.
    ///
    /// An explicit `path` must exist; the default path may be missing.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => read_settings_file(path)?,
            None => match default_settings_path() {
                Some(path) if path.exists() => read_settings_file(&path)?,
                _ => SettingsFile::default(),
            },
        };

        Self::resolve(file, overrides)
    }

    /// Merges defaults < file < overrides and validates the result.
    pub fn resolve(file: SettingsFile, overrides: Overrides) -> Result<Self, SettingsError> {
        let cell_px = overrides
            .cell_size
            .or(file.cell_size)
            .unwrap_or(DEFAULT_CELL_PX);
        if cell_px < MIN_CELL_PX {
            return Err(SettingsError::CellSizeTooSmall {
                got: cell_px,
                min: MIN_CELL_PX,
            });
        }

        let log_level = match overrides.log_level.or(file.log_level) {
            Some(raw) => {
                LevelFilter::from_str(&raw).map_err(|_| SettingsError::LogLevel(raw.clone()))?
            }
            None => LevelFilter::Info,
        };

        Ok(Self {
            cell_px,
            seed: overrides.seed.or(file.seed),
            log_file: overrides
                .log_file
                .or(file.log_file)
                .unwrap_or_else(default_log_path),
            log_level,
        })
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
