use std::io;

use thiserror::Error;

use crate::settings::SettingsError;

/// Top-level failures surfaced by the terminal client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to open log file: {0}")]
    LogFile(#[source] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
