use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, WriteLogger};

use crate::error::AppError;
use crate::settings::Settings;

/// Routes `log` records to the configured file.
///
/// The terminal is in raw mode on the alternate screen while the game runs,
/// so records never go to stdout or stderr.
pub fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let file = open_log_file(&settings.log_file)?;
    WriteLogger::init(settings.log_level, Config::default(), file)?;

    log::info!("logging to {}", settings.log_file.display());
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(AppError::LogFile)?;
    }

    File::create(path).map_err(AppError::LogFile)
}
