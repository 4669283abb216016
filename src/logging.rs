//! File logging.
//!
//! The console owns stdout, so log output goes to `holmes-admin.log` in the
//! configured log directory. `RUST_LOG` selects levels; the default is
//! `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "holmes-admin.log";

/// Open (appending) the log file inside `dir`, creating the directory.
pub fn open_log_file(dir: &Path) -> Result<(PathBuf, File), ConfigError> {
    fs::create_dir_all(dir).map_err(|source| ConfigError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;
    Ok((path, file))
}

/// Filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file in `dir`.
///
/// Returns the log file path. Fails if a subscriber is already installed.
pub fn init_logging(dir: &Path) -> color_eyre::Result<PathBuf> {
    let (path, file) = open_log_file(dir)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(path)
}
