use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Send log messages to the file at `path`.  The `RUST_LOG` environment
/// variable takes precedence over `level` when it is set and valid.
pub(crate) fn init(path: &Path, level: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(LoggingError::Install)
}

/// Open `path` for appending, creating it and any missing parent directories
fn open_log_file(path: &Path) -> Result<fs_err::File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LoggingError::CreateDir)?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::Open)
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("invalid log level directive")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to create log directory")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}
