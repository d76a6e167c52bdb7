use crate::error::{Error, Result};

use std::path::PathBuf;
use std::str::FromStr;

const APP_NAME: &str = "sgb";
const LOG_FILE_NAME: &str = "sgb.log";

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "SGB_LOG";

pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

pub(crate) fn cache_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return Some(PathBuf::from(xdg_cache_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".cache").join(APP_NAME))
    }
    #[cfg(windows)]
    {
        Some(
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME),
        )
    }
}

pub(crate) fn default_log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Parse a level name, falling back to the default for unset or bad values.
pub(crate) fn level_from(value: Option<&str>) -> log::LevelFilter {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| log::LevelFilter::from_str(v).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Start file logging at the level named by `$SGB_LOG`.
///
/// The picker owns the terminal, so nothing is ever logged to stderr.
pub(crate) fn setup_logging() -> Result<()> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if level == log::LevelFilter::Off {
        return Ok(());
    }

    let log_file = default_log_file()
        .ok_or_else(|| Error::Internal("Unable to determine cache directory".to_string()))?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| Error::Internal(format!("Failed to initialise logging: {e}")))?;
    log::info!("sgb logging initialised (level={level})");
    Ok(())
}
