//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so logs are only written when `SORTVIZ_LOG`
//! names a file. The filter is read from `RUST_LOG` and defaults to `info`.
//!
//! # Log Levels
//!
//! - `info`: sort started/finished/cancelled, array regenerated
//! - `debug`: key presses, selection and tick rate changes
//! - `trace`: every checkpoint

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path
pub const LOG_FILE_ENV: &str = "SORTVIZ_LOG";

const DEFAULT_FILTER: &str = "info";

/// Log file named by `SORTVIZ_LOG`, if set and non-empty
pub fn log_file_from_env() -> Option<PathBuf> {
    env::var_os(LOG_FILE_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber writing to `path`.
///
/// Best-effort: returns `false` if the file cannot be opened or a subscriber
/// is already installed. The visualizer runs the same either way.
pub fn init_logging(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .is_ok()
}

/// Install file logging if `SORTVIZ_LOG` is set
pub fn init_from_env() -> bool {
    log_file_from_env().is_some_and(|path| init_logging(&path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopenable_path_is_ignored() {
        let path = env::temp_dir()
            .join("sortviz-missing-dir")
            .join("nested")
            .join("sortviz.log");
        assert!(!init_logging(&path));
    }
}
