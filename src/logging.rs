// Logging setup using `tracing` and `tracing-subscriber`.
// Output goes to a file since the terminal is in raw mode for the UI.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging options resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Destination file. Logging is disabled when `None`.
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    /// Pick the filter from `-v` count, falling back to the config value.
    ///
    /// - 0: config level, else `warn`
    /// - 1: `info`
    /// - 2: `debug`
    /// - 3+: `trace`
    pub fn from_verbosity(verbosity: u8, configured: Option<&str>) -> Self {
        let filter = match verbosity {
            0 => configured.unwrap_or("warn").to_string(),
            1 => Level::INFO.to_string(),
            2 => Level::DEBUG.to_string(),
            _ => Level::TRACE.to_string(),
        };
        Self {
            filter: filter.to_lowercase(),
            log_file: None,
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0, None).filter, "warn");
        assert_eq!(LogConfig::from_verbosity(0, Some("DEBUG")).filter, "debug");
        assert_eq!(LogConfig::from_verbosity(1, Some("error")).filter, "info");
        assert_eq!(LogConfig::from_verbosity(2, None).filter, "debug");
        assert_eq!(LogConfig::from_verbosity(7, None).filter, "trace");
    }

    #[test]
    fn test_no_file_is_noop() {
        let config = LogConfig::from_verbosity(0, None);
        assert!(init_logging(&config).is_ok());
    }
}
