//! Logging configuration assembled from the command line.

use clap::ValueEnum;
use tracing::Level;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// One line per event.
    Compact,
    /// One JSON object per event, for tool integration.
    Json,
}

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Maps the number of `-v` flags to a level: none is `WARN`, then `INFO`,
    /// `DEBUG`, and `TRACE` from three on.
    pub fn from_verbosity(verbose: u8, format: LogFormat) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, format }
    }
}
