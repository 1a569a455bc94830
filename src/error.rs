//! Unified error handling for the arbitrage dashboard
//!
//! Generation itself never fails; these errors come from the edges:
//! loading configuration, writing files, serializing snapshots and
//! joining refresh tasks on unmount.

use std::fmt;
use std::io;

use crate::config::ConfigError;

/// Main error type for the dashboard
#[derive(Debug)]
pub enum DashboardError {
    // Configuration errors
    ConfigParse(String),
    ConfigValidation(String),

    // IO errors
    FileRead(String),
    FileWrite(String),

    // Output errors
    Serialization(String),

    // Refresh task errors
    TaskJoin(String),
}

impl DashboardError {
    /// Get a user-friendly error message with helpful context
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::ConfigValidation(msg) => {
                format!(
                    "Configuration validation error: {}\n\n\
                    💡 Check config.toml for:\n\
                    - Refresh intervals between 1 ms and one day\n\
                    - Finite numbers (no nan or inf)\n\
                    - Ranges written as [min, max] with min < max\n\
                    - At least two opportunity venues",
                    msg
                )
            }
            DashboardError::TaskJoin(msg) => {
                format!(
                    "Refresh task ended abnormally: {}\n\n\
                    💡 Re-run with --verbose to see the last ticks",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            DashboardError::ConfigParse(_)
            | DashboardError::ConfigValidation(_) => "config",

            DashboardError::FileRead(_) | DashboardError::FileWrite(_) => "io",

            DashboardError::Serialization(_) => "output",

            DashboardError::TaskJoin(_) => "runtime",
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::ConfigParse(msg) => {
                write!(f, "Configuration parse error: {}", msg)
            }
            DashboardError::ConfigValidation(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
            DashboardError::FileRead(msg) => {
                write!(f, "File read error: {}", msg)
            }
            DashboardError::FileWrite(msg) => {
                write!(f, "File write error: {}", msg)
            }
            DashboardError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            DashboardError::TaskJoin(msg) => {
                write!(f, "Refresh task join error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::FileRead(msg) => DashboardError::FileRead(msg),
            ConfigError::FileWrite(msg) => DashboardError::FileWrite(msg),
            ConfigError::Parse(msg) => DashboardError::ConfigParse(msg),
            ConfigError::Serialize(msg) => DashboardError::Serialization(msg),
            ConfigError::Validation(msg) => DashboardError::ConfigValidation(msg),
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => DashboardError::FileRead(err.to_string()),
            _ => DashboardError::FileWrite(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DashboardError {
    fn from(err: tokio::task::JoinError) -> Self {
        DashboardError::TaskJoin(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
