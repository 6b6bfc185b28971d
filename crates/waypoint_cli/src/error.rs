//! CLI error types.

use thiserror::Error;
use waypoint_core::types::SelectionError;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Checkpoint selection failed
    #[error("Selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading or writing failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path input or report output is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command line value is not acceptable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two strategies returned different selections
    #[error("Strategies disagree: {0}")]
    Mismatch(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_conversion() {
        let err: CliError = SelectionError::NegativeBudget { budget: -2 }.into();
        assert_eq!(
            err.to_string(),
            "Selection failed: Invalid budget -2: must be non-negative"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::Parse("bad".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: Parse error: bad");
    }
}
