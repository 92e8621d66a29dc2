//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Corpus failed validation
    ValidationFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValidationFailed(count) => {
                write!(f, "Validation failed: {count} transcription mismatch(es)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("corpus.tsv".to_string()).to_string(),
            "File not found: corpus.tsv"
        );
        assert_eq!(
            CliError::InvalidPattern("[bad".to_string()).to_string(),
            "Invalid file pattern: [bad"
        );
        assert_eq!(
            CliError::ConfigError("unknown format 'xml'".to_string()).to_string(),
            "Configuration error: unknown format 'xml'"
        );
        assert_eq!(
            CliError::ValidationFailed(3).to_string(),
            "Validation failed: 3 transcription mismatch(es)"
        );
    }

    #[test]
    fn test_wraps_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ValidationFailed(1).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
