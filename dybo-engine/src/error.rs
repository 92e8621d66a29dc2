//! Engine error types
//!
//! Core failures are wrapped with the corpus line and verb label they were
//! raised for, so a fatal error always points back at the input.

use dybo_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A corpus line does not follow the declared layout
    #[error("malformed corpus line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// Evaluating a well-formed verb failed
    #[error("verb '{label}' on line {line}: {source}")]
    Verb {
        /// 1-based line number
        line: usize,
        /// Identifier label of the verb
        label: String,
        /// Underlying core error
        #[source]
        source: CoreError,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl EngineError {
    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            EngineError::MalformedLine { line, .. } | EngineError::Verb { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_error_names_line_and_label() {
        let err = EngineError::Verb {
            line: 12,
            label: "ACT-3".to_string(),
            source: CoreError::UnknownMorphemeTag {
                tag: "FUT".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("line 12"));
        assert!(message.contains("ACT-3"));
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(_)));
        assert_eq!(err.line(), None);
    }
}
