//! Unified error types for the kronos workspace.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum KronosError {
    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A terminal I/O operation failed.
    #[error("I/O error while {context}: {source}")]
    Io {
        /// What was being attempted when the error occurred.
        context: &'static str,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl KronosError {
    /// Builds a closure mapping an I/O error into [`KronosError::Io`] with
    /// the given context, for use with `map_err`.
    pub fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, KronosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_context() {
        let err = KronosError::io("entering raw mode")(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error while entering raw mode: boom");
    }

    #[test]
    fn config_error_display() {
        let err = KronosError::Config {
            message: "milestone must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: milestone must be positive"
        );
    }
}
