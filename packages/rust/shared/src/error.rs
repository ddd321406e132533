//! Error types for the Wero data bundler.
//!
//! Library crates use [`WeroBundlerError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum WeroBundlerError {
    /// Configuration error (bad base URL, unresolvable program directory).
    #[error("config error: {message}")]
    Config { message: String },

    /// The data root directory does not exist or is not a directory.
    ///
    /// This is an environment error, not a data error: nothing is written
    /// and the run terminates with a non-zero status.
    #[error("data directory not found: {path:?}")]
    MissingDataRoot { path: PathBuf },

    /// A bank's `data.json` exists but is not valid JSON for the expected
    /// shape. Malformed source data is a contributor error that must not
    /// silently disappear, so this aborts the whole run.
    #[error("malformed bank data at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Serialization of the output document failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WeroBundlerError>;

impl WeroBundlerError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error for a bank data file.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = WeroBundlerError::config("bad raw content base");
        assert_eq!(err.to_string(), "config error: bad raw content base");

        let err = WeroBundlerError::MissingDataRoot {
            path: PathBuf::from("/nowhere/data"),
        };
        assert!(err.to_string().contains("/nowhere/data"));
    }

    #[test]
    fn parse_error_names_offending_file() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeroBundlerError::parse("/tmp/de/acme/data.json", bad);
        let msg = err.to_string();
        assert!(msg.contains("malformed bank data"));
        assert!(msg.contains("/tmp/de/acme/data.json"));
    }
}
