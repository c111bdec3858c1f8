//! Error hierarchy for fetchsize-connection.
//!
//! Driver failures are never represented here: [`FetchSizeConnection`] hands
//! the delegate's own error type back to the caller untouched. This type only
//! covers failures owned by this crate, which are all configuration failures.
//!
//! [`FetchSizeConnection`]: crate::FetchSizeConnection

use std::path::PathBuf;

use thiserror::Error;

/// Root error type for fetchsize-connection.
///
/// Exposes predicate methods (`is_xxx()`) for error classification
/// without exposing internals.
///
/// # Example
///
/// ```rust,ignore
/// use fetchsize_connection::config;
///
/// match config::load_config() {
///     Ok(builder) => { /* ... */ }
///     Err(err) if err.is_invalid_fetch_size() => eprintln!("bad fetch size: {err}"),
///     Err(err) => eprintln!("config error: {err}"),
/// }
/// ```
#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

/// Internal error classification.
///
/// This enum is `pub(crate)` to allow adding variants without breaking changes.
/// External code should use the `is_xxx()` predicate methods instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// A fetch size that is not a non-negative integer.
    #[error("invalid fetch size '{value}': {reason}")]
    InvalidFetchSize { value: String, reason: String },

    /// Configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl Error {
    /// Create error for a fetch size that cannot be used.
    #[must_use]
    pub fn invalid_fetch_size(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidFetchSize {
                value: value.into(),
                reason: reason.into(),
            },
        }
    }

    /// Create error for an unreadable configuration file.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io {
                path: path.into(),
                source,
            },
        }
    }

    /// Create error for a malformed configuration file.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse {
                path: path.into(),
                message: message.into(),
            },
        }
    }

    /// Returns true if this is an invalid fetch size error.
    #[must_use]
    pub const fn is_invalid_fetch_size(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidFetchSize { .. })
    }

    /// Returns true if a configuration file could not be read.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io { .. })
    }

    /// Returns true if a configuration file could not be parsed.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse { .. })
    }
}

/// Result type alias for fallible configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
