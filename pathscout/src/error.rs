//! Error types for the pathscout library.
//!
//! This module provides the error hierarchy shared by path handling,
//! scanning, package resolution and configuration, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathscout error.
///
/// # Examples
///
/// ```
/// use pathscout::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathscout library.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty input (path, extension, relative fragment).
    ///
    /// Always a local usage error; never worth retrying.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The argument that was rejected.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A search pattern failed to compile as a regular expression.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        /// The rejected pattern text.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A directory required by an operation does not exist.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// A file required by an operation does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// A recursive scan descended below the configured depth limit.
    #[error("scan depth limit of {max_depth} exceeded at {}", path.display())]
    ScanDepthExceeded {
        /// The directory that would have exceeded the limit.
        path: PathBuf,
        /// The configured limit.
        max_depth: usize,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration in {}: {source}", path.display())]
    Configuration {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Check if error indicates a missing directory or file.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::DirectoryNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::FileNotFound { .. }
        )
    }

    /// Check if error stems from malformed caller input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::extension::FileExtension;
    ///
    /// let err = FileExtension::new("txt").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidPattern { .. }
        )
    }
}
