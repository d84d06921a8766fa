//! Configuration validation.
//!
//! Root names and the anchor are single path segments; the checks below keep
//! them that way so they can be combined with relative fragments safely.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::INVALID_FILE_NAME_CHARS;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathscout::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
///
/// let bad = Config { anchor: Some("a/b".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.project_root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "project_root".into(),
                    message: "must not be empty".into(),
                });
            }
        }

        if let Some(ref roots) = config.roots {
            if let Some(ref name) = roots.distributed {
                Self::validate_segment("roots.distributed", name)?;
            }
            if let Some(ref name) = roots.development {
                Self::validate_segment("roots.development", name)?;
            }
        }

        if config.distributed_root() == config.development_root() {
            return Err(Error::Validation {
                field: "roots".into(),
                message: format!(
                    "distributed and development roots must differ (both '{}')",
                    config.distributed_root()
                ),
            });
        }

        if let Some(ref anchor) = config.anchor {
            Self::validate_segment("anchor", anchor)?;
        }

        if let Some(ref scan) = config.scan {
            if scan.max_depth == Some(0) {
                return Err(Error::Validation {
                    field: "scan.max_depth".into(),
                    message: "must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Check that `value` is one non-empty path segment.
    fn validate_segment(field: &str, value: &str) -> Result<()> {
        let message = if value.trim().is_empty() {
            Some("must not be empty".to_string())
        } else if value == "." || value == ".." {
            Some(format!("'{value}' is not a directory name"))
        } else if let Some(c) = value
            .chars()
            .find(|c| INVALID_FILE_NAME_CHARS.contains(c) || *c == '\\' || c.is_control())
        {
            Some(format!("must be a single path segment; found {c:?} in '{value}'"))
        } else {
            None
        };

        match message {
            Some(message) => Err(Error::Validation {
                field: field.into(),
                message,
            }),
            None => Ok(()),
        }
    }
}
