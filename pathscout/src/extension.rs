//! File extension value type.
//!
//! A [`FileExtension`] is a validated, lower-cased extension such as `.json`.
//! The common extensions are available as associated constants and as the
//! enumerable [`FileExtension::standard`] set.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path;

/// A dot-prefixed, lower-cased file extension.
///
/// Equality and hashing use the normalized text, so `.TXT` and `.txt` are
/// the same value.
///
/// # Examples
///
/// ```
/// use pathscout::extension::FileExtension;
///
/// let upper = FileExtension::new(".TXT").unwrap();
/// assert_eq!(upper, FileExtension::TXT);
/// assert_eq!(upper.as_str(), ".txt");
///
/// assert!(FileExtension::new("txt").is_err());
/// assert!(FileExtension::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileExtension {
    value: Cow<'static, str>,
}

impl FileExtension {
    /// Plain text.
    pub const TXT: Self = Self::from_static(".txt");
    /// JSON documents.
    pub const JSON: Self = Self::from_static(".json");
    /// Comma-separated values.
    pub const CSV: Self = Self::from_static(".csv");
    /// XML documents.
    pub const XML: Self = Self::from_static(".xml");
    /// INI settings files.
    pub const INI: Self = Self::from_static(".ini");
    /// JPEG images.
    pub const JPG: Self = Self::from_static(".jpg");
    /// PNG images.
    pub const PNG: Self = Self::from_static(".png");
    /// MP3 audio.
    pub const MP3: Self = Self::from_static(".mp3");
    /// MP4 video.
    pub const MP4: Self = Self::from_static(".mp4");
    /// Serialized engine assets.
    pub const ASSET: Self = Self::from_static(".asset");

    const fn from_static(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    /// Validate and normalize a raw extension.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the input is empty, blank, a
    /// lone `.`, does not start with `.`, or contains a delimiter.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument(raw, "extension must not be empty"));
        }
        if !trimmed.starts_with('.') {
            return Err(Error::invalid_argument(raw, "extension must start with '.'"));
        }
        if trimmed.len() == 1 {
            return Err(Error::invalid_argument(raw, "extension must not be a bare '.'"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(Error::invalid_argument(
                raw,
                "extension must not contain a path delimiter",
            ));
        }
        Ok(Self {
            value: Cow::Owned(trimmed.to_lowercase()),
        })
    }

    /// The fixed set of standard extensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::extension::FileExtension;
    ///
    /// assert!(FileExtension::standard().contains(&FileExtension::PNG));
    /// assert_eq!(FileExtension::standard().len(), 10);
    /// ```
    #[must_use]
    pub fn standard() -> &'static [FileExtension] {
        &STANDARD
    }

    /// Look up a standard extension by its text, ignoring case.
    #[must_use]
    pub fn find_standard(raw: &str) -> Option<&'static FileExtension> {
        let candidate = Self::new(raw).ok()?;
        STANDARD.iter().find(|ext| **ext == candidate)
    }

    /// The normalized text, including the leading dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The text after the leading dot.
    #[must_use]
    pub fn without_dot(&self) -> &str {
        &self.value[1..]
    }

    /// True when the final segment of `path` ends with this extension.
    ///
    /// The path's extension is lower-cased the same way as in [`new`](Self::new)
    /// before comparing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::extension::FileExtension;
    ///
    /// assert!(FileExtension::JSON.matches_path("Data/Items.JSON"));
    /// assert!(!FileExtension::JSON.matches_path("Data/Items.jsonl"));
    /// ```
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        path::extension(path).is_some_and(|ext| ext.to_lowercase() == self.value)
    }
}

static STANDARD: [FileExtension; 10] = [
    FileExtension::TXT,
    FileExtension::JSON,
    FileExtension::CSV,
    FileExtension::XML,
    FileExtension::INI,
    FileExtension::JPG,
    FileExtension::PNG,
    FileExtension::MP3,
    FileExtension::MP4,
    FileExtension::ASSET,
];

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for FileExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for FileExtension {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<FileExtension> for String {
    fn from(ext: FileExtension) -> Self {
        ext.value.into_owned()
    }
}

impl AsRef<str> for FileExtension {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
