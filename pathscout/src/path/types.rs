//! The canonical path value type.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The single delimiter used by every [`CanonicalPath`].
pub const DELIMITER: char = '/';

/// A path string stored with `/` as its only delimiter.
///
/// `CanonicalPath` is a value, not a handle: constructing one performs no
/// I/O and says nothing about whether the location exists. Every `\` in the
/// input is replaced with `/`; all other characters are kept verbatim, so
/// `..`, duplicate delimiters and trailing delimiters survive.
///
/// # Examples
///
/// ```
/// use pathscout::path::CanonicalPath;
///
/// let path = CanonicalPath::new(r"Assets\Textures\grass.png");
/// assert_eq!(path.as_str(), "Assets/Textures/grass.png");
/// assert_eq!(path.segments().count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Canonicalize a raw path string.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().replace('\\', "/"))
    }

    /// Canonicalize a filesystem path.
    ///
    /// Non-UTF-8 sequences are replaced lossily.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::path::CanonicalPath;
    /// use std::path::Path;
    ///
    /// let path = CanonicalPath::from_path(Path::new("project/Assets"));
    /// assert_eq!(path.as_str(), "project/Assets");
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow as a `std::path::Path` for filesystem calls.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Convert into an owned `PathBuf`.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Convert into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// True when the path is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the non-empty segments between delimiters.
    ///
    /// A leading root delimiter does not produce a segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::path::CanonicalPath;
    ///
    /// let path = CanonicalPath::new("/home//user/");
    /// let segments: Vec<_> = path.segments().collect();
    /// assert_eq!(segments, vec!["home", "user"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(DELIMITER).filter(|s| !s.is_empty())
    }

    /// Append a segment, inserting a delimiter only when one is missing.
    ///
    /// Unlike [`combine`](super::normalize::combine) this never discards the
    /// receiver and performs no validation; it is meant for joining names
    /// that came out of a directory listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::path::CanonicalPath;
    ///
    /// let root = CanonicalPath::new("Packages/");
    /// assert_eq!(root.join("com.example").as_str(), "Packages/com.example");
    /// assert_eq!(CanonicalPath::new("a").join("b").as_str(), "a/b");
    /// ```
    #[must_use]
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref().replace('\\', "/");
        if self.0.is_empty() {
            return Self(segment);
        }
        if segment.is_empty() {
            return self.clone();
        }
        if self.0.ends_with(DELIMITER) {
            Self(format!("{}{segment}", self.0))
        } else {
            Self(format!("{}{DELIMITER}{segment}", self.0))
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CanonicalPath {
    fn from(raw: String) -> Self {
        if raw.contains('\\') {
            Self::new(raw)
        } else {
            Self(raw)
        }
    }
}

impl From<&str> for CanonicalPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&Path> for CanonicalPath {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<PathBuf> for CanonicalPath {
    fn from(path: PathBuf) -> Self {
        Self::from_path(&path)
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Borrow<str> for CanonicalPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
