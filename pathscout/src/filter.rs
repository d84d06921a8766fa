//! Path predicates for scans.
//!
//! A [`SearchFilter`] is a pure predicate over a [`CanonicalPath`]. Filters
//! are values: they are built once, combined with [`and`](SearchFilter::and),
//! [`or`](SearchFilter::or) and [`not`](SearchFilter::not) (or the `&`, `|`
//! and `!` operators), and never mutated.
//!
//! Anything implementing [`PathFilter`] can drive a scan, including plain
//! closures.
//!
//! # Examples
//!
//! ```
//! use pathscout::filter::{PathFilter, SearchFilter};
//! use pathscout::path::CanonicalPath;
//!
//! let textures = SearchFilter::has_extension("png") | SearchFilter::has_extension("jpg");
//! let no_previews = !SearchFilter::matches_name("^preview_").unwrap();
//! let filter = textures & no_previews;
//!
//! assert!(filter.matches(&CanonicalPath::new("Assets/grass.png")));
//! assert!(!filter.matches(&CanonicalPath::new("Assets/preview_grass.png")));
//! assert!(!filter.matches(&CanonicalPath::new("Assets/grass.psd")));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use regex::Regex;

use crate::error::{Error, Result};
use crate::extension::FileExtension;
use crate::path::{self, CanonicalPath};

/// Anything that can accept or reject a path.
pub trait PathFilter {
    /// True when `path` should be kept.
    fn matches(&self, path: &CanonicalPath) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&CanonicalPath) -> bool,
{
    fn matches(&self, path: &CanonicalPath) -> bool {
        self(path)
    }
}

/// A composable path predicate.
#[derive(Debug, Clone, Default)]
pub enum SearchFilter {
    /// Accept every path.
    #[default]
    All,
    /// Regex search over the final path segment.
    Name(Regex),
    /// Regex search over the whole canonical path.
    FullPath(Regex),
    /// Case-sensitive suffix match on `"." + ext`.
    Extension(String),
    /// Case-insensitive match on a validated extension value.
    TypedExtension(FileExtension),
    /// Both filters must accept.
    And(Box<SearchFilter>, Box<SearchFilter>),
    /// Either filter may accept.
    Or(Box<SearchFilter>, Box<SearchFilter>),
    /// Inverts the inner filter.
    Not(Box<SearchFilter>),
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl SearchFilter {
    /// Accept every path.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Accept paths whose final segment contains a match for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn matches_name(pattern: &str) -> Result<Self> {
        compile(pattern).map(Self::Name)
    }

    /// Accept paths whose canonical string contains a match for `pattern`.
    ///
    /// The pattern sees `/` delimiters regardless of host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn matches_full_path(pattern: &str) -> Result<Self> {
        compile(pattern).map(Self::FullPath)
    }

    /// Accept paths ending with `"." + ext`.
    ///
    /// The match is a plain, case-sensitive suffix test, so
    /// `has_extension("gz")` also accepts `archive.tar.gz`. `ext` is taken
    /// as given: `has_extension(".json")` wants `..json`.
    #[must_use]
    pub fn has_extension(ext: &str) -> Self {
        Self::Extension(format!(".{ext}"))
    }

    /// Accept paths whose extension equals `ext`, ignoring case.
    #[must_use]
    pub fn has_typed_extension(ext: FileExtension) -> Self {
        Self::TypedExtension(ext)
    }

    /// Accept paths both filters accept.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::All, f) | (f, Self::All) => f,
            (a, b) => Self::And(Box::new(a), Box::new(b)),
        }
    }

    /// Accept paths either filter accepts.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Accept paths this filter rejects.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }

    /// Fold filters with [`or`](Self::or); `None` for an empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::filter::{PathFilter, SearchFilter};
    /// use pathscout::path::CanonicalPath;
    ///
    /// let any = SearchFilter::any_of(["txt", "json"].map(SearchFilter::has_extension)).unwrap();
    /// assert!(any.matches(&CanonicalPath::new("b.json")));
    /// assert!(SearchFilter::any_of(Vec::new()).is_none());
    /// ```
    pub fn any_of(filters: impl IntoIterator<Item = Self>) -> Option<Self> {
        filters.into_iter().reduce(Self::or)
    }
}

impl PathFilter for SearchFilter {
    fn matches(&self, path: &CanonicalPath) -> bool {
        match self {
            Self::All => true,
            Self::Name(re) => path::file_name(path.as_str()).is_some_and(|n| re.is_match(n)),
            Self::FullPath(re) => re.is_match(path.as_str()),
            Self::Extension(suffix) => path.as_str().ends_with(suffix.as_str()),
            Self::TypedExtension(ext) => ext.matches_path(path.as_str()),
            Self::And(a, b) => a.matches(path) && b.matches(path),
            Self::Or(a, b) => a.matches(path) || b.matches(path),
            Self::Not(inner) => !inner.matches(path),
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Name(re) => write!(f, "name~/{re}/"),
            Self::FullPath(re) => write!(f, "path~/{re}/"),
            Self::Extension(suffix) => write!(f, "*{suffix}"),
            Self::TypedExtension(ext) => write!(f, "ext={ext}"),
            Self::And(a, b) => write!(f, "({a} & {b})"),
            Self::Or(a, b) => write!(f, "({a} | {b})"),
            Self::Not(inner) => write!(f, "!{inner}"),
        }
    }
}

impl BitAnd for SearchFilter {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for SearchFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl Not for SearchFilter {
    type Output = Self;

    fn not(self) -> Self {
        SearchFilter::not(self)
    }
}
