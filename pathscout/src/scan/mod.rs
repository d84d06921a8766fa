//! Directory traversal.
//!
//! [`RecursiveScanner`] walks a tree and returns leaf directories or files
//! accepted by a [`PathFilter`](crate::filter::PathFilter). The [`fs_ops`]
//! module holds the flat, non-recursive helpers the scanner builds on.
//!
//! # Leaf listing versus file search
//!
//! Both operations consume the same pre-order walk, in which every
//! directory is tagged as leaf or interior ([`VisitedDirectory`]).
//! [`recursive_list_directories`](RecursiveScanner::recursive_list_directories)
//! keeps only the leaves, while
//! [`recursive_find_files`](RecursiveScanner::recursive_find_files) searches
//! every directory, so files sitting next to subdirectories are found.
//!
//! # Symlinks
//!
//! Symlinked directories are skipped unless
//! [`ScanOptions::follow_symlinks`] is set. When following, each directory is
//! remembered by its canonical location and visited once, which breaks
//! cycles. Independently, [`ScanOptions::max_depth`] bounds how far a walk
//! may descend.

pub mod fs_ops;
mod scanner;

pub use fs_ops::{CopyFailure, CopyReport};
pub use scanner::{FileIter, RecursiveScanner, VisitedDirectory};

/// Default limit on walk depth below the root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Traversal settings shared by every scan a scanner performs.
///
/// # Examples
///
/// ```
/// use pathscout::scan::ScanOptions;
///
/// let options = ScanOptions::default().with_max_depth(8).with_follow_symlinks(true);
/// assert_eq!(options.max_depth, 8);
/// assert!(options.follow_symlinks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest directory level a walk may enter; the root is level 0.
    pub max_depth: usize,
    /// Whether symlinked directories are descended into.
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            follow_symlinks: false,
        }
    }
}

impl ScanOptions {
    /// Set the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether symlinked directories are followed.
    #[must_use]
    pub const fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}
