//! Recursive directory and file discovery.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::fs_ops::{self, entry_is_file};
use super::ScanOptions;
use crate::error::{Error, Result};
use crate::filter::PathFilter;
use crate::path::CanonicalPath;

/// A directory reached by a tree walk.
///
/// `is_leaf` is true when the directory had no child directories that the
/// walk descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedDirectory {
    /// Canonical path of the directory, prefixed by the walk root as given.
    pub path: CanonicalPath,
    /// Distance from the walk root; the root itself is 0.
    pub depth: usize,
    /// Whether the walk found no child directories here.
    pub is_leaf: bool,
}

/// Entries of one directory split by kind.
struct Listing {
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

/// Walks directory trees and collects matching paths.
///
/// All methods are synchronous and perform blocking I/O. A scanner holds no
/// state between calls, so one instance may be reused freely.
///
/// Enumeration order is whatever the OS returns; results are not sorted.
///
/// # Examples
///
/// ```no_run
/// use pathscout::filter::SearchFilter;
/// use pathscout::scan::RecursiveScanner;
/// use std::path::Path;
///
/// let scanner = RecursiveScanner::new();
/// let json = scanner
///     .recursive_find_files(Path::new("Assets"), &SearchFilter::has_extension("json"))
///     .unwrap();
/// for path in json {
///     println!("{path}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecursiveScanner {
    options: ScanOptions,
}

impl RecursiveScanner {
    /// A scanner with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scanner with explicit options.
    #[must_use]
    pub const fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner applies.
    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn read_listing(&self, dir: &Path) -> Result<Listing> {
        let mut listing = Listing {
            directories: Vec::new(),
            files: Vec::new(),
        };
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                listing.directories.push(entry.path());
            } else if file_type.is_symlink() && entry.path().is_dir() {
                if self.options.follow_symlinks {
                    listing.directories.push(entry.path());
                } else {
                    log::debug!("not following symlinked directory {}", entry.path().display());
                }
            } else if entry_is_file(&entry)? {
                listing.files.push(entry.path());
            }
        }
        Ok(listing)
    }

    /// Immediate child directories of `dir`.
    ///
    /// Symlinked directories are included only when the scanner follows
    /// symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `dir` does not exist and
    /// [`Error::Io`] if it cannot be read.
    pub fn list_children(&self, dir: &Path) -> Result<Vec<CanonicalPath>> {
        fs_ops::ensure_directory_exists(dir)?;
        let listing = self.read_listing(dir)?;
        Ok(listing
            .directories
            .iter()
            .map(|p| CanonicalPath::from_path(p))
            .collect())
    }

    /// Walk the tree under `dir` in pre-order, tagging each directory.
    ///
    /// Every directory appears exactly once, parents before children and
    /// siblings in enumeration order. `visit` receives each directory along
    /// with the files directly inside it.
    fn walk<V>(&self, dir: &Path, mut visit: V) -> Result<()>
    where
        V: FnMut(VisitedDirectory, Vec<PathBuf>),
    {
        fs_ops::ensure_directory_exists(dir)?;
        let mut visited = HashSet::new();
        if self.options.follow_symlinks {
            visited.insert(dunce::canonicalize(dir)?);
        }
        self.walk_from(dir, 0, &mut visited, &mut visit)
    }

    fn walk_from<V>(
        &self,
        dir: &Path,
        depth: usize,
        visited: &mut HashSet<PathBuf>,
        visit: &mut V,
    ) -> Result<()>
    where
        V: FnMut(VisitedDirectory, Vec<PathBuf>),
    {
        if depth > self.options.max_depth {
            return Err(Error::ScanDepthExceeded {
                path: dir.to_path_buf(),
                max_depth: self.options.max_depth,
            });
        }

        let listing = self.read_listing(dir)?;
        let mut children = Vec::with_capacity(listing.directories.len());
        for child in listing.directories {
            if self.options.follow_symlinks {
                let identity = dunce::canonicalize(&child)?;
                if !visited.insert(identity) {
                    log::warn!(
                        "skipping already visited directory {} (symlink cycle or alias)",
                        child.display()
                    );
                    continue;
                }
            }
            children.push(child);
        }

        visit(
            VisitedDirectory {
                path: CanonicalPath::from_path(dir),
                depth,
                is_leaf: children.is_empty(),
            },
            listing.files,
        );

        for child in children {
            self.walk_from(&child, depth + 1, visited, visit)?;
        }
        Ok(())
    }

    /// Every directory of the tree under `dir`, root included, in pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `dir` does not exist,
    /// [`Error::ScanDepthExceeded`] if the tree is deeper than the limit and
    /// [`Error::Io`] on read failures.
    pub fn walk_directories(&self, dir: &Path) -> Result<Vec<VisitedDirectory>> {
        let mut out = Vec::new();
        self.walk(dir, |visited, _| out.push(visited))?;
        Ok(out)
    }

    /// Leaf directories of the tree under `dir`.
    ///
    /// A directory with no child directories yields itself. Otherwise the
    /// result is the leaves of each child in enumeration order; interior
    /// directories are never returned.
    ///
    /// # Errors
    ///
    /// As for [`walk_directories`](Self::walk_directories).
    pub fn recursive_list_directories(&self, dir: &Path) -> Result<Vec<CanonicalPath>> {
        let mut leaves = Vec::new();
        self.walk(dir, |visited, _| {
            if visited.is_leaf {
                leaves.push(visited.path);
            }
        })?;
        Ok(leaves)
    }

    /// Files anywhere under `dir` accepted by `filter`.
    ///
    /// Every directory of the tree is searched, interior ones included.
    /// Results are grouped by directory in pre-order. On any error no
    /// partial result is returned.
    ///
    /// # Errors
    ///
    /// As for [`walk_directories`](Self::walk_directories).
    pub fn recursive_find_files<F>(&self, dir: &Path, filter: &F) -> Result<Vec<CanonicalPath>>
    where
        F: PathFilter + ?Sized,
    {
        let mut found = Vec::new();
        self.walk(dir, |_, files| {
            found.extend(
                files
                    .iter()
                    .map(|p| CanonicalPath::from_path(p))
                    .filter(|p| filter.matches(p)),
            );
        })?;
        log::debug!("found {} file(s) under {}", found.len(), dir.display());
        Ok(found)
    }

    /// Files directly inside `dir` accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `dir` does not exist.
    pub fn list_files<F>(&self, dir: &Path, filter: &F) -> Result<Vec<CanonicalPath>>
    where
        F: PathFilter + ?Sized,
    {
        fs_ops::list_files(dir, filter)
    }

    /// Lazily yield files under `dir` accepted by `filter`.
    ///
    /// The walk is driven by `walkdir` and happens as the iterator is
    /// consumed. Entries that cannot be read, including symlink loops, are
    /// logged and skipped. Unlike the eager scan, reaching the depth limit
    /// stops descent silently. The iterator cannot be restarted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `dir` does not exist at call
    /// time.
    pub fn iter_files<F>(&self, dir: &Path, filter: F) -> Result<FileIter<F>>
    where
        F: PathFilter,
    {
        fs_ops::ensure_directory_exists(dir)?;
        let walker = WalkDir::new(dir)
            .follow_links(self.options.follow_symlinks)
            .max_depth(self.options.max_depth.saturating_add(1))
            .into_iter();
        Ok(FileIter { walker, filter })
    }
}

/// Lazy file sequence returned by [`RecursiveScanner::iter_files`].
pub struct FileIter<F> {
    walker: walkdir::IntoIter,
    filter: F,
}

impl<F: PathFilter> Iterator for FileIter<F> {
    type Item = CanonicalPath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            let path = CanonicalPath::from_path(entry.path());
            if self.filter.matches(&path) {
                return Some(path);
            }
        }
    }
}

impl<F> std::fmt::Debug for FileIter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileIter").finish_non_exhaustive()
    }
}
