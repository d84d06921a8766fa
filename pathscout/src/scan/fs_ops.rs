//! Thin filesystem collaborators: existence guards, flat listings, copy and
//! clear.
//!
//! Nothing here recurses except [`copy_directory`] and the removal inside
//! [`clear_directory`]; recursive discovery lives on
//! [`RecursiveScanner`](super::RecursiveScanner).

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filter::PathFilter;
use crate::path::normalize::resolve_components;
use crate::path::CanonicalPath;

/// True when `path` names an existing directory.
#[must_use]
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// True when `path` names an existing regular file.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Fail unless `path` is an existing directory.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] when it is not.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if directory_exists(path) {
        Ok(())
    } else {
        Err(Error::DirectoryNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Fail on the first of `paths` that is not an existing directory.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] naming the first missing directory.
pub fn ensure_directories_exist<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .try_for_each(|p| ensure_directory_exists(p.as_ref()))
}

/// Fail unless `path` is an existing file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] when it is not.
pub fn ensure_file_exists(path: &Path) -> Result<()> {
    if file_exists(path) {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Fail on the first of `paths` that is not an existing file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] naming the first missing file.
pub fn ensure_files_exist<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .try_for_each(|p| ensure_file_exists(p.as_ref()))
}

/// True when a directory entry is, or points at, a regular file.
pub(crate) fn entry_is_file(entry: &fs::DirEntry) -> io::Result<bool> {
    let file_type = entry.file_type()?;
    Ok(file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()))
}

/// Files directly inside `dir` accepted by `filter`, in enumeration order.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] if `dir` is missing and
/// [`Error::Io`] if it cannot be read.
pub fn list_files<F>(dir: &Path, filter: &F) -> Result<Vec<CanonicalPath>>
where
    F: PathFilter + ?Sized,
{
    ensure_directory_exists(dir)?;
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry_is_file(&entry)? {
            let path = CanonicalPath::from_path(&entry.path());
            if filter.matches(&path) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn list_names(dir: &Path, want_dirs: bool) -> Result<Vec<String>> {
    ensure_directory_exists(dir)?;
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let keep = if want_dirs {
            entry.path().is_dir()
        } else {
            entry_is_file(&entry)?
        };
        if keep {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Bare names of the directories directly inside `dir`.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] if `dir` is missing.
pub fn list_directory_names(dir: &Path) -> Result<Vec<String>> {
    list_names(dir, true)
}

/// Bare names of the files directly inside `dir`.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] if `dir` is missing.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    list_names(dir, false)
}

/// One item a copy could not transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    /// Source path of the item.
    pub path: CanonicalPath,
    /// What went wrong.
    pub reason: String,
}

/// Outcome of a best-effort [`copy_directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination paths of files that were written.
    pub copied: Vec<CanonicalPath>,
    /// Items that were skipped after an error.
    pub failures: Vec<CopyFailure>,
}

impl CopyReport {
    /// True when nothing failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, path: &Path, reason: impl ToString) {
        let failure = CopyFailure {
            path: CanonicalPath::from_path(path),
            reason: reason.to_string(),
        };
        log::warn!("failed to copy {}: {}", failure.path, failure.reason);
        self.failures.push(failure);
    }
}

/// Recursively copy the contents of `src` into `dest`.
///
/// `dest` is created if missing and existing files are overwritten. Items
/// that fail are logged, recorded in the report and skipped; the copy
/// carries on with the rest. Symlinked directories are not descended into.
///
/// # Errors
///
/// Returns [`Error::DirectoryNotFound`] if `src` is missing,
/// [`Error::InvalidArgument`] if `dest` is `src` or lies inside it, and
/// [`Error::Io`] if `dest` itself cannot be created.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<CopyReport> {
    ensure_directory_exists(src)?;

    let src_real = dunce::canonicalize(src)?;
    let dest_real = resolve_destination(dest)?;
    if dest_real.starts_with(&src_real) {
        return Err(Error::invalid_argument(
            dest.to_string_lossy(),
            format!("destination lies inside source {}", src.display()),
        ));
    }
    fs::create_dir_all(dest)?;

    let mut report = CopyReport::default();
    copy_tree(src, dest, &mut report);
    log::debug!(
        "copied {} file(s) from {} to {} with {} failure(s)",
        report.copied.len(),
        src.display(),
        dest.display(),
        report.failures.len()
    );
    Ok(report)
}

/// Real location `dest` will have once created.
///
/// The nearest existing ancestor is canonicalized and the missing tail is
/// appended, so nothing is touched on disk.
fn resolve_destination(dest: &Path) -> Result<PathBuf> {
    let absolute = if dest.is_absolute() {
        dest.to_path_buf()
    } else {
        env::current_dir()?.join(dest)
    };
    let absolute = resolve_components(&absolute)?;

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut real = dunce::canonicalize(existing)?;
    real.extend(missing.iter().rev());
    Ok(real)
}

fn copy_tree(src: &Path, dest: &Path, report: &mut CopyReport) {
    let entries = match fs::read_dir(src) {
        Ok(entries) => entries,
        Err(e) => return report.fail(src, e),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.fail(src, e);
                continue;
            }
        };
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                report.fail(&from, e);
                continue;
            }
        };

        if file_type.is_dir() {
            if let Err(e) = fs::create_dir_all(&to) {
                report.fail(&from, e);
                continue;
            }
            copy_tree(&from, &to, report);
        } else if file_type.is_file() || from.is_file() {
            match fs::copy(&from, &to) {
                Ok(_) => report.copied.push(CanonicalPath::from_path(&to)),
                Err(e) => report.fail(&from, e),
            }
        } else {
            log::debug!("skipping {} during copy", from.display());
        }
    }
}

/// Delete `dir` with everything in it, then recreate it empty.
///
/// A missing `dir` is simply created.
///
/// # Errors
///
/// Returns [`Error::Io`] if removal or creation fails.
pub fn clear_directory(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
