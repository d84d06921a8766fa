//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for laying out project trees on
//! disk for the pathscout library.

use std::fs;
use std::path::{Path, PathBuf};

use pathscout::CanonicalPath;
use tempfile::TempDir;

/// A temporary project tree that is removed on drop.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_dir("Packages/com.acme.tools")
///     .with_file("Assets/readme.txt", "hello");
/// ```
pub struct ProjectFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// An empty project directory.
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a directory (and its parents) under the project.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp.path().join(relative)).unwrap();
        self
    }

    /// Create a file (and its parent directories) under the project.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// An absolute path under the project root.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// The canonical spelling of a path under the project root.
    pub fn canonical(&self, relative: &str) -> CanonicalPath {
        CanonicalPath::from_path(&self.join(relative))
    }
}

/// Sort canonical paths so that assertions ignore enumeration order.
#[allow(dead_code)]
pub fn sorted(mut paths: Vec<CanonicalPath>) -> Vec<CanonicalPath> {
    paths.sort();
    paths
}
