//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathscout: where the
//! project lives, what its package roots are called, which segment anchors
//! project-relative paths, and how scans traverse the tree.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::package::{ProjectRoots, DEFAULT_DEVELOPMENT_ROOT, DEFAULT_DISTRIBUTED_ROOT};
use crate::path::normalize::expand_tilde;
use crate::scan::{ScanOptions, DEFAULT_MAX_DEPTH};

/// Anchor segment used when none is configured.
pub const DEFAULT_ANCHOR: &str = "Assets";

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; accessors
/// such as [`anchor`](Self::anchor) fill in defaults.
///
/// # Examples
///
/// ```
/// use pathscout::config::{Config, RootsConfig};
///
/// let config = Config {
///     roots: Some(RootsConfig {
///         distributed: Some("Vendor".to_string()),
///         development: None,
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.distributed_root(), "Vendor");
/// assert_eq!(config.development_root(), "Assets");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project directory. Relative values in files are resolved against the
    /// file's own directory.
    pub project_root: Option<PathBuf>,

    /// Names of the two package roots.
    pub roots: Option<RootsConfig>,

    /// Segment that marks the start of project-relative paths.
    pub anchor: Option<String>,

    /// Traversal settings.
    pub scan: Option<ScanConfig>,
}

/// Package root names.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RootsConfig {
    /// Root used once a package is distributed.
    pub distributed: Option<String>,

    /// Root used while a package is developed in place.
    pub development: Option<String>,
}

/// Traversal settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Deepest directory level a walk may enter.
    pub max_depth: Option<usize>,

    /// Whether symlinked directories are descended into.
    pub follow_symlinks: Option<bool>,
}

impl Config {
    /// A configuration with every defaultable field filled in.
    ///
    /// `project_root` stays unset; it defaults to the working directory at
    /// the point of use.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            project_root: None,
            roots: Some(RootsConfig {
                distributed: Some(DEFAULT_DISTRIBUTED_ROOT.to_string()),
                development: Some(DEFAULT_DEVELOPMENT_ROOT.to_string()),
            }),
            anchor: Some(DEFAULT_ANCHOR.to_string()),
            scan: Some(ScanConfig {
                max_depth: Some(DEFAULT_MAX_DEPTH),
                follow_symlinks: Some(false),
            }),
        }
    }

    /// The distributed root name.
    #[must_use]
    pub fn distributed_root(&self) -> &str {
        self.roots
            .as_ref()
            .and_then(|r| r.distributed.as_deref())
            .unwrap_or(DEFAULT_DISTRIBUTED_ROOT)
    }

    /// The development root name.
    #[must_use]
    pub fn development_root(&self) -> &str {
        self.roots
            .as_ref()
            .and_then(|r| r.development.as_deref())
            .unwrap_or(DEFAULT_DEVELOPMENT_ROOT)
    }

    /// The anchor segment.
    #[must_use]
    pub fn anchor(&self) -> &str {
        self.anchor.as_deref().unwrap_or(DEFAULT_ANCHOR)
    }

    /// Scan options with defaults applied.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        let scan = self.scan.as_ref();
        ScanOptions {
            max_depth: scan
                .and_then(|s| s.max_depth)
                .unwrap_or(defaults.max_depth),
            follow_symlinks: scan
                .and_then(|s| s.follow_symlinks)
                .unwrap_or(defaults.follow_symlinks),
        }
    }

    /// The project roots to inject into package resolution.
    ///
    /// An unset `project_root` means `working_dir`. A tilde is expanded and a
    /// relative value is joined onto `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if tilde expansion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscout::config::Config;
    /// use std::path::Path;
    ///
    /// let roots = Config::defaults().project_roots(Path::new("/work/game")).unwrap();
    /// assert_eq!(roots.project_root, Path::new("/work/game"));
    /// assert_eq!(roots.distributed_root, "Packages");
    /// ```
    pub fn project_roots(&self, working_dir: &Path) -> Result<ProjectRoots> {
        let project_root = match &self.project_root {
            Some(root) => {
                let expanded = expand_tilde(root)?;
                if expanded.is_absolute() {
                    expanded
                } else {
                    working_dir.join(expanded)
                }
            }
            None => working_dir.to_path_buf(),
        };
        Ok(ProjectRoots::new(project_root)
            .with_roots(self.distributed_root(), self.development_root()))
    }
}
