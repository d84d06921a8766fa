//! Project root layout injected into package resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root directory name used once a package has been distributed.
pub const DEFAULT_DISTRIBUTED_ROOT: &str = "Packages";

/// Root directory name used while a package is developed in-project.
pub const DEFAULT_DEVELOPMENT_ROOT: &str = "Assets";

/// Where a project lives and what its two package roots are called.
///
/// Built from configuration (see
/// [`Config::project_roots`](crate::config::Config::project_roots)) and
/// handed to every [`PackageLocationResolver`](super::PackageLocationResolver).
///
/// # Examples
///
/// ```
/// use pathscout::package::ProjectRoots;
///
/// let roots = ProjectRoots::new("/work/game");
/// assert_eq!(roots.distributed_root, "Packages");
/// assert_eq!(roots.development_root, "Assets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRoots {
    /// The project directory all relative paths hang off.
    pub project_root: PathBuf,
    /// Name of the distributed root directory.
    pub distributed_root: String,
    /// Name of the development root directory.
    pub development_root: String,
}

impl ProjectRoots {
    /// Roots with the default names under `project_root`.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            distributed_root: DEFAULT_DISTRIBUTED_ROOT.to_string(),
            development_root: DEFAULT_DEVELOPMENT_ROOT.to_string(),
        }
    }

    /// Replace both root names.
    #[must_use]
    pub fn with_roots(mut self, distributed: impl Into<String>, development: impl Into<String>) -> Self {
        self.distributed_root = distributed.into();
        self.development_root = development.into();
        self
    }

    /// The project directory.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
