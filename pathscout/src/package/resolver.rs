//! Two-location package resolution.

use std::env;
use std::fmt;
use std::path::Path;

use super::location::PackageLocation;
use super::roots::ProjectRoots;
use crate::error::{Error, Result};
use crate::path::{combine, full_path, is_path_rooted, normalize_path, CanonicalPath};

/// Answers whether a directory exists.
///
/// The resolver consults a probe exactly twice, at construction. Tests can
/// substitute a closure for the real filesystem.
pub trait DirectoryProbe {
    /// True when `path` is an existing directory.
    fn directory_exists(&self, path: &Path) -> bool;
}

/// Probe backed by the host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl DirectoryProbe for RealFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn directory_exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Record of a failed resolution: both candidates that were probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPackage {
    /// Project-relative distributed candidate.
    pub distributed: CanonicalPath,
    /// Project-relative development candidate.
    pub development: CanonicalPath,
}

impl fmt::Display for UnresolvedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "package directory found under neither [{}] nor [{}]",
            self.distributed, self.development
        )
    }
}

/// Decides once which of two roots a package lives under.
///
/// A package is expected at `<distributed_root>/<distributed_rel>` once
/// installed and at `<development_root>/<development_rel>` while it is being
/// developed inside the project. The distributed candidate is probed first.
/// If neither exists the resolver is still built, in the
/// [`Unresolved`](PackageLocation::Unresolved) state, with a diagnostic
/// available from [`diagnostic`](Self::diagnostic).
///
/// Nothing is re-probed after construction; build a new resolver to observe
/// filesystem changes.
///
/// # Examples
///
/// ```
/// use pathscout::package::{PackageLocation, PackageLocationResolver, ProjectRoots};
/// use std::path::Path;
///
/// let roots = ProjectRoots::new("/work/game");
/// let in_development = |p: &Path| p.ends_with("Assets/Plugins/Tools");
///
/// let resolver =
///     PackageLocationResolver::with_probe("com.example.tools", "Plugins/Tools", &roots, &in_development)
///         .unwrap();
/// assert_eq!(resolver.location(), PackageLocation::DevelopmentRoot);
/// assert_eq!(resolver.resolved_project_path().unwrap().as_str(), "Assets/Plugins/Tools");
/// ```
#[derive(Debug, Clone)]
pub struct PackageLocationResolver {
    distributed_path: CanonicalPath,
    development_path: CanonicalPath,
    location: PackageLocation,
    absolute_path: Option<CanonicalPath>,
    diagnostic: Option<UnresolvedPackage>,
}

fn validate_fragment(name: &str, fragment: &str) -> Result<()> {
    if fragment.trim().is_empty() {
        return Err(Error::invalid_argument(
            name,
            "relative package path must not be empty",
        ));
    }
    if is_path_rooted(fragment) {
        return Err(Error::invalid_argument(
            name,
            format!("relative package path must not be rooted: {fragment}"),
        ));
    }
    Ok(())
}

impl PackageLocationResolver {
    /// Resolve against the host filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either fragment is empty,
    /// rooted or contains invalid path characters, and [`Error::Io`] if a
    /// relative project root cannot be anchored to the working directory.
    pub fn new(distributed_rel: &str, development_rel: &str, roots: &ProjectRoots) -> Result<Self> {
        Self::with_probe(distributed_rel, development_rel, roots, &RealFileSystem)
    }

    /// Resolve a package that uses the same relative path under both roots.
    ///
    /// # Errors
    ///
    /// As for [`new`](Self::new).
    pub fn shared(relative: &str, roots: &ProjectRoots) -> Result<Self> {
        Self::new(relative, relative, roots)
    }

    /// Resolve using an explicit directory probe.
    ///
    /// # Errors
    ///
    /// As for [`new`](Self::new).
    pub fn with_probe<P>(
        distributed_rel: &str,
        development_rel: &str,
        roots: &ProjectRoots,
        probe: &P,
    ) -> Result<Self>
    where
        P: DirectoryProbe + ?Sized,
    {
        validate_fragment("distributed_rel", distributed_rel)?;
        validate_fragment("development_rel", development_rel)?;

        let distributed_path = combine([roots.distributed_root.as_str(), distributed_rel])?;
        let development_path = combine([roots.development_root.as_str(), development_rel])?;

        let project_root = if roots.project_root.is_absolute() {
            roots.project_root.clone()
        } else {
            env::current_dir()?.join(&roots.project_root)
        };

        let location = if probe.directory_exists(&project_root.join(distributed_path.as_path())) {
            PackageLocation::DistributedRoot
        } else if probe.directory_exists(&project_root.join(development_path.as_path())) {
            PackageLocation::DevelopmentRoot
        } else {
            PackageLocation::Unresolved
        };

        let (absolute_path, diagnostic) = match location {
            PackageLocation::DistributedRoot => {
                (Some(full_path(distributed_path.as_str(), &project_root)?), None)
            }
            PackageLocation::DevelopmentRoot => {
                (Some(full_path(development_path.as_str(), &project_root)?), None)
            }
            PackageLocation::Unresolved => {
                let diagnostic = UnresolvedPackage {
                    distributed: distributed_path.clone(),
                    development: development_path.clone(),
                };
                log::warn!("{diagnostic} (project root {})", normalize_path(&project_root));
                (None, Some(diagnostic))
            }
        };

        log::debug!("package resolved to {location}: {distributed_path} / {development_path}");

        Ok(Self {
            distributed_path,
            development_path,
            location,
            absolute_path,
            diagnostic,
        })
    }

    /// The state decided at construction.
    #[must_use]
    pub const fn location(&self) -> PackageLocation {
        self.location
    }

    /// The project-relative distributed candidate, resolved or not.
    #[must_use]
    pub const fn distributed_path(&self) -> &CanonicalPath {
        &self.distributed_path
    }

    /// The project-relative development candidate, resolved or not.
    #[must_use]
    pub const fn development_path(&self) -> &CanonicalPath {
        &self.development_path
    }

    /// The winning candidate, project-relative.
    #[must_use]
    pub fn resolved_project_path(&self) -> Option<&CanonicalPath> {
        match self.location {
            PackageLocation::DistributedRoot => Some(&self.distributed_path),
            PackageLocation::DevelopmentRoot => Some(&self.development_path),
            PackageLocation::Unresolved => None,
        }
    }

    /// The winning candidate as an absolute path.
    #[must_use]
    pub fn resolved_absolute_path(&self) -> Option<&CanonicalPath> {
        self.absolute_path.as_ref()
    }

    /// Why resolution failed, when it did.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&UnresolvedPackage> {
        self.diagnostic.as_ref()
    }
}
