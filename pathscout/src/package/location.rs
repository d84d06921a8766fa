use std::fmt;

use serde::Serialize;

/// Which candidate root a package was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageLocation {
    /// Found under the distributed root.
    DistributedRoot,
    /// Found under the development root.
    DevelopmentRoot,
    /// Found under neither.
    Unresolved,
}

impl PackageLocation {
    /// True unless [`Unresolved`](Self::Unresolved).
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for PackageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DistributedRoot => write!(f, "distributed"),
            Self::DevelopmentRoot => write!(f, "development"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}
