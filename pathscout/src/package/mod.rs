//! Package location resolution.
//!
//! A relocatable package lives under one of two roots of a project: the
//! distributed root (`Packages` by default) once installed, or the
//! development root (`Assets` by default) while it is worked on in place.
//! [`PackageLocationResolver`] probes both once and keeps the answer.

mod location;
mod resolver;
mod roots;

pub use location::PackageLocation;
pub use resolver::{DirectoryProbe, PackageLocationResolver, RealFileSystem, UnresolvedPackage};
pub use roots::{ProjectRoots, DEFAULT_DEVELOPMENT_ROOT, DEFAULT_DISTRIBUTED_ROOT};
