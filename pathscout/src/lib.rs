#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathscout
//!
//! Path handling for projects laid out around a fixed anchor directory and
//! two package roots.
//!
//! This library provides delimiter-canonical path manipulation, filtered
//! recursive directory scanning, and resolution of package directories that
//! may live under either a distributed or a development root.
//!
//! ## Core Types
//!
//! - [`CanonicalPath`]: A path string using only `/` as its delimiter
//! - [`SearchFilter`] and [`PathFilter`]: Composable file predicates
//! - [`RecursiveScanner`]: Directory walks with leaf and file listings
//! - [`PackageLocationResolver`]: Dual-root package directory resolution
//! - [`FileExtension`]: Validated, case-insensitive file extensions
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathscout::{path, CanonicalPath, FileExtension};
//!
//! let p = CanonicalPath::new(r"C:\Game\Assets\Scripts\Player.cs");
//! assert_eq!(p.as_str(), "C:/Game/Assets/Scripts/Player.cs");
//!
//! let rel = path::to_project_relative(p.as_str(), "Assets").unwrap();
//! assert_eq!(rel.as_str(), "Assets/Scripts/Player.cs");
//!
//! let cs: FileExtension = ".CS".parse().unwrap();
//! assert!(cs.matches_path(p.as_str()));
//! ```

pub mod config;
pub mod error;
pub mod extension;
pub mod filter;
pub mod logging;
pub mod package;
pub mod path;
pub mod scan;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use extension::FileExtension;
pub use filter::{PathFilter, SearchFilter};
pub use logging::{init_logger, LogLevel, Logger};
pub use package::{PackageLocation, PackageLocationResolver, ProjectRoots};
pub use path::CanonicalPath;
pub use scan::{RecursiveScanner, ScanOptions};
