//! Canonical path handling.
//!
//! Every path that leaves this crate is a [`CanonicalPath`]: a string whose
//! only delimiter is `/`, whatever the host. This module provides the
//! normalization, decomposition and combination functions that produce and
//! take apart such paths, plus conversion to project-relative form.
//!
//! # Normalization
//!
//! Normalization is purely textual. [`normalize`] swaps `\` for `/` and
//! leaves everything else alone; it does not resolve `.` or `..`, collapse
//! repeated delimiters or touch the filesystem. Use [`full_path`] when a
//! lexically resolved absolute form is needed.
//!
//! # Decomposition
//!
//! The directory part of a path ends at its rightmost delimiter. The
//! extension is the text from the last `.` of the final segment, except
//! when everything before that dot is dots (`.gitignore`) or nothing follows
//! it (`name.`).
//!
//! ```
//! use pathscout::path::{directory_name, extension, file_name};
//!
//! let path = r"Packages\com.example.tools\Runtime\Tool.asset";
//! assert_eq!(directory_name(path).unwrap().as_str(), "Packages/com.example.tools/Runtime");
//! assert_eq!(file_name(path), Some("Tool.asset"));
//! assert_eq!(extension(path), Some(".asset"));
//! ```
//!
//! # Anchors
//!
//! [`to_project_relative`] finds a named segment inside an absolute path and
//! keeps the suffix from there:
//!
//! ```
//! use pathscout::path::to_project_relative;
//!
//! let rel = to_project_relative("/home/dev/game/Assets/Scenes/Main.unity", "Assets");
//! assert_eq!(rel.unwrap().as_str(), "Assets/Scenes/Main.unity");
//! ```

mod anchor;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use anchor::{relative_to, to_project_relative};
pub use normalize::{
    change_extension, combine, directory_name, extension, extensions_equal, file_name,
    file_name_without_extension, full_path, has_extension, is_path_rooted, normalize,
    normalize_path, parent_directory, path_root, INVALID_FILE_NAME_CHARS, INVALID_PATH_CHARS,
};
pub use types::{CanonicalPath, DELIMITER};
