//! Path normalization and decomposition.
//!
//! Everything here is pure string work over canonical paths except
//! [`expand_tilde`], which consults the home directory, and [`full_path`],
//! which anchors a relative path to a caller-supplied base. Both `/` and
//! `\` are accepted as delimiters on input; results always use `/`.
//!
//! Drive prefixes (`C:`) are recognized on every host so that a canonical
//! path decomposes the same way wherever it is inspected.

use std::path::{Component, Path, PathBuf};

use super::types::{CanonicalPath, DELIMITER};
use crate::error::{Error, Result};

/// Characters that may not appear anywhere in a path on this host.
#[cfg(windows)]
pub const INVALID_PATH_CHARS: &[char] = &['"', '<', '>', '|', '\0'];

/// Characters that may not appear anywhere in a path on this host.
#[cfg(not(windows))]
pub const INVALID_PATH_CHARS: &[char] = &['\0'];

/// Characters that may not appear in a single file name on this host.
#[cfg(windows)]
pub const INVALID_FILE_NAME_CHARS: &[char] =
    &['"', '<', '>', '|', '\0', ':', '*', '?', '\\', '/'];

/// Characters that may not appear in a single file name on this host.
#[cfg(not(windows))]
pub const INVALID_FILE_NAME_CHARS: &[char] = &['\0', '/'];

fn is_invalid_path_char(c: char) -> bool {
    INVALID_PATH_CHARS.contains(&c) || (cfg!(windows) && c.is_control())
}

fn is_delimiter(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Replace every `\` with `/`.
///
/// Total and side-effect free; every other character is preserved.
///
/// # Examples
///
/// ```
/// use pathscout::path::normalize;
///
/// assert_eq!(normalize(r"Assets\Scripts\Player.cs").as_str(), "Assets/Scripts/Player.cs");
/// assert_eq!(normalize("").as_str(), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> CanonicalPath {
    CanonicalPath::new(raw)
}

/// Canonicalize a `std::path::Path`.
#[must_use]
pub fn normalize_path(path: &Path) -> CanonicalPath {
    CanonicalPath::from_path(path)
}

/// Length in bytes of the root prefix of `path` (`/`, `C:/`, `C:`), or 0.
fn root_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if bytes.first().is_some_and(|b| *b == b'/' || *b == b'\\') {
        return 1;
    }
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.get(2).is_some_and(|b| *b == b'/' || *b == b'\\') {
            return 3;
        }
        return 2;
    }
    0
}

/// True when `path` starts at a root (`/`, `\` or a drive prefix).
///
/// # Examples
///
/// ```
/// use pathscout::path::is_path_rooted;
///
/// assert!(is_path_rooted("/usr/lib"));
/// assert!(is_path_rooted(r"C:\Projects"));
/// assert!(!is_path_rooted("Assets/Plugins"));
/// assert!(!is_path_rooted(""));
/// ```
#[must_use]
pub fn is_path_rooted(path: &str) -> bool {
    root_len(path) > 0
}

/// The root prefix of `path`, if any.
///
/// # Examples
///
/// ```
/// use pathscout::path::path_root;
///
/// assert_eq!(path_root("/var/log").unwrap().as_str(), "/");
/// assert_eq!(path_root(r"D:\data").unwrap().as_str(), "D:/");
/// assert!(path_root("relative/dir").is_none());
/// ```
#[must_use]
pub fn path_root(path: &str) -> Option<CanonicalPath> {
    match root_len(path) {
        0 => None,
        n => Some(normalize(&path[..n])),
    }
}

/// Join path segments and normalize the result.
///
/// Empty segments are skipped. A rooted segment discards everything joined
/// before it. A delimiter is inserted only when the accumulated path does not
/// already end with one.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if any segment contains a character
/// from [`INVALID_PATH_CHARS`].
///
/// # Examples
///
/// ```
/// use pathscout::path::combine;
///
/// assert_eq!(combine(["Assets", "Plugins", "NLib"]).unwrap().as_str(), "Assets/Plugins/NLib");
/// assert_eq!(combine(["project/", "", r"src\lib.rs"]).unwrap().as_str(), "project/src/lib.rs");
/// assert_eq!(combine(["ignored", "/abs", "x"]).unwrap().as_str(), "/abs/x");
/// assert!(combine(["bad\0name"]).is_err());
/// ```
pub fn combine<I, S>(parts: I) -> Result<CanonicalPath>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = String::new();
    for part in parts {
        let part = part.as_ref();
        if let Some(bad) = part.chars().find(|c| is_invalid_path_char(*c)) {
            return Err(Error::invalid_argument(
                part.escape_debug().to_string(),
                format!("contains invalid path character {bad:?}"),
            ));
        }
        if part.is_empty() {
            continue;
        }
        if acc.is_empty() || is_path_rooted(part) {
            acc.clear();
            acc.push_str(part);
        } else {
            if !acc.ends_with(is_delimiter) {
                acc.push(DELIMITER);
            }
            acc.push_str(part);
        }
    }
    Ok(normalize(&acc))
}

/// Byte offset where the final segment of `path` starts.
fn final_segment_start(path: &str) -> usize {
    path.rfind(is_delimiter)
        .map_or(root_len(path), |i| i + 1)
        .max(root_len(path))
}

/// Offset of the extension dot within a single segment.
///
/// A segment made only of leading dots before the last dot (`.bashrc`,
/// `..x`) has no extension.
fn extension_dot(name: &str) -> Option<usize> {
    let dot = name.rfind('.')?;
    if name[..dot].chars().all(|c| c == '.') {
        return None;
    }
    Some(dot)
}

/// The final segment of `path`, or `None` when it is empty.
///
/// # Examples
///
/// ```
/// use pathscout::path::file_name;
///
/// assert_eq!(file_name("Assets/Data/items.json"), Some("items.json"));
/// assert_eq!(file_name(r"C:\notes.txt"), Some("notes.txt"));
/// assert_eq!(file_name("Assets/Data/"), None);
/// ```
#[must_use]
pub fn file_name(path: &str) -> Option<&str> {
    let name = &path[final_segment_start(path)..];
    (!name.is_empty()).then_some(name)
}

/// The final segment of `path` with its extension removed.
///
/// # Examples
///
/// ```
/// use pathscout::path::file_name_without_extension;
///
/// assert_eq!(file_name_without_extension("a/b/archive.tar.gz"), Some("archive.tar"));
/// assert_eq!(file_name_without_extension(".gitignore"), Some(".gitignore"));
/// assert_eq!(file_name_without_extension("dir/"), None);
/// ```
#[must_use]
pub fn file_name_without_extension(path: &str) -> Option<&str> {
    let name = file_name(path)?;
    let stem = match extension_dot(name) {
        Some(dot) => &name[..dot],
        None => name,
    };
    (!stem.is_empty()).then_some(stem)
}

/// The extension of the final segment, including its leading `.`.
///
/// Dotfiles and names ending in a bare `.` have no extension.
///
/// # Examples
///
/// ```
/// use pathscout::path::extension;
///
/// assert_eq!(extension("Textures/grass.PNG"), Some(".PNG"));
/// assert_eq!(extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(extension(".bashrc"), None);
/// assert_eq!(extension("trailing."), None);
/// assert_eq!(extension("v1.2/README"), None);
/// ```
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path)?;
    let dot = extension_dot(name)?;
    let ext = &name[dot..];
    (ext.len() > 1).then_some(ext)
}

/// True when the final segment of `path` has an extension.
#[must_use]
pub fn has_extension(path: &str) -> bool {
    extension(path).is_some()
}

/// Compare the extensions of two paths, ignoring ASCII case.
///
/// Two paths without extensions compare equal.
///
/// # Examples
///
/// ```
/// use pathscout::path::extensions_equal;
///
/// assert!(extensions_equal("a/photo.JPG", "b/other.jpg"));
/// assert!(!extensions_equal("a.txt", "a.json"));
/// assert!(extensions_equal("Makefile", "README"));
/// ```
#[must_use]
pub fn extensions_equal(a: &str, b: &str) -> bool {
    match (extension(a), extension(b)) {
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        (None, None) => true,
        _ => false,
    }
}

/// Replace or remove the extension of `path`.
///
/// With `None` the extension (and a bare trailing `.`) is removed. With
/// `Some(ext)` the new extension is appended, a `.` being added if `ext`
/// lacks one. An empty `path` stays empty.
///
/// # Examples
///
/// ```
/// use pathscout::path::change_extension;
///
/// assert_eq!(change_extension("data/table.csv", Some(".json")).as_str(), "data/table.json");
/// assert_eq!(change_extension(r"data\table.csv", Some("txt")).as_str(), "data/table.txt");
/// assert_eq!(change_extension("data/table.csv", None).as_str(), "data/table");
/// assert_eq!(change_extension("data/README", Some(".md")).as_str(), "data/README.md");
/// ```
#[must_use]
pub fn change_extension(path: &str, ext: Option<&str>) -> CanonicalPath {
    if path.is_empty() {
        return CanonicalPath::default();
    }
    let start = final_segment_start(path);
    let stem_end = extension_dot(&path[start..]).map_or(path.len(), |dot| start + dot);
    let stem = &path[..stem_end];

    match ext {
        None => normalize(stem),
        Some(ext) if ext.starts_with('.') => normalize(&format!("{stem}{ext}")),
        Some(ext) => normalize(&format!("{stem}.{ext}")),
    }
}

/// The directory portion of `path`: everything before the last delimiter.
///
/// Returns `None` for a root, for an empty path and for a bare file name.
///
/// # Examples
///
/// ```
/// use pathscout::path::directory_name;
///
/// assert_eq!(directory_name("Assets/Data/items.json").unwrap().as_str(), "Assets/Data");
/// assert_eq!(directory_name("/etc").unwrap().as_str(), "/");
/// assert!(directory_name("/").is_none());
/// assert!(directory_name("items.json").is_none());
/// ```
#[must_use]
pub fn directory_name(path: &str) -> Option<CanonicalPath> {
    let root = root_len(path);
    if path.len() <= root {
        return None;
    }
    let last = path.rfind(is_delimiter)?;
    if last < root {
        return Some(normalize(&path[..root]));
    }
    Some(normalize(&path[..last]))
}

/// Walk `levels` directories up from `path`.
///
/// `levels == 0` returns the normalized input.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `path` runs out of parents
/// before `levels` steps have been taken.
///
/// # Examples
///
/// ```
/// use pathscout::path::parent_directory;
///
/// assert_eq!(parent_directory("a/b/c/d.txt", 2).unwrap().as_str(), "a/b");
/// assert_eq!(parent_directory(r"a\b", 0).unwrap().as_str(), "a/b");
/// assert!(parent_directory("a/b", 3).is_err());
/// ```
pub fn parent_directory(path: &str, levels: usize) -> Result<CanonicalPath> {
    let mut current = normalize(path);
    for step in 0..levels {
        current = directory_name(current.as_str()).ok_or_else(|| {
            Error::invalid_argument(
                path,
                format!("has only {step} parent level(s), {levels} requested"),
            )
        })?;
    }
    Ok(current)
}

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the home directory cannot be
/// determined or the path uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use pathscout::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.ends_with("project"));
///
/// let untouched = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(untouched, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| {
        Error::invalid_argument(path_str.as_ref(), "cannot determine home directory")
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::invalid_argument(
            path_str.as_ref(),
            "~user syntax is not supported; use ~ or ~/path",
        ))
    }
}

/// Resolve `.` and `..` components lexically.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a `..` would climb above the root.
///
/// # Examples
///
/// ```
/// use pathscout::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::invalid_argument(
                        path.to_string_lossy(),
                        "too many '..' components (escapes root)",
                    ));
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Absolute, canonical form of `path` against `base`.
///
/// A tilde is expanded first. A relative path is joined onto `base`, then
/// `.` and `..` are resolved lexically. No symlinks are followed.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if tilde expansion fails or `..`
/// escapes the root.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use pathscout::path::full_path;
/// use std::path::Path;
///
/// let full = full_path("Assets/../Packages/com.example", Path::new("/work/game")).unwrap();
/// assert_eq!(full.as_str(), "/work/game/Packages/com.example");
/// # }
/// ```
pub fn full_path(path: &str, base: &Path) -> Result<CanonicalPath> {
    let expanded = expand_tilde(Path::new(path))?;
    let absolute = if expanded.is_absolute() || is_path_rooted(path) {
        expanded
    } else {
        base.join(expanded)
    };
    let resolved = resolve_components(&absolute)?;
    Ok(normalize_path(&resolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_every_backslash() {
        assert_eq!(normalize(r"a\b\\c").as_str(), "a/b//c");
        assert_eq!(normalize("already/fine").as_str(), "already/fine");
    }

    #[test]
    fn test_combine_skips_empty_segments() {
        assert_eq!(combine(["", "a", "", "b"]).unwrap(), "a/b");
        assert_eq!(combine(Vec::<String>::new()).unwrap(), "");
    }

    #[test]
    fn test_combine_rooted_segment_resets() {
        assert_eq!(combine(["a", "b", "/c", "d"]).unwrap(), "/c/d");
        assert_eq!(combine(["a", r"\c"]).unwrap(), "/c");
        assert_eq!(combine(["a", "C:/x"]).unwrap(), "C:/x");
    }

    #[test]
    fn test_combine_no_double_delimiter() {
        assert_eq!(combine(["a/", "b"]).unwrap(), "a/b");
        assert_eq!(combine([r"a\", "b"]).unwrap(), "a/b");
    }

    #[test]
    fn test_combine_rejects_invalid_char() {
        let err = combine(["ok", "bad\0"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_root_detection() {
        assert!(is_path_rooted("/"));
        assert!(is_path_rooted(r"\share"));
        assert!(is_path_rooted("c:"));
        assert!(!is_path_rooted("1:/x"));
        assert!(!is_path_rooted("./x"));
        assert_eq!(path_root("C:relative").unwrap(), "C:");
    }

    #[test]
    fn test_file_name_cases() {
        assert_eq!(file_name("file.txt"), Some("file.txt"));
        assert_eq!(file_name("/"), None);
        assert_eq!(file_name(""), None);
        assert_eq!(file_name("C:file.txt"), Some("file.txt"));
    }

    #[test]
    fn test_extension_cases() {
        assert_eq!(extension("a.txt"), Some(".txt"));
        assert_eq!(extension("dir.d/file"), None);
        assert_eq!(extension(".config.json"), Some(".json"));
        assert_eq!(extension("..hidden"), None);
        assert_eq!(extension("x."), None);
        assert!(has_extension("a/b.c"));
        assert!(!has_extension("a/b"));
    }

    #[test]
    fn test_file_name_without_extension_trailing_dot() {
        assert_eq!(file_name_without_extension("name."), Some("name"));
        assert_eq!(file_name_without_extension("x/y.tar.gz"), Some("y.tar"));
    }

    #[test]
    fn test_change_extension_cases() {
        assert_eq!(change_extension("a.txt", Some(".json")), "a.json");
        assert_eq!(change_extension("a.", Some(".json")), "a.json");
        assert_eq!(change_extension("a.txt", Some("")), "a.");
        assert_eq!(change_extension(".bashrc", Some(".bak")), ".bashrc.bak");
        assert_eq!(change_extension("dir.v2/file", Some(".md")), "dir.v2/file.md");
        assert_eq!(change_extension("", Some(".md")), "");
    }

    #[test]
    fn test_directory_name_cases() {
        assert_eq!(directory_name("a/b/").unwrap(), "a/b");
        assert_eq!(directory_name(r"C:\x").unwrap(), "C:/");
        assert!(directory_name("C:/").is_none());
        assert!(directory_name("").is_none());
    }

    #[test]
    fn test_parent_directory_levels() {
        assert_eq!(parent_directory("/a/b/c", 1).unwrap(), "/a/b");
        assert_eq!(parent_directory("/a/b/c", 3).unwrap(), "/");
        assert!(parent_directory("/a/b/c", 4).is_err());
        assert!(parent_directory("single", 1).is_err());
    }

    #[test]
    fn test_extensions_equal_case_insensitive() {
        assert!(extensions_equal("A.TXT", "b.txt"));
        assert!(!extensions_equal("a.txt", "b"));
    }

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
        assert_eq!(expand_tilde(Path::new("~/test")).unwrap(), home.join("test"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        assert!(expand_tilde(Path::new("~user/path")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_components() {
        assert_eq!(
            resolve_components(Path::new("/a/b/../../c")).unwrap(),
            PathBuf::from("/c")
        );
        assert_eq!(resolve_components(Path::new("/")).unwrap(), PathBuf::from("/"));
        assert!(resolve_components(Path::new("/a/../..")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_full_path() {
        let base = Path::new("/work/game");
        assert_eq!(full_path("Assets", base).unwrap(), "/work/game/Assets");
        assert_eq!(full_path("/opt/x/./y", base).unwrap(), "/opt/x/y");
        assert!(full_path("/..", base).is_err());
    }

    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn raw_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 1..=5).prop_flat_map(|parts| {
                prop::collection::vec(prop_oneof![Just('/'), Just('\\')], parts.len())
                    .prop_map(move |delims| {
                        let mut out = String::new();
                        for (part, delim) in parts.iter().zip(delims) {
                            out.push_str(part);
                            out.push(delim);
                        }
                        out.pop();
                        out
                    })
            })
        }

        proptest! {
            /// Normalization removes every backslash and nothing else.
            #[test]
            fn normalize_only_swaps_delimiters(s in raw_path_strategy()) {
                let n = normalize(&s);
                prop_assert!(!n.as_str().contains('\\'));
                prop_assert_eq!(n.as_str().len(), s.len());
                for (a, b) in s.chars().zip(n.as_str().chars()) {
                    if a == '\\' {
                        prop_assert_eq!(b, '/');
                    } else {
                        prop_assert_eq!(a, b);
                    }
                }
            }

            /// Normalization is idempotent.
            #[test]
            fn normalize_idempotent(s in raw_path_strategy()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(once.as_str()), once.clone());
            }

            /// The parent of a combined single segment is the normalized base.
            #[test]
            fn parent_of_combine_is_base(a in raw_path_strategy(), b in "[a-zA-Z0-9_-]{1,10}") {
                let joined = combine([a.as_str(), b.as_str()]).unwrap();
                prop_assert_eq!(parent_directory(joined.as_str(), 1).unwrap(), normalize(&a));
            }
        }
    }
}
