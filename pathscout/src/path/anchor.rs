//! Anchor-relative and base-relative path conversion.

use super::normalize::{normalize, path_root};
use super::types::{CanonicalPath, DELIMITER};

/// Cut `absolute` down to the suffix that starts at the `anchor` segment.
///
/// The first segment equal to `anchor` wins; later occurrences are never
/// considered. Segments are compared whole and case-sensitively, so an
/// anchor of `Assets` does not match `MyAssets` or `Assets2`. Returns `None`
/// if no segment matches or `anchor` is empty or contains a delimiter.
///
/// This is a first-match heuristic: a project stored beneath a directory
/// that happens to share the anchor's name resolves against that outer
/// directory.
///
/// # Examples
///
/// ```
/// use pathscout::path::to_project_relative;
///
/// let rel = to_project_relative(r"D:\Work\Game\Assets\Textures\grass.png", "Assets").unwrap();
/// assert_eq!(rel.as_str(), "Assets/Textures/grass.png");
///
/// assert!(to_project_relative("/home/me/MyAssets/x.png", "Assets").is_none());
/// ```
#[must_use]
pub fn to_project_relative(absolute: &str, anchor: &str) -> Option<CanonicalPath> {
    if anchor.is_empty() || anchor.contains(['/', '\\']) {
        return None;
    }
    let canonical = normalize(absolute);
    let mut offset = 0;
    for segment in canonical.as_str().split(DELIMITER) {
        if segment == anchor {
            return Some(CanonicalPath::new(&canonical.as_str()[offset..]));
        }
        offset += segment.len() + 1;
    }
    None
}

/// The path from `base` to `path`, when `path` lies at or under `base`.
///
/// Both sides are compared segment by segment after normalization; empty
/// segments are ignored and roots must agree. A path equal to its base
/// yields `.`.
///
/// # Examples
///
/// ```
/// use pathscout::path::relative_to;
///
/// assert_eq!(relative_to("/proj/Assets/a.txt", "/proj").unwrap().as_str(), "Assets/a.txt");
/// assert_eq!(relative_to("/proj", "/proj/").unwrap().as_str(), ".");
/// assert!(relative_to("/project2/a", "/proj").is_none());
/// assert!(relative_to("proj/a", "/proj").is_none());
/// ```
#[must_use]
pub fn relative_to(path: &str, base: &str) -> Option<CanonicalPath> {
    if path_root(path) != path_root(base) {
        return None;
    }
    let path = normalize(path);
    let base = normalize(base);

    let mut remaining = path.segments();
    for expected in base.segments() {
        if remaining.next()? != expected {
            return None;
        }
    }

    let rest: Vec<&str> = remaining.collect();
    if rest.is_empty() {
        Some(CanonicalPath::new("."))
    } else {
        Some(CanonicalPath::new(rest.join("/")))
    }
}
