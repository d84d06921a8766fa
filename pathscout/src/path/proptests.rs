//! Property-based tests for path handling.
//!
//! The normalize module already carries quick always-on properties. This
//! suite runs more cases and covers decomposition and anchor conversion.

use super::anchor::{relative_to, to_project_relative};
use super::normalize::{
    change_extension, combine, directory_name, extension, file_name, normalize,
};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Combining segments then taking the file name returns the last segment.
    #[test]
    fn combine_then_file_name(parts in relative_path_strategy()) {
        let joined = combine(&parts).unwrap();
        prop_assert_eq!(file_name(joined.as_str()), parts.last().map(String::as_str));
    }

    // directory_name strips exactly one segment.
    #[test]
    fn directory_name_drops_last_segment(parts in relative_path_strategy()) {
        prop_assume!(parts.len() > 1);
        let joined = combine(&parts).unwrap();
        let expected = combine(&parts[..parts.len() - 1]).unwrap();
        prop_assert_eq!(directory_name(joined.as_str()).unwrap(), expected);
    }

    // change_extension always yields the requested extension.
    #[test]
    fn change_extension_sets_extension(
        parts in relative_path_strategy(),
        ext in "[a-z]{1,5}",
    ) {
        let joined = combine(&parts).unwrap();
        let dotted = format!(".{ext}");
        let changed = change_extension(joined.as_str(), Some(&dotted));
        prop_assert_eq!(extension(changed.as_str()), Some(dotted.as_str()));
    }

    // Backslash and slash spellings normalize to the same path.
    #[test]
    fn delimiter_spelling_irrelevant(parts in relative_path_strategy()) {
        let slash = parts.join("/");
        let backslash = parts.join("\\");
        prop_assert_eq!(normalize(&slash), normalize(&backslash));
    }

    // The anchor suffix always starts with the anchor.
    #[test]
    fn anchor_suffix_starts_with_anchor(
        prefix in relative_path_strategy(),
        suffix in relative_path_strategy(),
    ) {
        let mut parts = prefix;
        parts.push("Assets".to_string());
        parts.extend(suffix);
        let absolute = format!("/{}", parts.join("/"));
        let rel = to_project_relative(&absolute, "Assets").unwrap();
        prop_assert!(rel.as_str().starts_with("Assets/"));
        prop_assert!(absolute.ends_with(rel.as_str()));
    }

    // A path is always relative to each of its prefixes.
    #[test]
    fn relative_to_prefix(base in relative_path_strategy(), rest in relative_path_strategy()) {
        let base_path = base.join("/");
        let full = format!("{base_path}/{}", rest.join("/"));
        let rel = relative_to(&full, &base_path).unwrap();
        prop_assert_eq!(rel.as_str(), rest.join("/"));
    }
}
