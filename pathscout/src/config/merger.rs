//! Configuration merging and precedence handling.
//!
//! Later sources override earlier ones field by field; nested sections are
//! merged member by member rather than replaced wholesale.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, RootsConfig, ScanConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathscout::config::{Config, ConfigMerger};
///
/// let low = Config { anchor: Some("Assets".to_string()), ..Default::default() };
/// let high = Config { anchor: Some("Content".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.anchor.as_deref(), Some("Content"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.project_root.is_some() {
            target.project_root.clone_from(&source.project_root);
        }

        if source.anchor.is_some() {
            target.anchor.clone_from(&source.anchor);
        }

        if let Some(ref source_roots) = source.roots {
            target.roots = Some(match &target.roots {
                Some(target_roots) => Self::merge_roots(target_roots, source_roots),
                None => source_roots.clone(),
            });
        }

        if let Some(ref source_scan) = source.scan {
            target.scan = Some(match &target.scan {
                Some(target_scan) => Self::merge_scan(target_scan, source_scan),
                None => source_scan.clone(),
            });
        }
    }

    fn merge_roots(target: &RootsConfig, source: &RootsConfig) -> RootsConfig {
        RootsConfig {
            distributed: source
                .distributed
                .clone()
                .or_else(|| target.distributed.clone()),
            development: source
                .development
                .clone()
                .or_else(|| target.development.clone()),
        }
    }

    fn merge_scan(target: &ScanConfig, source: &ScanConfig) -> ScanConfig {
        ScanConfig {
            max_depth: source.max_depth.or(target.max_depth),
            follow_symlinks: source.follow_symlinks.or(target.follow_symlinks),
        }
    }
}
