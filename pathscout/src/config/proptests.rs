//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, RootsConfig, ScanConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

fn roots_strategy() -> impl Strategy<Value = RootsConfig> {
    (
        prop::option::of(segment_strategy()),
        prop::option::of(segment_strategy()),
    )
        .prop_map(|(distributed, development)| RootsConfig {
            distributed,
            development,
        })
}

fn scan_strategy() -> impl Strategy<Value = ScanConfig> {
    (prop::option::of(1usize..256), prop::option::of(any::<bool>())).prop_map(
        |(max_depth, follow_symlinks)| ScanConfig {
            max_depth,
            follow_symlinks,
        },
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,12}".prop_map(std::path::PathBuf::from)),
        prop::option::of(roots_strategy()),
        prop::option::of(segment_strategy()),
        prop::option::of(scan_strategy()),
    )
        .prop_map(|(project_root, roots, anchor, scan)| Config {
            project_root,
            roots,
            anchor,
            scan,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.project_root.clone(),
            high.project_root.clone().or(low.project_root.clone())
        );
        prop_assert_eq!(merged.anchor.clone(), high.anchor.clone().or(low.anchor.clone()));

        let high_dist = high.roots.as_ref().and_then(|r| r.distributed.clone());
        let low_dist = low.roots.as_ref().and_then(|r| r.distributed.clone());
        prop_assert_eq!(
            merged.roots.as_ref().and_then(|r| r.distributed.clone()),
            high_dist.or(low_dist)
        );

        let high_depth = high.scan.as_ref().and_then(|s| s.max_depth);
        let low_depth = low.scan.as_ref().and_then(|s| s.max_depth);
        prop_assert_eq!(
            merged.scan.as_ref().and_then(|s| s.max_depth),
            high_depth.or(low_depth)
        );
    }

    #[test]
    fn merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merge_is_idempotent(a in config_strategy(), b in config_strategy()) {
        let mut once = a.clone();
        ConfigMerger::merge_into(&mut once, &b);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &b);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn generated_configs_validate_unless_roots_collide(config in config_strategy()) {
        let result = ConfigValidator::validate(&config);
        if config.distributed_root() == config.development_root() {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
