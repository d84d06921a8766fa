//! Integration tests for the layered configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` so
//! they run one at a time; environment variables are process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pathscout::config::{
    Config, ConfigBuilder, ConfigLoader, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE,
};
use pathscout::error::Error;

// ============================================================================
// Test Utilities
// ============================================================================

/// Helper to create a temporary config file.
fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all PATHSCOUT_* configuration variables for the guard's lifetime.
fn clear_pathscout_env_vars() -> Vec<EnvGuard> {
    [
        "PATHSCOUT_PROJECT_ROOT",
        "PATHSCOUT_DISTRIBUTED_ROOT",
        "PATHSCOUT_DEVELOPMENT_ROOT",
        "PATHSCOUT_ANCHOR",
        "PATHSCOUT_MAX_DEPTH",
        "PATHSCOUT_FOLLOW_SYMLINKS",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

fn builder_in(project: &Path, data: &Path) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_working_dir(project)
        .with_data_dir(data)
}

// ============================================================================
// File discovery and precedence
// ============================================================================

#[test]
fn test_discovery_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let child = temp.path().join("Assets").join("Scripts");
    fs::create_dir_all(&child).unwrap();
    create_temp_config(temp.path(), PROJECT_CONFIG_FILE, "anchor: Content\n");

    let config = builder_in(&child, data.path()).skip_env().build().unwrap();
    assert_eq!(config.anchor(), "Content");
}

#[test]
fn test_local_overrides_project_overrides_user() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    create_temp_config(
        data.path(),
        "config.yaml",
        "anchor: User\nscan:\n  max_depth: 5\n",
    );
    create_temp_config(
        temp.path(),
        PROJECT_CONFIG_FILE,
        "anchor: Project\nroots:\n  distributed: Vendor\n",
    );
    create_temp_config(temp.path(), LOCAL_CONFIG_FILE, "anchor: Local\n");

    let config = builder_in(temp.path(), data.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.anchor(), "Local");
    assert_eq!(config.distributed_root(), "Vendor");
    assert_eq!(config.development_root(), "Assets");
    assert_eq!(config.scan_options().max_depth, 5);
}

#[test]
fn test_no_files_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let config = builder_in(temp.path(), data.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config, Config::defaults());
}

#[test]
fn test_project_root_relative_to_file() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let nested = temp.path().join("tools");
    fs::create_dir_all(&nested).unwrap();
    create_temp_config(temp.path(), PROJECT_CONFIG_FILE, "project_root: game\n");

    let config = builder_in(&nested, data.path()).skip_env().build().unwrap();
    let roots = config.project_roots(&nested).unwrap();
    assert_eq!(roots.project_root, temp.path().join("game"));
}

#[test]
fn test_malformed_file_names_path() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let path = create_temp_config(temp.path(), PROJECT_CONFIG_FILE, "anchr: typo\n");

    let err = builder_in(temp.path(), data.path())
        .skip_env()
        .build()
        .unwrap_err();
    match err {
        Error::Configuration { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_file_values_rejected() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    create_temp_config(
        temp.path(),
        PROJECT_CONFIG_FILE,
        "roots:\n  distributed: Assets\n",
    );

    let err = builder_in(temp.path(), data.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "roots"));
}

#[test]
fn test_loader_reports_sources_in_precedence_order() {
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    create_temp_config(temp.path(), LOCAL_CONFIG_FILE, "anchor: Local\n");
    create_temp_config(temp.path(), PROJECT_CONFIG_FILE, "anchor: Project\n");
    create_temp_config(data.path(), "config.yaml", "anchor: User\n");

    let sources = ConfigLoader::load_all(temp.path(), Some(data.path())).unwrap();
    let precedences: Vec<u8> = sources.iter().map(|s| s.precedence).collect();
    assert_eq!(precedences, vec![1, 2, 3]);
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_files() {
    let _clean = clear_pathscout_env_vars();
    let temp = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    create_temp_config(temp.path(), LOCAL_CONFIG_FILE, "anchor: Local\n");
    let _anchor = EnvGuard::new("PATHSCOUT_ANCHOR", "FromEnv");
    let _depth = EnvGuard::new("PATHSCOUT_MAX_DEPTH", "3");

    let config = builder_in(temp.path(), data.path()).build().unwrap();
    assert_eq!(config.anchor(), "FromEnv");
    assert_eq!(config.scan_options().max_depth, 3);
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _clean = clear_pathscout_env_vars();
    let data = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let _anchor = EnvGuard::new("PATHSCOUT_ANCHOR", "FromEnv");

    let config = builder_in(temp.path(), data.path())
        .with_config(Config {
            anchor: Some("FromCode".into()),
            ..Default::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.anchor(), "FromCode");
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _clean = clear_pathscout_env_vars();
    let _root = EnvGuard::new("PATHSCOUT_DEVELOPMENT_ROOT", "Elsewhere");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    assert_eq!(config.development_root(), "Assets");
}

#[test]
#[serial]
fn test_bad_env_boolean_rejected() {
    let _clean = clear_pathscout_env_vars();
    let _follow = EnvGuard::new("PATHSCOUT_FOLLOW_SYMLINKS", "sometimes");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_env_roots_that_collide_rejected() {
    let _clean = clear_pathscout_env_vars();
    let _dist = EnvGuard::new("PATHSCOUT_DISTRIBUTED_ROOT", "Same");
    let _dev = EnvGuard::new("PATHSCOUT_DEVELOPMENT_ROOT", "Same");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "roots"));
}
