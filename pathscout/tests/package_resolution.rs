//! Integration tests for dual-root package resolution against real
//! directories.

mod common;

use common::ProjectFixture;
use pathscout::config::{Config, ConfigBuilder, RootsConfig};
use pathscout::package::{PackageLocation, PackageLocationResolver, ProjectRoots};
use pathscout::path::{self, CanonicalPath};

const PACKAGE: &str = "com.acme.tools";

#[test]
fn test_distributed_root_wins_when_both_exist() {
    let project = ProjectFixture::new()
        .with_dir("Packages/com.acme.tools")
        .with_dir("Assets/com.acme.tools");
    let roots = ProjectRoots::new(project.root());

    let resolver = PackageLocationResolver::shared(PACKAGE, &roots).unwrap();
    assert_eq!(resolver.location(), PackageLocation::DistributedRoot);
    assert_eq!(
        resolver.resolved_project_path().map(CanonicalPath::as_str),
        Some("Packages/com.acme.tools")
    );
    assert_eq!(
        resolver.resolved_absolute_path(),
        Some(&project.canonical("Packages/com.acme.tools"))
    );
}

#[test]
fn test_development_root_fallback() {
    let project = ProjectFixture::new().with_dir("Assets/Plugins/Tools");
    let roots = ProjectRoots::new(project.root());

    let resolver = PackageLocationResolver::new(PACKAGE, "Plugins/Tools", &roots).unwrap();
    assert_eq!(resolver.location(), PackageLocation::DevelopmentRoot);
    assert_eq!(
        resolver.resolved_project_path().map(CanonicalPath::as_str),
        Some("Assets/Plugins/Tools")
    );
    assert!(resolver.diagnostic().is_none());
}

#[test]
fn test_unresolved_when_neither_exists() {
    let project = ProjectFixture::new().with_dir("Packages").with_dir("Assets");
    let roots = ProjectRoots::new(project.root());

    let resolver = PackageLocationResolver::shared(PACKAGE, &roots).unwrap();
    assert_eq!(resolver.location(), PackageLocation::Unresolved);
    assert!(!resolver.location().is_resolved());
    assert!(resolver.resolved_project_path().is_none());
    assert!(resolver.resolved_absolute_path().is_none());

    let diagnostic = resolver.diagnostic().unwrap();
    assert_eq!(diagnostic.distributed.as_str(), "Packages/com.acme.tools");
    assert_eq!(diagnostic.development.as_str(), "Assets/com.acme.tools");
}

#[test]
fn test_file_at_candidate_does_not_count() {
    let project = ProjectFixture::new().with_file("Packages/com.acme.tools", "not a dir");
    let roots = ProjectRoots::new(project.root());

    let resolver = PackageLocationResolver::shared(PACKAGE, &roots).unwrap();
    assert_eq!(resolver.location(), PackageLocation::Unresolved);
}

#[test]
fn test_roots_from_configuration() {
    let project = ProjectFixture::new().with_dir("Vendor/com.acme.tools");

    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            project_root: Some(project.root().to_path_buf()),
            roots: Some(RootsConfig {
                distributed: Some("Vendor".into()),
                development: None,
            }),
            ..Default::default()
        })
        .build()
        .unwrap();
    let roots = config.project_roots(project.root()).unwrap();

    let resolver = PackageLocationResolver::shared(PACKAGE, &roots).unwrap();
    assert_eq!(resolver.location(), PackageLocation::DistributedRoot);
    assert_eq!(resolver.distributed_path().as_str(), "Vendor/com.acme.tools");
    assert_eq!(resolver.development_path().as_str(), "Assets/com.acme.tools");
}

#[test]
fn test_resolved_path_round_trips_through_anchor() {
    let project = ProjectFixture::new().with_dir("Assets/Tools");
    let roots = ProjectRoots::new(project.root());

    let resolver = PackageLocationResolver::shared("Tools", &roots).unwrap();
    let absolute = resolver.resolved_absolute_path().unwrap();

    let relative = path::to_project_relative(absolute.as_str(), "Assets").unwrap();
    assert_eq!(Some(&relative), resolver.resolved_project_path());
}
