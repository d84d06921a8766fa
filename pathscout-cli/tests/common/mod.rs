//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the
//! `pathscout` binary against temporary project trees.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 7] = [
    "PATHSCOUT_PROJECT_ROOT",
    "PATHSCOUT_DISTRIBUTED_ROOT",
    "PATHSCOUT_DEVELOPMENT_ROOT",
    "PATHSCOUT_ANCHOR",
    "PATHSCOUT_MAX_DEPTH",
    "PATHSCOUT_FOLLOW_SYMLINKS",
    "PATHSCOUT_LOG_MODE",
];

/// Test environment with an isolated project and config directory.
///
/// Commands run with the project as their working directory, with an empty
/// user config directory, and without any inherited `PATHSCOUT_*` variables.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project directory commands run in
    pub project: PathBuf,
    /// User configuration directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty project and config
    /// directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&project).expect("Failed to create project dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            project,
            config_dir,
        }
    }

    /// A bare command: isolated environment, no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathscout").expect("Failed to find pathscout binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.project);
        cmd
    }

    /// A command with `--config-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Project directory.
    pub fn path(&self) -> &Path {
        &self.project
    }

    /// Create a directory under the project and return its path.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.project.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file under the project and return its path.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout lines, asserting success.
    pub fn lines(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathscout");
        assert!(
            output.status.success(),
            "pathscout {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let mut lines: Vec<String> = String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        lines
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
