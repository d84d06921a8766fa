//! Build script for pathscout-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathscout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonical path handling, filtered scanning and package root resolution")
        .long_about(
            "Command-line tool for normalizing project paths, scanning directory trees \
             with filters, and resolving packages under distributed or development roots",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .help("Override the project root")
                .value_name("PATH")
                .global(true)
                .env("PATHSCOUT_PROJECT_ROOT"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Read the user config.yaml from this directory instead of ~/.pathscout")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the canonical form of paths")
                .long_about("Print each path with '/' as the only delimiter"),
            Command::new("dirs")
                .about("List leaf directories, or immediate children")
                .long_about("List directories with no subdirectories under a directory"),
            Command::new("find")
                .about("Find files recursively with filters")
                .long_about("Search a tree for files by extension, name or full-path pattern"),
            Command::new("resolve")
                .about("Resolve which root a package lives under")
                .long_about(
                    "Check the distributed root, then the development root, for a package directory",
                ),
            Command::new("relative")
                .about("Show a path relative to its anchor segment")
                .long_about("Strip everything before the first anchor segment of a path"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathscout configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathscout.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
