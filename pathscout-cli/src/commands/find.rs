//! Command to search for files.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use pathscout::{CanonicalPath, FileExtension, RecursiveScanner, SearchFilter};
use std::path::PathBuf;

/// How matches are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FindFormat {
    /// One path per line
    #[default]
    Text,
    /// A JSON array of paths
    Json,
}

/// Find files recursively.
///
/// Multiple `--ext` values are alternatives; every other criterion must
/// also hold.
#[derive(Args)]
pub struct FindCommand {
    /// Directory to search
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// File extension suffix, without or with a leading dot (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Extension compared case-insensitively, e.g. ".png"
    #[arg(long, value_name = "EXT")]
    pub typed_ext: Option<FileExtension>,

    /// Regex the file name must match
    #[arg(long, value_name = "REGEX")]
    pub name: Option<String>,

    /// Regex the canonical full path must match
    #[arg(long, value_name = "REGEX")]
    pub path: Option<String>,

    /// Regex the file name must not match
    #[arg(long, value_name = "REGEX")]
    pub exclude_name: Option<String>,

    /// Stream results as the tree is walked
    #[arg(long)]
    pub lazy: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FindFormat::Text)]
    pub format: FindFormat,
}

impl FindCommand {
    /// Combine the requested criteria into one filter.
    fn build_filter(&self) -> Result<SearchFilter, CliError> {
        let mut filter = SearchFilter::any_of(
            self.extensions
                .iter()
                .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
                .map(SearchFilter::has_extension),
        )
        .unwrap_or_default();

        if let Some(ref ext) = self.typed_ext {
            filter = filter & SearchFilter::has_typed_extension(ext.clone());
        }
        if let Some(ref re) = self.name {
            filter = filter & SearchFilter::matches_name(re)?;
        }
        if let Some(ref re) = self.path {
            filter = filter & SearchFilter::matches_full_path(re)?;
        }
        if let Some(ref re) = self.exclude_name {
            filter = filter & !SearchFilter::matches_name(re)?;
        }
        Ok(filter)
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let filter = self.build_filter()?;
        let config = load_configuration(global)?;
        let scanner = RecursiveScanner::with_options(config.scan_options());

        if global.verbose {
            eprintln!("filter: {filter}");
        }

        if self.lazy && self.format == FindFormat::Text {
            for path in scanner.iter_files(&self.dir, filter)? {
                println!("{path}");
            }
            return Ok(());
        }

        let found: Vec<CanonicalPath> = if self.lazy {
            scanner.iter_files(&self.dir, filter)?.collect()
        } else {
            scanner.recursive_find_files(&self.dir, &filter)?
        };

        match self.format {
            FindFormat::Text => {
                for path in &found {
                    println!("{path}");
                }
            }
            FindFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&found)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pathscout::PathFilter;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        find: FindCommand,
    }

    fn filter_for(args: &[&str]) -> SearchFilter {
        let mut argv = vec!["find", "."];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv)
            .unwrap()
            .find
            .build_filter()
            .unwrap()
    }

    #[test]
    fn test_no_criteria_accepts_everything() {
        let filter = filter_for(&[]);
        assert!(filter.matches(&CanonicalPath::new("any/file.bin")));
    }

    #[test]
    fn test_extensions_are_alternatives() {
        let filter = filter_for(&["--ext", "txt", "--ext", ".json"]);
        assert!(filter.matches(&CanonicalPath::new("a.txt")));
        assert!(filter.matches(&CanonicalPath::new("b.json")));
        assert!(!filter.matches(&CanonicalPath::new("c.xml")));
    }

    #[test]
    fn test_criteria_are_combined() {
        let filter = filter_for(&["--ext", "txt", "--exclude-name", "^_"]);
        assert!(filter.matches(&CanonicalPath::new("dir/a.txt")));
        assert!(!filter.matches(&CanonicalPath::new("dir/_a.txt")));
    }

    #[test]
    fn test_typed_extension_parsed() {
        let filter = filter_for(&["--typed-ext", ".PNG"]);
        assert!(filter.matches(&CanonicalPath::new("tex/grass.png")));
    }

    #[test]
    fn test_bad_regex_is_invalid_argument() {
        let cmd = Harness::try_parse_from(["find", ".", "--name", "("])
            .unwrap()
            .find;
        let err = cmd.build_filter().unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
