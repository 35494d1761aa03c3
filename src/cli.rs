//! CLI Argument Parsing
//!
//! Global flags (--root, --config, --json, --color, --verbose) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Rewatch - re-run your toolchain when sources change
#[derive(Parser, Debug)]
#[command(name = "rewatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root: watched recursively and used as the toolchain's working directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Start with verbose output (test runs with -v, passing output shown)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the build step once
    Build,

    /// Run the test step once
    Test,

    /// Watch sources and re-run the build (and tests) on every change
    Watch {
        /// Also run tests after each build
        #[arg(long)]
        with_tests: bool,

        /// Read commands from stdin (`verbose` toggles verbose output)
        #[arg(short, long)]
        interactive: bool,

        /// Source file extension to watch (default from config, then "go")
        #[arg(long)]
        extension: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["rewatch"]).is_err());
    }

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["rewatch", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build));
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.config, None);
        assert!(!cli.json);
        assert_eq!(cli.color, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_test_verbose() {
        let cli = Cli::try_parse_from(["rewatch", "test", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Test));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_parse_watch_defaults() {
        let cli = Cli::try_parse_from(["rewatch", "watch"]).unwrap();
        if let Commands::Watch {
            with_tests,
            interactive,
            extension,
        } = cli.command
        {
            assert!(!with_tests);
            assert!(!interactive);
            assert_eq!(extension, None);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_parse_watch_with_args() {
        let cli = Cli::try_parse_from([
            "rewatch",
            "watch",
            "--with-tests",
            "-i",
            "--extension",
            "rs",
        ])
        .unwrap();
        if let Commands::Watch {
            with_tests,
            interactive,
            extension,
        } = cli.command
        {
            assert!(with_tests);
            assert!(interactive);
            assert_eq!(extension.as_deref(), Some("rs"));
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rewatch",
            "watch",
            "--root",
            "/tmp/project",
            "--config",
            "rewatch.toml",
            "--json",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/project"));
        assert_eq!(cli.config, Some(PathBuf::from("rewatch.toml")));
        assert!(cli.json);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["rewatch", "build", "--color", "sometimes"]).is_err());
    }
}
