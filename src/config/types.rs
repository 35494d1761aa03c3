//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ToolchainSpec;
use crate::error::RewatchResult;

use super::loader::{self, ConfigWarning};

/// Toolchain invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,

    #[serde(default = "default_test_args")]
    pub test_args: Vec<String>,

    #[serde(default = "default_verbose_test_args")]
    pub verbose_test_args: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            build_args: default_build_args(),
            test_args: default_test_args(),
            verbose_test_args: default_verbose_test_args(),
        }
    }
}

fn default_program() -> String {
    "go".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["install".to_string()]
}

fn default_test_args() -> Vec<String> {
    vec!["test".to_string()]
}

fn default_verbose_test_args() -> Vec<String> {
    vec!["-v".to_string()]
}

/// Build step configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    /// Treat any stderr output from the build as a failure, even on exit 0
    #[serde(default)]
    pub stderr_is_failure: bool,
}

/// Watch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub with_tests: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            with_tests: false,
        }
    }
}

fn default_extension() -> String {
    "go".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RewatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RewatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> RewatchResult<(Self, Vec<ConfigWarning>)> {
        match path {
            Some(path) => loader::load_with_warnings(path),
            None => Ok((Self::default(), Vec::new())),
        }
    }

    pub fn toolchain_spec(&self) -> ToolchainSpec {
        ToolchainSpec::new(self.toolchain.program.clone())
            .with_build_args(self.toolchain.build_args.clone())
            .with_test_args(self.toolchain.test_args.clone())
            .with_verbose_test_args(self.toolchain.verbose_test_args.clone())
    }
}
