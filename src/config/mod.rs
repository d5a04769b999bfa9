//! Animation configuration (`animate.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [indicator] [head] [mouth] [durations] [label]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # path expansion
//! └── mod.rs         # AnimConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! input = "original.svg"
//! output = "animated_result.svg"
//!
//! [indicator]
//! flash = "#ffffff"
//!
//! [durations]
//! head = 3.0
//! ```
//!
//! The file is optional. Without it, the built-in defaults reproduce the
//! stock LyricsSync logo animation.

pub mod section;
pub mod types;
mod util;

pub use section::{Durations, HeadColors, IndicatorColors, LabelConfig, MouthColors};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{expand_tilde, resolve_path};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "animate.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration: every value the pipeline needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Source SVG
    pub input: PathBuf,

    /// Animated SVG to write
    pub output: PathBuf,

    /// Eye indicator colors
    pub indicator: IndicatorColors,

    /// Head indicator colors
    pub head: HeadColors,

    /// Mouth segment colors
    pub mouth: MouthColors,

    /// Label oscillation
    pub label: LabelConfig,

    /// Animation periods
    pub durations: Durations,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            input: PathBuf::from("original.svg"),
            output: PathBuf::from("animated_result.svg"),
            indicator: IndicatorColors::default(),
            head: HeadColors::default(),
            mouth: MouthColors::default(),
            label: LabelConfig::default(),
            durations: Durations::default(),
        }
    }
}

impl AnimConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist; the default `animate.toml` is
    /// optional. CLI paths override the file and stay relative to the cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Config file to read, if any.
    fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
        match &cli.config {
            Some(path) => Some(expand_tilde(path)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                path.exists().then_some(path)
            }
        }
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Relative `input`/`output` resolve against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.input = resolve_path(base, &config.input);
        config.output = resolve_path(base, &config.output);
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI path overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = expand_tilde(input);
        }
        if let Some(output) = &cli.output {
            self.output = expand_tilde(output);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.input == self.output {
            diag.error_with_hint(
                FieldPath::new("output"),
                format!("output would overwrite the input `{}`", self.input.display()),
                "choose a different output path",
            );
        }

        self.indicator.validate(&mut diag);
        self.head.validate(&mut diag);
        self.mouth.validate(&mut diag);
        self.label.validate(&mut diag);
        self.durations.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AnimConfig {
    let (parsed, ignored) = AnimConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
