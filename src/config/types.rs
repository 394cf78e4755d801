//! Configuration types for resume-report.

use crate::reports::ReportFormat;
use crate::score::ScorePolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default event poll interval for the TUI, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
/// Default terminal width below which the skill panels stack.
pub const DEFAULT_NARROW_WIDTH: u16 = 80;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Score handling on load
    pub score: ScoreConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
    /// Terminal width below which the skill panels stack vertically
    pub narrow_width: u16,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            narrow_width: DEFAULT_NARROW_WIDTH,
        }
    }
}

/// How reports are checked when loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoreConfig {
    /// Handling of scores outside 0..=100
    pub policy: ScorePolicy,
}

/// Values given explicitly on the command line.
///
/// `None` means the flag was absent; any `Some` wins over the config file,
/// including a value equal to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    /// `--no-color` can only switch colors off
    pub no_color: bool,
    pub theme: Option<String>,
    pub score_policy: Option<ScorePolicy>,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the view command
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Analysis record to render; `-` reads stdin
    pub report_path: PathBuf,
    /// Effective settings (file merged with CLI overrides)
    pub settings: AppConfig,
    /// Suppress non-essential output
    pub quiet: bool,
}
