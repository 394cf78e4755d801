//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive terminal overlay
    Tui,
    /// Standalone HTML page
    Html,
    /// Human-readable Markdown
    Markdown,
    /// Structured JSON output
    Json,
    /// Colored terminal summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Config with metadata naming the source file
    pub fn for_source(source_path: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                source_path: Some(source_path.into()),
                ..ReportMetadata::new()
            },
        }
    }
}

/// Metadata included in exported reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Path of the analysis record the report was built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp; filled in at render time when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// The stored timestamp, or the current UTC time.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.clone().unwrap_or_else(|| {
            chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
        })
    }
}
