//! Configuration module for resume-report.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.resume-report.yaml` file in your project root or
//! `~/.config/resume-report/`:
//!
//! ```yaml
//! output:
//!   format: html
//! tui:
//!   theme: light
//! score:
//!   policy: clamp
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, CliOverrides, OutputConfig, ScoreConfig, TuiConfig, ViewConfig, DEFAULT_NARROW_WIDTH,
    DEFAULT_TICK_RATE_MS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.resume-report.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("output").is_some());
        assert!(properties.get("tui").is_some());
        assert!(properties.get("score").is_some());
    }
}
