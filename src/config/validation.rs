//! Configuration validation for resume-report.

use super::types::{AppConfig, OutputConfig, ScoreConfig, TuiConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors.extend(self.score.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }

            if self.format == ReportFormat::Tui {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: "The tui format cannot be written to a file".to_string(),
                });
            }
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let valid_themes = ["dark", "light", "high-contrast"];
        if !valid_themes.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    valid_themes.join(", ")
                ),
            });
        }

        if self.tick_rate_ms == 0 {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: "Tick rate must be greater than 0".to_string(),
            });
        }

        errors
    }
}

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Every policy variant is valid
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_tui_config_validation() {
        let invalid = TuiConfig {
            theme: "solarized".to_string(),
            tick_rate_ms: 0,
            ..TuiConfig::default()
        };
        let errors = invalid.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "tui.theme");
        assert_eq!(errors[1].field, "tui.tick_rate_ms");

        let valid = TuiConfig {
            theme: "high-contrast".to_string(),
            ..TuiConfig::default()
        };
        assert!(valid.is_valid());
    }

    #[test]
    fn test_output_config_validation() {
        let missing_parent = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.html")),
            ..OutputConfig::default()
        };
        let errors = missing_parent.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Parent directory"));

        let tui_to_file = OutputConfig {
            format: ReportFormat::Tui,
            file: Some(PathBuf::from("report.txt")),
            no_color: false,
        };
        assert!(!tui_to_file.is_valid());
    }

    #[test]
    fn test_app_config_collects_nested_errors() {
        let config = AppConfig {
            tui: TuiConfig {
                tick_rate_ms: 0,
                ..TuiConfig::default()
            },
            ..AppConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "tui.tick_rate_ms: Tick rate must be greater than 0");
    }
}
