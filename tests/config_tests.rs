//! Configuration file loading, merging and validation.

use resume_report::{
    config::{
        discover_config_file, generate_example_config, load_config_file, AppConfig,
        CliOverrides, TuiConfig,
    },
    ReportFormat, ScorePolicy, Validatable,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".resume-report.yaml");
    fs::write(
        &path,
        "output:\n  format: markdown\ntui:\n  theme: light\n  narrow_width: 100\nscore:\n  policy: clamp\n",
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.output.format, ReportFormat::Markdown);
    assert_eq!(config.tui.theme, "light");
    assert_eq!(config.tui.narrow_width, 100);
    assert_eq!(config.tui.tick_rate_ms, 250);
    assert_eq!(config.score.policy, ScorePolicy::Clamp);
    assert!(config.is_valid());
}

#[test]
fn test_explicit_path_wins_discovery() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "tui:\n  theme: high-contrast\n").unwrap();

    assert_eq!(discover_config_file(Some(&path)), Some(path.clone()));
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(Some(&path), &CliOverrides::default());
    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.tui.theme, "high-contrast");
}

#[test]
fn test_cli_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "output:\n  format: html\nscore:\n  policy: reject\n").unwrap();

    let overrides = CliOverrides {
        format: Some(ReportFormat::Json),
        ..CliOverrides::default()
    };
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(config.output.format, ReportFormat::Json);
    // Unset CLI values leave the file value alone
    assert_eq!(config.score.policy, ScorePolicy::Reject);
}

#[test]
fn test_cli_default_values_override_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(
        &path,
        "output:\n  format: html\ntui:\n  theme: light\nscore:\n  policy: reject\n",
    )
    .unwrap();

    let overrides = CliOverrides {
        format: Some(ReportFormat::Auto),
        theme: Some("dark".to_string()),
        score_policy: Some(ScorePolicy::PassThrough),
        ..CliOverrides::default()
    };
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);
    assert_eq!(config.output.format, ReportFormat::Auto);
    assert_eq!(config.tui.theme, "dark");
    assert_eq!(config.score.policy, ScorePolicy::PassThrough);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "tui: [not, a, map").unwrap();
    assert!(load_config_file(&path).is_err());
}

#[test]
fn test_invalid_values_are_reported() {
    let config = AppConfig {
        tui: TuiConfig {
            theme: "neon".to_string(),
            tick_rate_ms: 0,
            ..TuiConfig::default()
        },
        ..AppConfig::default()
    };
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, ["tui.theme", "tui.tick_rate_ms"]);
}

#[test]
fn test_example_config_is_loadable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".resume-report.yaml");
    fs::write(&path, generate_example_config()).unwrap();
    assert_eq!(load_config_file(&path).unwrap(), AppConfig::default());
}
