//! View command handler.
//!
//! Implements the `view` subcommand: load one analysis record and show it in
//! the terminal overlay or export it as a text report.

use crate::config::{Validatable, ViewConfig};
use crate::model::AnalysisReport;
use crate::pipeline::{
    auto_detect_format, exit_codes, load_report, output_report, OutputTarget, ReportSource,
};
use crate::reports::{ReportConfig, ReportFormat};
use crate::tui::{run_report_tui, set_theme, ReportApp, Theme};
use anyhow::{bail, Context, Result};
use std::cell::Cell;

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<i32> {
    let errors = config.settings.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let source = ReportSource::from_arg(&config.report_path);
    let report = load_report(&source, config.settings.score.policy)
        .with_context(|| format!("Failed to load {}", source.display_name()))?;

    if !config.quiet {
        tracing::info!(
            "Loaded report: score {} ({})",
            report.match_score,
            crate::score::ScoreTier::from_score(report.match_score)
        );
    }

    let output = &config.settings.output;
    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);

    if format == ReportFormat::Tui {
        if matches!(target, OutputTarget::File(_)) {
            bail!("The tui format cannot be written to a file; pick html, markdown, json or summary");
        }
        run_overlay(&report, &config)?;
        return Ok(exit_codes::SUCCESS);
    }

    let report_config = ReportConfig::for_source(source.display_name());
    output_report(&report, output, format, &report_config, config.quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Show the interactive overlay until the user closes it.
fn run_overlay(report: &AnalysisReport, config: &ViewConfig) -> Result<()> {
    let tui = &config.settings.tui;
    set_theme(Theme::from_name(&tui.theme));

    let dismissals = Cell::new(0_u32);
    {
        let on_dismiss = Box::new(|| {
            dismissals.set(dismissals.get() + 1);
            tracing::debug!("dismiss requested");
        });
        let mut app = ReportApp::new(report, on_dismiss).with_narrow_width(tui.narrow_width);
        run_report_tui(&mut app, tui.tick_rate_ms).context("Terminal UI failed")?;
    }

    tracing::debug!(dismissals = dismissals.get(), "report overlay closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, OutputConfig, TuiConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "matchScore": 55,
        "verdict": "Partial Match",
        "summary": "Some overlap.",
        "matchingSkills": ["Rust"],
        "missingSkills": ["Kubernetes", "Go"],
        "keywordAnalysis": {"found": ["API"], "missing": ["gRPC"]},
        "strengths": ["Testing"],
        "recommendations": ["Add metrics", "Quantify impact"]
    }"#;

    fn config(report_path: PathBuf, format: ReportFormat, file: Option<PathBuf>) -> ViewConfig {
        ViewConfig {
            report_path,
            settings: AppConfig {
                output: OutputConfig {
                    format,
                    file,
                    no_color: true,
                },
                ..AppConfig::default()
            },
            quiet: true,
        }
    }

    #[test]
    fn test_view_writes_markdown_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("analysis.json");
        let output = tmp.path().join("report.md");
        std::fs::write(&input, REPORT).unwrap();

        let code = run_view(config(input, ReportFormat::Markdown, Some(output.clone()))).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let md = std::fs::read_to_string(output).unwrap();
        assert!(md.contains("## Missing Skills (2)"));
        assert!(md.contains("1. Add metrics\n2. Quantify impact"));
        assert!(md.contains("analysis.json"));
    }

    #[test]
    fn test_view_rejects_tui_to_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("analysis.json");
        std::fs::write(&input, REPORT).unwrap();

        let err = run_view(config(
            input,
            ReportFormat::Tui,
            Some(tmp.path().join("out.txt")),
        ))
        .unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_view_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = run_view(config(
            tmp.path().join("missing.json"),
            ReportFormat::Json,
            Some(tmp.path().join("out.json")),
        ))
        .unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }

    #[test]
    fn test_view_rejects_invalid_settings() {
        let tmp = TempDir::new().unwrap();
        let mut config = config(
            tmp.path().join("analysis.json"),
            ReportFormat::Json,
            None,
        );
        config.settings.tui = TuiConfig {
            theme: "neon".to_string(),
            ..TuiConfig::default()
        };
        let err = run_view(config).unwrap_err();
        assert!(err.to_string().contains("tui.theme"));
    }
}
