//! Report output stage.
//!
//! Lays the report out once and writes it with the selected text generator.

use crate::config::OutputConfig;
use crate::model::AnalysisReport;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use crate::view::ReportDocument;
use anyhow::{Context, Result};

use super::{should_use_color, write_output, OutputTarget};

/// Render a report in a text format.
///
/// `format` must already be resolved; `Auto` renders the summary and `Tui`
/// is rejected by the generator factory.
pub fn render_report(
    report: &AnalysisReport,
    format: ReportFormat,
    use_color: bool,
    report_config: &ReportConfig,
) -> Result<String> {
    let reporter = create_reporter_with_options(format, use_color)?;
    let document = ReportDocument::build(report);
    tracing::debug!(
        %format,
        sections = document.sections.len(),
        "rendering report"
    );
    reporter
        .generate(&document, report_config)
        .with_context(|| format!("Failed to render {format} report"))
}

/// Render a report and write it to the configured destination.
pub fn output_report(
    report: &AnalysisReport,
    output: &OutputConfig,
    format: ReportFormat,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    // Color codes only make sense on a terminal stream
    let use_color = matches!(target, OutputTarget::Stdout) && should_use_color(output.no_color);

    let rendered = render_report(report, format, use_color, report_config)?;
    write_output(&rendered, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeywordAnalysis;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn report() -> AnalysisReport {
        AnalysisReport {
            match_score: 85,
            verdict: "Strong Match".to_string(),
            summary: "Great fit.".to_string(),
            matching_skills: vec!["Rust".to_string()],
            missing_skills: vec![],
            keyword_analysis: KeywordAnalysis::default(),
            experience_gaps: vec![],
            strengths: vec!["Ownership".to_string()],
            recommendations: vec!["Add metrics".to_string()],
        }
    }

    #[test]
    fn test_render_report_rejects_tui() {
        let err = render_report(&report(), ReportFormat::Tui, false, &ReportConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("tui"));
    }

    #[test]
    fn test_output_report_writes_file_without_color() {
        let tmp = TempDir::new().unwrap();
        let path: PathBuf = tmp.path().join("report.txt");
        let output = OutputConfig {
            format: ReportFormat::Summary,
            file: Some(path.clone()),
            no_color: false,
        };
        output_report(
            &report(),
            &output,
            ReportFormat::Summary,
            &ReportConfig::default(),
            true,
        )
        .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("Match Score:  85/100  Strong Match"));
        assert!(!written.contains("\x1b["));
    }
}
