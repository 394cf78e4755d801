//! Report generation for analysis reports.
//!
//! Every generator renders the same [`ReportDocument`], so section order,
//! counts and the conditional experience-gaps section are identical across
//! formats:
//! - HTML: standalone page mirroring the terminal overlay
//! - Markdown: human-readable documentation
//! - JSON: the laid-out document plus metadata
//! - Summary: compact colored terminal output
//!
//! # Security
//!
//! Report text comes from an external analysis service. The `escape` module
//! must be applied to every string embedded in HTML or Markdown output.

pub mod escape;
mod html;
mod json;
mod markdown;
mod summary;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::view::ReportDocument;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Output format not supported here: {0}")]
    UnsupportedFormat(ReportFormat),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a laid-out report
    fn generate(
        &self,
        document: &ReportDocument<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        document: &ReportDocument<'_>,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(document, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
pub fn create_reporter(format: ReportFormat) -> Result<Box<dyn ReportGenerator>, ReportError> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control.
///
/// `Auto` resolves to the summary here; the TUI is not a text report and
/// is rejected.
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Tui => return Err(ReportError::UnsupportedFormat(format)),
    };
    Ok(reporter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Html,
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Summary,
        ] {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.format(), format);
        }
        assert_eq!(
            create_reporter(ReportFormat::Auto).unwrap().format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_tui_is_not_a_text_report() {
        assert!(matches!(
            create_reporter(ReportFormat::Tui),
            Err(ReportError::UnsupportedFormat(ReportFormat::Tui))
        ));
    }
}
