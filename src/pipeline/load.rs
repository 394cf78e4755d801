//! Report loading stage.

use crate::error::{ErrorContext, Result};
use crate::model::AnalysisReport;
use crate::score::ScorePolicy;
use std::io::Read;
use std::path::Path;

/// Where an analysis record is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource<'a> {
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(&'a Path),
}

impl<'a> ReportSource<'a> {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(arg: &'a Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    /// Name used in logs and report metadata
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Load an analysis record and apply the score policy.
pub fn load_report(source: &ReportSource<'_>, policy: ScorePolicy) -> Result<AnalysisReport> {
    tracing::debug!(source = %source.display_name(), %policy, "loading analysis report");

    let report = match source {
        ReportSource::File(path) => AnalysisReport::from_path(path)?,
        ReportSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("reading report from stdin")?;
            AnalysisReport::from_json_str(&content)?
        }
    };

    report.with_score_policy(policy)
}

/// Parse an analysis record from a string and apply the score policy.
pub fn load_report_str(content: &str, policy: ScorePolicy) -> Result<AnalysisReport> {
    AnalysisReport::from_json_str(content)?.with_score_policy(policy)
}
