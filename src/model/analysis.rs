//! The analysis record and its JSON wire format.

use crate::error::{ErrorContext, ResumeReportError, Result};
use crate::score::ScorePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest score the analysis service is expected to produce.
pub const MIN_SCORE: i32 = 0;
/// Highest score the analysis service is expected to produce.
pub const MAX_SCORE: i32 = 100;

/// ATS keyword coverage split into keywords present in and absent from the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// A complete resume vs. job match report.
///
/// Field names follow the camelCase JSON produced by the analysis service.
/// Every field is required except `experienceGaps`, which defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall match score, expected in `0..=100`
    pub match_score: i32,
    /// Short qualitative verdict ("Strong Match", "Partial Match", ...)
    pub verdict: String,
    /// Free-text summary paragraph
    pub summary: String,
    /// Skills present in both resume and job
    pub matching_skills: Vec<String>,
    /// Required skills absent from the resume
    pub missing_skills: Vec<String>,
    pub keyword_analysis: KeywordAnalysis,
    #[serde(default)]
    pub experience_gaps: Vec<String>,
    pub strengths: Vec<String>,
    /// Ranked suggestions, most important first
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Parse a report from its JSON representation.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let report: Self = serde_json::from_str(content)?;
        tracing::debug!(
            score = report.match_score,
            matching = report.matching_skills.len(),
            missing = report.missing_skills.len(),
            recommendations = report.recommendations.len(),
            "parsed analysis report"
        );
        Ok(report)
    }

    /// Read and parse a report from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ResumeReportError::io(path, e))?;
        Self::from_json_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Whether the score lies inside the documented `0..=100` range.
    #[must_use]
    pub fn is_score_in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.match_score)
    }

    /// Apply the configured out-of-range policy to the score.
    ///
    /// In-range scores are never touched.
    pub fn with_score_policy(mut self, policy: ScorePolicy) -> Result<Self> {
        if self.is_score_in_range() {
            return Ok(self);
        }
        match policy {
            ScorePolicy::PassThrough => {
                tracing::debug!(score = self.match_score, "out-of-range score passed through");
            }
            ScorePolicy::Clamp => {
                let clamped = self.match_score.clamp(MIN_SCORE, MAX_SCORE);
                tracing::warn!(
                    "Match score {} is outside {}..={}, clamping to {}",
                    self.match_score,
                    MIN_SCORE,
                    MAX_SCORE,
                    clamped
                );
                self.match_score = clamped;
            }
            ScorePolicy::Reject => {
                return Err(ResumeReportError::score_out_of_range(self.match_score));
            }
        }
        Ok(self)
    }
}
