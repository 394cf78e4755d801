//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable report for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::score::Hue;
use crate::view::{Accent, ItemStyle, ReportDocument, Section};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "blue" => format!("\x1b[34m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "orange" => format!("\x1b[38;5;208m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn hue_color(hue: Hue) -> &'static str {
    match hue {
        Hue::Success => "green",
        Hue::Warning => "yellow",
        Hue::Caution => "orange",
        Hue::Danger => "red",
    }
}

const fn accent_color(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => "green",
        Accent::Red => "red",
        Accent::Blue => "blue",
        Accent::Orange => "orange",
        Accent::Emerald => "cyan",
        Accent::Purple => "magenta",
    }
}

/// Width of the text progress bar under the score
const BAR_WIDTH: usize = 30;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_section(&self, lines: &mut Vec<String>, section: &Section<'_>) {
        lines.push(String::new());
        lines.push(self.color(&section.title, "bold"));

        for group in &section.groups {
            if let Some(label) = group.label {
                lines.push(format!("  {}", self.color(label, "dim")));
            }
            if group.items.is_empty() {
                continue;
            }
            let color = accent_color(group.accent);
            match group.style {
                ItemStyle::Badge => {
                    let badges: Vec<String> = group
                        .items
                        .iter()
                        .map(|item| self.color(&item.display_text(), color))
                        .collect();
                    lines.push(format!("    {}", badges.join("  ")));
                }
                ItemStyle::List => {
                    for item in &group.items {
                        let prefix = item.prefix().unwrap_or_default();
                        lines.push(format!("    {} {}", self.color(&prefix, color), item.text));
                    }
                }
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        document: &ReportDocument<'_>,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(document.header.title, "bold"));
        lines.push(self.color(document.header.subtitle, "dim"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // Score
        let card = &document.score;
        let tone = hue_color(card.style.tier.hue());
        lines.push(format!(
            "{}  {}  {}",
            self.color(&format!("{}:", card.label), "cyan"),
            self.color(&card.score_text(), tone),
            self.color(card.verdict, tone)
        ));

        // Rounded, so a partial cell shows once half filled
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (card.arc.fraction() * BAR_WIDTH as f64).round() as usize;
        lines.push(format!(
            "{}{}",
            self.color(&"█".repeat(filled), tone),
            self.color(&"░".repeat(BAR_WIDTH - filled), "dim")
        ));

        if !card.summary.is_empty() {
            lines.push(card.summary.to_string());
        }

        for section in &document.sections {
            self.push_section(&mut lines, section);
        }

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisReport, KeywordAnalysis};

    fn report(score: i32) -> AnalysisReport {
        AnalysisReport {
            match_score: score,
            verdict: "Fair Match".to_string(),
            summary: "Some gaps.".to_string(),
            matching_skills: vec!["Rust".to_string(), "SQL".to_string()],
            missing_skills: vec!["Kubernetes".to_string()],
            keyword_analysis: KeywordAnalysis {
                found: vec!["API".to_string()],
                missing: vec!["CI/CD".to_string()],
            },
            experience_gaps: vec!["No cloud experience".to_string()],
            strengths: vec!["Testing".to_string()],
            recommendations: vec!["Add metrics".to_string(), "Quantify impact".to_string()],
        }
    }

    fn render(report: &AnalysisReport, colored: bool) -> String {
        let doc = ReportDocument::build(report);
        let reporter = if colored {
            SummaryReporter::new()
        } else {
            SummaryReporter::new().no_color()
        };
        reporter.generate(&doc, &ReportConfig::default()).unwrap()
    }

    #[test]
    fn test_plain_output_lists_sections_in_order() {
        let output = render(&report(45), false);
        assert!(!output.contains("\x1b["));
        assert!(output.contains("Match Score:  45/100  Fair Match"));

        let order = [
            "Matching Skills (2)",
            "Missing Skills (1)",
            "ATS Keyword Analysis",
            "Experience Gaps",
            "Your Strengths",
            "Recommendations to Improve",
        ];
        let positions: Vec<usize> = order.iter().map(|t| output.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(output.contains("✓ Rust  ✓ SQL"));
        assert!(output.contains("+ CI/CD"));
        assert!(output.contains("    1. Add metrics"));
        assert!(output.contains("    2. Quantify impact"));
        assert!(output.contains("    • No cloud experience"));
    }

    #[test]
    fn test_tier_color_applied_to_score() {
        let output = render(&report(45), true);
        assert!(output.contains("\x1b[38;5;208m45/100\x1b[0m"));
        let output = render(&report(90), true);
        assert!(output.contains("\x1b[32m90/100\x1b[0m"));
    }

    #[test]
    fn test_progress_bar_clamps() {
        let output = render(&report(150), false);
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
        let output = render(&report(-5), false);
        assert!(output.contains(&"░".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_empty_groups_leave_only_the_title() {
        let mut report = report(45);
        report.missing_skills.clear();
        report.strengths.clear();
        let output = render(&report, false);
        assert!(output.contains("Missing Skills (0)\n\nATS Keyword Analysis"));
        assert!(output.contains("Your Strengths\n\nRecommendations to Improve"));
        assert!(!output.contains("None"));
    }

    #[test]
    fn test_missing_keywords_colored_orange() {
        let output = render(&report(45), true);
        assert!(output.contains(&ansi_color("+ CI/CD", "orange", true)));
        assert!(output.contains(&ansi_color("API", "blue", true)));
    }
}
