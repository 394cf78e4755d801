//! HTML report generator.
//!
//! Produces a standalone page laid out like the terminal overlay: a header
//! with a close control, the tier-styled score card with an SVG progress
//! ring, and the report sections in document order.

use super::escape::escape_html;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::score::TierStyle;
use crate::view::{ItemGroup, ItemStyle, LayoutRow, ReportDocument, ScoreCard, Section};
use std::fmt::Write;

/// Radius of the progress ring; 2πr ≈ 251, the arc circumference.
const RING_RADIUS: u32 = 40;

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Omit the inline stylesheet (for embedding into a page that provides it)
    #[must_use]
    pub fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #0f1019;
                --card-bg: rgba(255, 255, 255, 0.03);
                --text-color: #cbd5e1;
                --text-muted: #94a3b8;
                --border-color: rgba(255, 255, 255, 0.1);

                --success: #4ade80;
                --success-bright: #10b981;
                --success-tint: rgba(34, 197, 94, 0.1);
                --success-edge: rgba(34, 197, 94, 0.2);
                --warning: #facc15;
                --warning-bright: #f59e0b;
                --warning-tint: rgba(234, 179, 8, 0.1);
                --warning-edge: rgba(234, 179, 8, 0.2);
                --caution: #fb923c;
                --caution-bright: #f59e0b;
                --caution-tint: rgba(249, 115, 22, 0.1);
                --caution-edge: rgba(249, 115, 22, 0.2);
                --danger: #f87171;
                --danger-bright: #f43f5e;
                --danger-tint: rgba(239, 68, 68, 0.1);
                --danger-edge: rgba(239, 68, 68, 0.2);
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: rgba(0, 0, 0, 0.6);
                color: var(--text-color);
                margin: 0;
                padding: 16px;
                line-height: 1.6;
            }

            .overlay {
                max-width: 768px;
                margin: 0 auto;
                background-color: var(--bg-color);
                border: 1px solid var(--border-color);
                border-radius: 16px;
            }

            .header {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 24px;
                border-bottom: 1px solid var(--border-color);
            }

            .header h1 { margin: 0; font-size: 1.25em; color: #fff; }
            .header p { margin: 0; font-size: 0.875em; color: var(--text-muted); }

            .dismiss {
                background: none;
                border: none;
                color: var(--text-muted);
                font-size: 1.25em;
                cursor: pointer;
                border-radius: 12px;
                padding: 4px 10px;
            }
            .dismiss:hover { color: #fff; background: rgba(255, 255, 255, 0.1); }

            .content { padding: 24px; display: grid; gap: 24px; }

            .score-card { border: 1px solid; border-radius: 12px; padding: 24px; }
            .score-row { display: flex; align-items: center; justify-content: space-between; }
            .score-label { font-size: 0.8em; text-transform: uppercase; letter-spacing: 0.08em; color: var(--text-muted); margin: 0; }
            .score-value { font-size: 3em; font-weight: bold; }
            .score-max { font-size: 1.25em; color: #64748b; }
            .verdict { font-weight: 600; margin: 8px 0 0; }
            .summary { margin: 16px 0 0; font-size: 0.9em; }
            .score-bar { height: 4px; border-radius: 2px; margin-top: 16px; }
            .ring { width: 96px; height: 96px; transform: rotate(-90deg); }
            .ring .track { stroke: rgba(255, 255, 255, 0.05); }

            .fg-success { color: var(--success); }
            .fg-warning { color: var(--warning); }
            .fg-caution { color: var(--caution); }
            .fg-danger { color: var(--danger); }
            .tone-success-tinted { background: var(--success-tint); border-color: var(--success-edge); }
            .tone-warning-tinted { background: var(--warning-tint); border-color: var(--warning-edge); }
            .tone-caution-tinted { background: var(--caution-tint); border-color: var(--caution-edge); }
            .tone-danger-tinted { background: var(--danger-tint); border-color: var(--danger-edge); }
            .gradient-success { background: linear-gradient(90deg, var(--success), var(--success-bright)); }
            .gradient-warning { background: linear-gradient(90deg, var(--warning), var(--warning-bright)); }
            .gradient-caution { background: linear-gradient(90deg, var(--caution), var(--caution-bright)); }
            .gradient-danger { background: linear-gradient(90deg, var(--danger), var(--danger-bright)); }

            .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
            @media (max-width: 768px) {
                .grid { grid-template-columns: 1fr; }
            }

            .card {
                background-color: var(--card-bg);
                border: 1px solid var(--border-color);
                border-radius: 12px;
                padding: 16px 20px;
            }
            .card h2 { font-size: 0.9em; font-weight: 600; margin: 0 0 12px; }
            .group-label { font-size: 0.75em; text-transform: uppercase; letter-spacing: 0.08em; color: var(--text-muted); margin: 12px 0 8px; }

            .badges { display: flex; flex-wrap: wrap; gap: 8px; }
            .badge { display: inline-block; padding: 2px 8px; border-radius: 6px; font-size: 0.75em; border: 1px solid; }

            ul.items { list-style: none; padding: 0; margin: 0; display: grid; gap: 8px; font-size: 0.9em; }
            ul.items li::before { content: "\2022"; margin-right: 8px; }
            ol.ranked { list-style: none; padding: 0; margin: 0; display: grid; gap: 12px; font-size: 0.9em; }
            ol.ranked li { padding: 12px; border-radius: 8px; background: rgba(168, 85, 247, 0.05); border: 1px solid rgba(168, 85, 247, 0.1); }
            .rank { color: #c084fc; font-weight: bold; font-size: 0.8em; margin-right: 8px; }

            .accent-green { color: #4ade80; border-color: rgba(34, 197, 94, 0.3); }
            .accent-red { color: #f87171; border-color: rgba(239, 68, 68, 0.3); }
            .accent-blue { color: #60a5fa; border-color: rgba(59, 130, 246, 0.2); }
            .accent-orange { color: #fb923c; border-color: rgba(249, 115, 22, 0.3); }
            .accent-emerald { color: #34d399; border-color: rgba(16, 185, 129, 0.3); }
            .accent-purple { color: #c084fc; border-color: rgba(168, 85, 247, 0.3); }

            .footer {
                padding: 16px 24px;
                border-top: 1px solid var(--border-color);
                font-size: 0.8em;
                color: var(--text-muted);
            }
        </style>
        "#
    }

    fn write_header(html: &mut String, document: &ReportDocument<'_>) -> Result<(), ReportError> {
        let header = &document.header;
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <div>")?;
        writeln!(html, "        <h1>{}</h1>", escape_html(header.title))?;
        writeln!(html, "        <p>{}</p>", escape_html(header.subtitle))?;
        writeln!(html, "    </div>")?;
        writeln!(
            html,
            "    <button class=\"dismiss\" title=\"{}\" aria-label=\"{}\" onclick=\"document.getElementById('report').remove()\">&#x2715;</button>",
            escape_html(header.dismiss_label),
            escape_html(header.dismiss_label)
        )?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_score_card(html: &mut String, card: &ScoreCard<'_>) -> Result<(), ReportError> {
        let TierStyle {
            tier,
            foreground,
            gradient,
            background,
        } = card.style;

        writeln!(
            html,
            "<div class=\"score-card tone-{background}\" data-tier=\"{tier}\">"
        )?;
        writeln!(html, "    <div class=\"score-row\">")?;
        writeln!(html, "        <div>")?;
        writeln!(
            html,
            "            <p class=\"score-label\">{}</p>",
            escape_html(card.label)
        )?;
        writeln!(
            html,
            "            <span class=\"score-value fg-{foreground}\">{}</span><span class=\"score-max\">/100</span>",
            card.score
        )?;
        writeln!(
            html,
            "            <p class=\"verdict fg-{foreground}\">{}</p>",
            escape_html(card.verdict)
        )?;
        writeln!(html, "        </div>")?;
        writeln!(
            html,
            "        <svg class=\"ring\" viewBox=\"0 0 100 100\" role=\"img\" aria-label=\"{}\">",
            card.score_text()
        )?;
        writeln!(
            html,
            "            <circle class=\"track\" cx=\"50\" cy=\"50\" r=\"{RING_RADIUS}\" fill=\"none\" stroke-width=\"8\" />"
        )?;
        writeln!(
            html,
            "            <circle class=\"fg-{foreground}\" cx=\"50\" cy=\"50\" r=\"{RING_RADIUS}\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"8\" stroke-linecap=\"round\" stroke-dasharray=\"{}\" />",
            card.arc.dash_array()
        )?;
        writeln!(html, "        </svg>")?;
        writeln!(html, "    </div>")?;
        writeln!(
            html,
            "    <div class=\"score-bar gradient-{}\" style=\"width: {:.1}%\"></div>",
            gradient.start.hue().name(),
            card.arc.fraction() * 100.0
        )?;
        writeln!(
            html,
            "    <p class=\"summary\">{}</p>",
            escape_html(card.summary)
        )?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_group(html: &mut String, group: &ItemGroup<'_>) -> Result<(), ReportError> {
        if let Some(label) = group.label {
            writeln!(html, "    <p class=\"group-label\">{}</p>", escape_html(label))?;
        }

        match group.style {
            ItemStyle::Badge => {
                let accent = group.accent.name();
                writeln!(html, "    <div class=\"badges\">")?;
                for item in &group.items {
                    writeln!(
                        html,
                        "        <span class=\"badge accent-{accent}\">{}</span>",
                        escape_html(&item.display_text())
                    )?;
                }
                writeln!(html, "    </div>")?;
            }
            ItemStyle::List if group.items.iter().any(|i| i.rank.is_some()) => {
                writeln!(html, "    <ol class=\"ranked\">")?;
                for item in &group.items {
                    let rank = item.prefix().unwrap_or_default();
                    writeln!(
                        html,
                        "        <li><span class=\"rank\">{}</span>{}</li>",
                        escape_html(&rank),
                        escape_html(item.text)
                    )?;
                }
                writeln!(html, "    </ol>")?;
            }
            ItemStyle::List => {
                writeln!(html, "    <ul class=\"items\">")?;
                for item in &group.items {
                    writeln!(html, "        <li>{}</li>", escape_html(item.text))?;
                }
                writeln!(html, "    </ul>")?;
            }
        }
        Ok(())
    }

    fn write_section(html: &mut String, section: &Section<'_>) -> Result<(), ReportError> {
        let accent = section.accent.name();
        writeln!(
            html,
            "<div class=\"card accent-{accent}\" id=\"{}\">",
            section_id(section)
        )?;
        writeln!(
            html,
            "    <h2 class=\"accent-{accent}\">{}</h2>",
            escape_html(&section.title)
        )?;
        for group in &section.groups {
            Self::write_group(html, group)?;
        }
        writeln!(html, "</div>")?;
        Ok(())
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable element id derived from the section kind, e.g. `missing-skills`.
fn section_id(section: &Section<'_>) -> String {
    serde_json::to_value(section.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| "section".to_string())
}

impl ReportGenerator for HtmlReporter {
    fn generate(
        &self,
        document: &ReportDocument<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = document.header.title;

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"overlay\" id=\"report\">")?;

        Self::write_header(&mut html, document)?;

        writeln!(html, "<div class=\"content\">")?;
        Self::write_score_card(&mut html, &document.score)?;

        for row in document.layout_rows() {
            match row {
                LayoutRow::Pair(left, right) => {
                    writeln!(html, "<div class=\"grid\">")?;
                    Self::write_section(&mut html, left)?;
                    Self::write_section(&mut html, right)?;
                    writeln!(html, "</div>")?;
                }
                LayoutRow::Single(section) => Self::write_section(&mut html, section)?,
            }
        }
        writeln!(html, "</div>")?;

        writeln!(html, "<div class=\"footer\">")?;
        write!(
            html,
            "    Generated by resume-report v{} on {}",
            config.metadata.tool_version,
            escape_html(&config.metadata.timestamp())
        )?;
        if let Some(ref source) = config.metadata.source_path {
            write!(html, " from {}", escape_html(source))?;
        }
        writeln!(html)?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisReport, KeywordAnalysis};

    fn report() -> AnalysisReport {
        AnalysisReport {
            match_score: 30,
            verdict: "Weak <Match>".to_string(),
            summary: "Needs work.".to_string(),
            matching_skills: vec!["Rust".to_string()],
            missing_skills: vec!["Kubernetes".to_string(), "Go".to_string()],
            keyword_analysis: KeywordAnalysis {
                found: vec!["API".to_string()],
                missing: vec!["CI/CD".to_string()],
            },
            experience_gaps: vec!["No cloud experience".to_string()],
            strengths: vec!["Testing".to_string()],
            recommendations: vec!["Add metrics".to_string(), "Quantify impact".to_string()],
        }
    }

    fn render(report: &AnalysisReport) -> String {
        let doc = ReportDocument::build(report);
        HtmlReporter::new()
            .generate(&doc, &ReportConfig::default())
            .unwrap()
    }

    #[test]
    fn test_score_card_uses_tier_tokens() {
        let html = render(&report());
        assert!(html.contains("data-tier=\"poor\""));
        assert!(html.contains("tone-danger-tinted"));
        assert!(html.contains("score-value fg-danger\">30<"));
        assert!(html.contains("verdict fg-danger"));
        assert!(html.contains("stroke-dasharray=\"75.3 251\""));
        assert!(html.contains("gradient-danger"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render(&report());
        assert!(html.contains("Weak &lt;Match&gt;"));
        assert!(!html.contains("Weak <Match>"));
    }

    #[test]
    fn test_sections_and_counts() {
        let html = render(&report());
        assert!(html.contains("Missing Skills (2)"));
        assert!(html.contains("Matching Skills (1)"));
        assert!(html.contains("id=\"experience-gaps\""));
        assert!(html.contains("<span class=\"rank\">1.</span>Add metrics"));
        assert!(html.contains("<span class=\"rank\">2.</span>Quantify impact"));
        let kube = html.find("✗ Kubernetes").unwrap();
        let go = html.find("✗ Go").unwrap();
        assert!(kube < go);
    }

    #[test]
    fn test_missing_keyword_badges_are_orange() {
        let html = render(&report());
        assert!(html.contains("<span class=\"badge accent-orange\">+ CI/CD</span>"));
        assert!(html.contains("<span class=\"badge accent-blue\">API</span>"));
        assert!(html.contains("<span class=\"badge accent-red\">✗ Go</span>"));
    }

    #[test]
    fn test_gaps_section_absent_when_empty() {
        let mut report = report();
        report.experience_gaps.clear();
        let html = render(&report);
        assert!(!html.contains("Experience Gaps"));
        assert!(!html.contains("id=\"experience-gaps\""));
    }

    #[test]
    fn test_dismiss_control_present() {
        let html = render(&report());
        assert!(html.contains("class=\"dismiss\""));
        assert!(html.contains("Resume Analysis Report"));
        assert!(html.contains("ATS Compatibility &amp; Gap Analysis"));
    }

    #[test]
    fn test_without_styles() {
        let report = report();
        let doc = ReportDocument::build(&report);
        let html = HtmlReporter::new()
            .without_styles()
            .generate(&doc, &ReportConfig::default())
            .unwrap();
        assert!(!html.contains("<style>"));
    }
}
