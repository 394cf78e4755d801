//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::view::{ItemGroup, ItemStyle, ReportDocument, Section};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the metadata footer
    include_footer: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_footer: true,
        }
    }

    /// Leave out the generated-by footer
    #[must_use]
    pub const fn without_footer(mut self) -> Self {
        self.include_footer = false;
        self
    }

    fn write_group(md: &mut String, group: &ItemGroup<'_>) -> Result<(), ReportError> {
        if let Some(label) = group.label {
            writeln!(md, "**{}**", escape_markdown_inline(label))?;
            writeln!(md)?;
        }

        if group.items.is_empty() {
            return Ok(());
        }

        match group.style {
            ItemStyle::Badge => {
                let badges: Vec<String> = group
                    .items
                    .iter()
                    .map(|item| code_span(&item.display_text()))
                    .collect();
                writeln!(md, "{}", badges.join(" "))?;
            }
            ItemStyle::List => {
                for item in &group.items {
                    let text = escape_markdown_list(item.text);
                    match item.rank {
                        Some(rank) => writeln!(md, "{rank}. {text}")?,
                        None => writeln!(md, "- {text}")?,
                    }
                }
            }
        }
        writeln!(md)?;
        Ok(())
    }

    fn write_section(md: &mut String, section: &Section<'_>) -> Result<(), ReportError> {
        writeln!(md, "## {}", escape_markdown_inline(&section.title))?;
        writeln!(md)?;
        for group in &section.groups {
            Self::write_group(md, group)?;
        }
        Ok(())
    }
}

/// Inline code that keeps backticks in `text` intact.
///
/// The fence is one backtick longer than the longest run inside the text.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        document: &ReportDocument<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let card = &document.score;

        writeln!(md, "# {}", escape_markdown_inline(document.header.title))?;
        writeln!(md)?;
        writeln!(md, "_{}_", escape_markdown_inline(document.header.subtitle))?;
        writeln!(md)?;

        writeln!(md, "| {} | Tier | Verdict |", card.label)?;
        writeln!(md, "|---|---|---|")?;
        writeln!(
            md,
            "| **{}** | {} | {} |",
            card.score_text(),
            card.style.tier.label(),
            escape_markdown_inline(card.verdict)
        )?;
        writeln!(md)?;

        if !card.summary.is_empty() {
            writeln!(md, "{}", escape_markdown_inline(card.summary))?;
            writeln!(md)?;
        }

        for section in &document.sections {
            Self::write_section(&mut md, section)?;
        }

        if self.include_footer {
            writeln!(md, "---")?;
            writeln!(md)?;
            write!(
                md,
                "_Generated by resume-report v{} on {}",
                config.metadata.tool_version,
                config.metadata.timestamp()
            )?;
            if let Some(ref source) = config.metadata.source_path {
                write!(md, " from `{source}`")?;
            }
            writeln!(md, "_")?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
