//! Report view: the renderer-independent layout of an analysis report.
//!
//! [`ReportDocument::build`] turns an [`AnalysisReport`] into a header, a score
//! card and an ordered list of sections. Every renderer (terminal overlay,
//! HTML, Markdown, JSON, summary) walks the same document, so the section
//! rules live here exactly once:
//!
//! - header and score card are always present
//! - matching and missing skills are always present, titled with their counts
//! - keyword analysis is always present with its found and missing groups
//! - experience gaps appear only when there is at least one gap
//! - strengths and recommendations are always present; recommendations are ranked
//!
//! Items are borrowed from the report in input order. Nothing is sorted,
//! deduplicated or filtered.

mod overlay;

pub use overlay::ReportView;

use crate::model::AnalysisReport;
use crate::score::{classify, ProgressArc, TierStyle};
use serde::Serialize;

pub const REPORT_TITLE: &str = "Resume Analysis Report";
pub const REPORT_SUBTITLE: &str = "ATS Compatibility & Gap Analysis";
pub const SCORE_LABEL: &str = "Match Score";
pub const SCORE_SUFFIX: &str = "/100";
pub const DISMISS_LABEL: &str = "Close";

/// Sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    MatchingSkills,
    MissingSkills,
    KeywordAnalysis,
    ExperienceGaps,
    Strengths,
    Recommendations,
}

impl SectionKind {
    /// Title without the item count.
    #[must_use]
    pub const fn base_title(&self) -> &'static str {
        match self {
            Self::MatchingSkills => "Matching Skills",
            Self::MissingSkills => "Missing Skills",
            Self::KeywordAnalysis => "ATS Keyword Analysis",
            Self::ExperienceGaps => "Experience Gaps",
            Self::Strengths => "Your Strengths",
            Self::Recommendations => "Recommendations to Improve",
        }
    }

    #[must_use]
    pub const fn accent(&self) -> Accent {
        match self {
            Self::MatchingSkills => Accent::Green,
            Self::MissingSkills => Accent::Red,
            Self::KeywordAnalysis => Accent::Blue,
            Self::ExperienceGaps => Accent::Orange,
            Self::Strengths => Accent::Emerald,
            Self::Recommendations => Accent::Purple,
        }
    }

    /// The two skill panels share a row on wide layouts.
    #[must_use]
    pub const fn is_paired(&self) -> bool {
        matches!(self, Self::MatchingSkills | Self::MissingSkills)
    }

    /// Whether the title carries the item count.
    const fn shows_count(&self) -> bool {
        self.is_paired()
    }
}

/// Fixed per-section accent color, independent of the score tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Green,
    Red,
    Blue,
    Orange,
    Emerald,
    Purple,
}

impl Accent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
        }
    }
}

/// Glyph shown in front of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    None,
    Check,
    Cross,
    Plus,
    Bullet,
}

impl Marker {
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Check => Some("✓"),
            Self::Cross => Some("✗"),
            Self::Plus => Some("+"),
            Self::Bullet => Some("•"),
        }
    }
}

/// How a group lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStyle {
    /// Inline chips that wrap
    Badge,
    /// One item per line
    List,
}

/// A single rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item<'a> {
    /// 1-based rank for ranked sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub marker: Marker,
    pub text: &'a str,
}

impl Item<'_> {
    /// Text shown before the item: `"3."` for ranked items, else the marker glyph.
    #[must_use]
    pub fn prefix(&self) -> Option<String> {
        match self.rank {
            Some(rank) => Some(format!("{rank}.")),
            None => self.marker.symbol().map(str::to_string),
        }
    }

    /// Prefix and text joined by a space.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.prefix() {
            Some(prefix) => format!("{prefix} {}", self.text),
            None => self.text.to_string(),
        }
    }
}

/// A run of items, optionally under a sub-label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemGroup<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub style: ItemStyle,
    /// Color of the items; the section accent unless the group overrides it
    pub accent: Accent,
    pub items: Vec<Item<'a>>,
}

impl<'a> ItemGroup<'a> {
    fn marked(kind: SectionKind, style: ItemStyle, marker: Marker, texts: &'a [String]) -> Self {
        Self {
            label: None,
            style,
            accent: kind.accent(),
            items: texts
                .iter()
                .map(|text| Item {
                    rank: None,
                    marker,
                    text,
                })
                .collect(),
        }
    }

    fn ranked(kind: SectionKind, texts: &'a [String]) -> Self {
        Self {
            label: None,
            style: ItemStyle::List,
            accent: kind.accent(),
            items: texts
                .iter()
                .enumerate()
                .map(|(i, text)| Item {
                    rank: Some(i + 1),
                    marker: Marker::None,
                    text,
                })
                .collect(),
        }
    }

    fn labeled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    fn accented(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}

/// A titled block of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub title: String,
    pub accent: Accent,
    pub groups: Vec<ItemGroup<'a>>,
}

impl<'a> Section<'a> {
    fn new(kind: SectionKind, groups: Vec<ItemGroup<'a>>) -> Self {
        let title = if kind.shows_count() {
            let count: usize = groups.iter().map(|g| g.items.len()).sum();
            format!("{} ({count})", kind.base_title())
        } else {
            kind.base_title().to_string()
        };
        Self {
            kind,
            title,
            accent: kind.accent(),
            groups,
        }
    }

    /// Total items across all groups
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// All items across groups, in order
    pub fn items(&self) -> impl Iterator<Item = &Item<'a>> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

/// Fixed header of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub dismiss_label: &'static str,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: REPORT_TITLE,
            subtitle: REPORT_SUBTITLE,
            dismiss_label: DISMISS_LABEL,
        }
    }
}

/// Score, verdict and summary styled by the score tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard<'a> {
    pub label: &'static str,
    pub score: i32,
    pub verdict: &'a str,
    pub summary: &'a str,
    pub style: TierStyle,
    pub arc: ProgressArc,
}

impl ScoreCard<'_> {
    /// `"85/100"`
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{}{SCORE_SUFFIX}", self.score)
    }
}

/// Row of the layout: the skill panels pair up, everything else is full width.
#[derive(Debug, Clone, Copy)]
pub enum LayoutRow<'d, 'a> {
    Pair(&'d Section<'a>, &'d Section<'a>),
    Single(&'d Section<'a>),
}

/// The complete laid-out report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument<'a> {
    pub header: Header,
    pub score: ScoreCard<'a>,
    pub sections: Vec<Section<'a>>,
}

impl<'a> ReportDocument<'a> {
    /// Lay out a report. Pure: the same report always yields the same document.
    #[must_use]
    pub fn build(report: &'a AnalysisReport) -> Self {
        let score = ScoreCard {
            label: SCORE_LABEL,
            score: report.match_score,
            verdict: &report.verdict,
            summary: &report.summary,
            style: classify(report.match_score),
            arc: ProgressArc::for_score(report.match_score),
        };

        let mut sections = vec![
            Section::new(
                SectionKind::MatchingSkills,
                vec![ItemGroup::marked(
                    SectionKind::MatchingSkills,
                    ItemStyle::Badge,
                    Marker::Check,
                    &report.matching_skills,
                )],
            ),
            Section::new(
                SectionKind::MissingSkills,
                vec![ItemGroup::marked(
                    SectionKind::MissingSkills,
                    ItemStyle::Badge,
                    Marker::Cross,
                    &report.missing_skills,
                )],
            ),
            Section::new(
                SectionKind::KeywordAnalysis,
                vec![
                    ItemGroup::marked(
                        SectionKind::KeywordAnalysis,
                        ItemStyle::Badge,
                        Marker::None,
                        &report.keyword_analysis.found,
                    )
                    .labeled("Found in Resume"),
                    ItemGroup::marked(
                        SectionKind::KeywordAnalysis,
                        ItemStyle::Badge,
                        Marker::Plus,
                        &report.keyword_analysis.missing,
                    )
                    .labeled("Missing Keywords")
                    .accented(Accent::Orange),
                ],
            ),
        ];

        // The one conditional section
        if !report.experience_gaps.is_empty() {
            sections.push(Section::new(
                SectionKind::ExperienceGaps,
                vec![ItemGroup::marked(
                    SectionKind::ExperienceGaps,
                    ItemStyle::List,
                    Marker::Bullet,
                    &report.experience_gaps,
                )],
            ));
        }

        sections.push(Section::new(
            SectionKind::Strengths,
            vec![ItemGroup::marked(
                SectionKind::Strengths,
                ItemStyle::List,
                Marker::Bullet,
                &report.strengths,
            )],
        ));
        sections.push(Section::new(
            SectionKind::Recommendations,
            vec![ItemGroup::ranked(
                SectionKind::Recommendations,
                &report.recommendations,
            )],
        ));

        Self {
            header: Header::default(),
            score,
            sections,
        }
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section<'a>> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Group consecutive paired sections into rows.
    #[must_use]
    pub fn layout_rows(&self) -> Vec<LayoutRow<'_, 'a>> {
        let mut rows = Vec::with_capacity(self.sections.len());
        let mut i = 0;
        while i < self.sections.len() {
            let current = &self.sections[i];
            match self.sections.get(i + 1) {
                Some(next) if current.kind.is_paired() && next.kind.is_paired() => {
                    rows.push(LayoutRow::Pair(current, next));
                    i += 2;
                }
                _ => {
                    rows.push(LayoutRow::Single(current));
                    i += 1;
                }
            }
        }
        rows
    }
}
