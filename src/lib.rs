//! **Render resume vs. job match analyses as readable reports.**
//!
//! `resume-report` takes the analysis record produced by a resume screening
//! service (a match score, a verdict, matched and missing skills, keyword
//! coverage, strengths and recommendations) and presents it. The same laid-out
//! document drives an interactive terminal overlay and four text exporters.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`AnalysisReport`], the input record, with JSON loading.
//! - **[`score`]**: Maps a score to a [`ScoreTier`], its color tokens and the
//!   fill of the circular progress indicator.
//! - **[`view`]**: Builds a [`ReportDocument`] (header, score card, sections
//!   and their order) and owns the dismissal callback in [`ReportView`].
//! - **[`reports`]**: HTML, Markdown, JSON and terminal summary generators.
//! - **[`tui`]**: The ratatui overlay and its event loop.
//! - **[`pipeline`]**: Load, render and write stages used by the CLI.
//!
//! ## Getting Started
//!
//! ```no_run
//! use resume_report::{classify, AnalysisReport, ReportDocument};
//! use resume_report::reports::{MarkdownReporter, ReportConfig, ReportGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = AnalysisReport::from_path(std::path::Path::new("analysis.json"))?;
//!     println!("Tier: {}", classify(report.match_score).tier);
//!
//!     let document = ReportDocument::build(&report);
//!     let markdown = MarkdownReporter::new().generate(&document, &ReportConfig::default())?;
//!     println!("{markdown}");
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `resume-report` binary wraps this library: `resume-report view
//! analysis.json` opens the overlay, `-o html -O report.html` exports.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize/u16/f64 casts are pervasive in TUI layout math
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod score;
pub mod tui;
pub mod view;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, OutputConfig, TuiConfig, Validatable, ViewConfig};
pub use error::{ErrorContext, LoadErrorKind, Result, ResumeReportError};
pub use model::{AnalysisReport, KeywordAnalysis};
pub use reports::{ReportFormat, ReportGenerator};
pub use score::{classify, ProgressArc, ScorePolicy, ScoreTier, TierStyle};
pub use view::{ReportDocument, ReportView, SectionKind};
