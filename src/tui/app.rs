//! Application state for the report overlay.

use crate::model::AnalysisReport;
use crate::view::{ReportDocument, ReportView};

/// Whether the overlay is still on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Dismissed,
}

/// Dismissal handler supplied by whoever mounted the overlay.
pub type DismissCallback<'a> = Box<dyn FnMut() + 'a>;

/// State of the interactive report overlay.
pub struct ReportApp<'a> {
    view: ReportView<'a, DismissCallback<'a>>,
    lifecycle: Lifecycle,
    /// First visible body line
    pub scroll: u16,
    /// Largest useful scroll offset, updated on every draw
    pub max_scroll: u16,
    /// Body height of the last draw, used for paging
    pub page_height: u16,
    /// Show the key help popup
    pub show_help: bool,
    /// Stop the event loop after this iteration
    pub should_quit: bool,
    /// Widths below this stack the skill panels
    pub narrow_width: u16,
    /// Tick counter
    pub tick: u64,
}

impl<'a> ReportApp<'a> {
    pub fn new(report: &'a AnalysisReport, on_dismiss: DismissCallback<'a>) -> Self {
        Self {
            view: ReportView::new(report, on_dismiss),
            lifecycle: Lifecycle::Mounted,
            scroll: 0,
            max_scroll: 0,
            page_height: 1,
            show_help: false,
            should_quit: false,
            narrow_width: 80,
            tick: 0,
        }
    }

    #[must_use]
    pub fn with_narrow_width(mut self, narrow_width: u16) -> Self {
        self.narrow_width = narrow_width;
        self
    }

    #[must_use]
    pub fn report(&self) -> &'a AnalysisReport {
        self.view.report()
    }

    #[must_use]
    pub fn document(&self) -> ReportDocument<'a> {
        self.view.document()
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Explicit close action: forwards to the callback and ends the loop.
    pub fn dismiss(&mut self) {
        self.view.dismiss();
        self.lifecycle = Lifecycle::Dismissed;
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    /// Record the body geometry of the latest draw and keep the offset valid.
    pub fn set_viewport(&mut self, content_lines: usize, page_height: u16) {
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        self.page_height = page_height;
        self.max_scroll = content.saturating_sub(page_height);
        self.scroll = self.scroll.min(self.max_scroll);
    }
}

impl std::fmt::Debug for ReportApp<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportApp")
            .field("lifecycle", &self.lifecycle)
            .field("scroll", &self.scroll)
            .field("show_help", &self.show_help)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeywordAnalysis;
    use std::cell::Cell;

    fn report() -> AnalysisReport {
        AnalysisReport {
            match_score: 85,
            verdict: "Strong Match".to_string(),
            summary: String::new(),
            matching_skills: vec![],
            missing_skills: vec![],
            keyword_analysis: KeywordAnalysis::default(),
            experience_gaps: vec![],
            strengths: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_dismiss_unmounts_and_notifies() {
        let report = report();
        let calls = Cell::new(0);
        let mut app = ReportApp::new(&report, Box::new(|| calls.set(calls.get() + 1)));
        assert_eq!(app.lifecycle(), Lifecycle::Mounted);

        app.dismiss();
        assert_eq!(app.lifecycle(), Lifecycle::Dismissed);
        assert!(app.should_quit);
        drop(app);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_scroll_is_bounded_by_viewport() {
        let report = report();
        let mut app = ReportApp::new(&report, Box::new(|| {}));
        app.set_viewport(30, 10);
        assert_eq!(app.max_scroll, 20);

        app.scroll_down(5);
        assert_eq!(app.scroll, 5);
        app.page_down();
        app.page_down();
        assert_eq!(app.scroll, 20);
        app.scroll_up(3);
        assert_eq!(app.scroll, 17);
        app.scroll_to_top();
        assert_eq!(app.scroll, 0);
        app.scroll_to_bottom();
        assert_eq!(app.scroll, 20);

        app.set_viewport(12, 10);
        assert_eq!(app.scroll, 2);
    }

    #[test]
    fn test_short_content_does_not_scroll() {
        let report = report();
        let mut app = ReportApp::new(&report, Box::new(|| {}));
        app.set_viewport(5, 10);
        app.scroll_down(1);
        assert_eq!(app.scroll, 0);
    }
}
