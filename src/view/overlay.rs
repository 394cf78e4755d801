//! The report view with its caller-supplied dismissal callback.

use super::ReportDocument;
use crate::model::AnalysisReport;

/// A report paired with the handler to call when the user closes it.
///
/// The view holds no state of its own. Every call to [`ReportView::document`]
/// lays the report out from scratch, and [`ReportView::dismiss`] forwards
/// straight to the callback. Deciding what a dismissal means (unmounting,
/// exiting, ignoring repeats) is up to the caller.
pub struct ReportView<'a, F>
where
    F: FnMut(),
{
    report: &'a AnalysisReport,
    on_dismiss: F,
}

impl<'a, F> ReportView<'a, F>
where
    F: FnMut(),
{
    pub fn new(report: &'a AnalysisReport, on_dismiss: F) -> Self {
        Self { report, on_dismiss }
    }

    #[must_use]
    pub fn report(&self) -> &'a AnalysisReport {
        self.report
    }

    /// Lay out the current report.
    #[must_use]
    pub fn document(&self) -> ReportDocument<'a> {
        ReportDocument::build(self.report)
    }

    /// Handle one explicit close action: invokes the callback exactly once.
    pub fn dismiss(&mut self) {
        tracing::debug!("report view dismissed");
        (self.on_dismiss)();
    }
}

impl<F> std::fmt::Debug for ReportView<'_, F>
where
    F: FnMut(),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportView")
            .field("report", &self.report)
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
            match_score: 55,
            verdict: "Partial Match".to_string(),
            summary: String::new(),
            matching_skills: vec![],
            missing_skills: vec!["Kubernetes".to_string(), "Go".to_string()],
            keyword_analysis: KeywordAnalysis::default(),
            experience_gaps: vec![],
            strengths: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_dismiss_invokes_callback_once_per_action() {
        let report = report();
        let calls = Cell::new(0);
        let mut view = ReportView::new(&report, || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 0, "building the view must not dismiss it");
        let _ = view.document();
        assert_eq!(calls.get(), 0, "rendering must not dismiss it");

        view.dismiss();
        assert_eq!(calls.get(), 1);
        view.dismiss();
        assert_eq!(calls.get(), 2, "repeat presses are forwarded unguarded");
    }

    #[test]
    fn test_document_is_rebuilt_identically() {
        let report = report();
        let view = ReportView::new(&report, || {});
        assert_eq!(view.document(), view.document());
        assert_eq!(view.report().match_score, 55);
    }
}
