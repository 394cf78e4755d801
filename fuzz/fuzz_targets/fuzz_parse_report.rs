#![no_main]
use libfuzzer_sys::fuzz_target;
use resume_report::{pipeline::load_report_str, ReportDocument, ScorePolicy};

/// Fuzz report loading and layout.
///
/// Any record that parses must lay out without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(report) = load_report_str(s, ScorePolicy::PassThrough) {
            let _ = ReportDocument::build(&report);
        }
    }
});
