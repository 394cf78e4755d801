//! Pipeline orchestration for report rendering.
//!
//! Shared load → render → write steps used by the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_report, load_report_str, ReportSource};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{output_report, render_report};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
    /// Invalid command-line usage
    pub const USAGE: i32 = 2;
}
