//! Interactive terminal overlay for analysis reports.
//!
//! The overlay shows the laid-out report in a scrollable full-screen view.
//! Closing it (q, Esc or x) invokes the dismissal callback once and ends the
//! event loop; the mounted/dismissed state lives in [`ReportApp`].

mod app;
mod events;
pub mod theme;
mod ui;
pub mod widgets;

pub use app::{DismissCallback, Lifecycle, ReportApp};
pub use events::{handle_key_event, Event, EventHandler};
pub use theme::{colors, set_theme, toggle_theme, Theme};
pub use ui::{body_lines, render, run_report_tui};
