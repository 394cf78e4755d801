//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs, one per subcommand.

mod tier;
mod view;

pub use tier::{describe_tier, run_tier};
pub use view::run_view;

// Re-export config types used by handlers
pub use crate::config::ViewConfig;
