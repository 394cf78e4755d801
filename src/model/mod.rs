//! Data model for analysis records.
//!
//! An [`AnalysisReport`] is produced outside this crate (by whatever service
//! compared a resume against a job description) and handed over whole. The
//! model is read-only: nothing in the crate mutates a record after loading.

mod analysis;

pub use analysis::{AnalysisReport, KeywordAnalysis, MAX_SCORE, MIN_SCORE};
