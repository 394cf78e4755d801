//! Score classification.
//!
//! Maps a match score to a [`ScoreTier`] and the presentation tokens that go
//! with it, and computes the fill of the circular progress indicator. Both
//! are pure functions of the score.

mod arc;
mod tier;

pub use arc::{arc_length, ProgressArc, ARC_CIRCUMFERENCE, ARC_UNITS_PER_POINT};
pub use tier::{classify, ColorToken, Gradient, Hue, ScoreTier, TierStyle, TierThreshold, TIER_TABLE};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the loading layer treats scores outside `0..=100`.
///
/// The classifier itself never validates: with [`ScorePolicy::PassThrough`]
/// a negative score lands in the poor tier and anything above 100 in the
/// excellent tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScorePolicy {
    /// Render the score as given
    #[default]
    PassThrough,
    /// Clamp into `0..=100` and log a warning
    Clamp,
    /// Refuse to load the report
    Reject,
}

impl std::fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PassThrough => write!(f, "pass-through"),
            Self::Clamp => write!(f, "clamp"),
            Self::Reject => write!(f, "reject"),
        }
    }
}
