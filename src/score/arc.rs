//! Circular progress indicator arithmetic.
//!
//! The indicator is a circle of radius 40 whose circumference is rounded to
//! 251 units; one score point fills 2.51 units.

use serde::Serialize;
use std::fmt;

/// Total arc length of the indicator, one full circle.
pub const ARC_CIRCUMFERENCE: f64 = 251.0;
/// Arc units per score point.
pub const ARC_UNITS_PER_POINT: f64 = 2.51;

/// Filled arc length for a score: `score × 2.51`.
///
/// Not rounded and not clamped; renderers that draw the arc use
/// [`ProgressArc::fraction`].
#[must_use]
pub fn arc_length(score: i32) -> f64 {
    f64::from(score) * ARC_UNITS_PER_POINT
}

/// Filled and total length of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressArc {
    pub filled: f64,
    pub circumference: f64,
}

impl ProgressArc {
    #[must_use]
    pub fn for_score(score: i32) -> Self {
        Self {
            filled: arc_length(score),
            circumference: ARC_CIRCUMFERENCE,
        }
    }

    /// Filled share of the circle, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        (self.filled / self.circumference).clamp(0.0, 1.0)
    }

    /// SVG `stroke-dasharray` value: filled length, then circumference.
    #[must_use]
    pub fn dash_array(&self) -> String {
        format!("{} {}", format_length(self.filled), format_length(self.circumference))
    }
}

impl fmt::Display for ProgressArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            format_length(self.filled),
            format_length(self.circumference)
        )
    }
}

/// Format an arc length with at most two decimals and no trailing zeros.
fn format_length(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
