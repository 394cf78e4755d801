//! Threshold table mapping scores to tiers and color tokens.

use serde::{Serialize, Serializer};
use std::fmt;

/// Qualitative band of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    /// Classify a score. Equivalent to `classify(score).tier`.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        TIER_TABLE
            .iter()
            .find(|threshold| score >= threshold.min_score)
            .map_or(Self::Poor, |threshold| threshold.tier)
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Base hue every token of this tier is drawn from
    #[must_use]
    pub const fn hue(&self) -> Hue {
        match self {
            Self::Excellent => Hue::Success,
            Self::Good => Hue::Warning,
            Self::Fair => Hue::Caution,
            Self::Poor => Hue::Danger,
        }
    }

    /// Full set of presentation tokens for this tier
    #[must_use]
    pub const fn style(&self) -> TierStyle {
        let hue = self.hue();
        TierStyle {
            tier: *self,
            foreground: ColorToken::Base(hue),
            gradient: Gradient {
                start: ColorToken::Base(hue),
                end: ColorToken::Bright(hue),
            },
            background: ColorToken::Tinted(hue),
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        f.write_str(name)
    }
}

/// Semantic color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Success,
    Warning,
    Caution,
    Danger,
}

impl Hue {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

/// A renderer-independent color token.
///
/// Renderers resolve tokens to concrete colors: the TUI through its color
/// scheme, the HTML report through CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Foreground shade (`success`)
    Base(Hue),
    /// Gradient end shade (`success-bright`)
    Bright(Hue),
    /// Low-alpha background and border tone (`success-tinted`)
    Tinted(Hue),
}

impl ColorToken {
    #[must_use]
    pub const fn hue(&self) -> Hue {
        match self {
            Self::Base(hue) | Self::Bright(hue) | Self::Tinted(hue) => *hue,
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(hue) => write!(f, "{}", hue.name()),
            Self::Bright(hue) => write!(f, "{}-bright", hue.name()),
            Self::Tinted(hue) => write!(f, "{}-tinted", hue.name()),
        }
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Start and end tokens of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub start: ColorToken,
    pub end: ColorToken,
}

/// Tier plus the three tokens that style a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TierStyle {
    pub tier: ScoreTier,
    /// Applied to the numeric score, the verdict and the progress arc
    pub foreground: ColorToken,
    pub gradient: Gradient,
    /// Score card background and border tone
    pub background: ColorToken,
}

/// One row of the threshold table: scores `>= min_score` get `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThreshold {
    pub min_score: i32,
    pub tier: ScoreTier,
}

/// Inclusive lower bounds in descending order; the first match wins.
///
/// Scores below the last bound fall through to [`ScoreTier::Poor`].
pub const TIER_TABLE: [TierThreshold; 4] = [
    TierThreshold {
        min_score: 80,
        tier: ScoreTier::Excellent,
    },
    TierThreshold {
        min_score: 60,
        tier: ScoreTier::Good,
    },
    TierThreshold {
        min_score: 40,
        tier: ScoreTier::Fair,
    },
    TierThreshold {
        min_score: 0,
        tier: ScoreTier::Poor,
    },
];

/// Classify a score into its tier and presentation tokens.
#[must_use]
pub fn classify(score: i32) -> TierStyle {
    ScoreTier::from_score(score).style()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_take_higher_tier() {
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(79), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(60), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(59), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(40), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(39), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Excellent);
    }

    #[test]
    fn test_out_of_range_falls_through() {
        assert_eq!(ScoreTier::from_score(-1), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(i32::MIN), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(250), ScoreTier::Excellent);
    }

    #[test]
    fn test_table_is_descending() {
        for pair in TIER_TABLE.windows(2) {
            assert!(pair[0].min_score > pair[1].min_score);
        }
    }

    #[test]
    fn test_token_names() {
        let style = classify(85);
        assert_eq!(style.foreground.to_string(), "success");
        assert_eq!(style.gradient.start.to_string(), "success");
        assert_eq!(style.gradient.end.to_string(), "success-bright");
        assert_eq!(style.background.to_string(), "success-tinted");

        let style = classify(10);
        assert_eq!(style.foreground.to_string(), "danger");
        assert_eq!(style.gradient.end.to_string(), "danger-bright");
        assert_eq!(style.background.to_string(), "danger-tinted");
    }

    #[test]
    fn test_each_tier_uses_its_own_hue() {
        for (score, hue) in [
            (90, Hue::Success),
            (65, Hue::Warning),
            (45, Hue::Caution),
            (5, Hue::Danger),
        ] {
            let style = classify(score);
            assert_eq!(style.foreground.hue(), hue);
            assert_eq!(style.gradient.start.hue(), hue);
            assert_eq!(style.gradient.end.hue(), hue);
            assert_eq!(style.background.hue(), hue);
        }
    }

    #[test]
    fn test_style_serializes_tokens_as_strings() {
        let json = serde_json::to_value(classify(55)).unwrap();
        assert_eq!(json["tier"], "fair");
        assert_eq!(json["foreground"], "caution");
        assert_eq!(json["gradient"]["end"], "caution-bright");
        assert_eq!(json["background"], "caution-tinted");
    }
}
