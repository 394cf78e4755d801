//! Tier command handler.
//!
//! Prints the tier, color tokens and arc fill for a single score.

use crate::score::{classify, ProgressArc, TierStyle};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierInfo {
    score: i32,
    #[serde(flatten)]
    style: TierStyle,
    arc: ProgressArc,
}

/// Describe a score as plain text or JSON.
pub fn describe_tier(score: i32, json: bool) -> Result<String> {
    let style = classify(score);
    let arc = ProgressArc::for_score(score);

    if json {
        let info = TierInfo { score, style, arc };
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    Ok([
        format!("Score:      {score}"),
        format!("Tier:       {}", style.tier),
        format!("Foreground: {}", style.foreground),
        format!(
            "Gradient:   {} -> {}",
            style.gradient.start, style.gradient.end
        ),
        format!("Background: {}", style.background),
        format!("Arc:        {arc}"),
    ]
    .join("\n"))
}

/// Run the tier command
pub fn run_tier(score: i32, json: bool) -> Result<()> {
    println!("{}", describe_tier(score, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_text() {
        let text = describe_tier(85, false).unwrap();
        assert!(text.contains("Tier:       excellent"));
        assert!(text.contains("Gradient:   success -> success-bright"));
        assert!(text.contains("Background: success-tinted"));
        assert!(text.contains("Arc:        213.35/251"));
    }

    #[test]
    fn test_describe_json() {
        let json = describe_tier(40, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 40);
        assert_eq!(value["tier"], "fair");
        assert_eq!(value["foreground"], "caution");
        assert_eq!(value["arc"]["circumference"], 251.0);
    }

    #[test]
    fn test_describe_out_of_range() {
        let text = describe_tier(-5, false).unwrap();
        assert!(text.contains("Tier:       poor"));
        assert!(text.contains("Arc:        -12.55/251"));
    }
}
