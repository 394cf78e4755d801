//! Centralized theme and color scheme for the TUI.
//!
//! Resolves the renderer-independent color tokens of the score tier and the
//! per-section accents to terminal colors.

use crate::score::{ColorToken, Hue};
use crate::view::Accent;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Shades of one semantic hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueShades {
    /// Foreground (score, verdict, arc)
    pub base: Color,
    /// Gradient end
    pub bright: Color,
    /// Score card background
    pub tinted: Color,
}

/// Color scheme for the report overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // Tier hues
    pub success: HueShades,
    pub warning: HueShades,
    pub caution: HueShades,
    pub danger: HueShades,

    // Section accents
    pub green: Color,
    pub red: Color,
    pub blue: Color,
    pub orange: Color,
    pub emerald: Color,
    pub purple: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub track: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            success: HueShades {
                base: Color::Rgb(74, 222, 128),
                bright: Color::Rgb(16, 185, 129),
                tinted: Color::Rgb(18, 38, 30),
            },
            warning: HueShades {
                base: Color::Rgb(250, 204, 21),
                bright: Color::Rgb(245, 158, 11),
                tinted: Color::Rgb(40, 36, 18),
            },
            caution: HueShades {
                base: Color::Rgb(251, 146, 60),
                bright: Color::Rgb(245, 158, 11),
                tinted: Color::Rgb(42, 28, 20),
            },
            danger: HueShades {
                base: Color::Rgb(248, 113, 113),
                bright: Color::Rgb(244, 63, 94),
                tinted: Color::Rgb(42, 20, 24),
            },

            green: Color::Rgb(74, 222, 128),
            red: Color::Rgb(248, 113, 113),
            blue: Color::Rgb(96, 165, 250),
            orange: Color::Rgb(251, 146, 60),
            emerald: Color::Rgb(52, 211, 153),
            purple: Color::Rgb(192, 132, 252),

            primary: Color::White,
            accent: Color::Rgb(192, 132, 252),
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background: Color::Rgb(15, 16, 25),
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::Rgb(203, 213, 225),
            text_muted: Color::Rgb(148, 163, 184),
            track: Color::Rgb(40, 42, 54),
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            success: HueShades {
                base: Color::Rgb(22, 163, 74),
                bright: Color::Rgb(5, 150, 105),
                tinted: Color::Rgb(220, 252, 231),
            },
            warning: HueShades {
                base: Color::Rgb(161, 98, 7),
                bright: Color::Rgb(217, 119, 6),
                tinted: Color::Rgb(254, 249, 195),
            },
            caution: HueShades {
                base: Color::Rgb(234, 88, 12),
                bright: Color::Rgb(217, 119, 6),
                tinted: Color::Rgb(255, 237, 213),
            },
            danger: HueShades {
                base: Color::Rgb(220, 38, 38),
                bright: Color::Rgb(225, 29, 72),
                tinted: Color::Rgb(254, 226, 226),
            },

            green: Color::Rgb(22, 163, 74),
            red: Color::Rgb(220, 38, 38),
            blue: Color::Rgb(37, 99, 235),
            orange: Color::Rgb(234, 88, 12),
            emerald: Color::Rgb(5, 150, 105),
            purple: Color::Rgb(147, 51, 234),

            primary: Color::Black,
            accent: Color::Rgb(147, 51, 234),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            background: Color::Rgb(250, 250, 250),
            background_alt: Color::Rgb(235, 235, 240),
            text: Color::Rgb(30, 41, 59),
            text_muted: Color::Rgb(100, 116, 139),
            track: Color::Rgb(226, 232, 240),
        }
    }

    /// High contrast theme (for accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            success: HueShades {
                base: Color::LightGreen,
                bright: Color::Green,
                tinted: Color::Black,
            },
            warning: HueShades {
                base: Color::LightYellow,
                bright: Color::Yellow,
                tinted: Color::Black,
            },
            caution: HueShades {
                base: Color::LightMagenta,
                bright: Color::Magenta,
                tinted: Color::Black,
            },
            danger: HueShades {
                base: Color::LightRed,
                bright: Color::Red,
                tinted: Color::Black,
            },

            green: Color::LightGreen,
            red: Color::LightRed,
            blue: Color::LightCyan,
            orange: Color::LightYellow,
            emerald: Color::Green,
            purple: Color::LightMagenta,

            primary: Color::White,
            accent: Color::Yellow,
            muted: Color::Gray,
            border: Color::White,
            background: Color::Black,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            track: Color::DarkGray,
        }
    }

    /// Shades for a semantic hue
    pub const fn shades(&self, hue: Hue) -> HueShades {
        match hue {
            Hue::Success => self.success,
            Hue::Warning => self.warning,
            Hue::Caution => self.caution,
            Hue::Danger => self.danger,
        }
    }

    /// Resolve a tier color token
    pub const fn token(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Base(hue) => self.shades(hue).base,
            ColorToken::Bright(hue) => self.shades(hue).bright,
            ColorToken::Tinted(hue) => self.shades(hue).tinted,
        }
    }

    /// Resolve a section accent
    pub const fn accent_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Green => self.green,
            Accent::Red => self.red,
            Accent::Blue => self.blue,
            Accent::Orange => self.orange,
            Accent::Emerald => self.emerald,
            Accent::Purple => self.purple,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Look up a theme by name; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title in its accent color
    pub fn section_title(accent: Accent) -> Style {
        Style::default().fg(colors().accent_color(accent)).bold()
    }

    /// Item text in its section accent
    pub fn accent(accent: Accent) -> Style {
        Style::default().fg(colors().accent_color(accent))
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Tier-colored foreground
    pub fn tier(token: ColorToken) -> Style {
        Style::default().fg(colors().token(token)).bold()
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Overlay background
    pub fn overlay() -> Style {
        Style::default().bg(colors().background).fg(colors().text)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Footer hints for the report overlay
pub struct FooterHints;

impl FooterHints {
    /// Hints shown while the report is open
    pub fn report() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓/jk", "scroll"),
            ("PgUp/Dn", "page"),
            ("g/G", "top/bottom"),
            ("T", "theme"),
            ("?", "help"),
            ("q/Esc", "close"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::classify;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_tokens_resolve_per_hue() {
        let scheme = ColorScheme::dark();
        let style = classify(90);
        assert_eq!(scheme.token(style.foreground), scheme.success.base);
        assert_eq!(scheme.token(style.gradient.end), scheme.success.bright);
        assert_eq!(scheme.token(style.background), scheme.success.tinted);

        let style = classify(10);
        assert_eq!(scheme.token(style.foreground), scheme.danger.base);
    }

    #[test]
    fn test_tier_hues_are_distinct() {
        for scheme in [
            ColorScheme::dark(),
            ColorScheme::light(),
            ColorScheme::high_contrast(),
        ] {
            let bases = [
                scheme.success.base,
                scheme.warning.base,
                scheme.caution.base,
                scheme.danger.base,
            ];
            for (i, a) in bases.iter().enumerate() {
                for b in &bases[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_footer_hint_spans() {
        let spans = render_footer_hints(&[("q", "close"), ("?", "help")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[q]");
        assert_eq!(spans[1].content, "close");
    }
}
