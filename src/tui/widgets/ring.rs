//! Score indicators: a circular progress ring and a gradient bar.

use crate::score::ProgressArc;
use crate::tui::theme::colors;
use ratatui::prelude::*;

/// Cell offsets of the ring segments inside an 11x5 box, clockwise from the top.
const RING_SEGMENTS: [(u16, u16); 12] = [
    (5, 0),
    (7, 0),
    (9, 1),
    (10, 2),
    (9, 3),
    (7, 4),
    (5, 4),
    (3, 4),
    (1, 3),
    (0, 2),
    (1, 1),
    (3, 0),
];

pub const RING_WIDTH: u16 = 11;
pub const RING_HEIGHT: u16 = 5;

const FILLED: char = '●';
const EMPTY: char = '○';

/// Circular progress ring filled clockwise from the top.
pub struct ProgressRing {
    arc: ProgressArc,
    label: String,
    color: Color,
}

impl ProgressRing {
    pub fn new(arc: ProgressArc, label: impl Into<String>) -> Self {
        Self {
            arc,
            label: label.into(),
            color: colors().primary,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Number of lit segments for the arc.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_segments(arc: &ProgressArc) -> usize {
        (arc.fraction() * RING_SEGMENTS.len() as f64).round() as usize
    }
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < RING_WIDTH || area.height < RING_HEIGHT {
            return;
        }

        let origin_x = area.x + (area.width - RING_WIDTH) / 2;
        let origin_y = area.y + (area.height - RING_HEIGHT) / 2;
        let filled = Self::filled_segments(&self.arc);
        let track = colors().track;

        for (i, (dx, dy)) in RING_SEGMENTS.iter().enumerate() {
            let (ch, color) = if i < filled {
                (FILLED, self.color)
            } else {
                (EMPTY, track)
            };
            if let Some(cell) = buf.cell_mut((origin_x + dx, origin_y + dy)) {
                cell.set_char(ch).set_style(Style::default().fg(color));
            }
        }

        // Label in the middle row, between the side segments
        let inner_width = RING_WIDTH - 4;
        let label: String = self.label.chars().take(inner_width as usize).collect();
        let label_len = label.chars().count() as u16;
        let label_x = origin_x + 2 + (inner_width - label_len) / 2;
        buf.set_string(
            label_x,
            origin_y + 2,
            &label,
            Style::default().fg(self.color).bold(),
        );
    }
}

/// Horizontal bar filled with a two-stop color gradient.
pub struct GradientBar {
    fraction: f64,
    start: Color,
    end: Color,
}

impl GradientBar {
    pub fn new(fraction: f64, start: Color, end: Color) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            start,
            end,
        }
    }
}

/// Linear blend of two colors; non-RGB colors switch at the midpoint.
pub fn blend(start: Color, end: Color, t: f64) -> Color {
    match (start, end) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => start,
        _ => end,
    }
}

impl Widget for GradientBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (self.fraction * width as f64).round() as usize;
        let track = colors().track;

        for i in 0..width {
            let (ch, color) = if i < filled {
                let t = if filled > 1 {
                    i as f64 / (filled - 1) as f64
                } else {
                    0.0
                };
                ('█', blend(self.start, self.end, t))
            } else {
                ('░', track)
            };
            if let Some(cell) = buf.cell_mut((area.x + i as u16, area.y)) {
                cell.set_char(ch).set_style(Style::default().fg(color));
            }
        }
    }
}
