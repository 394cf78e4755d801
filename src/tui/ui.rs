//! Report overlay rendering and the terminal event loop.

use super::app::ReportApp;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints, Styles};
use super::widgets::{
    check_terminal_size, line_width, render_popup, render_size_warning, wrap_text, GradientBar,
    ProgressRing, MIN_HEIGHT, MIN_WIDTH, RING_WIDTH,
};
use crate::view::{
    ItemGroup, ItemStyle, LayoutRow, ReportDocument, ScoreCard, Section, SCORE_SUFFIX,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

const HEADER_HEIGHT: u16 = 3;
const SCORE_CARD_HEIGHT: u16 = 7;
/// Columns between the two skill panels
const COLUMN_GAP: usize = 3;
/// Indent of items under a section title
const INDENT: &str = "  ";

/// Run the report overlay until the user dismisses it.
pub fn run_report_tui(app: &mut ReportApp<'_>, tick_rate_ms: u64) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    let restored = first_error([
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ]);

    result.and(restored)
}

/// Every step has already run; keep the first failure.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ReportApp<'_>,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick = app.tick.wrapping_add(1),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Draw the full overlay.
pub fn render(frame: &mut Frame, app: &mut ReportApp<'_>) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    frame.render_widget(Block::default().style(Styles::overlay()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SCORE_CARD_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let document = app.document();
    let stacked = area.width < app.narrow_width;

    render_header(frame, chunks[0], &document);
    render_score_card(frame, chunks[1], &document.score);

    let body_width = chunks[2].width.saturating_sub(2) as usize;
    let lines = body_lines(&document, body_width, stacked);
    app.set_viewport(lines.len(), chunks[2].height);

    let body = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.scroll, 0));
    frame.render_widget(body, chunks[2]);

    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, document: &ReportDocument<'_>) {
    let header = &document.header;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(vec![
        Line::styled(header.title, Styles::header_title()),
        Line::styled(header.subtitle, Styles::text_muted()),
    ]);
    frame.render_widget(title, inner);

    let dismiss = Paragraph::new(Line::from(vec![
        Span::styled("[x] ", Styles::shortcut_key()),
        Span::styled(header.dismiss_label, Styles::text_muted()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(dismiss, inner);
}

fn render_score_card(frame: &mut Frame, area: Rect, card: &ScoreCard<'_>) {
    let scheme = colors();
    let foreground = scheme.token(card.style.foreground);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(foreground))
        .style(Style::default().bg(scheme.token(card.style.background)))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(RING_WIDTH + 2)])
        .split(inner);

    let text = Paragraph::new(vec![
        Line::styled(card.label.to_uppercase(), Styles::label()),
        Line::from(vec![
            Span::styled(card.score.to_string(), Styles::tier(card.style.foreground)),
            Span::styled(SCORE_SUFFIX, Styles::text_muted()),
        ]),
        Line::styled(card.verdict, Styles::tier(card.style.foreground)),
    ]);
    frame.render_widget(text, columns[0]);

    if columns[0].height > 4 {
        let bar_area = Rect {
            y: columns[0].y + columns[0].height - 1,
            height: 1,
            ..columns[0]
        };
        frame.render_widget(
            GradientBar::new(
                card.arc.fraction(),
                scheme.token(card.style.gradient.start),
                scheme.token(card.style.gradient.end),
            ),
            bar_area,
        );
    }

    frame.render_widget(
        ProgressRing::new(card.arc, card.score.to_string()).color(foreground),
        columns[1],
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &ReportApp<'_>) {
    let mut spans = render_footer_hints(&FooterHints::report());
    if app.max_scroll > 0 {
        spans.push(Span::styled(
            format!("  {}/{}", app.scroll, app.max_scroll),
            Styles::label(),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::status_bar()),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let keys = [
        ("q / Esc / x", "Close the report"),
        ("j / k / ↑ ↓", "Scroll one line"),
        ("PgDn / PgUp", "Scroll one page"),
        ("g / G", "Jump to top / bottom"),
        ("T", "Cycle theme"),
        ("?", "Toggle this help"),
    ];
    let lines = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<14}"), Styles::shortcut_key()),
                Span::styled(*desc, Styles::text()),
            ])
        })
        .collect();
    render_popup(frame, area, "Keys", lines, 60, 50, colors().accent);
}

/// Scrollable body: summary, then the sections row by row.
pub fn body_lines(document: &ReportDocument<'_>, width: usize, stacked: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !document.score.summary.is_empty() {
        for text in wrap_text(document.score.summary, width) {
            lines.push(Line::styled(text, Styles::text()));
        }
        lines.push(Line::default());
    }

    for row in document.layout_rows() {
        match row {
            LayoutRow::Pair(left, right) if !stacked => {
                let column_width = width.saturating_sub(COLUMN_GAP) / 2;
                lines.extend(side_by_side(
                    section_lines(left, column_width),
                    section_lines(right, column_width),
                    column_width,
                ));
                lines.push(Line::default());
            }
            LayoutRow::Pair(left, right) => {
                lines.extend(section_lines(left, width));
                lines.push(Line::default());
                lines.extend(section_lines(right, width));
                lines.push(Line::default());
            }
            LayoutRow::Single(section) => {
                lines.extend(section_lines(section, width));
                lines.push(Line::default());
            }
        }
    }

    // No trailing spacer
    lines.pop();
    lines
}

fn side_by_side(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    column_width: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut lines = Vec::with_capacity(rows);

    for _ in 0..rows {
        let mut spans = Vec::new();
        let mut used = 0;
        if let Some(line) = left.next() {
            used = line_width(&line);
            spans.extend(line.spans);
        }
        if let Some(line) = right.next() {
            // A left line wider than its column gets a row of its own
            if used > column_width {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            spans.push(Span::raw(" ".repeat(column_width + COLUMN_GAP - used)));
            spans.extend(line.spans);
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn section_lines(section: &Section<'_>, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        section.title.clone(),
        Styles::section_title(section.accent),
    )];
    for group in &section.groups {
        let accent = Styles::accent(group.accent);
        if let Some(label) = group.label {
            lines.push(Line::styled(format!("{INDENT}{label}"), Styles::label()));
        }
        match group.style {
            ItemStyle::Badge => lines.extend(badge_lines(group, width, accent)),
            ItemStyle::List => lines.extend(list_lines(group, width, accent)),
        }
    }
    lines
}

/// Badges flow left to right and wrap at `width`.
///
/// A badge too wide for a line of its own is split across lines.
fn badge_lines(group: &ItemGroup<'_>, width: usize, accent: Style) -> Vec<Line<'static>> {
    let badge_style = accent.bg(colors().background_alt);
    let indent = INDENT.len();
    let mut lines = Vec::new();
    let mut spans = vec![Span::raw(INDENT)];
    let mut used = indent;

    for item in &group.items {
        let text = item.display_text();
        // One cell of padding on each side
        let badge_width = UnicodeWidthStr::width(text.as_str()) + 2;
        let has_badges = spans.len() > 1;

        if indent + badge_width > width {
            if has_badges {
                lines.push(Line::from(std::mem::replace(&mut spans, vec![Span::raw(INDENT)])));
                used = indent;
            }
            for chunk in wrap_text(&text, width.saturating_sub(indent + 2)) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!(" {chunk} "), badge_style),
                ]));
            }
            continue;
        }

        if has_badges && used + 1 + badge_width > width {
            lines.push(Line::from(std::mem::replace(&mut spans, vec![Span::raw(INDENT)])));
            used = indent;
        } else if has_badges {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(format!(" {text} "), badge_style));
        used += badge_width;
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }
    lines
}

/// One item per line with a hanging indent under the prefix.
fn list_lines(group: &ItemGroup<'_>, width: usize, accent: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in &group.items {
        let prefix = item.prefix().unwrap_or_default();
        let lead = INDENT.len() + UnicodeWidthStr::width(prefix.as_str()) + 1;
        let wrapped = wrap_text(item.text, width.saturating_sub(lead));

        for (i, text) in wrapped.into_iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(prefix.clone(), accent.bold()),
                    Span::raw(" "),
                    Span::styled(text, Styles::text()),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(lead)),
                    Span::styled(text, Styles::text()),
                ]));
            }
        }
    }
    lines
}
