//! Frame rendering for the pager demo.
//!
//! Layout, top to bottom: page body, page dots, countdown gauge, status
//! labels, policy line, footer hints. The help overlay is drawn on top.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::view::PagerView;
use crate::theme::Theme;

/// Key hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("←/→", "scroll"),
    ("space", "auto"),
    ("?", "help"),
    ("q", "quit"),
];

/// Full key reference for the help overlay.
pub const HELP_KEYS: &[(&str, &str)] = &[
    ("← / p", "Previous page (manual drag)"),
    ("→ / n", "Next page (manual drag)"),
    ("Home / End", "First / last page"),
    ("space", "Enable or disable auto scrolling"),
    ("s", "Auto scroll with the short interval"),
    ("l", "Auto scroll with the long interval"),
    ("c", "Toggle cancel on scroll"),
    ("r", "Toggle restart on scroll end"),
    ("i", "Toggle infinite scroll"),
    ("?", "Show or hide this help"),
    ("q / Esc", "Quit"),
];

/// Draw one frame.
pub fn render(frame: &mut Frame, view: &PagerView, theme: &Theme, show_help: bool) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_page(frame, chunks[0], view, theme);
    render_dots(frame, chunks[1], view, theme);
    render_countdown(frame, chunks[2], view, theme);
    render_status(frame, chunks[3], view, theme);
    render_policy(frame, chunks[4], view, theme);
    render_footer(frame, chunks[5], theme);

    if show_help {
        render_help(frame, area, theme);
    }
}

fn render_page(frame: &mut Frame, area: Rect, view: &PagerView, theme: &Theme) {
    let text = match view.current_index {
        Some(index) => format!("Page {} of {}", index + 1, view.page_count),
        None => "No pages".to_string(),
    };
    // Vertically center the single line inside the border
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::default()).collect();
    lines.push(Line::from(Span::styled(text, theme.accent_bold_style())));

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(" autopager "),
        );
    frame.render_widget(page, area);
}

/// Build the page indicator: `‹ ○ ● ○ ›`, arrows dimmed when disabled.
pub fn build_dot_spans(view: &PagerView, theme: &Theme) -> Vec<Span<'static>> {
    let arrow = |glyph: &'static str, enabled: bool| {
        let style = if enabled {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        Span::styled(glyph, style)
    };

    let mut spans = Vec::with_capacity(view.page_count * 2 + 3);
    spans.push(arrow("‹", view.can_scroll_previous));
    for index in 0..view.page_count {
        spans.push(Span::raw(" "));
        if Some(index) == view.current_index {
            spans.push(Span::styled("●", theme.accent_bold_style()));
        } else {
            spans.push(Span::styled("○", theme.text_secondary_style()));
        }
    }
    spans.push(Span::raw(" "));
    spans.push(arrow("›", view.can_scroll_next));
    spans
}

fn render_dots(frame: &mut Frame, area: Rect, view: &PagerView, theme: &Theme) {
    let dots = Paragraph::new(Line::from(build_dot_spans(view, theme))).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

fn render_countdown(frame: &mut Frame, area: Rect, view: &PagerView, theme: &Theme) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.state_color(view.state)))
        .ratio(view.progress())
        .label(view.scroller_summary());
    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &PagerView, theme: &Theme) {
    let text = format!(
        "{} | {} | {} | auto: {}",
        view.page_count_label, view.page_label, view.position_label, view.auto_scroll_count
    );
    let status = Paragraph::new(text).style(theme.text_style());
    frame.render_widget(status, area);
}

fn render_policy(frame: &mut Frame, area: Rect, view: &PagerView, theme: &Theme) {
    let policy = Paragraph::new(view.policy_summary()).style(theme.text_secondary_style());
    frame.render_widget(policy, area);
}

/// Build styled spans for footer key hints, separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(FOOTER_KEYS, theme)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_width = 56.min(area.width.saturating_sub(4));
    let modal_height = (HELP_KEYS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let modal_area = centered_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let mut lines = vec![Line::default()];
    for (key, desc) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_bold_style()),
            Span::styled(desc.to_string(), theme.text_style()),
        ]));
    }
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
