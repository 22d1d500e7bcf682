//! Status bar rendering with speed, counters and session state

use crate::sort::SortStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Session state shown as the badge on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBadge {
    Idle,
    Sorting,
    Sorted,
}

/// Everything the status bar displays
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub tick_rate: u32,
    pub stats: Option<SortStats>,
    pub badge: SessionBadge,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            format!(" {} ticks/s ", data.tick_rate),
            Style::default()
                .bg(DEFAULT_THEME.title)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let mut right_spans = Vec::new();
    if let Some(stats) = data.stats {
        right_spans.push(Span::styled(
            format!(
                " {} comparisons · {} moves ",
                stats.comparisons, stats.moves
            ),
            bar_style.fg(DEFAULT_THEME.fg),
        ));
        right_spans.push(Span::styled("│", sep_style));
    }

    let (label, color) = match data.badge {
        SessionBadge::Idle => (" IDLE ", DEFAULT_THEME.badge_idle),
        SessionBadge::Sorting => (" ▶ SORTING ", DEFAULT_THEME.badge_running),
        SessionBadge::Sorted => (" SORTED ", DEFAULT_THEME.badge_done),
    };
    right_spans.push(Span::styled(
        label,
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
