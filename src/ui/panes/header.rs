//! Heads-up text above the bars: title plus the key reference

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

/// Rows taken by the header, including the spacer below it
pub const HEADER_HEIGHT: u16 = 6;

const CONTROLS: &str = "R - Reset | SPACE - Start | A - Ascending | D - Descending";
const ALGORITHMS: &str = "B - Bubble | I - Insertion | M - Merge | Q - Quick";
const SPEED: &str = "SPEED: UP - Faster | DOWN - Slower";

/// Render the title and the static instructions, centered
pub fn render_header(frame: &mut Frame, area: Rect, title: &str) {
    let text_style = Style::default().fg(DEFAULT_THEME.fg);

    let lines = vec![
        Line::styled(
            title.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(CONTROLS, text_style),
        Line::styled(ALGORITHMS, text_style),
        Line::styled(SPEED, Style::default().fg(DEFAULT_THEME.comment)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
