//! TUI pane rendering
//!
//! - [`header`]: title and key reference
//! - [`bars`]: the array as vertical bars, with checkpoint highlights
//! - [`status`]: tick rate, sort counters and session badge
//!
//! The screen is split top to bottom into header, bar region and status bar.
//! The canvas is sized to the bar region.

pub mod bars;
pub mod header;
pub mod status;

pub use bars::{Bars, render_bars};
pub use header::{HEADER_HEIGHT, render_header};
pub use status::{SessionBadge, StatusRenderData, render_status_bar};

use crate::canvas::Canvas;
use crate::sort::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

/// Screen regions: header, bars, status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub bars: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        ScreenLayout {
            header: chunks[0],
            bars: chunks[1],
            status: chunks[2],
        }
    }
}

/// Clear the screen, draw the header and all bars
pub fn render_frame(
    frame: &mut Frame,
    layout: &ScreenLayout,
    canvas: &Canvas,
    title: &str,
    highlights: Option<&Highlights>,
    clear_bars: bool,
) {
    let background = Block::default().style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(background, frame.area());

    render_header(frame, layout.header, title);
    render_bars(frame, layout.bars, canvas, highlights, clear_bars);
}
