//! Bar region rendering
//!
//! Each value is a vertical bar growing up from the bottom of the region.
//! Heights have eighth-of-a-cell resolution using the lower block glyphs.

use crate::canvas::{Canvas, DrawContext, EIGHTHS_PER_CELL};
use crate::sort::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Widget},
};

/// Glyphs for a partial top cell, indexed by eighths (0 is unused)
const PARTIAL: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";

/// The array drawn as bars, with optional highlighted indices
pub struct Bars<'a> {
    values: &'a [i32],
    context: &'a DrawContext,
    highlights: Option<&'a Highlights>,
}

impl<'a> Bars<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Bars {
            values: canvas.values(),
            context: canvas.context(),
            highlights: None,
        }
    }

    pub fn highlights(mut self, highlights: Option<&'a Highlights>) -> Self {
        self.highlights = highlights;
        self
    }

    fn color(&self, index: usize) -> Color {
        self.highlights
            .and_then(|highlights| highlights.get(&index))
            .map_or_else(|| DEFAULT_THEME.bar(index), |&mark| DEFAULT_THEME.mark(mark))
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let max_eighths = area.height as u32 * EIGHTHS_PER_CELL;

        for (index, &value) in self.values.iter().enumerate() {
            let left = area.x as usize + self.context.bar_x(index);
            if left >= area.right() as usize {
                break;
            }
            let right = (left + self.context.bar_width as usize).min(area.right() as usize);

            let eighths = self.context.bar_eighths(value).min(max_eighths);
            let full_rows = (eighths / EIGHTHS_PER_CELL) as u16;
            let remainder = (eighths % EIGHTHS_PER_CELL) as usize;
            let color = self.color(index);

            for x in left as u16..right as u16 {
                for row in 0..full_rows {
                    if let Some(cell) = buf.cell_mut((x, area.bottom() - 1 - row)) {
                        cell.set_symbol(FULL).set_fg(color);
                    }
                }
                if remainder > 0 && full_rows < area.height {
                    if let Some(cell) = buf.cell_mut((x, area.bottom() - 1 - full_rows)) {
                        cell.set_symbol(PARTIAL[remainder]).set_fg(color);
                    }
                }
            }
        }
    }
}

/// Draw only the bar region, optionally clearing it first
pub fn render_bars(
    frame: &mut Frame,
    area: Rect,
    canvas: &Canvas,
    highlights: Option<&Highlights>,
    clear_first: bool,
) {
    if clear_first {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            area,
        );
    }
    frame.render_widget(Bars::new(canvas).highlights(highlights), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Mark;

    fn render(canvas: &Canvas, highlights: Option<&Highlights>, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        Bars::new(canvas).highlights(highlights).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_bar_heights() {
        // Range 0..=4 over 2 rows: 16 eighths, 4 per unit
        let canvas = Canvas::new(5, 2, 0, vec![0, 1, 2, 3, 4]).expect("canvas");
        let buf = render(&canvas, None, Rect::new(0, 0, 5, 2));

        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(1, 1)].symbol(), "▄");
        assert_eq!(buf[(2, 1)].symbol(), FULL);
        assert_eq!(buf[(2, 0)].symbol(), " ");
        assert_eq!(buf[(3, 0)].symbol(), "▄");
        assert_eq!(buf[(4, 0)].symbol(), FULL);
        assert_eq!(buf[(4, 1)].symbol(), FULL);
    }

    #[test]
    fn test_gradient_and_highlight_colors() {
        let canvas = Canvas::new(4, 1, 0, vec![1, 1, 1, 2]).expect("canvas");
        let mut highlights = Highlights::default();
        highlights.insert(3, Mark::Secondary);
        let buf = render(&canvas, Some(&highlights), Rect::new(0, 0, 4, 1));

        assert_eq!(buf[(3, 0)].fg, DEFAULT_THEME.secondary_mark);

        let canvas = Canvas::new(4, 1, 0, vec![2, 2, 2, 1]).expect("canvas");
        let buf = render(&canvas, None, Rect::new(0, 0, 4, 1));
        assert_eq!(buf[(0, 0)].fg, DEFAULT_THEME.gradient[0]);
        assert_eq!(buf[(1, 0)].fg, DEFAULT_THEME.gradient[1]);
        assert_eq!(buf[(2, 0)].fg, DEFAULT_THEME.gradient[2]);
    }

    #[test]
    fn test_bars_past_the_edge_are_clipped() {
        let canvas = Canvas::new(3, 1, 0, vec![0, 5, 5, 5, 5, 5]).expect("canvas");
        let buf = render(&canvas, None, Rect::new(0, 0, 3, 1));
        assert_eq!(buf.area.width, 3);
        assert_eq!(buf[(2, 0)].symbol(), FULL);
    }
}
