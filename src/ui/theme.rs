use crate::sort::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,   // Blue
    pub comment: Color, // Grey
    /// Default bar shades, picked by `index % 3`
    pub gradient: [Color; 3],
    pub primary_mark: Color,   // Green
    pub secondary_mark: Color, // Red
    pub tertiary_mark: Color,  // Blue
    pub status_bg: Color,
    pub badge_idle: Color,
    pub badge_running: Color,
    pub badge_done: Color,
}

impl Theme {
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::Primary => self.primary_mark,
            Mark::Secondary => self.secondary_mark,
            Mark::Tertiary => self.tertiary_mark,
        }
    }

    pub fn bar(&self, index: usize) -> Color {
        self.gradient[index % self.gradient.len()]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(137, 180, 250),
    comment: Color::Rgb(108, 112, 134),
    gradient: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    primary_mark: Color::Rgb(0, 255, 0),   // Green
    secondary_mark: Color::Rgb(255, 0, 0), // Red
    tertiary_mark: Color::Rgb(0, 0, 255),  // Blue
    status_bg: Color::Rgb(50, 50, 70),
    badge_idle: Color::Rgb(137, 180, 250),
    badge_running: Color::Rgb(250, 179, 135), // Orange
    badge_done: Color::Rgb(166, 227, 161),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_colors() {
        assert_eq!(DEFAULT_THEME.mark(Mark::Primary), Color::Rgb(0, 255, 0));
        assert_eq!(DEFAULT_THEME.mark(Mark::Secondary), Color::Rgb(255, 0, 0));
        assert_eq!(DEFAULT_THEME.mark(Mark::Tertiary), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_gradient_cycles_by_index() {
        assert_eq!(DEFAULT_THEME.bar(0), DEFAULT_THEME.bar(3));
        assert_ne!(DEFAULT_THEME.bar(0), DEFAULT_THEME.bar(1));
    }
}
