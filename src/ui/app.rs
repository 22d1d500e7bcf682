//! Main TUI application state and logic

use crate::array::generate_from_config;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::VisualizerError;
use crate::session::{Progress, Session};
use crate::sort::{Algorithm, Direction};
use crate::ui::panes::{self, ScreenLayout, SessionBadge, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use std::time::Instant;
use tracing::{debug, info};

/// The main application state
pub struct App {
    config: Config,

    /// The array being sorted and its geometry
    pub canvas: Canvas,

    /// Selection, running sort and speed
    pub session: Session,

    rng: StdRng,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the last sort ran to completion on the current array
    pub sorted: bool,
}

impl App {
    /// Create an app for a screen of `area`, with a freshly generated array
    pub fn new(config: Config, area: Rect, mut rng: StdRng) -> Result<Self, VisualizerError> {
        config.validate()?;

        let layout = ScreenLayout::new(area);
        let values = generate_from_config(&config, &mut rng);
        let canvas = Canvas::new(layout.bars.width, layout.bars.height, config.side_pad, values)?;

        Ok(App {
            config,
            canvas,
            session: Session::new(config),
            rng,
            should_quit: false,
            status_message: String::from("Ready!"),
            sorted: false,
        })
    }

    /// Run the TUI application until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), VisualizerError> {
        info!(len = self.canvas.values().len(), "visualizer started");

        loop {
            let tick_start = Instant::now();
            self.tick(tick_start);
            terminal.draw(|f| self.render(f))?;

            // Drain input until the next tick is due
            let deadline = tick_start + self.session.tick_interval();
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if !event::poll(remaining)? {
                    break;
                }
                self.handle_event(event::read()?)?;
                if self.should_quit {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }
    }

    /// Advance the running sort, if its checkpoint delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.session.advance(self.canvas.values_mut(), now) == Progress::Finished {
            self.sorted = true;
            self.status_message = match self.session.algorithm() {
                Some(algorithm) => format!("{} finished", algorithm),
                None => "Finished".to_string(),
            };
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = ScreenLayout::new(frame.area());
        self.canvas.resize(layout.bars.width, layout.bars.height);

        panes::render_frame(
            frame,
            &layout,
            &self.canvas,
            &self.session.title(),
            self.session.highlights(),
            self.session.clear_region(),
        );

        let badge = if self.session.is_running() {
            SessionBadge::Sorting
        } else if self.sorted {
            SessionBadge::Sorted
        } else {
            SessionBadge::Idle
        };

        panes::render_status_bar(
            frame,
            layout.status,
            &StatusRenderData {
                message: &self.status_message,
                tick_rate: self.session.tick_rate(),
                stats: self.session.stats(),
                badge,
            },
        );
    }

    fn handle_event(&mut self, event: Event) -> Result<(), VisualizerError> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), VisualizerError> {
        debug!(code = ?key.code, "key pressed");

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset()?,
            KeyCode::Char(' ') => self.start(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.set_direction(Direction::Ascending),
            KeyCode::Char('d') | KeyCode::Char('D') => self.set_direction(Direction::Descending),
            KeyCode::Char('b') | KeyCode::Char('B') => self.select(Algorithm::Bubble),
            KeyCode::Char('i') | KeyCode::Char('I') => self.select(Algorithm::Insertion),
            KeyCode::Char('m') | KeyCode::Char('M') => self.select(Algorithm::Merge),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.select(Algorithm::Quick),
            KeyCode::Up => {
                self.session.faster();
                self.status_message = format!("Speed: {} ticks/s", self.session.tick_rate());
            }
            KeyCode::Down => {
                self.session.slower();
                self.status_message = format!("Speed: {} ticks/s", self.session.tick_rate());
            }
            _ => {}
        }

        Ok(())
    }

    /// Cancel any running sort and install a new random array
    fn reset(&mut self) -> Result<(), VisualizerError> {
        self.session.cancel();
        let values = generate_from_config(&self.config, &mut self.rng);
        self.canvas.replace_array(values)?;
        self.sorted = false;
        self.status_message = "New array generated".to_string();
        info!(len = self.canvas.values().len(), "array regenerated");
        Ok(())
    }

    fn start(&mut self) {
        if self.session.start(self.canvas.values().len(), Instant::now()) {
            self.sorted = false;
            self.status_message = "Sorting...".to_string();
        } else if self.session.algorithm().is_none() {
            self.status_message = "Choose an algorithm first".to_string();
        }
    }

    fn select(&mut self, algorithm: Algorithm) {
        if self.session.select(algorithm) {
            self.status_message = format!("{} selected", algorithm);
        }
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.session.set_direction(direction) {
            self.status_message = format!("{} order", direction.label());
        }
    }
}
