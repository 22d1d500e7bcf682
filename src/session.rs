//! Animation session: what is selected, what is running, how fast
//!
//! The session owns at most one running [`SortRoutine`]. The control loop
//! calls [`Session::advance`] once per tick; the routine resumes only when the
//! delay of its previous checkpoint has elapsed, so perceived speed depends on
//! both the tick rate and the per-checkpoint delays.

use crate::config::Config;
use crate::sort::{Algorithm, Direction, Highlights, SortRoutine, SortStats};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// A sort in progress
struct ActiveSort {
    algorithm: Algorithm,
    routine: Box<dyn SortRoutine>,
    /// Earliest time the routine may continue
    resume_at: Instant,
    /// Highlights of the most recent checkpoint
    highlights: Highlights,
    clear_region: bool,
}

/// What a call to [`Session::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// No sort is running
    Idle,
    /// The previous checkpoint's delay has not elapsed yet
    Waiting,
    /// The routine ran to its next checkpoint
    Checkpoint,
    /// The routine finished; the session is idle again
    Finished,
}

pub struct Session {
    config: Config,
    algorithm: Option<Algorithm>,
    direction: Direction,
    tick_rate: u32,
    active: Option<ActiveSort>,
    /// Counters of the last sort that ran to completion
    last_stats: Option<SortStats>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            config,
            algorithm: None,
            direction: Direction::Ascending,
            tick_rate: config.default_tick_rate,
            active: None,
            last_stats: None,
        }
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Time between ticks at the current tick rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Title text: algorithm name, or a prompt when nothing is selected
    pub fn title(&self) -> String {
        let name = self.algorithm.map_or("Choose Algorithm", Algorithm::name);
        format!("{} - {}", name, self.direction.label())
    }

    /// Highlights to draw for the current frame (empty when idle)
    pub fn highlights(&self) -> Option<&Highlights> {
        self.active.as_ref().map(|active| &active.highlights)
    }

    /// Whether the bar region should be cleared before drawing this frame
    pub fn clear_region(&self) -> bool {
        self.active.as_ref().is_some_and(|active| active.clear_region)
    }

    /// Counters of the running sort, or of the last finished one
    pub fn stats(&self) -> Option<SortStats> {
        self.active
            .as_ref()
            .map(|active| active.routine.stats())
            .or(self.last_stats)
    }

    /// Select an algorithm. Ignored while sorting.
    pub fn select(&mut self, algorithm: Algorithm) -> bool {
        if self.is_running() {
            return false;
        }
        debug!(algorithm = algorithm.name(), "algorithm selected");
        self.algorithm = Some(algorithm);
        true
    }

    /// Choose the sort direction. Ignored while sorting.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_running() {
            return false;
        }
        debug!(direction = direction.label(), "direction selected");
        self.direction = direction;
        true
    }

    /// Launch the selected algorithm on an array of `len` elements.
    /// No-op if nothing is selected or a sort is already running.
    pub fn start(&mut self, len: usize, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        let Some(algorithm) = self.algorithm else {
            debug!("start ignored: no algorithm selected");
            return false;
        };

        info!(
            algorithm = algorithm.name(),
            direction = self.direction.label(),
            len,
            "sort started"
        );
        self.last_stats = None;
        self.active = Some(ActiveSort {
            algorithm,
            routine: algorithm.routine(self.direction, len),
            resume_at: now,
            highlights: Highlights::default(),
            clear_region: false,
        });
        true
    }

    /// Drop the running sort, if any, and return to the default tick rate.
    /// The dropped routine never touches the array again.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            info!(
                algorithm = active.algorithm.name(),
                checkpoints = active.routine.stats().checkpoints,
                "sort cancelled"
            );
        }
        self.last_stats = None;
        self.tick_rate = self.config.default_tick_rate;
    }

    /// Run the active sort to its next checkpoint if its delay has elapsed
    pub fn advance(&mut self, values: &mut [i32], now: Instant) -> Progress {
        let Some(active) = self.active.as_mut() else {
            return Progress::Idle;
        };
        if now < active.resume_at {
            return Progress::Waiting;
        }

        match active.routine.step(values) {
            Some(checkpoint) => {
                trace!(
                    highlighted = checkpoint.highlights.len(),
                    delay_ms = checkpoint.delay.as_millis() as u64,
                    "checkpoint"
                );
                active.resume_at = now + checkpoint.delay;
                active.highlights = checkpoint.highlights;
                active.clear_region = checkpoint.clear_region;
                Progress::Checkpoint
            }
            None => {
                let stats = active.routine.stats();
                info!(
                    algorithm = active.algorithm.name(),
                    comparisons = stats.comparisons,
                    moves = stats.moves,
                    "sort finished"
                );
                self.active = None;
                self.last_stats = Some(stats);
                self.tick_rate = self.config.default_tick_rate;
                Progress::Finished
            }
        }
    }

    /// Raise the tick rate by one step, up to the maximum. Allowed while sorting.
    pub fn faster(&mut self) {
        self.tick_rate = (self.tick_rate + self.config.tick_step).min(self.config.max_tick_rate);
        debug!(tick_rate = self.tick_rate, "tick rate raised");
    }

    /// Lower the tick rate by one step, down to the minimum. Allowed while sorting.
    pub fn slower(&mut self) {
        self.tick_rate = self
            .tick_rate
            .saturating_sub(self.config.tick_step)
            .max(self.config.min_tick_rate);
        debug!(tick_rate = self.tick_rate, "tick rate lowered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;

    fn drain(session: &mut Session, values: &mut [i32], mut now: Instant) -> usize {
        let mut checkpoints = 0;
        loop {
            match session.advance(values, now) {
                Progress::Checkpoint => checkpoints += 1,
                Progress::Finished => return checkpoints,
                Progress::Idle => panic!("session went idle without finishing"),
                Progress::Waiting => {}
            }
            now += Duration::from_millis(100);
        }
    }

    #[test]
    fn test_start_requires_selection() {
        let mut session = Session::new(DEFAULT_CONFIG);
        assert!(!session.start(5, Instant::now()));
        assert!(!session.is_running());
        assert_eq!(session.title(), "Choose Algorithm - Ascending");
    }

    #[test]
    fn test_selection_locked_while_running() {
        let mut session = Session::new(DEFAULT_CONFIG);
        session.select(Algorithm::Bubble);
        assert!(session.start(5, Instant::now()));

        assert!(!session.select(Algorithm::Quick));
        assert!(!session.set_direction(Direction::Descending));
        assert!(!session.start(5, Instant::now()));
        assert_eq!(session.title(), "Bubble Sort - Ascending");
    }

    #[test]
    fn test_waits_for_checkpoint_delay() {
        let mut session = Session::new(DEFAULT_CONFIG);
        session.select(Algorithm::Bubble);
        let mut values = vec![2, 1, 3, 4, 5, 6, 7, 8];
        let now = Instant::now();
        session.start(values.len(), now);

        assert_eq!(session.advance(&mut values, now), Progress::Checkpoint);
        assert!(session.highlights().is_some_and(|h| h.len() == 2));
        assert!(session.clear_region());
        assert_eq!(
            session.advance(&mut values, now + Duration::from_millis(5)),
            Progress::Waiting
        );
        assert_eq!(
            session.advance(&mut values, now + Duration::from_millis(30)),
            Progress::Finished
        );
        assert!(!session.is_running());
        assert!(session.highlights().is_none());
    }

    #[test]
    fn test_finish_restores_default_rate_and_keeps_stats() {
        let mut session = Session::new(DEFAULT_CONFIG);
        session.select(Algorithm::Quick);
        session.set_direction(Direction::Descending);
        let mut values = vec![5, 3, 1, 4, 2];
        session.start(values.len(), Instant::now());
        session.faster();
        assert_eq!(session.tick_rate(), 70);

        drain(&mut session, &mut values, Instant::now());
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
        assert_eq!(session.tick_rate(), DEFAULT_CONFIG.default_tick_rate);
        assert!(session.stats().is_some_and(|s| s.moves > 0));
    }

    #[test]
    fn test_cancel_stops_mutation() {
        let mut session = Session::new(DEFAULT_CONFIG);
        session.select(Algorithm::Insertion);
        let mut values: Vec<i32> = (0..20).rev().collect();
        let now = Instant::now();
        session.start(values.len(), now);
        assert_eq!(session.advance(&mut values, now), Progress::Checkpoint);

        session.cancel();
        let snapshot = values.clone();
        assert_eq!(
            session.advance(&mut values, now + Duration::from_secs(1)),
            Progress::Idle
        );
        assert_eq!(values, snapshot);
        assert!(session.stats().is_none());
    }

    #[test]
    fn test_tick_rate_bounds() {
        let mut session = Session::new(DEFAULT_CONFIG);
        for _ in 0..20 {
            session.faster();
        }
        assert_eq!(session.tick_rate(), 120);
        for _ in 0..20 {
            session.slower();
        }
        assert_eq!(session.tick_rate(), 10);
        assert_eq!(session.tick_interval(), Duration::from_millis(100));
    }
}
