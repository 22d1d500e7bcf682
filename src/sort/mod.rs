//! Animated sort routines
//!
//! Each algorithm is an explicit state machine implementing [`SortRoutine`].
//! Calling [`SortRoutine::step`] runs the textbook algorithm until the next
//! visually interesting mutation and returns a [`Checkpoint`] describing what
//! to highlight and how long to wait before resuming. `None` means the array
//! is sorted and the routine is finished.
//!
//! - [`bubble`]: adjacent swaps
//! - [`insertion`]: shift-based insertion
//! - [`merge`]: top-down merge sort driven by a task stack
//! - [`quick`]: Lomuto partition quick sort driven by a range stack
//!
//! Dropping a routine cancels it; it holds no reference to the array between
//! steps.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

use rustc_hash::FxHashMap;
use std::fmt;
use std::time::Duration;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

/// Sort direction. Every comparison in every routine flips with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// `a` must not precede `b` (strict: `>` ascending, `<` descending)
    #[inline]
    pub fn out_of_order(self, a: i32, b: i32) -> bool {
        match self {
            Direction::Ascending => a > b,
            Direction::Descending => a < b,
        }
    }

    /// `a` may precede `b` (`<=` ascending, `>=` descending)
    #[inline]
    pub fn in_order(self, a: i32, b: i32) -> bool {
        !self.out_of_order(a, b)
    }

    /// Whether `values` is sorted in this direction
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values.windows(2).all(|w| self.in_order(w[0], w[1]))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

/// The algorithms that can be selected from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Build a fresh routine for an array of `len` elements
    pub fn routine(self, direction: Direction, len: usize) -> Box<dyn SortRoutine> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(direction)),
            Algorithm::Insertion => Box::new(InsertionSort::new(direction)),
            Algorithm::Merge => Box::new(MergeSort::new(direction, len)),
            Algorithm::Quick => Box::new(QuickSort::new(direction, len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a highlighted bar at a checkpoint. The theme maps each to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Green: the element just placed or the partition boundary
    Primary,
    /// Red: the neighbour of a swap/shift or the pivot
    Secondary,
    /// Blue: the scan position during partitioning
    Tertiary,
}

/// Bar index to highlight role
pub type Highlights = FxHashMap<usize, Mark>;

/// A suspension point: one frame should be drawn, then `delay` observed
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub highlights: Highlights,
    pub delay: Duration,
    /// Clear the bar region before drawing it
    pub clear_region: bool,
}

impl Checkpoint {
    /// A checkpoint with no highlights that clears the bar region
    pub fn new(delay: Duration) -> Self {
        Checkpoint {
            highlights: Highlights::default(),
            delay,
            clear_region: true,
        }
    }

    /// Highlight `index`; a later mark on the same index replaces the earlier one
    pub fn mark(mut self, index: usize, mark: Mark) -> Self {
        self.highlights.insert(index, mark);
        self
    }
}

/// Work counters for one run of a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    pub comparisons: usize,
    /// Swaps and writes that changed the array's content
    pub moves: usize,
    pub checkpoints: usize,
}

/// A sort that can be advanced one checkpoint at a time
pub trait SortRoutine {
    /// Continue sorting `values` until the next checkpoint, or return `None`
    /// once the array is sorted. `values` must be the same array on every call.
    fn step(&mut self, values: &mut [i32]) -> Option<Checkpoint>;

    fn stats(&self) -> SortStats;
}

/// Drive a routine to completion, ignoring delays
pub fn run_to_completion(routine: &mut dyn SortRoutine, values: &mut [i32]) -> SortStats {
    while routine.step(values).is_some() {}
    routine.stats()
}

/// Sort `values` in place with `algorithm`, without animation
pub fn sort(algorithm: Algorithm, direction: Direction, values: &mut [i32]) -> SortStats {
    let mut routine = algorithm.routine(direction, values.len());
    run_to_completion(routine.as_mut(), values)
}
