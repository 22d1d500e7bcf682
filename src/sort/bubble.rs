//! Bubble sort
//!
//! Repeatedly swaps adjacent out-of-order elements; after pass `i` the last
//! `i + 1` positions hold their final values.

use super::{Checkpoint, Direction, Mark, SortRoutine, SortStats};
use std::time::Duration;

const SWAP_DELAY: Duration = Duration::from_millis(30);

/// Only swaps at indices divisible by this are drawn
const DRAW_EVERY: usize = 5;

#[derive(Debug)]
pub struct BubbleSort {
    direction: Direction,
    /// Current pass
    pass: usize,
    /// Next left-hand index to compare within the pass
    index: usize,
    stats: SortStats,
}

impl BubbleSort {
    pub fn new(direction: Direction) -> Self {
        BubbleSort {
            direction,
            pass: 0,
            index: 0,
            stats: SortStats::default(),
        }
    }
}

impl SortRoutine for BubbleSort {
    fn step(&mut self, values: &mut [i32]) -> Option<Checkpoint> {
        let len = values.len();

        while self.pass + 1 < len {
            while self.index + 1 < len - self.pass {
                let j = self.index;
                self.index += 1;

                self.stats.comparisons += 1;
                if self.direction.out_of_order(values[j], values[j + 1]) {
                    values.swap(j, j + 1);
                    self.stats.moves += 1;

                    if j % DRAW_EVERY == 0 {
                        self.stats.checkpoints += 1;
                        return Some(
                            Checkpoint::new(SWAP_DELAY)
                                .mark(j, Mark::Primary)
                                .mark(j + 1, Mark::Secondary),
                        );
                    }
                }
            }

            self.pass += 1;
            self.index = 0;
        }

        None
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}
