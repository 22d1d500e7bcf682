//! Quick sort
//!
//! Lomuto partitioning around the last element of each range. Pending ranges
//! live on a stack; the left partition is always finished before the right.

use super::{Checkpoint, Direction, Mark, SortRoutine, SortStats};
use std::time::Duration;

const STEP_DELAY: Duration = Duration::from_millis(30);

/// Only accepted elements at scan indices divisible by this are drawn
const DRAW_EVERY: usize = 5;

/// An in-progress partition of `low..=high`
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i32,
    /// Where the next element belonging before the pivot goes
    boundary: usize,
    scan: usize,
}

#[derive(Debug)]
pub struct QuickSort {
    direction: Direction,
    /// Inclusive ranges still to partition, each with `low < high`
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
    stats: SortStats,
}

impl QuickSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        let ranges = if len > 1 { vec![(0, len - 1)] } else { Vec::new() };

        QuickSort {
            direction,
            ranges,
            partition: None,
            stats: SortStats::default(),
        }
    }

    fn swap(&mut self, values: &mut [i32], a: usize, b: usize) {
        if a != b && values[a] != values[b] {
            values.swap(a, b);
            self.stats.moves += 1;
        }
    }
}

impl SortRoutine for QuickSort {
    fn step(&mut self, values: &mut [i32]) -> Option<Checkpoint> {
        loop {
            if let Some(mut part) = self.partition {
                while part.scan < part.high {
                    let j = part.scan;
                    part.scan += 1;

                    self.stats.comparisons += 1;
                    if self.direction.in_order(values[j], part.pivot) {
                        let i = part.boundary;
                        self.swap(values, i, j);
                        part.boundary += 1;

                        if j % DRAW_EVERY == 0 {
                            self.partition = Some(part);
                            self.stats.checkpoints += 1;
                            return Some(
                                Checkpoint::new(STEP_DELAY)
                                    .mark(part.high, Mark::Secondary)
                                    .mark(i, Mark::Primary)
                                    .mark(j, Mark::Tertiary),
                            );
                        }
                    }
                }

                let Partition { low, high, boundary: pivot_at, .. } = part;
                self.swap(values, pivot_at, high);
                self.partition = None;

                // Pushed in reverse so the left side is partitioned first
                if pivot_at + 1 < high {
                    self.ranges.push((pivot_at + 1, high));
                }
                if pivot_at > low + 1 {
                    self.ranges.push((low, pivot_at - 1));
                }

                self.stats.checkpoints += 1;
                return Some(Checkpoint::new(STEP_DELAY).mark(pivot_at, Mark::Primary));
            }

            let (low, high) = self.ranges.pop()?;
            self.partition = Some(Partition {
                low,
                high,
                pivot: values[high],
                boundary: low,
                scan: low,
            });
        }
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}
