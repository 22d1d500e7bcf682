//! Merge sort
//!
//! Top-down merge sort. The recursion (left half, right half, merge) is kept
//! on an explicit task stack so the routine can stop mid-merge and resume on
//! the next step. Ties take the left element, which keeps the sort stable.

use super::{Checkpoint, Direction, Mark, SortRoutine, SortStats};
use std::time::Duration;

const WRITE_DELAY: Duration = Duration::from_millis(20);
const MERGE_DELAY: Duration = Duration::from_millis(50);

/// Only writes to indices divisible by this are drawn
const DRAW_EVERY: usize = 10;

/// Inclusive index ranges, as in the recursive formulation
#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// An in-progress merge of `left` and `right` back into the array
#[derive(Debug)]
struct Merge {
    left: Vec<i32>,
    right: Vec<i32>,
    i: usize,
    j: usize,
    /// Next array index to write
    k: usize,
}

#[derive(Debug)]
pub struct MergeSort {
    direction: Direction,
    tasks: Vec<Task>,
    merging: Option<Merge>,
    stats: SortStats,
}

impl MergeSort {
    pub fn new(direction: Direction, len: usize) -> Self {
        let tasks = if len > 1 {
            vec![Task::Sort {
                start: 0,
                end: len - 1,
            }]
        } else {
            Vec::new()
        };

        MergeSort {
            direction,
            tasks,
            merging: None,
            stats: SortStats::default(),
        }
    }

    fn write(stats: &mut SortStats, values: &mut [i32], index: usize, value: i32) {
        if values[index] != value {
            stats.moves += 1;
        }
        values[index] = value;
    }
}

impl SortRoutine for MergeSort {
    fn step(&mut self, values: &mut [i32]) -> Option<Checkpoint> {
        loop {
            if let Some(merge) = self.merging.as_mut() {
                while merge.i < merge.left.len() && merge.j < merge.right.len() {
                    self.stats.comparisons += 1;
                    let value = if self.direction.in_order(merge.left[merge.i], merge.right[merge.j]) {
                        merge.i += 1;
                        merge.left[merge.i - 1]
                    } else {
                        merge.j += 1;
                        merge.right[merge.j - 1]
                    };

                    let k = merge.k;
                    Self::write(&mut self.stats, values, k, value);
                    merge.k += 1;

                    if k % DRAW_EVERY == 0 {
                        self.stats.checkpoints += 1;
                        return Some(Checkpoint::new(WRITE_DELAY).mark(k, Mark::Primary));
                    }
                }

                let rest = merge.left[merge.i..]
                    .iter()
                    .chain(&merge.right[merge.j..]);
                for (offset, &value) in rest.enumerate() {
                    Self::write(&mut self.stats, values, merge.k + offset, value);
                }

                self.merging = None;
                self.stats.checkpoints += 1;
                return Some(Checkpoint::new(MERGE_DELAY));
            }

            match self.tasks.pop()? {
                Task::Sort { start, end } => {
                    if start < end {
                        let mid = start + (end - start) / 2;
                        // Popped in reverse: left half, right half, then the merge
                        self.tasks.push(Task::Merge { start, mid, end });
                        self.tasks.push(Task::Sort { start: mid + 1, end });
                        self.tasks.push(Task::Sort { start, end: mid });
                    }
                }
                Task::Merge { start, mid, end } => {
                    self.merging = Some(Merge {
                        left: values[start..=mid].to_vec(),
                        right: values[mid + 1..=end].to_vec(),
                        i: 0,
                        j: 0,
                        k: start,
                    });
                }
            }
        }
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::run_to_completion;

    #[test]
    fn test_merge_example() {
        let mut values = vec![5, 3, 1, 4, 2];
        let mut routine = MergeSort::new(Direction::Ascending, values.len());
        run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_one_full_redraw_per_merge() {
        // Four elements: merges of [0,1], [2,3] then [0..3]
        let mut values = vec![4, 3, 2, 1];
        let mut routine = MergeSort::new(Direction::Ascending, values.len());

        let mut checkpoints = Vec::new();
        while let Some(checkpoint) = routine.step(&mut values) {
            checkpoints.push(checkpoint);
        }

        let merges: Vec<_> = checkpoints
            .iter()
            .filter(|c| c.highlights.is_empty())
            .collect();
        assert_eq!(merges.len(), 3);
        assert!(merges.iter().all(|c| c.delay == MERGE_DELAY));

        // Index 0 is written in the first and the last merge
        let writes: Vec<_> = checkpoints
            .iter()
            .filter(|c| !c.highlights.is_empty())
            .collect();
        assert_eq!(writes.len(), 2);
        assert!(writes.iter().all(|c| c.highlights[&0] == Mark::Primary));

        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_first_checkpoint_is_left_pair_merge() {
        let mut values = vec![9, 8, 7, 6, 5, 4];
        let mut routine = MergeSort::new(Direction::Ascending, values.len());

        // Left half [0..2] is split into [0..1] and [2]; [0..1] merges first
        let checkpoint = routine.step(&mut values).expect("write at 0");
        assert_eq!(checkpoint.highlights[&0], Mark::Primary);
        assert_eq!(values[0], 8);
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let mut values = vec![1, 1, 2, 3, 5, 8, 13];
        let mut routine = MergeSort::new(Direction::Ascending, values.len());
        let stats = run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 1, 2, 3, 5, 8, 13]);
        assert_eq!(stats.moves, 0);
    }

    #[test]
    fn test_descending() {
        let mut values = vec![2, 9, 4, 4, 0, 7];
        let mut routine = MergeSort::new(Direction::Descending, values.len());
        run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![9, 7, 4, 4, 2, 0]);
    }
}
