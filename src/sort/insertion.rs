//! Insertion sort
//!
//! Each element is lifted out and the sorted prefix is shifted right until the
//! element's landing position opens up.

use super::{Checkpoint, Direction, Mark, SortRoutine, SortStats};
use std::time::Duration;

const STEP_DELAY: Duration = Duration::from_millis(20);

/// Only shifts out of indices divisible by this are drawn
const DRAW_EVERY: usize = 3;

/// The element being inserted and the open slot it may land in
#[derive(Debug, Clone, Copy)]
struct Insertion {
    value: i32,
    hole: usize,
}

#[derive(Debug)]
pub struct InsertionSort {
    direction: Direction,
    /// Next index to lift out of the unsorted suffix
    next: usize,
    current: Option<Insertion>,
    stats: SortStats,
}

impl InsertionSort {
    pub fn new(direction: Direction) -> Self {
        InsertionSort {
            direction,
            next: 1,
            current: None,
            stats: SortStats::default(),
        }
    }

    /// Write `value` at `index`, counting it only if the content changes
    fn write(&mut self, values: &mut [i32], index: usize, value: i32) {
        if values[index] != value {
            self.stats.moves += 1;
        }
        values[index] = value;
    }

    fn checkpoint(&mut self, checkpoint: Checkpoint) -> Option<Checkpoint> {
        self.stats.checkpoints += 1;
        Some(checkpoint)
    }
}

impl SortRoutine for InsertionSort {
    fn step(&mut self, values: &mut [i32]) -> Option<Checkpoint> {
        loop {
            let mut insertion = match self.current {
                Some(insertion) => insertion,
                None => {
                    if self.next >= values.len() {
                        return None;
                    }
                    let hole = self.next;
                    self.next += 1;
                    Insertion {
                        value: values[hole],
                        hole,
                    }
                }
            };

            let hole = insertion.hole;
            let shifts = hole > 0 && {
                self.stats.comparisons += 1;
                self.direction.out_of_order(values[hole - 1], insertion.value)
            };

            if shifts {
                let from = hole - 1;
                let shifted = values[from];
                self.write(values, hole, shifted);
                insertion.hole = from;
                self.current = Some(insertion);

                if from % DRAW_EVERY == 0 {
                    return self.checkpoint(
                        Checkpoint::new(STEP_DELAY)
                            .mark(from, Mark::Secondary)
                            .mark(hole, Mark::Primary),
                    );
                }
            } else {
                self.write(values, hole, insertion.value);
                self.current = None;
                return self.checkpoint(Checkpoint::new(STEP_DELAY).mark(hole, Mark::Primary));
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
    fn test_insertion_example() {
        let mut values = vec![5, 3, 1, 4, 2];
        let mut routine = InsertionSort::new(Direction::Ascending);
        let stats = run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        // Seven shifts plus four landings away from the lifted position
        assert_eq!(stats.moves, 11);
    }

    #[test]
    fn test_moves_count_only_changing_writes() {
        // Both the shift and the landing change content
        let mut values = vec![2, 1];
        let mut routine = InsertionSort::new(Direction::Ascending);
        let stats = run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 2]);
        assert_eq!(stats.moves, 2);

        // Shifting a 3 onto an equal 3 changes nothing
        let mut values = vec![3, 3, 1];
        let mut routine = InsertionSort::new(Direction::Ascending);
        let stats = run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 3, 3]);
        assert_eq!(stats.moves, 2);

        let mut values = vec![3, 1, 1];
        let mut routine = InsertionSort::new(Direction::Ascending);
        let stats = run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![1, 1, 3]);
        assert_eq!(stats.moves, 4);
    }

    #[test]
    fn test_moves_agree_with_merge_sort() {
        let mut insertion_values = vec![2, 1];
        let mut merge_values = insertion_values.clone();

        let insertion = run_to_completion(
            &mut InsertionSort::new(Direction::Ascending),
            &mut insertion_values,
        );
        let merge = run_to_completion(
            &mut crate::sort::MergeSort::new(Direction::Ascending, 2),
            &mut merge_values,
        );
        assert_eq!(insertion.moves, merge.moves);
    }

    #[test]
    fn test_landing_checkpoint_per_element() {
        let mut values = vec![1, 2, 3, 4];
        let mut routine = InsertionSort::new(Direction::Ascending);

        for landing in 1..4 {
            let checkpoint = routine.step(&mut values).expect("landing is drawn");
            assert_eq!(checkpoint.highlights.len(), 1);
            assert_eq!(checkpoint.highlights[&landing], Mark::Primary);
        }
        assert!(routine.step(&mut values).is_none());
        assert_eq!(routine.stats().moves, 0);
    }

    #[test]
    fn test_shift_checkpoint() {
        let mut values = vec![2, 1];
        let mut routine = InsertionSort::new(Direction::Ascending);

        // Shifting index 0 into 1 is drawn because 0 % 3 == 0
        let shift = routine.step(&mut values).expect("shift is drawn");
        assert_eq!(values, vec![2, 2]);
        assert_eq!(shift.highlights[&0], Mark::Secondary);
        assert_eq!(shift.highlights[&1], Mark::Primary);

        let landing = routine.step(&mut values).expect("landing is drawn");
        assert_eq!(values, vec![1, 2]);
        assert_eq!(landing.highlights[&0], Mark::Primary);

        assert!(routine.step(&mut values).is_none());
    }

    #[test]
    fn test_descending_with_duplicates() {
        let mut values = vec![3, 7, 3, 9, 1];
        let mut routine = InsertionSort::new(Direction::Descending);
        run_to_completion(&mut routine, &mut values);
        assert_eq!(values, vec![9, 7, 3, 3, 1]);
    }
}
