use crate::algorithms::SortMachine;
use crate::{Element, Step};

/// Insertion sort.
///
/// The key being inserted is moved left with real swaps rather than shifted and written back
/// at the end, so the sequence is a permutation of the input between any two steps. The
/// comparison that stops the scan is not a step, matching the classic `while a[j] > key` loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionSort {
    i: usize,
    // Current position of the key.
    j: usize,
    pending_swap: bool,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self {
            i: 1,
            j: 1,
            pending_swap: false,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> SortMachine<T> for InsertionSort {
    fn next_step(&mut self, seq: &mut [T]) -> Option<Step> {
        if self.pending_swap {
            self.pending_swap = false;
            let j = self.j;
            seq.swap(j - 1, j);
            self.j -= 1;
            return Some(Step::Swap(j - 1, j));
        }

        loop {
            if self.i >= seq.len() {
                return None;
            }

            let j = self.j;
            if j > 0 && seq[j - 1] > seq[j] {
                self.pending_swap = true;
                return Some(Step::Compare(j - 1, j));
            }

            self.i += 1;
            self.j = self.i;
        }
    }
}
