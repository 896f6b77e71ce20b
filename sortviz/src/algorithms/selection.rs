use crate::algorithms::SortMachine;
use crate::{Element, Step};

/// Selection sort: finds the minimum of `i..n` and swaps it into `i`.
///
/// Finding a new minimum is silent; only the comparisons and the final swap are steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> SortMachine<T> for SelectionSort {
    fn next_step(&mut self, seq: &mut [T]) -> Option<Step> {
        let len = seq.len();
        loop {
            if len < 2 || self.i >= len - 1 {
                return None;
            }

            if self.j < len {
                let (j, min) = (self.j, self.min);
                if seq[j] < seq[min] {
                    self.min = j;
                }
                self.j += 1;
                return Some(Step::Compare(j, min));
            }

            let (i, min) = (self.i, self.min);
            self.i += 1;
            self.min = self.i;
            self.j = self.i + 1;
            if min != i {
                seq.swap(i, min);
                return Some(Step::Swap(i, min));
            }
        }
    }
}
