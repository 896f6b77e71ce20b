use crate::algorithms::SortMachine;
use crate::{Element, Step};

/// Bubble sort: pass `i` compares every adjacent pair in `0..n-1-i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BubbleSort {
    i: usize,
    j: usize,
    pending_swap: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&mut self, len: usize) {
        self.j += 1;
        if self.j >= len - 1 - self.i {
            self.i += 1;
            self.j = 0;
        }
    }
}

impl<T: Element> SortMachine<T> for BubbleSort {
    fn next_step(&mut self, seq: &mut [T]) -> Option<Step> {
        let len = seq.len();
        if self.pending_swap {
            self.pending_swap = false;
            let j = self.j;
            seq.swap(j, j + 1);
            self.advance(len);
            return Some(Step::Swap(j, j + 1));
        }

        if len < 2 || self.i >= len - 1 {
            return None;
        }

        let j = self.j;
        if seq[j] > seq[j + 1] {
            self.pending_swap = true;
        } else {
            self.advance(len);
        }
        Some(Step::Compare(j, j + 1))
    }
}
