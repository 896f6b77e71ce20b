use alloc::vec::Vec;

use crate::{Element, Step, StepEvent};

/// Rebuilds a run's sequence from its initial contents and its events.
///
/// Only `Swap` steps change the sequence. Events whose operands are out of bounds are skipped.
///
/// With default [`crate::RunOptions`] every mutation of a run is reported, so replaying all of
/// its events yields the run's final sequence. Runs that move the quick sort pivot silently
/// (see [`crate::RunOptions::announce_pivot_placement`]) do not replay exactly.
pub fn replay<'a, T: Element>(
    initial: &[T],
    events: impl IntoIterator<Item = &'a StepEvent>,
) -> Vec<T> {
    let mut seq = initial.to_vec();
    for event in events {
        if let Step::Swap(i, j) = event.step {
            if i < seq.len() && j < seq.len() {
                seq.swap(i, j);
            }
        }
    }
    seq
}
