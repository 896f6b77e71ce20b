//! Sorting algorithms rewritten as resumable state machines.
//!
//! Each call to [`SortMachine::next_step`] performs at most one observable action. Swaps are
//! applied to the sequence at the moment their `Swap` step is produced, so a consumer that
//! inspects the sequence after a step always sees its effect.

use alloc::boxed::Box;

use crate::{Algorithm, Element, RunOptions, Step};

mod bubble;
mod insertion;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// A sorting algorithm that can be advanced one step at a time.
///
/// Contract:
/// - `seq` is the same slice (same length) on every call.
/// - Every returned `Compare`/`Swap` operand is `< seq.len()`.
/// - Once `None` is returned, the slice is sorted ascending and every later call returns `None`.
pub trait SortMachine<T: Element> {
    fn next_step(&mut self, seq: &mut [T]) -> Option<Step>;
}

/// Builds the machine for `options.algorithm`.
pub fn machine_for<T: Element + Send + 'static>(
    options: &RunOptions,
) -> Box<dyn SortMachine<T> + Send> {
    match options.algorithm {
        Algorithm::Bubble => Box::new(BubbleSort::new()),
        Algorithm::Quick => Box::new(
            QuickSort::new()
                .with_mark_partitions(options.mark_partitions)
                .with_announce_pivot_placement(options.announce_pivot_placement)
                .with_count_self_exchanges(options.count_self_exchanges),
        ),
        Algorithm::Selection => Box::new(SelectionSort::new()),
        Algorithm::Insertion => Box::new(InsertionSort::new()),
    }
}
