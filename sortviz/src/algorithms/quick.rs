use alloc::vec::Vec;

use crate::algorithms::SortMachine;
use crate::{Element, Step};

/// An inclusive, non-empty subrange still waiting to be sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    left: usize,
    right: usize,
}

#[derive(Clone, Copy, Debug)]
struct Partition<T> {
    span: Span,
    pivot: T,
    i: usize,
    store: usize,
    pending_swap: bool,
}

/// Quick sort with Lomuto partitioning around the last element of each subrange.
///
/// Recursion is replaced by an explicit stack; the left subrange is always finished before the
/// right one, so the step order matches the recursive formulation.
#[derive(Clone, Debug)]
pub struct QuickSort<T> {
    stack: Vec<Span>,
    partition: Option<Partition<T>>,
    started: bool,
    pending_complete: bool,
    mark_partitions: bool,
    announce_pivot_placement: bool,
    count_self_exchanges: bool,
}

impl<T: Element> QuickSort<T> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            partition: None,
            started: false,
            pending_complete: false,
            mark_partitions: false,
            announce_pivot_placement: true,
            count_self_exchanges: false,
        }
    }

    /// See [`crate::RunOptions::mark_partitions`].
    pub fn with_mark_partitions(mut self, mark_partitions: bool) -> Self {
        self.mark_partitions = mark_partitions;
        self
    }

    /// See [`crate::RunOptions::announce_pivot_placement`].
    pub fn with_announce_pivot_placement(mut self, announce: bool) -> Self {
        self.announce_pivot_placement = announce;
        self
    }

    /// See [`crate::RunOptions::count_self_exchanges`].
    pub fn with_count_self_exchanges(mut self, count: bool) -> Self {
        self.count_self_exchanges = count;
        self
    }

    fn push_children(&mut self, span: Span, pivot_index: usize) {
        // Pushed right first so the left child is popped first.
        if pivot_index < span.right {
            self.stack.push(Span {
                left: pivot_index + 1,
                right: span.right,
            });
        }
        if pivot_index > span.left {
            self.stack.push(Span {
                left: span.left,
                right: pivot_index - 1,
            });
        }
    }
}

impl<T: Element> Default for QuickSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> SortMachine<T> for QuickSort<T> {
    fn next_step(&mut self, seq: &mut [T]) -> Option<Step> {
        if !self.started {
            self.started = true;
            if !seq.is_empty() {
                self.stack.push(Span {
                    left: 0,
                    right: seq.len() - 1,
                });
            }
        }

        if self.pending_complete {
            self.pending_complete = false;
            return Some(Step::Complete);
        }

        let count_self_exchanges = self.count_self_exchanges;
        loop {
            if let Some(p) = self.partition.as_mut() {
                if p.pending_swap {
                    p.pending_swap = false;
                    let (i, store) = (p.i, p.store);
                    seq.swap(i, store);
                    p.store += 1;
                    p.i += 1;
                    return Some(Step::Swap(i, store));
                }

                if p.i < p.span.right {
                    let i = p.i;
                    let below = seq[i] < p.pivot;
                    if below && (i != p.store || count_self_exchanges) {
                        p.pending_swap = true;
                    } else {
                        if below {
                            // Already in place and self-exchanges are not reported.
                            p.store += 1;
                        }
                        p.i += 1;
                    }
                    return Some(Step::Compare(i, p.span.right));
                }

                let (span, store) = (p.span, p.store);
                self.partition = None;
                seq.swap(store, span.right);
                self.push_children(span, store);
                sdebug!(
                    left = span.left,
                    right = span.right,
                    pivot_index = store,
                    "QuickSort: partition done"
                );

                if self.announce_pivot_placement && store != span.right {
                    self.pending_complete = self.mark_partitions;
                    return Some(Step::Swap(store, span.right));
                }
                if self.mark_partitions {
                    return Some(Step::Complete);
                }
                continue;
            }

            let span = self.stack.pop()?;
            if span.left == span.right {
                if self.mark_partitions {
                    return Some(Step::Complete);
                }
                continue;
            }

            self.partition = Some(Partition {
                span,
                pivot: seq[span.right],
                i: span.left,
                store: span.left,
                pending_swap: false,
            });
        }
    }
}
