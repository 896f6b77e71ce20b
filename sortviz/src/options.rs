use crate::Algorithm;

/// Configuration for [`crate::SortRun`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOptions {
    pub algorithm: Algorithm,

    /// Stamped on every event of the run. Sessions bump it on every start/reset so consumers
    /// can drop events that belong to an older run.
    pub generation: u64,

    /// Quick sort only: emit a `Complete` after every partition and for every singleton
    /// subrange, instead of once at the very end.
    ///
    /// This reproduces the original visualizer, which marked all bars as sorted on each
    /// partition. The last event of a run is still a `Complete`.
    pub mark_partitions: bool,

    /// Quick sort only: report the final pivot move of each partition as a counted `Swap`.
    ///
    /// When disabled, the pivot is moved silently (original behaviour) and the event stream no
    /// longer replays to the final sequence.
    pub announce_pivot_placement: bool,

    /// Quick sort only: report an element that is already at the store index as a counted
    /// `Swap(i, i)`.
    ///
    /// Disabled by default, so already-sorted input produces no swaps.
    pub count_self_exchanges: bool,
}

impl RunOptions {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            generation: 0,
            mark_partitions: false,
            announce_pivot_placement: true,
            count_self_exchanges: false,
        }
    }

    /// Options matching the step stream of the original browser visualizer.
    ///
    /// Quick sort marks every partition, moves pivots silently and counts self-exchanges.
    pub fn legacy(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
            .with_mark_partitions(true)
            .with_announce_pivot_placement(false)
            .with_count_self_exchanges(true)
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_mark_partitions(mut self, mark_partitions: bool) -> Self {
        self.mark_partitions = mark_partitions;
        self
    }

    pub fn with_announce_pivot_placement(mut self, announce: bool) -> Self {
        self.announce_pivot_placement = announce;
        self
    }

    pub fn with_count_self_exchanges(mut self, count: bool) -> Self {
        self.count_self_exchanges = count;
        self
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
