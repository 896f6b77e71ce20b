use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::algorithms::{SortMachine, machine_for};
use crate::{Algorithm, Counters, Element, RunOptions, RunSnapshot, StepEmitter, StepEvent};

/// One invocation of a sorting algorithm over an owned sequence.
///
/// A run is a lazy, consumer-paced event source: every call to [`SortRun::next_event`] advances
/// the algorithm by exactly one step. It does not hold any UI objects and never sleeps; pacing
/// is left to the caller (see the `sortviz-adapter` crate).
///
/// The last event of every run is a `Complete`. After it, `next_event` returns `None`.
pub struct SortRun<T = f64> {
    options: RunOptions,
    sequence: Vec<T>,
    machine: Box<dyn SortMachine<T> + Send>,
    emitter: StepEmitter,
}

impl<T: Element + Send + 'static> SortRun<T> {
    pub fn new(sequence: Vec<T>, options: RunOptions) -> Self {
        sdebug!(
            algorithm = options.algorithm.name(),
            len = sequence.len(),
            generation = options.generation,
            "SortRun::new"
        );
        Self {
            machine: machine_for(&options),
            emitter: StepEmitter::new(sequence.len(), options.generation),
            sequence,
            options,
        }
    }

    /// Shorthand for a run with default options for `algorithm`.
    pub fn with_algorithm(sequence: Vec<T>, algorithm: Algorithm) -> Self {
        Self::new(sequence, RunOptions::new(algorithm))
    }
}

impl<T: Element> SortRun<T> {
    /// Runs `machine` instead of one of the built-in algorithms.
    ///
    /// `options.algorithm` is only used for reporting.
    pub fn with_machine(
        sequence: Vec<T>,
        options: RunOptions,
        machine: Box<dyn SortMachine<T> + Send>,
    ) -> Self {
        Self {
            emitter: StepEmitter::new(sequence.len(), options.generation),
            machine,
            sequence,
            options,
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn algorithm(&self) -> Algorithm {
        self.options.algorithm
    }

    pub fn generation(&self) -> u64 {
        self.options.generation
    }

    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    pub fn counters(&self) -> Counters {
        self.emitter.counters()
    }

    pub fn is_finished(&self) -> bool {
        self.emitter.is_sealed()
    }

    /// Advances the algorithm by one step.
    pub fn next_event(&mut self) -> Option<StepEvent> {
        if self.emitter.is_sealed() {
            return None;
        }

        while let Some(step) = self.machine.next_step(&mut self.sequence) {
            if let Some(event) = self.emitter.emit(step) {
                return Some(event);
            }
        }

        if self.emitter.last_step().is_some_and(|s| s.is_complete()) {
            // The machine reported its own completion (partition marking); it was the last one.
            self.emitter.seal();
            self.log_finished();
            return None;
        }

        let event = self.emitter.finish();
        self.log_finished();
        event
    }

    /// Drains the remaining events and returns the final counters.
    pub fn run_to_completion(&mut self) -> Counters {
        while self.next_event().is_some() {}
        self.counters()
    }

    pub fn snapshot(&self) -> RunSnapshot<T> {
        RunSnapshot {
            algorithm: self.options.algorithm,
            generation: self.options.generation,
            sequence: self.sequence.clone(),
            counters: self.counters(),
            finished: self.is_finished(),
        }
    }

    pub fn into_sequence(self) -> Vec<T> {
        self.sequence
    }

    fn log_finished(&self) {
        debug_assert!(
            self.sequence
                .windows(2)
                .all(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Greater)),
            "SortRun: finished with an unsorted sequence"
        );
        sdebug!(
            algorithm = self.options.algorithm.name(),
            comparisons = self.counters().comparisons,
            swaps = self.counters().swaps,
            "SortRun: finished"
        );
    }
}

impl<T: Element> Iterator for SortRun<T> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        self.next_event()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortRun<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRun")
            .field("options", &self.options)
            .field("sequence", &self.sequence)
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}
