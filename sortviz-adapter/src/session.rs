use std::sync::Arc;

use parking_lot::Mutex;
use sortviz::{Algorithm, Counters, Element, RunOptions, SortRun, StepEvent};

use crate::stream::{RunStream, run_stream};
use crate::{PaceSource, Pacer};

#[derive(Debug, Default)]
struct Shared {
    generation: u64,
    counters: Counters,
    running: bool,
}

/// Owns the "current run" of a visualizer.
///
/// Every [`Session::start_run`] and [`Session::reset`] bumps the run generation and zeroes the
/// counters. Streams of older generations stop on their next poll and never touch the counters
/// again, so at most one run is live per session.
///
/// Cloning a session yields another handle to the same state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    shared: Arc<Mutex<Shared>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a paced run of `algorithm` with default options, cancelling any previous run.
    pub fn start_run<T, P>(
        &self,
        sequence: Vec<T>,
        algorithm: Algorithm,
        pace: P,
    ) -> RunStream<T>
    where
        T: Element + Send + 'static,
        P: PaceSource + 'static,
    {
        self.start_run_with(sequence, RunOptions::new(algorithm), pace)
    }

    /// Like [`Session::start_run`], with explicit run options.
    ///
    /// `options.generation` is replaced by the session's next generation.
    pub fn start_run_with<T, P>(
        &self,
        sequence: Vec<T>,
        options: RunOptions,
        pace: P,
    ) -> RunStream<T>
    where
        T: Element + Send + 'static,
        P: PaceSource + 'static,
    {
        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.counters = Counters::ZERO;
            shared.running = true;
            shared.generation
        };
        sdebug!(
            generation,
            algorithm = options.algorithm.name(),
            len = sequence.len(),
            "Session::start_run"
        );

        let run = SortRun::new(sequence, options.with_generation(generation));
        run_stream(run, Pacer::new(pace), self.clone())
    }

    /// Cancels the current run (if any) and zeroes the counters.
    ///
    /// Returns the new generation.
    pub fn reset(&self) -> u64 {
        let mut shared = self.shared.lock();
        shared.generation += 1;
        shared.counters = Counters::ZERO;
        shared.running = false;
        sdebug!(generation = shared.generation, "Session::reset");
        shared.generation
    }

    /// The counters of the current run as of its latest delivered event.
    pub fn counters(&self) -> Counters {
        self.shared.lock().counters
    }

    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Whether the current generation has a run that has not finished, been dropped or reset.
    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    /// Records `event` as the latest of its run.
    ///
    /// Returns `false` (and records nothing) when the event belongs to a superseded run.
    pub(crate) fn publish(&self, event: &StepEvent) -> bool {
        let mut shared = self.shared.lock();
        if shared.generation != event.generation {
            return false;
        }
        shared.counters = event.counters;
        true
    }

    pub(crate) fn finish(&self, generation: u64) {
        let mut shared = self.shared.lock();
        if shared.generation == generation {
            shared.running = false;
        }
    }
}
