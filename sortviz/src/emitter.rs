use crate::{Counters, Step, StepEvent};

/// Turns algorithm steps into [`StepEvent`]s while keeping the run's counters.
///
/// It enforces the event contract:
/// - Counters are bumped before the event is built, so every event carries post-increment totals.
/// - Out-of-bounds operands are dropped (and debug-asserted).
/// - Nothing is emitted once the run has been sealed with [`StepEmitter::finish`].
#[derive(Clone, Debug)]
pub struct StepEmitter {
    len: usize,
    generation: u64,
    counters: Counters,
    emitted: u64,
    last: Option<Step>,
    sealed: bool,
}

impl StepEmitter {
    pub fn new(len: usize, generation: u64) -> Self {
        Self {
            len,
            generation,
            counters: Counters::ZERO,
            emitted: 0,
            last: None,
            sealed: false,
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn last_step(&self) -> Option<Step> {
        self.last
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn emit(&mut self, step: Step) -> Option<StepEvent> {
        if self.sealed {
            swarn!(?step, "StepEmitter: step after terminal Complete");
            debug_assert!(!self.sealed, "StepEmitter: step after terminal Complete ({step:?})");
            return None;
        }

        if let Some((i, j)) = step.operands() {
            if i >= self.len || j >= self.len {
                swarn!(i, j, len = self.len, "StepEmitter: out-of-bounds operand");
                debug_assert!(
                    i < self.len && j < self.len,
                    "StepEmitter: out-of-bounds operand (i={i}, j={j}, len={})",
                    self.len
                );
                return None;
            }
        }

        match step {
            Step::Compare(..) => self.counters.comparisons += 1,
            Step::Swap(..) => self.counters.swaps += 1,
            Step::Complete => {}
        }

        let event = StepEvent {
            generation: self.generation,
            seq: self.emitted,
            step,
            counters: self.counters,
        };
        self.emitted += 1;
        self.last = Some(step);
        strace!(
            generation = self.generation,
            seq = event.seq,
            ?step,
            "StepEmitter::emit"
        );
        Some(event)
    }

    /// Emits the terminal `Complete` and seals the emitter.
    pub fn finish(&mut self) -> Option<StepEvent> {
        let event = self.emit(Step::Complete)?;
        self.sealed = true;
        Some(event)
    }

    /// Seals the emitter without emitting anything.
    ///
    /// Used when the machine's own last step already was a `Complete`.
    pub fn seal(&mut self) {
        self.sealed = true;
    }
}
