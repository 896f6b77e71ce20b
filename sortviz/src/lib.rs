//! A headless, step-by-step sorting engine for visualizers.
//!
//! For async pacing, sessions and renderer-side helpers, see the `sortviz-adapter` crate.
//!
//! The classic sorting algorithms (bubble, quick, selection, insertion) are rewritten as
//! resumable state machines. Driving a [`SortRun`] yields one [`StepEvent`] per comparison or
//! swap, with running [`Counters`], and a terminal `Complete`. The event stream is
//! deterministic: the same input and options always produce the same events, and the `Swap`
//! events alone [`replay`] the run.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the initial numeric sequence (already validated)
//! - the algorithm choice
//! - the pace at which events are consumed
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod algorithms;
mod emitter;
mod options;
mod replay;
mod run;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use algorithms::SortMachine;
pub use emitter::StepEmitter;
pub use options::RunOptions;
pub use replay::replay;
pub use run::SortRun;
pub use state::RunSnapshot;
pub use types::{Algorithm, Counters, Element, Step, StepEvent};
