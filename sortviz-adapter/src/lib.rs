//! Adapter utilities for the `sortviz` crate.
//!
//! The `sortviz` crate is UI-agnostic and only knows how to advance a sort one step at a time.
//! This crate provides the pieces a renderer typically needs around it:
//!
//! - Paced, cancellable event streams (`Session`, `Pacer`, `Pace`)
//! - Input parsing for the number list and the algorithm selector
//! - A headless bar chart model (`Bars`) that mirrors the classic visualizer
//!
//! This crate is intentionally framework-agnostic (no terminal/DOM bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod bars;
mod error;
mod input;
mod pace;
mod pacer;
mod session;
mod stream;


pub use bars::{BAR_SCALE, Bar, Bars, Highlight};
pub use error::{InputError, InputResult};
pub use input::{parse_algorithm, parse_sequence};
pub use pace::{Pace, PaceSource};
pub use pacer::Pacer;
pub use session::Session;
pub use stream::{Frame, RunStream};
