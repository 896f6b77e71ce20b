use alloc::vec::Vec;

use crate::{Algorithm, Counters};

/// A serializable snapshot of a run.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSnapshot<T = f64> {
    pub algorithm: Algorithm,
    pub generation: u64,
    pub sequence: Vec<T>,
    pub counters: Counters,
    pub finished: bool,
}
