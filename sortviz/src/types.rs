use core::fmt;

/// Values that can be sorted by the instrumented algorithms.
///
/// Elements are copied out of the sequence while comparing (e.g. the quick sort pivot), so they
/// must be `Copy`. `f64` is the default element type used throughout the crate.
pub trait Element: PartialOrd + Copy + fmt::Debug {}
impl<T: PartialOrd + Copy + fmt::Debug> Element for T {}

/// The sorting algorithms the engine knows how to step through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bubble,
    Quick,
    Selection,
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Selection,
        Algorithm::Insertion,
    ];

    /// The short lowercase name used by selectors (`"bubble"`, `"quick"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
        }
    }

    /// Looks up an algorithm by its short name. Matching is ASCII case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One unit of observable algorithmic progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// The elements at the two indexes were compared.
    Compare(usize, usize),
    /// The elements at the two indexes were exchanged.
    Swap(usize, usize),
    /// The sequence is (or, with partition marking, is being reported as) sorted.
    Complete,
}

impl Step {
    /// The operand indexes of a `Compare`/`Swap` step.
    pub fn operands(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Compare(i, j) | Self::Swap(i, j) => Some((i, j)),
            Self::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Running comparison/swap totals of a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    pub const ZERO: Counters = Counters {
        comparisons: 0,
        swaps: 0,
    };

    pub fn as_pair(&self) -> (u64, u64) {
        (self.comparisons, self.swaps)
    }
}

/// A step as delivered to consumers.
///
/// `counters` already include this step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEvent {
    /// The run generation that produced this event.
    pub generation: u64,
    /// Zero-based position of this event within its run.
    pub seq: u64,
    pub step: Step,
    pub counters: Counters,
}
