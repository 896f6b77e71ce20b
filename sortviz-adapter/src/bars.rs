use sortviz::Step;

use crate::Frame;

/// Pixels of bar height per unit of value.
pub const BAR_SCALE: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    #[default]
    None,
    Comparing,
    Swapping,
    Sorted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub index: usize,
    pub value: f64,
    /// Height in pixels (`value * BAR_SCALE`, negative values collapse to zero).
    pub height: u32,
    pub highlight: Highlight,
}

impl Bar {
    pub fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            height: bar_height(value),
            highlight: Highlight::None,
        }
    }
}

fn bar_height(value: f64) -> u32 {
    (value * BAR_SCALE).round().max(0.0) as u32
}

/// A headless bar chart driven by run frames.
///
/// It mirrors what the browser visualizer did with DOM bars:
/// - a `Compare` highlights both operands as comparing
/// - a `Swap` redraws every bar (dropping all highlights) and highlights both operands
/// - a `Complete` marks every bar sorted
///
/// Frames from a generation older than the newest one seen are ignored.
#[derive(Clone, Debug, Default)]
pub struct Bars {
    bars: Vec<Bar>,
    generation: Option<u64>,
}

impl Bars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Self {
        let mut bars = Self::new();
        bars.set_values(values);
        bars
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Replaces all bars with plain (unhighlighted) bars for `values`.
    pub fn set_values(&mut self, values: &[f64]) {
        self.bars.clear();
        self.bars
            .extend(values.iter().enumerate().map(|(i, &v)| Bar::new(i, v)));
    }

    /// Removes every bar and forgets the current generation.
    pub fn clear(&mut self) {
        self.bars.clear();
        self.generation = None;
    }

    pub fn all_sorted(&self) -> bool {
        self.bars.iter().all(|b| b.highlight == Highlight::Sorted)
    }

    /// Applies a frame. Returns `false` if the frame was stale and ignored.
    pub fn apply(&mut self, frame: &Frame<f64>) -> bool {
        let generation = frame.event.generation;
        match self.generation {
            Some(current) if generation < current => {
                strace!(generation, current, "Bars: stale frame ignored");
                return false;
            }
            Some(current) if generation == current => {}
            _ => {
                self.generation = Some(generation);
                self.set_values(&frame.sequence);
            }
        }

        match frame.event.step {
            Step::Compare(i, j) => {
                self.refresh_values(&frame.sequence);
                self.clear_highlights(|h| matches!(h, Highlight::Comparing | Highlight::Swapping));
                self.highlight(i, j, Highlight::Comparing);
            }
            Step::Swap(i, j) => {
                self.set_values(&frame.sequence);
                self.highlight(i, j, Highlight::Swapping);
            }
            Step::Complete => {
                self.refresh_values(&frame.sequence);
                for bar in &mut self.bars {
                    bar.highlight = Highlight::Sorted;
                }
            }
        }
        true
    }

    fn refresh_values(&mut self, values: &[f64]) {
        if values.len() != self.bars.len() {
            self.set_values(values);
            return;
        }
        for (bar, &v) in self.bars.iter_mut().zip(values) {
            bar.value = v;
            bar.height = bar_height(v);
        }
    }

    fn clear_highlights(&mut self, mut which: impl FnMut(Highlight) -> bool) {
        for bar in &mut self.bars {
            if which(bar.highlight) {
                bar.highlight = Highlight::None;
            }
        }
    }

    fn highlight(&mut self, i: usize, j: usize, highlight: Highlight) {
        for index in [i, j] {
            if let Some(bar) = self.bars.get_mut(index) {
                bar.highlight = highlight;
            }
        }
    }
}
