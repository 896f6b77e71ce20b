use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Something the pacer can ask for the current delay between steps.
///
/// Implementations must be cheap: the value is read again before every pause so that a user
/// moving a speed slider mid-run takes effect on the next step.
pub trait PaceSource: Send + Sync {
    fn current(&self) -> Duration;
}

impl<F: Fn() -> Duration + Send + Sync> PaceSource for F {
    fn current(&self) -> Duration {
        self()
    }
}

/// A shared, adjustable delay in milliseconds (the speed slider).
///
/// Clones share the same value, so a renderer can keep one handle and pass another to a run.
#[derive(Clone, Debug)]
pub struct Pace {
    ms: Arc<AtomicU64>,
}

impl Pace {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 100;

    /// Creates a pace, clamping `ms` to `MIN_MS..=MAX_MS`.
    pub fn new(ms: u64) -> Self {
        Self {
            ms: Arc::new(AtomicU64::new(Self::clamp(ms))),
        }
    }

    fn clamp(ms: u64) -> u64 {
        ms.clamp(Self::MIN_MS, Self::MAX_MS)
    }

    pub fn ms(&self) -> u64 {
        self.ms.load(Ordering::Relaxed)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.ms())
    }

    /// Updates the delay for every holder of this pace. Returns the applied (clamped) value.
    pub fn set_ms(&self, ms: u64) -> u64 {
        let ms = Self::clamp(ms);
        self.ms.store(ms, Ordering::Relaxed);
        strace!(ms, "Pace::set_ms");
        ms
    }
}

impl Default for Pace {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MS)
    }
}

impl PaceSource for Pace {
    fn current(&self) -> Duration {
        self.duration()
    }
}
