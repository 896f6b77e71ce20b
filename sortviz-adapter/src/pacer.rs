use sortviz::Step;

use crate::PaceSource;

/// Inserts the delay between consecutive steps of a run.
///
/// Only `Compare` and `Swap` steps are followed by a pause; a `Complete` is reported without
/// waiting. A zero delay returns immediately without touching the timer.
#[derive(Clone, Debug)]
pub struct Pacer<P> {
    source: P,
}

impl<P: PaceSource> Pacer<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn should_pause(step: &Step) -> bool {
        !step.is_complete()
    }

    /// Suspends for the current pace, read fresh from the source.
    pub async fn pause(&self) {
        let delay = self.source.current();
        if delay.is_zero() {
            return;
        }
        tokio::time::sleep(delay).await;
    }

    pub async fn pause_after(&self, step: &Step) {
        if Self::should_pause(step) {
            self.pause().await;
        }
    }
}
