use std::pin::Pin;

use async_stream::stream;
use futures_core::Stream;
use sortviz::{Element, SortRun, StepEvent};

use crate::{PaceSource, Pacer, Session};

/// An event together with the sequence as it is right after that event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T = f64> {
    pub event: StepEvent,
    pub sequence: Vec<T>,
}

/// The paced event stream of one run. Ends after the run's last `Complete`, or early when the
/// session starts another run or is reset.
pub type RunStream<T = f64> = Pin<Box<dyn Stream<Item = Frame<T>> + Send>>;

/// Marks the run finished when the stream completes or is dropped.
struct FinishGuard {
    session: Session,
    generation: u64,
}

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.session.finish(self.generation);
    }
}

pub(crate) fn run_stream<T, P>(
    mut run: SortRun<T>,
    pacer: Pacer<P>,
    session: Session,
) -> RunStream<T>
where
    T: Element + Send + 'static,
    P: PaceSource + 'static,
{
    let generation = run.generation();
    // Must also fire when the stream is dropped before its first poll.
    let guard = FinishGuard {
        session: session.clone(),
        generation,
    };

    let it = stream! {
        let _guard = guard;

        while let Some(event) = run.next_event() {
            // Counters are published before the event is handed out.
            if !session.publish(&event) {
                sdebug!(
                    generation,
                    current = session.generation(),
                    "run superseded, dropping remaining events"
                );
                break;
            }

            let step = event.step;
            yield Frame {
                event,
                sequence: run.sequence().to_vec(),
            };
            pacer.pause_after(&step).await;
        }
    };
    Box::pin(it)
}
