//! Cancellable single-slot timer.
//!
//! [`Debouncer::schedule`] always cancels the previous timer before arming a new
//! one, so at most one value is pending at a time. Each timer runs as its own tokio
//! task racing a sleep against an explicit oneshot cancellation channel.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;

struct Armed {
    seq: u64,
    cancel: oneshot::Sender<()>,
}

pub struct Debouncer<T> {
    delay: Duration,
    seq: u64,
    armed: Option<Armed>,
    tx: mpsc::UnboundedSender<(u64, T)>,
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { delay, seq: 0, armed: None, tx, rx }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending value and arm a new timer for `value`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        self.seq += 1;
        let seq = self.seq;
        let (cancel, cancelled) = oneshot::channel();
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = sleep(delay) => {
                    let _ = tx.send((seq, value));
                }
                _ = cancelled => {}
            }
        });

        self.armed = Some(Armed { seq, cancel });
    }

    /// Cancel the pending timer. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some(armed) => {
                // The timer may already have fired; `fired` skips its value by sequence.
                let _ = armed.cancel.send(());
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Wait for the armed timer to fire and return its value.
    ///
    /// Values from superseded timers are discarded. Pends forever when nothing is
    /// armed, so guard calls with [`Debouncer::is_pending`]. Cancel safe.
    pub async fn fired(&mut self) -> Option<T> {
        loop {
            let (seq, value) = self.rx.recv().await?;
            if self.armed.as_ref().is_some_and(|a| a.seq == seq) {
                self.armed = None;
                return Some(value);
            }
        }
    }
}
