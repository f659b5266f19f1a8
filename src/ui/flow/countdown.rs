//! Once-per-second ticker driving the thank-you countdown.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A periodic background task owned by the thank-you screen.
///
/// The task is aborted when this handle drops, so whichever way the
/// screen is left the ticker cannot fire afterwards. Each tick carries
/// the generation it was spawned with so the receiver can discard ticks
/// that were already queued when the task stopped.
pub struct CountdownTask {
    handle: JoinHandle<()>,
    generation: u64,
}

impl CountdownTask {
    pub fn spawn<F>(runtime: &Handle, period: Duration, generation: u64, on_tick: F) -> Self
    where
        F: Fn(u64) + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                on_tick(generation);
            }
        });
        tracing::debug!(generation, "Countdown started");
        Self { handle, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "Countdown cancelled");
    }
}
