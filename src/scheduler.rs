use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// A periodic background refresh whose lifetime is tied to its handle.
///
/// Cancelling (or dropping) the handle stops the loop deterministically:
/// the cancellation branch is polled first, so once `cancel` returns no
/// further callback will start. Dropping additionally aborts the task,
/// abandoning any tick still in flight.
pub struct RefreshTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl RefreshTask {
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // An interval fires immediately; consume that tick so the
            // first callback runs one full period after spawn.
            timer.tick().await;
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = timer.tick() => tick().await,
                }
            }
        });
        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.token.cancel();
        self.handle.abort();
    }
}
