//! # Delayed Delivery
//!
//! Timers are fire-and-forget tasks: sleep, then enqueue a message. The actor that
//! scheduled one keeps handling its mailbox in the meantime.

use crate::actor_ref::ActorRef;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Handle to a pending [`send_after`] timer.
///
/// Dropping the handle does not cancel the timer.
pub struct TimerHandle {
    join_handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancels the timer. A message that was already delivered is not recalled.
    pub fn cancel(&self) {
        self.join_handle.abort();
    }

    /// Returns `true` once the message was delivered, dropped or cancelled.
    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }
}

/// Sends `message` to `target` after `period`.
///
/// Delivery happens no earlier than `period`, with no upper bound. If the target has
/// stopped by then the message is discarded.
pub fn send_after<M>(period: Duration, target: ActorRef<M>, message: M) -> TimerHandle
where
    M: Send + 'static,
{
    let join_handle = tokio::spawn(async move {
        tokio::time::sleep(period).await;
        if target.send(message).is_err() {
            trace!(actor = %target, "Timer fired for a stopped actor");
        }
    });
    TimerHandle { join_handle }
}
