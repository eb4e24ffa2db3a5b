//! # Replies
//!
//! Actors never wait on each other inside a handler. When an actor needs answers it
//! opens an answer-collector with [`collect_replies`], hands the resulting [`ReplyTo`]
//! to the actors it asks, and receives the answers later as ordinary messages in its
//! own mailbox.

use crate::actor_ref::ActorRef;
use crate::error::FrameworkError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

/// Reply target carried inside a request.
///
/// Backed by a private bounded queue sized for exactly the number of expected
/// answers, so [`send`](Self::send) never has to wait.
pub struct ReplyTo<T> {
    name: Arc<str>,
    sender: mpsc::Sender<T>,
}

impl<T> ReplyTo<T> {
    /// Delivers one answer.
    ///
    /// Fails with [`FrameworkError::ReplyRejected`] if the collector is gone or has
    /// already been sent every answer it expects.
    pub fn send(&self, answer: T) -> Result<(), FrameworkError> {
        self.sender
            .try_send(answer)
            .map_err(|_| FrameworkError::ReplyRejected(self.name.to_string()))
    }

    /// Name of the actor the answers are relayed to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for ReplyTo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            sender: self.sender.clone(),
        }
    }
}

impl<T> fmt::Debug for ReplyTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReplyTo").field(&self.name).finish()
    }
}

/// Opens an answer-collector for `expected` answers.
///
/// A transient task relays each answer, wrapped by `wrap`, into `forward_to`'s mailbox
/// in arrival order. The task ends after `expected` answers, when every [`ReplyTo`]
/// clone is dropped, or when `forward_to` has stopped.
pub fn collect_replies<T, M, F>(expected: usize, forward_to: ActorRef<M>, wrap: F) -> ReplyTo<T>
where
    T: Send + 'static,
    M: Send + 'static,
    F: Fn(T) -> M + Send + 'static,
{
    let (sender, mut receiver) = mpsc::channel(expected.max(1));
    let name: Arc<str> = Arc::from(forward_to.name());

    tokio::spawn(async move {
        for _ in 0..expected {
            let Some(answer) = receiver.recv().await else {
                trace!(actor = %forward_to, "Collector closed before all answers arrived");
                return;
            };
            if forward_to.send(wrap(answer)).is_err() {
                trace!(actor = %forward_to, "Collector target stopped");
                return;
            }
        }
    });

    ReplyTo { name, sender }
}
