//! # Actor Handles
//!
//! This module defines [`ActorRef`], the only way to reach an actor from the outside.

use crate::error::FrameworkError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// A cloneable handle to an actor's mailbox.
///
/// ## ActorRef
///
/// The `ActorRef<M>` is the *client* side of an [`Actor`](crate::Actor). It holds the
/// sending half of the actor's unbounded mailbox together with the actor's name, which
/// is only used for logging and diagnostics.
///
/// * **Cloneable** – cloning copies the sender, every clone addresses the same actor.
/// * **Non-blocking** – [`send`](Self::send) never waits; the mailbox is unbounded.
/// * **Identity** – two handles are equal when they address the same mailbox. The name
///   plays no part in equality, so two actors that happen to share a name stay distinct.
pub struct ActorRef<M> {
    name: Arc<str>,
    sender: mpsc::UnboundedSender<M>,
}

impl<M> ActorRef<M> {
    pub fn new(name: impl Into<Arc<str>>, sender: mpsc::UnboundedSender<M>) -> Self {
        Self {
            name: name.into(),
            sender,
        }
    }

    /// Name of the addressed actor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enqueues `message` in the actor's mailbox.
    ///
    /// Fails with [`FrameworkError::ActorClosed`] if the actor has stopped.
    pub fn send(&self, message: M) -> Result<(), FrameworkError> {
        self.sender
            .send(message)
            .map_err(|_| FrameworkError::ActorClosed(self.name.to_string()))
    }

    /// Returns `true` once the actor's run loop has ended.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<M> Clone for ActorRef<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            sender: self.sender.clone(),
        }
    }
}

impl<M> PartialEq for ActorRef<M> {
    fn eq(&self, other: &Self) -> bool {
        self.sender.same_channel(&other.sender)
    }
}

impl<M> Eq for ActorRef<M> {}

impl<M> fmt::Debug for ActorRef<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActorRef").field(&self.name).finish()
    }
}

impl<M> fmt::Display for ActorRef<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
