//! # Framework Errors
//!
//! Errors raised by the runtime itself, independent of any actor's behaviour.
//! Behaviour errors are carried inside [`FrameworkError::Stopped`] once they
//! have terminated an actor.

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The target actor's mailbox is gone (the actor stopped or was aborted).
    #[error("Actor {0} is closed")]
    ActorClosed(String),

    /// An answer-collector was dropped or already received all its answers.
    #[error("Reply channel {0} is closed or full")]
    ReplyRejected(String),

    /// The actor's handler returned an error and the actor stopped.
    #[error("Actor {actor} stopped: {source}")]
    Stopped {
        actor: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
