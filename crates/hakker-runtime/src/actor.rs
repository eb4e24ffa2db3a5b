//! # Generic Actor Server
//!
//! This module defines [`Actor`], the run loop shared by every behaviour, and
//! [`ActorContext`], the view of the runtime a behaviour gets while handling a message.

use crate::actor_ref::ActorRef;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::timer::{send_after, TimerHandle};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// The runtime view handed to every hook of an [`ActorEntity`].
///
/// It carries the actor's own handle (for replies that must point back at the actor
/// and for delayed self-messages) and the dependencies injected through
/// [`Actor::run`].
pub struct ActorContext<E: ActorEntity> {
    myself: ActorRef<E::Message>,
    context: E::Context,
}

impl<E: ActorEntity> ActorContext<E> {
    /// Handle to the running actor itself.
    pub fn myself(&self) -> &ActorRef<E::Message> {
        &self.myself
    }

    /// Dependencies injected at start.
    pub fn context(&self) -> &E::Context {
        &self.context
    }

    /// Delivers `message` to this actor's own mailbox once `delay` has elapsed.
    ///
    /// The handler returns immediately; other messages keep being processed while
    /// the timer runs.
    pub fn schedule_once(&self, delay: Duration, message: E::Message) -> TimerHandle {
        send_after(delay, self.myself.clone(), message)
    }
}

/// The generic actor that owns one entity and its mailbox.
///
/// # Concurrency Model
/// Each `Actor` runs in its own Tokio task and processes its messages *sequentially*.
/// The entity is only ever touched from inside that loop, so it needs no `Mutex`:
/// exclusive ownership of the state within the task is the whole synchronisation story.
///
/// # Usage Pattern
///
/// 1.  **Create**: `Actor::new(entity)` returns the actor and a handle to it.
/// 2.  **Wire**: pass dependencies (other handles) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use hakker_runtime::{Actor, ActorContext, ActorEntity};
///
/// #[derive(Debug)]
/// enum Tick { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("overflow")]
/// struct Overflow;
///
/// struct Counter { id: String, total: u32 }
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = String;
///     type Message = Tick;
///     type Context = ();
///     type Error = Overflow;
///
///     fn id(&self) -> &String { &self.id }
///
///     async fn handle(&mut self, msg: Tick, _ctx: &ActorContext<Self>) -> Result<(), Overflow> {
///         let Tick::Add(n) = msg;
///         self.total = self.total.checked_add(n).ok_or(Overflow)?;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, counter) = Actor::new(Counter { id: "counter".into(), total: 0 });
///     tokio::spawn(actor.run(()));
///     counter.send(Tick::Add(1)).unwrap();
/// }
/// ```
pub struct Actor<E: ActorEntity> {
    entity: E,
    receiver: mpsc::UnboundedReceiver<E::Message>,
    myself: ActorRef<E::Message>,
}

impl<E: ActorEntity> Actor<E> {
    /// Creates the actor and a handle to its mailbox.
    ///
    /// The mailbox is unbounded: senders never wait.
    pub fn new(entity: E) -> (Self, ActorRef<E::Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let myself = ActorRef::new(entity.id().to_string(), sender);
        let actor = Self {
            entity,
            receiver,
            myself: myself.clone(),
        };
        (actor, myself)
    }

    pub fn id(&self) -> &E::Id {
        self.entity.id()
    }

    /// Runs the actor's event loop.
    ///
    /// The context keeps a handle to the actor itself, so the mailbox never closes
    /// while the loop runs: a running actor ends on a hook error or when its task is
    /// aborted.
    ///
    /// A hook error ends the loop immediately and is returned as
    /// [`FrameworkError::Stopped`]; messages still queued are dropped unprocessed.
    pub async fn run(mut self, context: E::Context) -> Result<(), FrameworkError> {
        let actor = self.entity.id().clone();
        let ctx = ActorContext {
            myself: self.myself,
            context,
        };
        info!(%actor, "Actor started");

        if let Err(e) = self.entity.on_start(&ctx).await {
            error!(%actor, error = %e, "on_start failed, actor stopping");
            return Err(FrameworkError::Stopped {
                actor: actor.to_string(),
                source: Box::new(e),
            });
        }

        while let Some(message) = self.receiver.recv().await {
            debug!(%actor, ?message, "Handle");
            if let Err(e) = self.entity.handle(message, &ctx).await {
                error!(%actor, error = %e, "Handler failed, actor stopping");
                return Err(FrameworkError::Stopped {
                    actor: actor.to_string(),
                    source: Box::new(e),
                });
            }
        }

        info!(%actor, "Shutdown");
        Ok(())
    }
}
