//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every behaviour (a chopstick, a hakker, …)
//! implements to be driven by the generic [`Actor`](crate::Actor) run loop. The entity
//! owns its state; the runtime owns the mailbox and calls [`ActorEntity::handle`] once
//! per message, strictly in receipt order.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_start`] runs once before the first message. The default does nothing.

use crate::actor::ActorContext;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any behaviour must implement to be run by [`Actor`](crate::Actor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await. The `Context` type is injected
/// when the actor is started (`Actor::run(context)`) rather than when it is built, which
/// lets actors that reference each other be created first and wired afterwards.
///
/// # Errors
/// Any `Err` returned from a hook is fatal for the actor: the run loop logs it and
/// stops. There is no retry and no supervisor; return an error only when the actor
/// must not process another message.
#[async_trait]
pub trait ActorEntity: Sized + Send + 'static {
    /// Identity used for logging and diagnostics (e.g. `hakker-1`).
    type Id: Display + Debug + Clone + Send + Sync;

    /// Messages accepted by this actor.
    type Message: Debug + Send + 'static;

    /// Dependencies injected at start. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error type of this actor's hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Called once, before the first message is handled.
    async fn on_start(&mut self, _ctx: &ActorContext<Self>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles one message from the mailbox.
    async fn handle(
        &mut self,
        message: Self::Message,
        ctx: &ActorContext<Self>,
    ) -> Result<(), Self::Error>;
}
