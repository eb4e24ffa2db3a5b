//! # Hakker Actor
//!
//! One actor per diner. It drives the think / acquire / eat cycle and is the only place
//! where the acquire-or-retreat protocol lives.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](hakker_runtime::ActorEntity) implementation for [`Hakker`]
//! - [`error`] - [`HakkerError`], the protocol violations that stop a hakker
//! - [`new()`] - Factory function that creates the actor and its handle
//!
//! ## State Machine
//!
//! | State | Command | Next state |
//! |---|---|---|
//! | Waiting | Think | Thinking (schedules `Eat`) |
//! | Thinking | Eat | Hungry (`Take` sent to both neighbours) |
//! | Hungry | Taken | WaitingForOtherChopstick |
//! | Hungry | Busy | FirstChopstickDenied |
//! | WaitingForOtherChopstick | Taken (the awaited one) | Eating (schedules `Think`) |
//! | WaitingForOtherChopstick | Busy | Thinking (puts the held one back, retries later) |
//! | FirstChopstickDenied | Busy | Thinking (retries later) |
//! | FirstChopstickDenied | Taken | Thinking (puts it back, retries later) |
//! | Eating | Think | Thinking (puts both back, schedules `Eat`) |
//!
//! Every other combination is a protocol violation and stops the hakker, including a
//! wake signal that arrives in a state that does not expect it.
//!
//! ## Context
//!
//! The neighbours are injected at start, the way the rest of the table is wired:
//!
//! ```rust,ignore
//! let (actor, hakker) = hakker_actor::new(HakkerId(1), timings, events);
//! tokio::spawn(actor.run(Neighbors { left, right }));
//! hakker.send(HakkerCommand::Think)?;
//! ```

pub mod entity;
pub mod error;

pub use entity::{Hakker, Neighbors};
pub use error::*;

use crate::config::Timings;
use crate::events::EventSink;
use crate::model::{HakkerCommand, HakkerId};
use hakker_runtime::{Actor, ActorRef};

/// Creates a new Hakker actor and its handle.
pub fn new(
    id: HakkerId,
    timings: Timings,
    events: EventSink,
) -> (Actor<Hakker>, ActorRef<HakkerCommand>) {
    Actor::new(Hakker::new(id, timings, events))
}
