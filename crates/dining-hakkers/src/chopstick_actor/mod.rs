//! # Chopstick Actor
//!
//! One actor per chopstick. It owns the chopstick's availability and serializes every
//! request through its mailbox, so two hakkers can never hold it at once.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](hakker_runtime::ActorEntity) implementation for [`Chopstick`]
//! - [`error`] - [`ChopstickError`], the protocol violations that stop a chopstick
//! - [`new()`] - Factory function that creates the actor and its handle
//!
//! ## Usage
//!
//! ```rust
//! use dining_hakkers::chopstick_actor;
//! use dining_hakkers::events::EventSink;
//! use dining_hakkers::model::{ChopstickAnswer, ChopstickId, ChopstickMessage, HakkerId};
//! use hakker_runtime::collect_replies;
//! use hakker_runtime::mock::MockActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, chopstick) = chopstick_actor::new(ChopstickId(1), EventSink::disabled());
//!     tokio::spawn(actor.run(()));
//!
//!     let mut hakker = MockActor::<ChopstickAnswer>::new("hakker-1");
//!     let reply_to = collect_replies(1, hakker.actor_ref(), |answer: ChopstickAnswer| answer);
//!     chopstick
//!         .send(ChopstickMessage::Take { hakker: HakkerId(1), reply_to })
//!         .unwrap();
//!
//!     assert!(matches!(hakker.recv().await, ChopstickAnswer::Taken { .. }));
//! }
//! ```
//!
//! A denied `Take` is not queued. The hakker has to ask again.

pub mod entity;
pub mod error;

pub use entity::Chopstick;
pub use error::*;

use crate::events::EventSink;
use crate::model::{ChopstickId, ChopstickRef};
use hakker_runtime::Actor;

/// Creates a new Chopstick actor and its handle.
pub fn new(id: ChopstickId, events: EventSink) -> (Actor<Chopstick>, ChopstickRef) {
    Actor::new(Chopstick::new(id, events))
}
