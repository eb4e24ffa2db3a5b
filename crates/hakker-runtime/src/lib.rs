//! # Hakker Runtime
//!
//! A small actor runtime on top of Tokio: one task per actor, one unbounded mailbox per
//! task, messages handled strictly one at a time.
//!
//! ## Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Behaviour Layer** ([`ActorEntity`]) - the state machine of one actor
//! 2. **Runtime Layer** ([`Actor`], [`ActorContext`]) - mailbox loop, self handle, timers
//! 3. **Interface Layer** ([`ActorRef`], [`ReplyTo`]) - addressing and answers
//!
//! ## Asking Without Blocking
//!
//! A handler never awaits another actor. To ask for something it opens an
//! answer-collector ([`collect_replies`]), passes the [`ReplyTo`] along with the
//! request, and returns. The answers arrive later as regular messages.
//!
//! ## Failure Model
//!
//! A hook error is fatal for the actor that returned it: the loop stops and
//! [`Actor::run`] returns [`FrameworkError::Stopped`]. Nothing else is notified; an actor
//! that later sends to the stopped one gets [`FrameworkError::ActorClosed`].
//!
//! ## Testing
//!
//! [`mock::MockActor`] hands out real handles whose messages are recorded, so one actor
//! can be exercised against scripted neighbours.

pub mod actor;
pub mod actor_ref;
pub mod entity;
pub mod error;
pub mod logging;
pub mod message;
pub mod mock;
pub mod timer;

pub use actor::{Actor, ActorContext};
pub use actor_ref::ActorRef;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{collect_replies, ReplyTo};
pub use timer::{send_after, TimerHandle};
