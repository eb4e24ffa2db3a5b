//! # Dining Hakkers
//!
//! The dining philosophers problem, solved with actors instead of locks. Each
//! chopstick is an actor that owns its own availability; each hakker is an actor that
//! asks both neighbours at once, eats only when both say yes, and otherwise puts back
//! what it got and tries again later.
//!
//! ## Module Tour
//!
//! - [`model`] - identities, states, messages
//! - [`chopstick_actor`] / [`hakker_actor`] - the two state machines
//! - [`lifecycle`] - [`DiningTable`](lifecycle::DiningTable), which wires the ring
//! - [`config`] - [`TableConfig`](config::TableConfig) and its validation
//! - [`events`] - the optional [`TableEvent`](events::TableEvent) stream

pub mod chopstick_actor;
pub mod config;
pub mod events;
pub mod hakker_actor;
pub mod lifecycle;
pub mod model;
