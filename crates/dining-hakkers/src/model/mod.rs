//! # Domain Models
//!
//! Identities, states and messages of the two actor kinds. Every variant carries only
//! the data that belongs to it; there are no optional fields standing in for state.

pub mod chopstick;
pub mod hakker;

pub use chopstick::*;
pub use hakker::*;
