//! # Mock Actors & Testing Guide
//!
//! A [`MockActor<M>`] stands in for a real actor: it hands out a genuine
//! [`ActorRef<M>`] but, instead of running a behaviour, records every message it
//! receives so a test can assert on it and answer by hand.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockActor | Real Actor |
//! |---------|-----------|------------|
//! | **Determinism** | The test decides when and what to answer | Subject to scheduler |
//! | **State** | None | Real state machine |
//! | **Use Case** | Isolating one actor from its neighbours | Testing the actor itself or the full system |
//! | **Error Injection** | Easy (answer anything, in any order) | Hard (requires specific interleavings) |
//!
//! ## Pattern: Actor with Mocked Neighbours
//!
//! Run the actor under test for real and give it mock handles as its context. Every
//! request it sends lands in a mock, where the test can inspect it and reply.
//!
//! ```rust
//! use hakker_runtime::mock::MockActor;
//! use std::time::Duration;
//!
//! #[derive(Debug, PartialEq)]
//! enum Ping { Hello }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockActor::<Ping>::new("neighbour");
//!     mock.actor_ref().send(Ping::Hello).unwrap();
//!
//!     assert_eq!(mock.recv().await, Ping::Hello);
//!     mock.expect_no_message(Duration::from_millis(10)).await;
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_ref`] to get a bare handle and receiver, or the [`MockActor`] API.

use crate::actor_ref::ActorRef;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long [`MockActor::recv`] waits before failing the test.
pub const DEFAULT_RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A recording stand-in for an actor.
pub struct MockActor<M> {
    actor_ref: ActorRef<M>,
    receiver: mpsc::UnboundedReceiver<M>,
}

impl<M> MockActor<M> {
    pub fn new(name: &str) -> Self {
        let (actor_ref, receiver) = create_mock_ref(name);
        Self {
            actor_ref,
            receiver,
        }
    }

    /// Returns a handle addressing this mock.
    pub fn actor_ref(&self) -> ActorRef<M> {
        self.actor_ref.clone()
    }

    /// Waits for the next message.
    ///
    /// # Panics
    /// If nothing arrives within [`DEFAULT_RECV_TIMEOUT`].
    pub async fn recv(&mut self) -> M {
        match self.recv_within(DEFAULT_RECV_TIMEOUT).await {
            Some(message) => message,
            None => panic!(
                "{} received no message within {:?}",
                self.actor_ref, DEFAULT_RECV_TIMEOUT
            ),
        }
    }

    /// Waits up to `within` for the next message.
    pub async fn recv_within(&mut self, within: Duration) -> Option<M> {
        tokio::time::timeout(within, self.receiver.recv())
            .await
            .ok()
            .flatten()
    }

    /// Returns every message already queued, without waiting.
    pub fn drain(&mut self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            messages.push(message);
        }
        messages
    }
}

impl<M: std::fmt::Debug> MockActor<M> {
    /// Asserts that nothing arrives within `within`.
    ///
    /// # Panics
    /// If a message arrives.
    pub async fn expect_no_message(&mut self, within: Duration) {
        if let Some(message) = self.recv_within(within).await {
            panic!("{} received unexpected message {:?}", self.actor_ref, message);
        }
    }
}

/// Creates a handle and the receiver of its mailbox.
///
/// Useful when a test wants full control of the receiving side.
pub fn create_mock_ref<M>(name: &str) -> (ActorRef<M>, mpsc::UnboundedReceiver<M>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ActorRef::new(name, sender), receiver)
}
