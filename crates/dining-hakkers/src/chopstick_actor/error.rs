//! Error types for the Chopstick actor.

use crate::model::{ChopstickId, HakkerId};
use thiserror::Error;

/// Protocol violations detected by a chopstick. Each one stops the chopstick.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChopstickError {
    /// Someone other than the owner tried to put the chopstick down.
    #[error("{chopstick} is held by {owner}, but {requester} tried to put it down")]
    PutByNonOwner {
        chopstick: ChopstickId,
        owner: HakkerId,
        requester: HakkerId,
    },

    /// A put arrived while nobody held the chopstick.
    #[error("{requester} tried to put down {chopstick}, which is not taken")]
    PutWhileAvailable {
        chopstick: ChopstickId,
        requester: HakkerId,
    },
}
