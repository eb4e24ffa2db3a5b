use crate::model::HakkerId;
use hakker_runtime::{ActorRef, ReplyTo};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for chopsticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChopstickId(pub u32);

impl From<u32> for ChopstickId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ChopstickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource-{}", self.0)
    }
}

/// Handle to a chopstick actor.
pub type ChopstickRef = ActorRef<ChopstickMessage>;

/// Availability of one chopstick. Owned by the chopstick actor alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChopstickState {
    Available,
    Taken { owner: HakkerId },
}

/// Requests a chopstick accepts.
#[derive(Debug)]
pub enum ChopstickMessage {
    /// Asks to pick the chopstick up. Exactly one [`ChopstickAnswer`] goes to `reply_to`.
    Take {
        hakker: HakkerId,
        reply_to: ReplyTo<ChopstickAnswer>,
    },
    /// Puts the chopstick down. Only the current owner may send it.
    Put { hakker: HakkerId },
}

/// A chopstick's answer to [`ChopstickMessage::Take`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChopstickAnswer {
    /// Granted. `handle` points back at the chopstick so the hakker can tell its
    /// neighbours apart and put this one down later.
    Taken {
        chopstick: ChopstickId,
        handle: ChopstickRef,
    },
    /// Denied; the request is not remembered.
    Busy { chopstick: ChopstickId },
}
