use crate::model::{ChopstickAnswer, ChopstickId, ChopstickRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for hakkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HakkerId(pub u32);

impl From<u32> for HakkerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for HakkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hakker-{}", self.0)
    }
}

/// Commands a hakker reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum HakkerCommand {
    /// Wake signal: stop eating (or start the first thinking phase).
    Think,
    /// Wake signal: stop thinking and try to pick up both chopsticks.
    Eat,
    /// An answer relayed from the answer-collector.
    ChopstickAnswer(ChopstickAnswer),
}

/// A chopstick the hakker currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TakenChopstick {
    pub id: ChopstickId,
    pub handle: ChopstickRef,
}

/// Lifecycle of one hakker. Owned by the hakker actor alone.
#[derive(Debug, Clone, PartialEq)]
pub enum HakkerState {
    /// Created, not yet told to think.
    Waiting,
    Thinking,
    /// Sent `Take` to both neighbours, no answer yet.
    Hungry,
    /// Holds `taken`, waits for the answer from `waiting_on`.
    WaitingForOtherChopstick {
        waiting_on: ChopstickRef,
        taken: TakenChopstick,
    },
    /// The first answer was `Busy`; waits for the second before retreating.
    FirstChopstickDenied,
    /// Holds both neighbours.
    Eating,
}

impl Display for HakkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HakkerState::Waiting => f.write_str("Waiting"),
            HakkerState::Thinking => f.write_str("Thinking"),
            HakkerState::Hungry => f.write_str("Hungry"),
            HakkerState::WaitingForOtherChopstick { waiting_on, taken } => write!(
                f,
                "WaitingForOtherChopstick(holding {}, waiting on {})",
                taken.id, waiting_on
            ),
            HakkerState::FirstChopstickDenied => f.write_str("FirstChopstickDenied"),
            HakkerState::Eating => f.write_str("Eating"),
        }
    }
}
