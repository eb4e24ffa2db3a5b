//! # Table Events
//!
//! An optional, in-process record of every state change at the table. Tracing lines
//! are for humans; events are for programs (tests, monitors) that need to check what
//! happened in which order.
//!
//! ## Ordering
//!
//! Every actor emits an event *before* sending any message that lets another actor
//! observe the consequence. A hakker reports `StoppedEating` before it puts its
//! chopsticks down, a chopstick reports `ChopstickTaken` before it answers. Since all
//! events go through one channel, the stream is consistent with causality: if the
//! stream says two neighbours ate at the same time, they really did.

use crate::model::{ChopstickId, HakkerId};
use tokio::sync::mpsc;

/// One observable state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    StartedThinking { hakker: HakkerId },
    BecameHungry { hakker: HakkerId },
    StartedEating {
        hakker: HakkerId,
        chopsticks: [ChopstickId; 2],
    },
    StoppedEating { hakker: HakkerId },
    /// Failed to pair; `released` is the chopstick put back, if one was held.
    GaveUp {
        hakker: HakkerId,
        released: Option<ChopstickId>,
    },
    ChopstickTaken {
        chopstick: ChopstickId,
        hakker: HakkerId,
    },
    ChopstickReleased {
        chopstick: ChopstickId,
        hakker: HakkerId,
    },
}

/// Where actors report [`TableEvent`]s. Disabled by default.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    sender: Option<mpsc::UnboundedSender<TableEvent>>,
}

impl EventSink {
    /// A sink that drops every event.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A sink together with the receiving end of its stream.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TableEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    pub fn emit(&self, event: TableEvent) {
        if let Some(sender) = &self.sender {
            // Nobody listening any more is not an error for the table.
            let _ = sender.send(event);
        }
    }
}
