//! Error types for the Hakker actor.

use crate::model::HakkerId;
use hakker_runtime::FrameworkError;
use thiserror::Error;

/// Errors that stop a hakker.
#[derive(Debug, Error)]
pub enum HakkerError {
    /// The command has no reaction defined in the current state.
    #[error("{hakker} received {command} while {state}")]
    UnexpectedCommand {
        hakker: HakkerId,
        state: String,
        command: String,
    },

    /// A chopstick that is not one of the hakker's neighbours answered.
    #[error("{hakker} received an answer from {chopstick}, which is not one of its neighbours")]
    UnknownChopstick { hakker: HakkerId, chopstick: String },

    /// A neighbour could not be reached.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
