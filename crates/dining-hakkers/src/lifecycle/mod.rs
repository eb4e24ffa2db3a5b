//! # Table Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them into a ring is where the topology lives.
//! [`DiningTable`] is the "conductor" that creates every actor, wires the neighbours,
//! and hands the running tasks back to the caller.
//!
//! ## Wiring
//!
//! 1. **Actor Creation** - N chopsticks `resource-1..N`, N hakkers `hakker-1..N`
//! 2. **Dependency Injection** - hakker *i* gets `resource-i` as `left` and
//!    `resource-((i mod N)+1)` as `right`, passed as its context at `run`
//! 3. **Start** - every actor is spawned inside its own span (`hakker` or `chopstick`,
//!    with the actor's `id`), then every hakker receives `Think`
//!
//! After that the table takes no further part in the protocol.
//!
//! ## Shutdown
//!
//! The ring is cyclic (hakkers address chopsticks, chopsticks answer hakkers, every
//! actor schedules messages to itself), so dropping handles never closes a mailbox.
//! [`DiningTable::shutdown`] aborts the actor tasks instead.
//!
//! ## Failures
//!
//! Actors only end on a protocol violation (or a panic). [`DiningTable::next_failure`]
//! resolves with the first such ending, so the caller can stop the run and report it.

use crate::chopstick_actor;
use crate::config::{ConfigError, TableConfig};
use crate::events::EventSink;
use crate::hakker_actor::{self, Neighbors};
use crate::model::{ChopstickId, ChopstickRef, HakkerCommand, HakkerId};
use hakker_runtime::{ActorRef, FrameworkError};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, Instrument};

/// Errors raised while seating or running a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid table configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Actor(#[from] FrameworkError),

    #[error("Actor task panicked: {0}")]
    Panicked(String),
}

/// A running ring of hakkers and chopsticks.
pub struct DiningTable {
    hakkers: Vec<ActorRef<HakkerCommand>>,
    chopsticks: Vec<ChopstickRef>,
    tasks: JoinSet<Result<(), FrameworkError>>,
}

impl DiningTable {
    /// Creates, wires and starts every actor, then tells each hakker to think.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn seat(config: &TableConfig, events: EventSink) -> Result<Self, TableError> {
        config.validate()?;
        let n = config.hakkers;
        let timings = config.timings();
        let mut tasks = JoinSet::new();

        let chopsticks: Vec<ChopstickRef> = (1..=n)
            .map(|i| {
                let (actor, chopstick) = chopstick_actor::new(ChopstickId(i), events.clone());
                let span = info_span!("chopstick", id = %actor.id());
                tasks.spawn(actor.run(()).instrument(span));
                chopstick
            })
            .collect();

        let hakkers: Vec<ActorRef<HakkerCommand>> = (1..=n)
            .map(|i| {
                let left = chopsticks[(i - 1) as usize].clone();
                let right = chopsticks[(i % n) as usize].clone();
                let (actor, hakker) = hakker_actor::new(HakkerId(i), timings, events.clone());
                let span = info_span!("hakker", id = %actor.id());
                tasks.spawn(actor.run(Neighbors { left, right }).instrument(span));
                hakker
            })
            .collect();

        for hakker in &hakkers {
            hakker.send(HakkerCommand::Think)?;
        }

        info!(hakkers = n, "Table seated");
        Ok(Self {
            hakkers,
            chopsticks,
            tasks,
        })
    }

    /// Handles of the hakkers, `hakker-1` first.
    pub fn hakkers(&self) -> &[ActorRef<HakkerCommand>] {
        &self.hakkers
    }

    /// Handles of the chopsticks, `resource-1` first.
    pub fn chopsticks(&self) -> &[ChopstickRef] {
        &self.chopsticks
    }

    /// Waits until an actor stops and returns why.
    ///
    /// Returns `None` only once every actor task has ended cleanly.
    pub async fn next_failure(&mut self) -> Option<TableError> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => return Some(TableError::Actor(e)),
                Err(e) => return Some(TableError::Panicked(e.to_string())),
            }
        }
        None
    }

    /// Stops every actor.
    ///
    /// Returns the first failure of an actor that had already stopped on its own.
    pub async fn shutdown(mut self) -> Result<(), TableError> {
        info!("Shutting down table...");
        self.tasks.abort_all();

        let mut first_failure = None;
        while let Some(joined) = self.tasks.join_next().await {
            let failure = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => TableError::Actor(e),
                Err(e) if e.is_cancelled() => continue,
                Err(e) => TableError::Panicked(e.to_string()),
            };
            error!(error = %failure, "Actor had failed before shutdown");
            first_failure.get_or_insert(failure);
        }

        info!("Table shutdown complete.");
        match first_failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
