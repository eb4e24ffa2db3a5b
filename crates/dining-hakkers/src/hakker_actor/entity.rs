//! [`ActorEntity`] implementation for [`Hakker`].
//!
//! The hakker never blocks on its second answer. Whatever arrives first is folded into
//! the state (`WaitingForOtherChopstick` or `FirstChopstickDenied`) and the decision is
//! taken when the second answer arrives. A failed attempt always puts back what it
//! holds and retries after the retry backoff.

use super::error::HakkerError;
use crate::config::Timings;
use crate::events::{EventSink, TableEvent};
use crate::model::{
    ChopstickAnswer, ChopstickMessage, ChopstickRef, HakkerCommand, HakkerId, HakkerState,
    TakenChopstick,
};
use async_trait::async_trait;
use hakker_runtime::{collect_replies, ActorContext, ActorEntity};
use std::time::Duration;
use tracing::{debug, info};

/// The two chopsticks a hakker sits between. Fixed for the hakker's lifetime.
#[derive(Debug, Clone)]
pub struct Neighbors {
    pub left: ChopstickRef,
    pub right: ChopstickRef,
}

/// One diner at the table.
pub struct Hakker {
    id: HakkerId,
    state: HakkerState,
    timings: Timings,
    events: EventSink,
}

impl Hakker {
    pub fn new(id: HakkerId, timings: Timings, events: EventSink) -> Self {
        Self {
            id,
            state: HakkerState::Waiting,
            timings,
            events,
        }
    }

    /// Enters `Thinking` and schedules the next `Eat` after `delay`.
    fn think(&self, ctx: &ActorContext<Self>, delay: Duration) -> HakkerState {
        self.events
            .emit(TableEvent::StartedThinking { hakker: self.id });
        ctx.schedule_once(delay, HakkerCommand::Eat);
        HakkerState::Thinking
    }

    /// Abandons the current attempt: puts back `held` (if any) and retries later.
    fn retreat(
        &self,
        ctx: &ActorContext<Self>,
        held: Option<&TakenChopstick>,
    ) -> Result<HakkerState, HakkerError> {
        self.events.emit(TableEvent::GaveUp {
            hakker: self.id,
            released: held.map(|taken| taken.id),
        });
        if let Some(taken) = held {
            taken
                .handle
                .send(ChopstickMessage::Put { hakker: self.id })?;
        }
        Ok(self.think(ctx, self.timings.retry_delay()))
    }
}

#[async_trait]
impl ActorEntity for Hakker {
    type Id = HakkerId;
    type Message = HakkerCommand;
    type Context = Neighbors;
    type Error = HakkerError;

    fn id(&self) -> &HakkerId {
        &self.id
    }

    async fn handle(
        &mut self,
        command: HakkerCommand,
        ctx: &ActorContext<Self>,
    ) -> Result<(), HakkerError> {
        let hakker = self.id;
        let Neighbors { left, right } = ctx.context();

        let next = match (&self.state, command) {
            (HakkerState::Waiting, HakkerCommand::Think) => {
                info!(%hakker, "Starts to think");
                self.think(ctx, self.timings.think)
            }

            (HakkerState::Thinking, HakkerCommand::Eat) => {
                debug!(%hakker, "Hungry, asking both neighbours");
                self.events.emit(TableEvent::BecameHungry { hakker });
                let reply_to =
                    collect_replies(2, ctx.myself().clone(), HakkerCommand::ChopstickAnswer);
                left.send(ChopstickMessage::Take {
                    hakker,
                    reply_to: reply_to.clone(),
                })?;
                right.send(ChopstickMessage::Take { hakker, reply_to })?;
                HakkerState::Hungry
            }

            (HakkerState::Eating, HakkerCommand::Think) => {
                info!(%hakker, "Puts down the chopsticks and starts to think");
                self.events.emit(TableEvent::StoppedEating { hakker });
                left.send(ChopstickMessage::Put { hakker })?;
                right.send(ChopstickMessage::Put { hakker })?;
                self.think(ctx, self.timings.think)
            }

            (
                HakkerState::Hungry,
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Taken { chopstick, handle }),
            ) => {
                let waiting_on = if handle == *left {
                    right.clone()
                } else if handle == *right {
                    left.clone()
                } else {
                    return Err(HakkerError::UnknownChopstick {
                        hakker,
                        chopstick: chopstick.to_string(),
                    });
                };
                debug!(%hakker, %chopstick, %waiting_on, "First chopstick taken");
                HakkerState::WaitingForOtherChopstick {
                    waiting_on,
                    taken: TakenChopstick {
                        id: chopstick,
                        handle,
                    },
                }
            }

            (
                HakkerState::Hungry,
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Busy { chopstick }),
            ) => {
                debug!(%hakker, %chopstick, "First chopstick denied");
                HakkerState::FirstChopstickDenied
            }

            (
                HakkerState::WaitingForOtherChopstick { waiting_on, taken },
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Taken { chopstick, handle }),
            ) if handle == *waiting_on => {
                info!(
                    %hakker,
                    first = %taken.id,
                    second = %chopstick,
                    "Picked up both chopsticks and starts to eat"
                );
                self.events.emit(TableEvent::StartedEating {
                    hakker,
                    chopsticks: [taken.id, chopstick],
                });
                ctx.schedule_once(self.timings.eat, HakkerCommand::Think);
                HakkerState::Eating
            }

            (
                HakkerState::WaitingForOtherChopstick { taken, .. },
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Busy { chopstick }),
            ) => {
                debug!(%hakker, held = %taken.id, busy = %chopstick, "Second chopstick busy, putting the first back");
                self.retreat(ctx, Some(taken))?
            }

            (
                HakkerState::FirstChopstickDenied,
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Busy { chopstick }),
            ) => {
                debug!(%hakker, %chopstick, "Both chopsticks busy");
                self.retreat(ctx, None)?
            }

            (
                HakkerState::FirstChopstickDenied,
                HakkerCommand::ChopstickAnswer(ChopstickAnswer::Taken { chopstick, handle }),
            ) => {
                debug!(%hakker, %chopstick, "First chopstick was denied, putting the second back");
                let granted = TakenChopstick {
                    id: chopstick,
                    handle,
                };
                self.retreat(ctx, Some(&granted))?
            }

            (state, command) => {
                return Err(HakkerError::UnexpectedCommand {
                    hakker,
                    state: state.to_string(),
                    command: format!("{command:?}"),
                });
            }
        };

        self.state = next;
        Ok(())
    }
}
