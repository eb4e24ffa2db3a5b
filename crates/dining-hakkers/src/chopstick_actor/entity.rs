//! [`ActorEntity`] implementation for [`Chopstick`].
//!
//! | State | Message | Reaction |
//! |---|---|---|
//! | `Available` | `Take(h)` | answer `Taken`, become `Taken(h)` |
//! | `Taken(o)` | `Take(h)` | answer `Busy` |
//! | `Taken(o)` | `Put(o)` | become `Available` |
//! | `Taken(o)` | `Put(h)`, `h != o` | fatal |
//! | `Available` | `Put(h)` | fatal |

use super::error::ChopstickError;
use crate::events::{EventSink, TableEvent};
use crate::model::{ChopstickAnswer, ChopstickId, ChopstickMessage, ChopstickState};
use async_trait::async_trait;
use hakker_runtime::{ActorContext, ActorEntity};
use tracing::{debug, warn};

/// One exclusive resource.
pub struct Chopstick {
    id: ChopstickId,
    state: ChopstickState,
    events: EventSink,
}

impl Chopstick {
    pub fn new(id: ChopstickId, events: EventSink) -> Self {
        Self {
            id,
            state: ChopstickState::Available,
            events,
        }
    }
}

#[async_trait]
impl ActorEntity for Chopstick {
    type Id = ChopstickId;
    type Message = ChopstickMessage;
    type Context = ();
    type Error = ChopstickError;

    fn id(&self) -> &ChopstickId {
        &self.id
    }

    async fn handle(
        &mut self,
        message: ChopstickMessage,
        ctx: &ActorContext<Self>,
    ) -> Result<(), ChopstickError> {
        let chopstick = self.id;
        match (self.state, message) {
            (ChopstickState::Available, ChopstickMessage::Take { hakker, reply_to }) => {
                self.state = ChopstickState::Taken { owner: hakker };
                self.events
                    .emit(TableEvent::ChopstickTaken { chopstick, hakker });
                let answer = ChopstickAnswer::Taken {
                    chopstick,
                    handle: ctx.myself().clone(),
                };
                if let Err(e) = reply_to.send(answer) {
                    // Nobody will ever put it back: stay available.
                    warn!(
                        %chopstick,
                        %hakker,
                        reply_to = reply_to.name(),
                        error = %e,
                        "Could not answer, staying available"
                    );
                    self.state = ChopstickState::Available;
                    self.events
                        .emit(TableEvent::ChopstickReleased { chopstick, hakker });
                } else {
                    debug!(%chopstick, %hakker, "Taken");
                }
            }
            (ChopstickState::Taken { owner }, ChopstickMessage::Take { hakker, reply_to }) => {
                debug!(%chopstick, %owner, %hakker, "Busy");
                if let Err(e) = reply_to.send(ChopstickAnswer::Busy { chopstick }) {
                    warn!(%chopstick, %hakker, reply_to = reply_to.name(), error = %e, "Could not answer");
                }
            }
            (ChopstickState::Taken { owner }, ChopstickMessage::Put { hakker }) if owner == hakker => {
                self.state = ChopstickState::Available;
                self.events
                    .emit(TableEvent::ChopstickReleased { chopstick, hakker });
                debug!(%chopstick, %hakker, "Put down");
            }
            (ChopstickState::Taken { owner }, ChopstickMessage::Put { hakker }) => {
                return Err(ChopstickError::PutByNonOwner {
                    chopstick,
                    owner,
                    requester: hakker,
                });
            }
            (ChopstickState::Available, ChopstickMessage::Put { hakker }) => {
                return Err(ChopstickError::PutWhileAvailable {
                    chopstick,
                    requester: hakker,
                });
            }
        }
        Ok(())
    }
}
