use dining_hakkers::config::Timings;
use dining_hakkers::events::{EventSink, TableEvent};
use dining_hakkers::hakker_actor::{self, HakkerError, Neighbors};
use dining_hakkers::model::{
    ChopstickAnswer, ChopstickId, ChopstickMessage, HakkerCommand, HakkerId,
};
use hakker_runtime::mock::MockActor;
use hakker_runtime::{ActorRef, FrameworkError, ReplyTo};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio::time::timeout;

const QUIET: Duration = Duration::from_millis(50);

fn timings() -> Timings {
    Timings {
        think: Duration::from_millis(10),
        eat: Duration::from_millis(10),
        retry: Duration::from_millis(200),
        retry_jitter: Duration::ZERO,
    }
}

/// Delays long enough that no wake signal fires while a test pokes the hakker.
fn slow_timings() -> Timings {
    Timings {
        think: Duration::from_secs(5),
        eat: Duration::from_secs(5),
        retry: Duration::from_secs(10),
        retry_jitter: Duration::ZERO,
    }
}

struct Seat {
    hakker: ActorRef<HakkerCommand>,
    task: JoinHandle<Result<(), FrameworkError>>,
    left: MockActor<ChopstickMessage>,
    right: MockActor<ChopstickMessage>,
    events: UnboundedReceiver<TableEvent>,
}

/// Seats `hakker-1` between two mock chopsticks and tells it to think.
fn seat_between_mocks() -> Seat {
    seat_with(timings())
}

fn seat_with(timings: Timings) -> Seat {
    let left = MockActor::new("resource-1");
    let right = MockActor::new("resource-2");
    let (events, event_rx) = EventSink::channel();
    let (actor, hakker) = hakker_actor::new(HakkerId(1), timings, events);
    let task = tokio::spawn(actor.run(Neighbors {
        left: left.actor_ref(),
        right: right.actor_ref(),
    }));
    hakker.send(HakkerCommand::Think).unwrap();
    Seat {
        hakker,
        task,
        left,
        right,
        events: event_rx,
    }
}

async fn expect_take(chopstick: &mut MockActor<ChopstickMessage>) -> ReplyTo<ChopstickAnswer> {
    match chopstick.recv().await {
        ChopstickMessage::Take { hakker, reply_to } => {
            assert_eq!(hakker, HakkerId(1));
            reply_to
        }
        other => panic!("expected Take, got {other:?}"),
    }
}

async fn expect_put(chopstick: &mut MockActor<ChopstickMessage>) {
    match chopstick.recv().await {
        ChopstickMessage::Put { hakker } => assert_eq!(hakker, HakkerId(1)),
        other => panic!("expected Put, got {other:?}"),
    }
}

fn taken(id: u32, chopstick: &MockActor<ChopstickMessage>) -> ChopstickAnswer {
    ChopstickAnswer::Taken {
        chopstick: ChopstickId(id),
        handle: chopstick.actor_ref(),
    }
}

fn busy(id: u32) -> ChopstickAnswer {
    ChopstickAnswer::Busy {
        chopstick: ChopstickId(id),
    }
}

fn drain(events: &mut UnboundedReceiver<TableEvent>) -> Vec<TableEvent> {
    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    seen
}

/// Waits until the hakker reports `wanted`.
async fn wait_for(events: &mut UnboundedReceiver<TableEvent>, wanted: TableEvent) {
    let found = timeout(Duration::from_secs(1), async {
        while let Some(event) = events.recv().await {
            if event == wanted {
                return true;
            }
        }
        false
    })
    .await;
    assert_eq!(found, Ok(true), "never saw {wanted:?}");
}

/// Asserts the hakker stopped on a command its `state` has no reaction for.
async fn expect_unexpected_command(seat: Seat, expected_state: &str) {
    match expect_stopped(seat.task).await {
        FrameworkError::Stopped { actor, source } => {
            assert_eq!(actor, "hakker-1");
            match source.downcast_ref::<HakkerError>() {
                Some(HakkerError::UnexpectedCommand { state, .. }) => {
                    assert_eq!(state, expected_state)
                }
                other => panic!("unexpected hakker error: {other:?}"),
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(seat.hakker.is_closed());
}

async fn expect_stopped(task: JoinHandle<Result<(), FrameworkError>>) -> FrameworkError {
    match timeout(Duration::from_secs(1), task)
        .await
        .expect("hakker did not stop")
        .expect("hakker task panicked")
    {
        Err(e) => e,
        Ok(()) => panic!("hakker ended cleanly"),
    }
}

/// Think, take both, eat, put both back, think again.
#[tokio::test]
async fn test_full_eating_cycle() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_left.send(taken(1, &seat.left)).unwrap();
    from_right.send(taken(2, &seat.right)).unwrap();

    // Eating ends with both chopsticks going back
    expect_put(&mut seat.left).await;
    expect_put(&mut seat.right).await;

    // And the next round starts after thinking
    expect_take(&mut seat.left).await;
    expect_take(&mut seat.right).await;

    let hakker = HakkerId(1);
    assert_eq!(
        drain(&mut seat.events),
        vec![
            TableEvent::StartedThinking { hakker },
            TableEvent::BecameHungry { hakker },
            TableEvent::StartedEating {
                hakker,
                chopsticks: [ChopstickId(1), ChopstickId(2)],
            },
            TableEvent::StoppedEating { hakker },
            TableEvent::StartedThinking { hakker },
            TableEvent::BecameHungry { hakker },
        ]
    );
    assert!(!seat.task.is_finished());
}

/// The answers may arrive in either order.
#[tokio::test]
async fn test_answers_in_reverse_order_still_eat() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_right.send(taken(2, &seat.right)).unwrap();
    from_left.send(taken(1, &seat.left)).unwrap();

    expect_put(&mut seat.left).await;
    expect_put(&mut seat.right).await;
    assert!(drain(&mut seat.events).contains(&TableEvent::StartedEating {
        hakker: HakkerId(1),
        chopsticks: [ChopstickId(2), ChopstickId(1)],
    }));
}

/// Granted then denied: the granted one goes back, the busy one is left alone.
#[tokio::test]
async fn test_taken_then_busy_puts_back_the_held_chopstick() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_left.send(taken(1, &seat.left)).unwrap();
    from_right.send(busy(2)).unwrap();

    expect_put(&mut seat.left).await;
    seat.right.expect_no_message(QUIET).await;
    seat.left.expect_no_message(QUIET).await;
    assert!(drain(&mut seat.events).contains(&TableEvent::GaveUp {
        hakker: HakkerId(1),
        released: Some(ChopstickId(1)),
    }));

    // After the backoff it tries again
    expect_take(&mut seat.left).await;
    expect_take(&mut seat.right).await;
}

/// Denied then granted: the late grant goes straight back.
#[tokio::test]
async fn test_busy_then_taken_puts_back_the_late_grant() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_left.send(busy(1)).unwrap();
    from_right.send(taken(2, &seat.right)).unwrap();

    expect_put(&mut seat.right).await;
    seat.left.expect_no_message(QUIET).await;
    assert!(drain(&mut seat.events).contains(&TableEvent::GaveUp {
        hakker: HakkerId(1),
        released: Some(ChopstickId(2)),
    }));
}

#[tokio::test]
async fn test_both_busy_puts_nothing_back() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_left.send(busy(1)).unwrap();
    from_right.send(busy(2)).unwrap();

    seat.left.expect_no_message(QUIET).await;
    seat.right.expect_no_message(QUIET).await;
    assert!(drain(&mut seat.events).contains(&TableEvent::GaveUp {
        hakker: HakkerId(1),
        released: None,
    }));

    expect_take(&mut seat.left).await;
    expect_take(&mut seat.right).await;
}

/// Eat before the first Think has no reaction defined.
#[tokio::test]
async fn test_eat_while_waiting_is_fatal() {
    let left = MockActor::<ChopstickMessage>::new("resource-1");
    let right = MockActor::<ChopstickMessage>::new("resource-2");
    let (actor, hakker) = hakker_actor::new(HakkerId(1), timings(), EventSink::disabled());
    let task = tokio::spawn(actor.run(Neighbors {
        left: left.actor_ref(),
        right: right.actor_ref(),
    }));

    hakker.send(HakkerCommand::Eat).unwrap();

    match expect_stopped(task).await {
        FrameworkError::Stopped { actor, source } => {
            assert_eq!(actor, "hakker-1");
            let error = source.downcast_ref::<HakkerError>().unwrap();
            assert!(matches!(
                error,
                HakkerError::UnexpectedCommand { state, .. } if state == "Waiting"
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(hakker.send(HakkerCommand::Think).is_err());
}

#[tokio::test]
async fn test_answer_from_unknown_chopstick_is_fatal() {
    let mut seat = seat_between_mocks();
    let stranger = MockActor::<ChopstickMessage>::new("resource-9");

    let from_left = expect_take(&mut seat.left).await;
    from_left.send(taken(9, &stranger)).unwrap();

    match expect_stopped(seat.task).await {
        FrameworkError::Stopped { source, .. } => {
            assert!(matches!(
                source.downcast_ref::<HakkerError>(),
                Some(HakkerError::UnknownChopstick { .. })
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// The second grant must come from the chopstick the hakker is waiting on.
#[tokio::test]
async fn test_second_grant_from_the_held_chopstick_is_fatal() {
    let mut seat = seat_between_mocks();

    let from_left = expect_take(&mut seat.left).await;
    from_left.send(taken(1, &seat.left)).unwrap();
    from_left.send(taken(1, &seat.left)).unwrap();

    let error = expect_stopped(seat.task).await;
    assert!(error.to_string().starts_with("Actor hakker-1 stopped: hakker-1 received"));
    assert!(seat.hakker.is_closed());
}

/// A wake signal that arrives late, while the hakker is already eating.
#[tokio::test]
async fn test_eat_while_eating_is_fatal() {
    let mut seat = seat_with(slow_timings());
    let hakker = HakkerId(1);
    wait_for(&mut seat.events, TableEvent::StartedThinking { hakker }).await;

    // Skip the long think so the meal starts right away
    seat.hakker.send(HakkerCommand::Eat).unwrap();
    let from_left = expect_take(&mut seat.left).await;
    let from_right = expect_take(&mut seat.right).await;
    from_left.send(taken(1, &seat.left)).unwrap();
    from_right.send(taken(2, &seat.right)).unwrap();
    wait_for(
        &mut seat.events,
        TableEvent::StartedEating {
            hakker,
            chopsticks: [ChopstickId(1), ChopstickId(2)],
        },
    )
    .await;

    seat.hakker.send(HakkerCommand::Eat).unwrap();
    expect_unexpected_command(seat, "Eating").await;
}

#[tokio::test]
async fn test_think_while_thinking_is_fatal() {
    let mut seat = seat_with(slow_timings());
    wait_for(
        &mut seat.events,
        TableEvent::StartedThinking {
            hakker: HakkerId(1),
        },
    )
    .await;

    seat.hakker.send(HakkerCommand::Think).unwrap();
    expect_unexpected_command(seat, "Thinking").await;
}

/// A second Eat while both Takes are still unanswered.
#[tokio::test]
async fn test_eat_while_hungry_is_fatal() {
    let mut seat = seat_between_mocks();
    let _from_left = expect_take(&mut seat.left).await;
    let _from_right = expect_take(&mut seat.right).await;

    seat.hakker.send(HakkerCommand::Eat).unwrap();
    expect_unexpected_command(seat, "Hungry").await;
}
