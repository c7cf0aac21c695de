use std::sync::mpsc;
use std::time::Duration;

use dazi::clock::ManualClock;
use dazi::config::Config;
use dazi::runtime::{dispatch, FixedTicker, Runner, SessionEvent, TestEventSource};
use dazi::sample_text::FixedSample;
use dazi::{Phase, SessionController};

// Headless integration using the runtime harness without a host UI.
// Verifies that a minimal session completes via Runner/TestEventSource.
#[test]
fn headless_session_flow_completes() {
    let clock = ManualClock::new();
    let mut controller = SessionController::with_parts(
        clock.clone(),
        FixedSample::new("你好"),
        Config::default(),
    );

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // Producer: reset, then an IME composition that commits the whole target.
    // Absent events, step() times out into the countdown/live ticks.
    tx.send(SessionEvent::Reset).unwrap();
    for _ in 0..3 {
        tx.send(SessionEvent::Tick).unwrap();
    }
    tx.send(SessionEvent::RawInput {
        text: "ni".into(),
        composing: true,
    })
    .unwrap();
    tx.send(SessionEvent::RawInput {
        text: "nihao".into(),
        composing: true,
    })
    .unwrap();
    tx.send(SessionEvent::CompositionEnd("你好".into())).unwrap();

    // Act: drive a tiny event loop until finished (or bounded steps)
    for _ in 0..100u32 {
        clock.advance(Duration::from_secs(1));
        let event = runner.step();
        dispatch(&mut controller, event);
        if controller.snapshot().phase == Phase::Finished {
            break;
        }
    }

    // Assert: finished with one history record and a best score
    let snap = controller.snapshot();
    assert_eq!(snap.phase, Phase::Finished);
    assert_eq!(snap.accuracy, 100);
    assert_eq!(controller.history().len(), 1);
    assert!(controller.best_score().accuracy == 100);
}

#[test]
fn headless_ticks_drive_countdown_on_timeout() {
    let clock = ManualClock::new();
    let mut controller = SessionController::with_parts(
        clock.clone(),
        FixedSample::new("你好"),
        Config::default(),
    );

    // No producer at all: every step() times out into a Tick.
    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

    controller.reset();
    assert_eq!(controller.snapshot().countdown, Some(3));

    for _ in 0..3 {
        clock.advance(Duration::from_secs(1));
        let event = runner.step();
        dispatch(&mut controller, event);
    }

    let snap = controller.snapshot();
    assert_eq!(snap.phase, Phase::Active);
    assert_eq!(snap.countdown, None);
}
