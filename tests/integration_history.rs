use std::time::Duration;

use dazi::clock::ManualClock;
use dazi::config::Config;
use dazi::history::BestScore;
use dazi::sample_text::FixedSample;
use dazi::{Phase, SessionController};

const SECOND: Duration = Duration::from_secs(1);

fn new_controller(target: &str) -> (SessionController<ManualClock, FixedSample>, ManualClock) {
    let clock = ManualClock::new();
    let controller = SessionController::with_parts(
        clock.clone(),
        FixedSample::new(target),
        Config::default(),
    );
    (controller, clock)
}

/// Run one complete session: commit the first character to latch the start
/// time, wait `secs`, then commit `full` to finish.
fn run_session(
    controller: &mut SessionController<ManualClock, FixedSample>,
    clock: &ManualClock,
    full: &str,
    secs: u64,
) {
    controller.reset();
    while controller.snapshot().phase == Phase::Countdown {
        clock.advance(SECOND);
        controller.tick();
    }
    let first: String = full.chars().take(1).collect();
    controller.submit_raw_input(&first, false);
    clock.advance(Duration::from_secs(secs));
    controller.submit_raw_input(full, false);
    assert_eq!(controller.snapshot().phase, Phase::Finished);
}

#[test]
fn history_accumulates_across_resets() {
    let (mut controller, clock) = new_controller("你好世界");

    run_session(&mut controller, &clock, "你好世界", 4);
    run_session(&mut controller, &clock, "你好世界", 8);
    run_session(&mut controller, &clock, "你好X界", 4);

    assert_eq!(controller.history().len(), 3);
    // 4 chars = 2 words: 30 wpm over 4s, 15 wpm over 8s
    let wpms: Vec<u32> = controller.history().iter().map(|s| s.wpm).collect();
    assert_eq!(wpms, vec![30, 15, 30]);
    let accs: Vec<u32> = controller.history().iter().map(|s| s.accuracy).collect();
    assert_eq!(accs, vec![100, 100, 75]);
}

#[test]
fn best_score_is_monotone_and_per_axis() {
    let (mut controller, clock) = new_controller("你好世界");

    run_session(&mut controller, &clock, "你好X界", 4); // 30 wpm, 75%
    assert_eq!(controller.best_score(), BestScore { wpm: 30, accuracy: 75 });

    run_session(&mut controller, &clock, "你好世界", 8); // 15 wpm, 100%
    // Best WPM kept from the faster run, best accuracy from the cleaner one
    assert_eq!(controller.best_score(), BestScore { wpm: 30, accuracy: 100 });

    run_session(&mut controller, &clock, "你好X界", 8); // worse on both axes
    assert_eq!(controller.best_score(), BestScore { wpm: 30, accuracy: 100 });
}

#[test]
fn averages_over_all_entries() {
    let (mut controller, clock) = new_controller("你好世界");
    assert_eq!(controller.average_wpm(), 0);
    assert_eq!(controller.average_accuracy(), 100);

    run_session(&mut controller, &clock, "你好世界", 4); // 30 wpm
    run_session(&mut controller, &clock, "你好世界", 8); // 15 wpm
    assert_eq!(controller.average_wpm(), 23); // 22.5 rounds up
    assert_eq!(controller.average_accuracy(), 100);
}

#[test]
fn history_bars_use_display_window_only() {
    let config = Config {
        countdown_start: 3,
        history_window: 2,
    };
    let clock = ManualClock::new();
    let mut controller = SessionController::with_parts(
        clock.clone(),
        FixedSample::new("你好世界"),
        config,
    );

    run_session(&mut controller, &clock, "你好世界", 4); // 30 wpm
    run_session(&mut controller, &clock, "你好世界", 8); // 15 wpm
    run_session(&mut controller, &clock, "你好世界", 8); // 15 wpm

    // Window shows the last two bars, but the log itself keeps all three
    assert_eq!(controller.history_bars(), vec![0.5, 0.5]);
    assert_eq!(controller.history().len(), 3);
}
