//! Scenario tests for the timer engine.
//!
//! These drive the public engine API with in-memory collaborators and check
//! complete workflows: a full pomodoro, break completion, idempotent
//! controls and duration changes.

use pomotimer::{
    format_time, minutes_to_duration, DisplayCall, MemoryStore, MockAlertChannel, Mode,
    RecordingDisplay, Settings, TickOutcome, TimerEngine,
};

// ============================================================================
// Test Helpers
// ============================================================================

type Engine = TimerEngine<MemoryStore, RecordingDisplay, MockAlertChannel>;

fn create_engine() -> Engine {
    TimerEngine::new(MemoryStore::new(), RecordingDisplay::new(), MockAlertChannel::new())
}

/// Ticks `n` times and returns how many intervals finished.
fn tick_n(engine: &mut Engine, n: usize) -> usize {
    (0..n)
        .map(|_| engine.tick())
        .filter(|outcome| matches!(outcome, TickOutcome::Finished { .. }))
        .count()
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn duration_and_formatting_agree() {
    for minutes in 1..=120u32 {
        let seconds = minutes_to_duration(minutes);
        assert_eq!(seconds, u64::from(minutes) * 60);
        assert_eq!(format_time(seconds), format!("{:02}:00", minutes));
    }
    assert_eq!(format_time(90), "01:30");
}

// ============================================================================
// Full Cycles
// ============================================================================

#[test]
fn full_pomodoro_moves_to_short_break() {
    let mut engine = create_engine();
    assert_eq!(engine.mode(), Mode::Pomodoro);
    assert_eq!(engine.formatted_time(), "25:00");
    assert_eq!(engine.sessions(), 0);

    engine.start();
    let finishes = tick_n(&mut engine, 1500);

    assert_eq!(finishes, 1);
    assert_eq!(engine.sessions(), 1);
    assert_eq!(engine.mode(), Mode::ShortBreak);
    assert_eq!(engine.remaining_seconds(), 300);
    assert_eq!(engine.formatted_time(), "05:00");
    assert!(!engine.is_running());
}

#[test]
fn finished_short_break_returns_to_pomodoro_without_counting() {
    let mut engine = create_engine();
    engine.start();
    tick_n(&mut engine, 1500);

    engine.start();
    let finishes = tick_n(&mut engine, 300);

    assert_eq!(finishes, 1);
    assert_eq!(engine.mode(), Mode::Pomodoro);
    assert_eq!(engine.remaining_seconds(), 1500);
    assert_eq!(engine.sessions(), 1);

    let messages: Vec<&str> = engine
        .alerts()
        .notifications()
        .iter()
        .map(|(_, message)| message.as_str())
        .collect();
    assert_eq!(messages, ["Pomodoro terminado", "Descanso terminado"]);
}

#[test]
fn break_finish_uses_current_pomodoro_setting() {
    let mut engine = create_engine();
    engine.set_mode(Mode::ShortBreak);
    engine.update_setting(Mode::Pomodoro, 45);

    engine.start();
    tick_n(&mut engine, 300);

    assert_eq!(engine.mode(), Mode::Pomodoro);
    assert_eq!(engine.remaining_seconds(), 45 * 60);
}

#[test]
fn display_follows_countdown() {
    let mut engine = create_engine();
    engine.start();
    tick_n(&mut engine, 61);

    assert_eq!(engine.display().last_time(), Some("23:59"));
    assert!(engine.display().in_focus_visual());
    assert_eq!(engine.display().last_controls(), Some((false, true)));
}

// ============================================================================
// Idempotent Controls
// ============================================================================

#[test]
fn repeated_start_and_pause_change_nothing() {
    let mut engine = create_engine();

    engine.pause();
    assert_eq!(engine.display().calls().len(), 3);

    engine.start();
    let after_start = engine.display().calls().to_vec();
    engine.start();
    assert_eq!(engine.display().calls(), after_start.as_slice());
    assert!(engine.is_ticking());

    engine.pause();
    let after_pause = engine.display().calls().to_vec();
    engine.pause();
    assert_eq!(engine.display().calls(), after_pause.as_slice());
    assert!(!engine.is_ticking());

    let enters = after_pause
        .iter()
        .filter(|call| matches!(call, DisplayCall::EnterFocus(_)))
        .count();
    assert_eq!(enters, 1);
}

// ============================================================================
// Settings Changes
// ============================================================================

#[test]
fn updated_pomodoro_applies_after_reset() {
    let mut engine = create_engine();
    engine.update_setting(Mode::Pomodoro, 30);
    engine.reset();

    assert_eq!(engine.remaining_seconds(), 1800);
    assert_eq!(
        engine.store().stored_settings(),
        Some(Settings {
            pomodoro_minutes: 30,
            ..Settings::default()
        })
    );
}

#[test]
fn updating_inactive_mode_keeps_long_break_running() {
    let mut engine = create_engine();
    engine.set_mode(Mode::LongBreak);
    engine.start();
    tick_n(&mut engine, 10);

    engine.update_setting(Mode::ShortBreak, 10);
    assert_eq!(engine.remaining_seconds(), 890);
    assert!(engine.is_running());

    engine.update_setting(Mode::LongBreak, 10);
    assert_eq!(engine.remaining_seconds(), 600);
    assert!(!engine.is_running());
}

#[test]
fn sub_minute_setting_is_clamped() {
    let mut engine = create_engine();
    engine.update_setting(Mode::Pomodoro, 0);

    assert_eq!(engine.settings().pomodoro_minutes, 1);
    assert_eq!(engine.remaining_seconds(), 60);
}
