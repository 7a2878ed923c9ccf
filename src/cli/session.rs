//! Interactive session loop.
//!
//! Runs on a single thread: each iteration waits for whichever comes first
//! of the engine's next tick, the next input line, or the shutdown signal,
//! and handles it to completion before waiting again.

use std::borrow::Cow;
use std::future::Future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use super::input::{SessionCommand, HELP};
use crate::alert::AlertChannel;
use crate::display::DisplaySurface;
use crate::engine::{TickOutcome, TimerEngine};
use crate::store::SettingsStore;
use crate::types::{Mode, Settings};

/// Whether the session should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs the session until input ends, `quit` is entered, or `shutdown`
/// resolves. The engine is paused before returning.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub async fn run_session<S, D, A, R, F>(
    engine: &mut TimerEngine<S, D, A>,
    input: R,
    shutdown: F,
) -> Result<()>
where
    S: SettingsStore,
    D: DisplaySurface,
    A: AlertChannel,
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut lines = input.split(b'\n');
    tokio::pin!(shutdown);

    engine
        .display_mut()
        .show_message("Type 'help' for commands.");

    loop {
        tokio::select! {
            () = &mut shutdown => {
                debug!("Shutdown requested");
                break;
            }
            () = engine.next_tick() => {
                if let TickOutcome::Finished { mode } = engine.tick() {
                    let text = finish_text(mode, engine.mode());
                    engine.display_mut().show_message(&text);
                }
            }
            line = lines.next_segment() => {
                let Some(bytes) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    break;
                };
                let line = decode_line(&bytes);
                match SessionCommand::parse(&line) {
                    Ok(Some(command)) => {
                        if apply(engine, command) == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => engine.display_mut().show_message(&message),
                }
            }
        }
    }

    engine.pause();
    Ok(())
}

/// Applies one command to the engine.
pub fn apply<S, D, A>(engine: &mut TimerEngine<S, D, A>, command: SessionCommand) -> Flow
where
    S: SettingsStore,
    D: DisplaySurface,
    A: AlertChannel,
{
    debug!("Command: {:?}", command);

    match command {
        SessionCommand::Start => engine.start(),
        SessionCommand::Pause => engine.pause(),
        SessionCommand::Escape => {
            if engine.is_running() {
                engine.pause();
            }
        }
        SessionCommand::Reset => engine.reset(),
        SessionCommand::Mode(mode) => engine.set_mode(mode),
        SessionCommand::Set { mode, minutes } => {
            engine.update_setting(mode, minutes);
            let stored = engine.settings().minutes(mode);
            engine
                .display_mut()
                .show_message(&format!("{} set to {} min", mode.label(), stored));
        }
        SessionCommand::Settings => {
            let text = settings_text(engine.settings());
            engine.display_mut().show_message(&text);
        }
        SessionCommand::Help => engine.display_mut().show_message(HELP),
        SessionCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

/// One-line summary of the configured durations.
pub fn settings_text(settings: &Settings) -> String {
    Mode::ALL
        .iter()
        .map(|mode| format!("{}: {} min", mode.label(), settings.minutes(*mode)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn finish_text(finished: Mode, next: Mode) -> String {
    format!("{}. Next: {}", finished.finish_message(), next.label())
}

/// Decodes one input line, replacing invalid UTF-8 and dropping a trailing `\r`.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("Input line is not valid UTF-8; invalid bytes replaced");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::MockAlertChannel;
    use crate::display::RecordingDisplay;
    use crate::store::MemoryStore;

    type TestEngine = TimerEngine<MemoryStore, RecordingDisplay, MockAlertChannel>;

    fn create_engine() -> TestEngine {
        TimerEngine::new(MemoryStore::new(), RecordingDisplay::new(), MockAlertChannel::new())
    }

    mod apply_tests {
        use super::*;

        #[test]
        fn test_start_pause() {
            let mut engine = create_engine();
            assert_eq!(apply(&mut engine, SessionCommand::Start), Flow::Continue);
            assert!(engine.is_running());

            apply(&mut engine, SessionCommand::Pause);
            assert!(!engine.is_running());
        }

        #[test]
        fn test_escape_only_pauses_when_running() {
            let mut engine = create_engine();
            let calls = engine.display().calls().len();
            apply(&mut engine, SessionCommand::Escape);
            assert_eq!(engine.display().calls().len(), calls);

            apply(&mut engine, SessionCommand::Start);
            apply(&mut engine, SessionCommand::Escape);
            assert!(!engine.is_running());
        }

        #[test]
        fn test_set_reports_stored_value() {
            let mut engine = create_engine();
            apply(
                &mut engine,
                SessionCommand::Set {
                    mode: Mode::ShortBreak,
                    minutes: 0,
                },
            );
            assert_eq!(engine.settings().short_break_minutes, 1);
            assert!(engine
                .display()
                .messages()
                .contains(&"Short break set to 1 min"));
        }

        #[test]
        fn test_mode_and_reset() {
            let mut engine = create_engine();
            apply(&mut engine, SessionCommand::Mode(Mode::LongBreak));
            assert_eq!(engine.remaining_seconds(), 900);

            apply(&mut engine, SessionCommand::Start);
            engine.tick();
            apply(&mut engine, SessionCommand::Reset);
            assert_eq!(engine.remaining_seconds(), 900);
        }

        #[test]
        fn test_settings_and_help_messages() {
            let mut engine = create_engine();
            apply(&mut engine, SessionCommand::Settings);
            apply(&mut engine, SessionCommand::Help);

            let messages = engine.display().messages();
            assert_eq!(
                messages[0],
                "Pomodoro: 25 min, Short break: 5 min, Long break: 15 min"
            );
            assert_eq!(messages[1], HELP);
        }

        #[test]
        fn test_quit() {
            let mut engine = create_engine();
            assert_eq!(apply(&mut engine, SessionCommand::Quit), Flow::Quit);
        }
    }

    mod run_session_tests {
        use super::*;
        use std::future;
        use tokio::io::{AsyncWriteExt, BufReader};
        use tokio::time::{sleep, Duration};

        #[tokio::test(start_paused = true)]
        async fn test_input_drives_engine_until_eof() {
            let mut engine = create_engine();
            let input: &[u8] = b"set pomodoro 30\nmode short\n\nbogus\n";

            run_session(&mut engine, input, future::pending())
                .await
                .unwrap();

            assert_eq!(engine.settings().pomodoro_minutes, 30);
            assert_eq!(engine.mode(), Mode::ShortBreak);
            assert!(engine
                .display()
                .messages()
                .iter()
                .any(|m| m.contains("bogus")));
        }

        #[tokio::test(start_paused = true)]
        async fn test_invalid_utf8_line_does_not_end_session() {
            let mut engine = create_engine();
            let input: &[u8] = b"\xff\xfe\nset short 10\r\n";

            run_session(&mut engine, input, future::pending())
                .await
                .unwrap();

            assert_eq!(engine.settings().short_break_minutes, 10);
            assert!(engine
                .display()
                .messages()
                .iter()
                .any(|m| m.contains('\u{FFFD}')));
        }

        #[tokio::test(start_paused = true)]
        async fn test_ticks_arrive_while_waiting_for_input() {
            let mut engine = create_engine();
            let (mut writer, reader) = tokio::io::duplex(64);

            let feeder = tokio::spawn(async move {
                writer.write_all(b"start\n").await.unwrap();
                sleep(Duration::from_millis(3500)).await;
                writer.write_all(b"pause\n").await.unwrap();
                writer.write_all(b"quit\n").await.unwrap();
            });

            run_session(&mut engine, BufReader::new(reader), future::pending())
                .await
                .unwrap();
            feeder.await.unwrap();

            assert_eq!(engine.remaining_seconds(), 1497);
            assert!(!engine.is_running());
        }

        #[tokio::test(start_paused = true)]
        async fn test_finish_announced() {
            let mut engine = create_engine();
            engine.update_setting(Mode::Pomodoro, 1);
            let (mut writer, reader) = tokio::io::duplex(64);

            let feeder = tokio::spawn(async move {
                writer.write_all(b"start\n").await.unwrap();
                sleep(Duration::from_secs(65)).await;
                writer.write_all(b"quit\n").await.unwrap();
            });

            run_session(&mut engine, BufReader::new(reader), future::pending())
                .await
                .unwrap();
            feeder.await.unwrap();

            assert_eq!(engine.sessions(), 1);
            assert_eq!(engine.mode(), Mode::ShortBreak);
            assert_eq!(engine.remaining_seconds(), 300);
            assert!(engine
                .display()
                .messages()
                .contains(&"Pomodoro terminado. Next: Short break"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_shutdown_pauses_engine() {
            let mut engine = create_engine();
            let (mut writer, reader) = tokio::io::duplex(64);
            writer.write_all(b"start\n").await.unwrap();

            run_session(
                &mut engine,
                BufReader::new(reader),
                sleep(Duration::from_millis(2500)),
            )
            .await
            .unwrap();

            assert!(!engine.is_running());
            assert_eq!(engine.remaining_seconds(), 1498);
            drop(writer);
        }
    }
}
