//! Timer engine for the Pomodoro Timer.
//!
//! This module provides the core timer functionality:
//! - Mode transitions (Pomodoro → Short break → Pomodoro)
//! - Countdown driven by a cancelable [`Ticker`]
//! - Finish handling with tone, notification and session counting
//! - Settings updates mirrored to the settings store
//!
//! Long breaks are only entered by explicit [`TimerEngine::set_mode`] calls.

use tokio::time::Duration;
use tracing::{debug, info, warn};

use super::ticker::Ticker;
use crate::alert::{AlertChannel, AlertError};
use crate::display::DisplaySurface;
use crate::store::SettingsStore;
use crate::types::{Mode, Settings, TimerState};

/// Title used for every finish notification.
pub const NOTIFICATION_TITLE: &str = "Pomodoro";

// ============================================================================
// TickOutcome
// ============================================================================

/// What a single call to [`TimerEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was decremented by one second.
    Counted {
        /// Seconds left after the decrement
        remaining_seconds: u64,
    },
    /// The interval of `mode` finished and the engine moved on.
    Finished {
        /// Mode that just finished
        mode: Mode,
    },
    /// The engine was idle; nothing happened.
    Ignored,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Pomodoro state machine.
///
/// Owns the countdown state, the settings and the completed-session count,
/// and drives its three collaborators:
///
/// - `S`: where settings and the session count are persisted
/// - `D`: where time, count, controls and the in-progress visual are shown
/// - `A`: where finish tones and notifications go
pub struct TimerEngine<S, D, A>
where
    S: SettingsStore,
    D: DisplaySurface,
    A: AlertChannel,
{
    state: TimerState,
    settings: Settings,
    sessions: u32,
    ticker: Ticker,
    store: S,
    display: D,
    alerts: A,
}

impl<S, D, A> TimerEngine<S, D, A>
where
    S: SettingsStore,
    D: DisplaySurface,
    A: AlertChannel,
{
    /// Creates an idle engine in pomodoro mode.
    ///
    /// Settings and the session count are read from `store`, falling back
    /// to defaults. The initial time and count are rendered and notification
    /// permission is requested.
    pub fn new(store: S, display: D, mut alerts: A) -> Self {
        let settings = store.load().map(Settings::sanitized).unwrap_or_default();
        let sessions = store.load_session_count();

        debug!(
            "Loaded settings {:?}, {} completed sessions",
            settings, sessions
        );

        if let Err(e) = alerts.request_permission() {
            log_alert_failure("Notification permission", &e);
        }

        let mut engine = Self {
            state: TimerState::new(Mode::Pomodoro, &settings),
            settings,
            sessions,
            ticker: Ticker::default(),
            store,
            display,
            alerts,
        };

        engine.display.render_completed_count(engine.sessions);
        engine.display.set_controls_enabled(true, false);
        engine.render_time();
        engine
    }

    /// Replaces the tick period. Only takes effect while idle.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        if !self.state.running {
            self.ticker = Ticker::new(period);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Starts the countdown. Does nothing if already running.
    pub fn start(&mut self) {
        if self.state.running {
            debug!("Start ignored: already running");
            return;
        }

        self.state.running = true;
        self.ticker.arm();
        self.display.set_controls_enabled(false, true);
        self.display.enter_focus_visual(self.state.mode);

        debug!(
            "Started {} with {}s left",
            self.state.mode, self.state.remaining_seconds
        );
    }

    /// Stops the countdown. Does nothing if already idle.
    pub fn pause(&mut self) {
        if !self.state.running {
            debug!("Pause ignored: not running");
            return;
        }

        self.state.running = false;
        self.ticker.disarm();
        self.display.set_controls_enabled(true, false);
        self.display.exit_focus_visual();

        debug!(
            "Paused {} with {}s left",
            self.state.mode, self.state.remaining_seconds
        );
    }

    /// Pauses and restores the full duration of the current mode.
    pub fn reset(&mut self) {
        self.pause();
        self.state.remaining_seconds = self.settings.duration_of(self.state.mode);
        self.render_time();
    }

    /// Switches to `mode` with its full duration.
    ///
    /// The running flag is left as it is.
    pub fn set_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.state.remaining_seconds = self.settings.duration_of(mode);
        self.render_time();
        debug!("Mode set to {}", mode);
    }

    /// Advances the countdown by one second.
    ///
    /// The interval finishes on the tick that reaches zero; a tick arriving
    /// when the countdown is already at zero finishes it without
    /// decrementing. Ticks while idle are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Ignored;
        }

        if self.state.remaining_seconds == 0 {
            return self.on_finish();
        }

        self.state.remaining_seconds -= 1;
        self.render_time();

        if self.state.remaining_seconds == 0 {
            return self.on_finish();
        }

        TickOutcome::Counted {
            remaining_seconds: self.state.remaining_seconds,
        }
    }

    /// Stores a new duration for `mode`, clamped to at least one minute.
    ///
    /// If `mode` is the active mode the timer is reset so the new duration
    /// applies immediately.
    pub fn update_setting(&mut self, mode: Mode, minutes: u32) {
        let stored = self.settings.set_minutes(mode, minutes);
        if stored != minutes {
            debug!("Clamped {} minutes for {} to {}", minutes, mode, stored);
        }

        if let Err(e) = self.store.save(&self.settings) {
            warn!("Failed to save settings: {}", e);
        }

        if mode == self.state.mode {
            self.reset();
        }
    }

    /// Waits until the tick schedule fires.
    ///
    /// Never resolves while the engine is idle. The caller is expected to
    /// call [`TimerEngine::tick`] when this returns.
    pub async fn next_tick(&mut self) {
        self.ticker.wait().await;
    }

    /// Handles the end of an interval.
    fn on_finish(&mut self) -> TickOutcome {
        let finished = self.state.mode;
        self.pause();

        if let Err(e) = self.alerts.play_tone() {
            log_alert_failure("Finish tone", &e);
        }
        if let Err(e) = self
            .alerts
            .notify(NOTIFICATION_TITLE, finished.finish_message())
        {
            log_alert_failure("Finish notification", &e);
        }

        if finished == Mode::Pomodoro {
            self.sessions = self.sessions.saturating_add(1);
            if let Err(e) = self.store.save_session_count(self.sessions) {
                warn!("Failed to save session count: {}", e);
            }
            self.display.render_completed_count(self.sessions);
            info!("Pomodoro finished, {} completed", self.sessions);
            self.set_mode(Mode::ShortBreak);
        } else {
            info!("{} finished", finished.label());
            self.set_mode(Mode::Pomodoro);
        }

        TickOutcome::Finished { mode: finished }
    }

    fn render_time(&mut self) {
        let time = self.state.formatted();
        self.display.render_time(&time);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Returns true while a tick schedule is active.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Number of completed pomodoros.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Remaining time as `mm:ss`.
    pub fn formatted_time(&self) -> String {
        self.state.formatted()
    }

    pub fn tick_period(&self) -> Duration {
        self.ticker.period()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

/// Logs an absorbed alert failure; disabled channels are not worth a warning.
fn log_alert_failure(what: &str, error: &AlertError) {
    if error.is_disabled() {
        debug!("{} skipped: {}", what, error);
    } else {
        warn!("{} failed: {} ({})", what, error, error.suggestion());
    }
}

// ============================================================================
// Tests
// ============================================================================
