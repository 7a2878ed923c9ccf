//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Interval modes (pomodoro, short break, long break)
//! - Duration settings with clamping rules
//! - Timer state snapshots
//! - Time conversion and `mm:ss` formatting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Mode
// ============================================================================

/// One of the three configured interval types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Focused work interval
    #[serde(rename = "pomodoro")]
    Pomodoro,
    /// Short break after a pomodoro
    #[serde(rename = "short")]
    ShortBreak,
    /// Long break, only reachable by manual selection
    #[serde(rename = "long")]
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 3] = [Mode::Pomodoro, Mode::ShortBreak, Mode::LongBreak];

    /// Returns the storage key of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pomodoro => "pomodoro",
            Mode::ShortBreak => "short",
            Mode::LongBreak => "long",
        }
    }

    /// Returns a human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Pomodoro => "Pomodoro",
            Mode::ShortBreak => "Short break",
            Mode::LongBreak => "Long break",
        }
    }

    /// Returns true for either break mode.
    pub fn is_break(&self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }

    /// Message sent when an interval of this mode finishes.
    pub fn finish_message(&self) -> &'static str {
        match self {
            Mode::Pomodoro => "Pomodoro terminado",
            Mode::ShortBreak | Mode::LongBreak => "Descanso terminado",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Pomodoro
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pomodoro" | "pomo" | "work" => Ok(Mode::Pomodoro),
            "short" | "shortbreak" | "short_break" => Ok(Mode::ShortBreak),
            "long" | "longbreak" | "long_break" => Ok(Mode::LongBreak),
            other => Err(format!(
                "unknown mode '{}' (expected pomodoro, short or long)",
                other
            )),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Smallest accepted duration in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Configured interval durations in minutes.
///
/// Serialized with the keys `pomodoro`, `short` and `long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Pomodoro duration in minutes
    #[serde(rename = "pomodoro")]
    pub pomodoro_minutes: u32,
    /// Short break duration in minutes
    #[serde(rename = "short")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    #[serde(rename = "long")]
    pub long_break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

impl Settings {
    /// Returns the configured minutes for `mode`.
    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Pomodoro => self.pomodoro_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Returns the configured duration of `mode` in seconds.
    pub fn duration_of(&self, mode: Mode) -> u64 {
        minutes_to_duration(self.minutes(mode))
    }

    /// Stores `minutes` for `mode`, clamped to at least one minute.
    ///
    /// Returns the value actually stored.
    pub fn set_minutes(&mut self, mode: Mode, minutes: u32) -> u32 {
        let minutes = minutes.max(MIN_MINUTES);
        match mode {
            Mode::Pomodoro => self.pomodoro_minutes = minutes,
            Mode::ShortBreak => self.short_break_minutes = minutes,
            Mode::LongBreak => self.long_break_minutes = minutes,
        }
        minutes
    }

    /// Returns a copy with every field clamped to at least one minute.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        for mode in Mode::ALL {
            self.set_minutes(mode, self.minutes(mode));
        }
        self
    }

    /// Returns true if every field is at least one minute.
    pub fn is_valid(&self) -> bool {
        Mode::ALL.iter().all(|mode| self.minutes(*mode) >= MIN_MINUTES)
    }
}

/// Parses user-entered minutes for `mode`.
///
/// Only the leading integer is read, so `"1.5"` is one minute and
/// `"30min"` is thirty. Input without leading digits falls back to the
/// default for the mode. Zero and negative values clamp to one minute;
/// values too large for `u32` clamp to `u32::MAX`.
pub fn parse_minutes(input: &str, mode: Mode) -> u32 {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Settings::default().minutes(mode);
    }

    if negative {
        return MIN_MINUTES;
    }
    rest[..digits]
        .parse::<u32>()
        .map_or(u32::MAX, |value| value.max(MIN_MINUTES))
}

// ============================================================================
// Time Conversion
// ============================================================================

/// Converts whole minutes into seconds.
pub fn minutes_to_duration(minutes: u32) -> u64 {
    u64::from(minutes) * 60
}

/// Formats seconds as `mm:ss`, both fields zero padded to two digits.
pub fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

// ============================================================================
// TimerState
// ============================================================================

/// Snapshot of the countdown owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Active mode
    pub mode: Mode,
    /// Seconds left in the active interval
    pub remaining_seconds: u64,
    /// Whether the countdown is ticking
    pub running: bool,
}

impl TimerState {
    /// Creates an idle state for `mode` with the configured duration.
    pub fn new(mode: Mode, settings: &Settings) -> Self {
        Self {
            mode,
            remaining_seconds: settings.duration_of(mode),
            running: false,
        }
    }

    /// Returns the remaining time formatted as `mm:ss`.
    pub fn formatted(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
