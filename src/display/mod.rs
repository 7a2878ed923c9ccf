//! Presentation surface for the timer engine.
//!
//! The engine pushes every visible change through [`DisplaySurface`]:
//! the countdown text, the completed-session count, which controls are
//! usable, and whether the in-progress visual is shown.

mod terminal;

pub use terminal::TerminalDisplay;

use crate::types::Mode;

/// Presentation collaborator driven by the engine.
pub trait DisplaySurface {
    /// Shows the remaining time, already formatted as `mm:ss`.
    fn render_time(&mut self, time: &str);

    /// Shows the number of completed pomodoros.
    fn render_completed_count(&mut self, count: u32);

    /// Enables or disables the start and pause controls.
    fn set_controls_enabled(&mut self, start_enabled: bool, pause_enabled: bool);

    /// Switches to the in-progress visual for `mode`.
    fn enter_focus_visual(&mut self, mode: Mode);

    /// Leaves the in-progress visual.
    fn exit_focus_visual(&mut self);

    /// Shows a free-form line of text, such as command help.
    fn show_message(&mut self, _text: &str) {}
}

/// A single call made on a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Time(String),
    CompletedCount(u32),
    Controls { start: bool, pause: bool },
    EnterFocus(Mode),
    ExitFocus,
    Message(String),
}

/// Display that records every call, for tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in the order they were made.
    #[must_use]
    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    /// The most recently rendered time, if any.
    #[must_use]
    pub fn last_time(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Time(time) => Some(time.as_str()),
            _ => None,
        })
    }

    /// The most recently rendered completed count, if any.
    #[must_use]
    pub fn last_completed_count(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::CompletedCount(count) => Some(*count),
            _ => None,
        })
    }

    /// The most recent control state as `(start, pause)`.
    #[must_use]
    pub fn last_controls(&self) -> Option<(bool, bool)> {
        self.calls.iter().rev().find_map(|call| match call {
            DisplayCall::Controls { start, pause } => Some((*start, *pause)),
            _ => None,
        })
    }

    /// Returns true if the in-progress visual is currently shown.
    #[must_use]
    pub fn in_focus_visual(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                DisplayCall::EnterFocus(_) => Some(true),
                DisplayCall::ExitFocus => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// All free-form messages shown so far.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DisplaySurface for RecordingDisplay {
    fn render_time(&mut self, time: &str) {
        self.calls.push(DisplayCall::Time(time.to_string()));
    }

    fn render_completed_count(&mut self, count: u32) {
        self.calls.push(DisplayCall::CompletedCount(count));
    }

    fn set_controls_enabled(&mut self, start_enabled: bool, pause_enabled: bool) {
        self.calls.push(DisplayCall::Controls {
            start: start_enabled,
            pause: pause_enabled,
        });
    }

    fn enter_focus_visual(&mut self, mode: Mode) {
        self.calls.push(DisplayCall::EnterFocus(mode));
    }

    fn exit_focus_visual(&mut self) {
        self.calls.push(DisplayCall::ExitFocus);
    }

    fn show_message(&mut self, text: &str) {
        self.calls.push(DisplayCall::Message(text.to_string()));
    }
}
