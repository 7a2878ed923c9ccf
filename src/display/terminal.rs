//! Terminal rendering of the timer.
//!
//! The countdown is redrawn in place on a single line; every other
//! message is written on its own line below it.

use std::io::{self, Write};

use tracing::debug;

use super::DisplaySurface;
use crate::types::Mode;

/// ANSI sequence that returns to column 0 and clears the line.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Display surface writing to a terminal (or any writer).
pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    focus: Option<Mode>,
    controls: (bool, bool),
    completed: u32,
    line_open: bool,
}

impl TerminalDisplay<io::Stdout> {
    /// Creates a display writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            focus: None,
            controls: (true, false),
            completed: 0,
            line_open: false,
        }
    }

    /// Writes a message on its own line, below the countdown.
    pub fn message(&mut self, text: &str) {
        let result = self.close_line().and_then(|()| {
            writeln!(self.out, "{}", text)?;
            self.out.flush()
        });
        Self::log_failure(result);
    }

    fn close_line(&mut self) -> io::Result<()> {
        if self.line_open {
            self.line_open = false;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn status_tag(&self) -> &'static str {
        match self.focus {
            Some(Mode::Pomodoro) => "  [focus]",
            Some(Mode::ShortBreak | Mode::LongBreak) => "  [break]",
            None => "",
        }
    }

    fn log_failure(result: io::Result<()>) {
        if let Err(e) = result {
            debug!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn render_time(&mut self, time: &str) {
        let tag = self.status_tag();
        let result = write!(
            self.out,
            "{}{}  (done: {}){}",
            CLEAR_LINE, time, self.completed, tag
        )
        .and_then(|()| self.out.flush());
        self.line_open = true;
        Self::log_failure(result);
    }

    fn render_completed_count(&mut self, count: u32) {
        self.completed = count;
        self.message(&format!("Completed pomodoros: {}", count));
    }

    fn set_controls_enabled(&mut self, start_enabled: bool, pause_enabled: bool) {
        if self.controls == (start_enabled, pause_enabled) {
            return;
        }
        self.controls = (start_enabled, pause_enabled);

        let mut hints = Vec::new();
        if start_enabled {
            hints.push("s = start");
        }
        if pause_enabled {
            hints.push("p = pause");
        }
        hints.push("r = reset");
        self.message(&format!("({})", hints.join(", ")));
    }

    fn enter_focus_visual(&mut self, mode: Mode) {
        self.focus = Some(mode);
        let heading = if mode.is_break() { "Break" } else { "Focus" };
        self.message(&format!(">> {}: {}", heading, mode.label()));
    }

    fn exit_focus_visual(&mut self) {
        if self.focus.take().is_some() {
            self.message("|| Paused");
        }
    }

    fn show_message(&mut self, text: &str) {
        self.message(text);
    }
}
