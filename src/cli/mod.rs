//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Line commands accepted during a session
//! - `session`: The interactive loop hosting the engine

pub mod commands;
pub mod input;
pub mod session;

pub use commands::{Cli, Commands};
pub use input::SessionCommand;
pub use session::{apply, run_session, settings_text, Flow};
