//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the Pomodoro timer.
//! It includes:
//! - Timer engine: mode transitions, countdown, session counting
//! - Settings store: persisted durations and completed-session count
//! - Display surface: terminal rendering of the countdown
//! - Alert channel: finish tone and desktop notifications
//! - CLI command parsing and the interactive session loop
//! - Type definitions for modes, settings and timer state
//!
//! The engine is an ordinary value owned by the caller; its collaborators
//! are passed in at construction:
//!
//! ```
//! use pomotimer::{MemoryStore, MockAlertChannel, RecordingDisplay, TimerEngine};
//!
//! let mut engine = TimerEngine::new(
//!     MemoryStore::new(),
//!     RecordingDisplay::new(),
//!     MockAlertChannel::new(),
//! );
//! engine.start();
//! engine.tick();
//! assert_eq!(engine.formatted_time(), "24:59");
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{format_time, minutes_to_duration, parse_minutes, Mode, Settings, TimerState};

pub use engine::{TickOutcome, TimerEngine};

pub use store::{FileStore, MemoryStore, SettingsStore, StoreError};

pub use display::{DisplayCall, DisplaySurface, RecordingDisplay, TerminalDisplay};

pub use alert::{AlertChannel, AlertError, MockAlertChannel, Permission, SystemAlerts};

pub use config::AppConfig;
