//! Timer engine module.
//!
//! - `timer`: the Pomodoro state machine and its collaborator wiring
//! - `ticker`: the cancelable one-second tick schedule it owns

pub mod ticker;
pub mod timer;

pub use ticker::{Ticker, TICK_PERIOD};
pub use timer::{TickOutcome, TimerEngine, NOTIFICATION_TITLE};
