//! Cancelable one-second tick schedule.
//!
//! A [`Ticker`] is either armed or disarmed. While armed, [`Ticker::wait`]
//! resolves once per period; while disarmed it never resolves. The
//! underlying `tokio::time::Interval` is only created on the first wait, so
//! arming and disarming work outside of a runtime.

use std::future;

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick schedule owned by a single engine.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    armed: bool,
    interval: Option<Interval>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    /// Creates a disarmed ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: false,
            interval: None,
        }
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true while a schedule is active.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Activates the schedule.
    ///
    /// Returns false and changes nothing if it was already armed.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.interval = None;
        true
    }

    /// Cancels the schedule.
    ///
    /// Returns false if nothing was scheduled.
    pub fn disarm(&mut self) -> bool {
        self.interval = None;
        std::mem::replace(&mut self.armed, false)
    }

    /// Waits for the next tick.
    ///
    /// The first tick of a schedule fires one full period after the first
    /// wait. Missed ticks are skipped rather than delivered in a burst.
    /// Never resolves while disarmed.
    pub async fn wait(&mut self) {
        if !self.armed {
            return future::pending().await;
        }

        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;
    }
}
