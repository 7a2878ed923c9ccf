//! Audible and desktop alerts for finished intervals.
//!
//! This module provides:
//!
//! - [`AlertChannel`]: the capability the engine uses to signal a finish
//! - [`SystemAlerts`]: the real channel (finish tone + desktop notification)
//! - [`MockAlertChannel`]: a recording fake for tests
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   TimerEngine    │
//! └────────┬─────────┘
//!          │ AlertChannel
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SystemAlerts   │────▶│    TonePlayer    │
//! │                  │     │ (rodio / bell)   │
//! │                  │     ├──────────────────┤
//! │                  │────▶│ DesktopNotifier  │
//! └──────────────────┘     │  (notify-rust)   │
//!                          └──────────────────┘
//! ```
//!
//! Every operation is best-effort. Failures come back as [`AlertError`]
//! and the engine only logs them.

mod desktop;
mod error;
mod tone;

pub use desktop::{DesktopNotifier, APP_NAME};
pub use error::AlertError;
pub use tone::{TonePlayer, TONE_DURATION, TONE_FREQUENCY_HZ, TONE_VOLUME};

/// Notification permission, as granted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Not requested yet
    #[default]
    Default,
    /// Notifications may be shown
    Granted,
    /// Notifications are unavailable
    Denied,
}

/// Notification and sound capability used by the timer engine.
pub trait AlertChannel {
    /// Plays the short finish tone.
    ///
    /// # Errors
    ///
    /// Returns an error if audio is unavailable or disabled.
    fn play_tone(&mut self) -> Result<(), AlertError>;

    /// Asks the platform for permission to show notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if permission cannot be obtained.
    fn request_permission(&mut self) -> Result<Permission, AlertError>;

    /// Shows a notification with `title` and `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification was not delivered.
    fn notify(&mut self, title: &str, message: &str) -> Result<(), AlertError>;
}

// ============================================================================
// SystemAlerts
// ============================================================================

/// Alert channel backed by the audio output and the desktop notifier.
///
/// The audio output is opened lazily on the first tone, so a session that
/// never finishes an interval never touches the audio device.
#[derive(Debug)]
pub struct SystemAlerts {
    sound_enabled: bool,
    tone: Option<TonePlayer>,
    notifier: Option<DesktopNotifier>,
}

impl SystemAlerts {
    /// Creates a channel with sound and notifications individually enabled.
    #[must_use]
    pub fn new(sound_enabled: bool, notifications_enabled: bool) -> Self {
        Self {
            sound_enabled,
            tone: None,
            notifier: notifications_enabled.then(DesktopNotifier::new),
        }
    }

    /// Creates a channel with everything switched off.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(false, false)
    }

    /// Returns true if the finish tone is enabled.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Returns true if desktop notifications are enabled.
    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        self.notifier.is_some()
    }
}

impl AlertChannel for SystemAlerts {
    fn play_tone(&mut self) -> Result<(), AlertError> {
        if !self.sound_enabled {
            return Err(AlertError::Disabled("sound"));
        }
        if self.tone.is_none() {
            self.tone = Some(TonePlayer::new()?);
        }
        match &self.tone {
            Some(player) => player.play(),
            None => Err(AlertError::AudioUnavailable("no output stream".to_string())),
        }
    }

    fn request_permission(&mut self) -> Result<Permission, AlertError> {
        match self.notifier.as_mut() {
            Some(notifier) => notifier.request_permission(),
            None => Err(AlertError::Disabled("notification")),
        }
    }

    fn notify(&mut self, title: &str, message: &str) -> Result<(), AlertError> {
        match self.notifier.as_ref() {
            Some(notifier) => notifier.notify(title, message),
            None => Err(AlertError::Disabled("notification")),
        }
    }
}

// ============================================================================
// MockAlertChannel
// ============================================================================

/// Recording alert channel for testing.
#[derive(Debug, Default)]
pub struct MockAlertChannel {
    tones: usize,
    permission_requests: usize,
    notifications: Vec<(String, String)>,
    fail_tone: bool,
    fail_notify: bool,
    deny_permission: bool,
}

impl MockAlertChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel on which every operation fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_tone: true,
            fail_notify: true,
            deny_permission: true,
            ..Self::default()
        }
    }

    pub fn set_fail_tone(&mut self, fail: bool) {
        self.fail_tone = fail;
    }

    pub fn set_fail_notify(&mut self, fail: bool) {
        self.fail_notify = fail;
    }

    /// Number of tones played successfully.
    #[must_use]
    pub fn tone_count(&self) -> usize {
        self.tones
    }

    /// Number of permission requests made.
    #[must_use]
    pub fn permission_requests(&self) -> usize {
        self.permission_requests
    }

    /// Notifications delivered successfully, as `(title, message)`.
    #[must_use]
    pub fn notifications(&self) -> &[(String, String)] {
        &self.notifications
    }

    pub fn clear(&mut self) {
        self.tones = 0;
        self.notifications.clear();
    }
}

impl AlertChannel for MockAlertChannel {
    fn play_tone(&mut self) -> Result<(), AlertError> {
        if self.fail_tone {
            return Err(AlertError::AudioUnavailable("mock failure".to_string()));
        }
        self.tones += 1;
        Ok(())
    }

    fn request_permission(&mut self) -> Result<Permission, AlertError> {
        self.permission_requests += 1;
        if self.deny_permission {
            return Err(AlertError::PermissionDenied);
        }
        Ok(Permission::Granted)
    }

    fn notify(&mut self, title: &str, message: &str) -> Result<(), AlertError> {
        if self.fail_notify {
            return Err(AlertError::SendFailed("mock failure".to_string()));
        }
        self.notifications
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}
