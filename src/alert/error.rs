//! Alert channel error types.
//!
//! Every alert failure is recoverable: the engine logs it and carries on.

use thiserror::Error;

/// Errors that can occur while playing a tone or sending a notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlertError {
    /// No audio output device could be opened.
    #[error("audio device not available: {0}")]
    AudioUnavailable(String),

    /// The tone could not be played.
    #[error("tone playback failed: {0}")]
    PlaybackFailed(String),

    /// Notifications have not been permitted.
    #[error("notification permission not granted")]
    PermissionDenied,

    /// The notification service could not be reached.
    #[error("notification service unavailable: {0}")]
    NotificationUnavailable(String),

    /// The notification service rejected the notification.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// The channel was disabled by configuration.
    #[error("{0} alerts are disabled")]
    Disabled(&'static str),
}

impl AlertError {
    /// Returns true if this error concerns audio output.
    #[must_use]
    pub fn is_audio_error(&self) -> bool {
        matches!(self, Self::AudioUnavailable(_) | Self::PlaybackFailed(_))
    }

    /// Returns true if this error is related to notification permission.
    #[must_use]
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::NotificationUnavailable(_))
    }

    /// Returns true if the channel was switched off on purpose.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled(_))
    }

    /// Returns a short hint for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::AudioUnavailable(_) => "connect an audio device or run with --no-sound",
            Self::PlaybackFailed(_) => "check the system audio settings",
            Self::PermissionDenied | Self::NotificationUnavailable(_) => {
                "start a notification daemon or run with --no-notify"
            }
            Self::SendFailed(_) => "check the notification daemon logs",
            Self::Disabled(_) => "remove the --no-sound / --no-notify flag",
        }
    }
}
