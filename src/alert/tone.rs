//! Finish tone playback.
//!
//! With the `sound` feature the tone is a short sine wave played through
//! rodio; without it the terminal bell is rung instead. Either way playback
//! is detached and expires on its own.

use std::time::Duration;

use super::error::AlertError;

/// Frequency of the finish tone.
pub const TONE_FREQUENCY_HZ: f32 = 880.0;

/// Length of the finish tone.
pub const TONE_DURATION: Duration = Duration::from_millis(400);

/// Gain applied to the finish tone.
pub const TONE_VOLUME: f32 = 0.05;

#[cfg(feature = "sound")]
mod backend {
    use rodio::source::SineWave;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
    use tracing::debug;

    use super::{AlertError, TONE_DURATION, TONE_FREQUENCY_HZ, TONE_VOLUME};

    /// Plays the finish tone on the default audio output.
    pub struct TonePlayer {
        /// The audio output stream (must be kept alive for playback).
        _stream: OutputStream,
        stream_handle: OutputStreamHandle,
    }

    impl TonePlayer {
        /// Opens the default audio output.
        ///
        /// # Errors
        ///
        /// Returns `AlertError::AudioUnavailable` if no output device exists.
        pub fn new() -> Result<Self, AlertError> {
            let (stream, stream_handle) = OutputStream::try_default()
                .map_err(|e| AlertError::AudioUnavailable(e.to_string()))?;

            debug!("Audio output stream initialized");

            Ok(Self {
                _stream: stream,
                stream_handle,
            })
        }

        /// Starts the tone and returns immediately.
        ///
        /// # Errors
        ///
        /// Returns an error if no sink could be created on the stream.
        pub fn play(&self) -> Result<(), AlertError> {
            let sink = Sink::try_new(&self.stream_handle)
                .map_err(|e| AlertError::PlaybackFailed(e.to_string()))?;

            sink.append(
                SineWave::new(TONE_FREQUENCY_HZ)
                    .take_duration(TONE_DURATION)
                    .amplify(TONE_VOLUME),
            );
            sink.detach();
            Ok(())
        }
    }
}

#[cfg(not(feature = "sound"))]
mod backend {
    use std::io::Write;

    use super::AlertError;

    /// Rings the terminal bell in place of an audio tone.
    pub struct TonePlayer;

    impl TonePlayer {
        /// # Errors
        ///
        /// Never fails; the signature matches the audio backend.
        pub fn new() -> Result<Self, AlertError> {
            Ok(Self)
        }

        /// Writes the bell character to standard error.
        ///
        /// # Errors
        ///
        /// Returns an error if standard error cannot be written.
        pub fn play(&self) -> Result<(), AlertError> {
            let mut err = std::io::stderr();
            err.write_all(b"\x07")
                .and_then(|()| err.flush())
                .map_err(|e| AlertError::PlaybackFailed(e.to_string()))
        }
    }
}

pub use backend::TonePlayer;

impl std::fmt::Debug for TonePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TonePlayer")
            .field("frequency_hz", &TONE_FREQUENCY_HZ)
            .finish_non_exhaustive()
    }
}
