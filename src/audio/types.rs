//! Audio-related small types and handles.
//!
//! This module defines the commands sent to the audio thread, the events it
//! reports back, the shared playback info handle and the error type.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Why the playback driver could not carry out a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("failed to open {path:?}: {reason}")]
    Open { path: PathBuf, reason: String },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("nothing is loaded")]
    NothingLoaded,
    #[error("audio thread is gone")]
    Disconnected,
}

/// Sequence number of a `load` request. Every event names the load it
/// belongs to, so reports about a replaced source can be told apart.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LoadId(pub u64);

/// Notifications emitted by a media driver, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The loaded file's duration is known (seconds).
    MetadataLoaded(f64),
    /// Playback position moved (seconds).
    TimeUpdate(f64),
    /// Playback reached the natural end of the file.
    Ended,
    /// A load or play request failed.
    Failed(MediaError),
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current source with the file at the given path (paused).
    Load { path: PathBuf, load: LoadId },
    /// Start or resume playback of the loaded source.
    Play,
    /// Pause playback, keeping the position.
    Pause,
    /// Move the playhead to an absolute position in seconds.
    Seek(f64),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone, Default)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Elapsed playback time for the loaded source (seconds).
    pub elapsed: f64,
    /// Duration of the loaded source, once known (seconds).
    pub duration: Option<f64>,
    /// Whether playback is currently active.
    pub playing: bool,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
