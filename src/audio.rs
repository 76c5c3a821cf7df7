//! Audio subsystem: the media driver seam and its `rodio` implementation.
//!
//! `MediaDriver` is what the playback session talks to; `AudioPlayer`
//! implements it with a dedicated audio thread that owns the output stream
//! and reports progress back as `MediaEvent`s.

mod clock;
mod driver;
mod player;
mod sink;
mod thread;
mod types;

pub use driver::MediaDriver;
pub use player::AudioPlayer;
pub use types::{LoadId, MediaError, MediaEvent};
