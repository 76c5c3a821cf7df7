//! Waveform strip: a fixed decorative amplitude curve painted against the
//! playhead of the selected track.
//!
//! The curve is generated once and does not depend on the audio content.

mod model;
mod widget;

pub use model::{Waveform, seek_time};
pub use widget::WaveformView;

#[cfg(test)]
mod tests;
