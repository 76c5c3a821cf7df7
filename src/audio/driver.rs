use std::path::Path;

use super::types::{LoadId, MediaError, MediaEvent};

/// A playable media element: one source at a time, with a playhead.
///
/// Requests are fire-and-forget; outcomes (duration known, position moved,
/// end reached, failures) are reported through `poll_event`.
pub trait MediaDriver {
    /// Replace the current source. Playback is paused at position 0.
    /// Each call returns a fresh `LoadId`.
    fn load(&mut self, src: &Path) -> Result<LoadId, MediaError>;
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Move the playhead to `seconds`.
    fn seek(&mut self, seconds: f64);
    fn current_time(&self) -> f64;
    fn duration(&self) -> Option<f64>;
    /// Next pending event, if any, tagged with the load it belongs to.
    fn poll_event(&mut self) -> Option<(LoadId, MediaEvent)>;
}
