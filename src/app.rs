//! Application module: the track list and the playback session around it.
//!
//! `TrackList` (in `app::model`) owns the ordered tracks, the selection and
//! the trim points. `Session` drives a `MediaDriver` from that state.

mod drag;
mod error;
mod model;
mod remap;
mod session;

pub use drag::DragState;
pub use error::TrackError;
pub use model::TrackList;
pub use remap::remap_selection;
pub use session::{PlaybackState, Session, TrackStatus};

#[cfg(test)]
mod tests;
