//! File ingestion: turns audio files on disk into track records.
//!
//! `collect` walks the provided paths and produces `TrackSource` values
//! (name, source path, colour, duration hint) that the track list turns
//! into `Track`s.

mod color;
mod display;
mod model;
mod scan;

pub use color::TrackColor;
pub use model::{Track, TrackId, TrackSource};
pub use scan::collect;
