use std::fmt;
use std::path::PathBuf;

use super::color::TrackColor;

/// Identifier of a track within the current list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One audio item on the arranger.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub src: PathBuf,
    pub color: TrackColor,
    /// Duration read from the file header at scan time, in seconds.
    pub duration: Option<f64>,
}

/// A playable item produced by ingestion, before it is assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSource {
    pub name: String,
    pub src: PathBuf,
    pub color: TrackColor,
    pub duration: Option<f64>,
}

impl TrackSource {
    pub fn into_track(self, id: TrackId) -> Track {
        Track {
            id,
            name: self.name,
            src: self.src,
            color: self.color,
            duration: self.duration,
        }
    }
}
