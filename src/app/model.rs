//! The track list: ordered tracks, the selected track and per-track trims.
//!
//! `TrackList` is the single owner of this state. Everything else reads it
//! and changes it only through the operations below.

use std::collections::HashMap;

use crate::config::IdMode;
use crate::library::{Track, TrackId, TrackSource};

use super::error::TrackError;
use super::remap::remap_selection;

#[derive(Debug, Clone, Default)]
pub struct TrackList {
    tracks: Vec<Track>,
    selected: Option<TrackId>,
    /// User "play until" points in seconds, keyed by track id.
    trims: HashMap<TrackId, f64>,
    id_mode: IdMode,
    next_id: u64,
}

/// Clamp `seconds` into `[0, max]`. Non-finite values count as 0.
fn clamp_seconds(seconds: f64, max: f64) -> f64 {
    let max = if !max.is_finite() || max < 0.0 { 0.0 } else { max };
    if !seconds.is_finite() {
        return 0.0;
    }
    seconds.clamp(0.0, max)
}

impl TrackList {
    pub fn new(id_mode: IdMode) -> Self {
        Self {
            id_mode,
            ..Self::default()
        }
    }

    pub fn id_mode(&self) -> IdMode {
        self.id_mode
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<TrackId> {
        self.selected
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected.and_then(|id| self.position_of(id))
    }

    pub fn trim_of(&self, id: TrackId) -> Option<f64> {
        self.trims.get(&id).copied()
    }

    /// Append `new_tracks` in arrival order.
    ///
    /// The first ingested track becomes selected when the list was empty.
    /// Records whose id is already present are dropped. In positional mode
    /// incoming ids are rewritten to the position the track lands at.
    pub fn ingest(&mut self, new_tracks: Vec<Track>) {
        let was_empty = self.tracks.is_empty();

        for mut track in new_tracks {
            match self.id_mode {
                IdMode::Positional => {
                    track.id = TrackId(self.tracks.len() as u64);
                }
                IdMode::Stable => {
                    if self.get(track.id).is_some() {
                        log::warn!("ignoring {:?}: id {} already in the list", track.name, track.id);
                        continue;
                    }
                    self.next_id = self.next_id.max(track.id.0.saturating_add(1));
                }
            }
            self.tracks.push(track);
        }

        if was_empty {
            if let Some(first) = self.tracks.first() {
                self.selected = Some(first.id);
            }
        }
    }

    /// Assign ids to freshly ingested sources and append them.
    pub fn ingest_sources(&mut self, sources: Vec<TrackSource>) -> Vec<TrackId> {
        let base = match self.id_mode {
            IdMode::Stable => self.next_id,
            IdMode::Positional => self.tracks.len() as u64,
        };
        let tracks: Vec<Track> = sources
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.into_track(TrackId(base.saturating_add(i as u64))))
            .collect();
        let ids = tracks.iter().map(|t| t.id).collect();
        self.ingest(tracks);
        ids
    }

    /// Make `id` the current track.
    pub fn select(&mut self, id: TrackId) -> Result<(), TrackError> {
        if self.get(id).is_none() {
            return Err(TrackError::NotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Move the track at `from` to `to` (remove, then insert).
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), TrackError> {
        let len = self.tracks.len();
        for position in [from, to] {
            if position >= len {
                return Err(TrackError::PositionOutOfRange { position, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);

        if self.id_mode == IdMode::Positional {
            for (i, t) in self.tracks.iter_mut().enumerate() {
                t.id = TrackId(i as u64);
            }
            // The selected id was the selected position before the move.
            self.selected = self
                .selected
                .map(|s| TrackId(remap_selection(s.0 as usize, from, to) as u64));
        }
        Ok(())
    }

    /// Store a trim for `id`, clamped into `[0, media_duration]`.
    /// Unknown ids are ignored.
    pub fn set_trim_end_time(&mut self, id: TrackId, seconds: f64, media_duration: f64) {
        if self.get(id).is_none() {
            log::debug!("set_trim_end_time: no track with id {id}");
            return;
        }
        self.trims.insert(id, clamp_seconds(seconds, media_duration));
    }

    /// Forget the trim for `id`, so the full duration plays again.
    pub fn clear_trim(&mut self, id: TrackId) {
        self.trims.remove(&id);
    }

    pub fn effective_end_time(&self, id: TrackId, media_duration: f64) -> f64 {
        self.trim_of(id).unwrap_or(media_duration)
    }

    /// Seed the trim with the full duration the first time it becomes known.
    pub fn on_metadata_loaded(&mut self, id: TrackId, media_duration: f64) {
        if self.get(id).is_none() {
            return;
        }
        self.trims
            .entry(id)
            .or_insert_with(|| clamp_seconds(media_duration, media_duration));
    }
}
