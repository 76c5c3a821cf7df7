//! Playback session: glues the track list to a media driver.
//!
//! The session decides what a click on a card means (select + play, or
//! toggle), forwards seeks, and enforces trim points when the driver reports
//! progress. It is the only writer of the track list at runtime.

use crate::audio::{LoadId, MediaDriver, MediaEvent};
use crate::library::{TrackId, TrackSource};

use super::error::TrackError;
use super::model::TrackList;

/// Playback state of the selected track.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded into the driver.
    #[default]
    Idle,
    /// Source handed to the driver, duration not known yet.
    Loading,
    Ready,
    Playing,
    Paused,
}

/// How one card relates to playback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackStatus {
    Unselected,
    Selected(PlaybackState),
}

pub struct Session<D: MediaDriver> {
    tracks: TrackList,
    driver: D,
    state: PlaybackState,
    /// Track whose source is in the driver.
    loaded: Option<TrackId>,
    /// Driver load whose events are current; anything else is stale.
    load_id: Option<LoadId>,
    /// Play was asked for before the duration arrived.
    play_requested: bool,
    /// Stopped on a trim point; ignore position reports until the next seek or play.
    pinned: bool,
    current_time: f64,
    duration: f64,
}

impl<D: MediaDriver> Session<D> {
    pub fn new(tracks: TrackList, driver: D) -> Self {
        Self {
            tracks,
            driver,
            state: PlaybackState::Idle,
            loaded: None,
            load_id: None,
            play_requested: false,
            pinned: false,
            current_time: 0.0,
            duration: 0.0,
        }
    }

    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[cfg(test)]
    pub(crate) fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Duration of the loaded source, 0 until known.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn track_status(&self, id: TrackId) -> TrackStatus {
        if self.tracks.selected() == Some(id) {
            TrackStatus::Selected(self.state)
        } else {
            TrackStatus::Unselected
        }
    }

    /// Best known full length of `id`: the driver's once loaded, else the scan hint.
    fn media_duration_for(&self, id: TrackId) -> Option<f64> {
        if self.loaded == Some(id) {
            if self.duration > 0.0 {
                return Some(self.duration);
            }
            if let Some(d) = self.driver.duration() {
                return Some(d);
            }
        }
        self.tracks.get(id).and_then(|t| t.duration)
    }

    /// The end time shown on a card: trim, else full length, else 0.
    pub fn end_time_for(&self, id: TrackId) -> f64 {
        self.tracks
            .trim_of(id)
            .or_else(|| self.media_duration_for(id))
            .unwrap_or(0.0)
    }

    /// Add newly ingested sources. Loads the first one if the list was empty.
    pub fn ingest_sources(&mut self, sources: Vec<TrackSource>) -> Vec<TrackId> {
        let before = self.tracks.selected();
        let ids = self.tracks.ingest_sources(sources);
        if self.tracks.selected() != before {
            self.load_selected(false);
        }
        ids
    }

    fn load_selected(&mut self, play: bool) {
        let Some(track) = self.tracks.selected_track() else {
            return;
        };
        let (id, src) = (track.id, track.src.clone());

        self.loaded = Some(id);
        self.current_time = 0.0;
        self.duration = 0.0;
        self.pinned = false;
        self.play_requested = false;
        self.state = PlaybackState::Loading;

        match self.driver.load(&src) {
            Ok(load) => self.load_id = Some(load),
            Err(e) => {
                log::warn!("failed to load {}: {e}", src.display());
                self.load_id = None;
                self.state = PlaybackState::Idle;
                return;
            }
        }
        log::debug!("loading {} ({id})", src.display());
        if play {
            self.request_play();
        }
    }

    fn request_play(&mut self) {
        match self.driver.play() {
            Ok(()) => {
                self.pinned = false;
                if self.state == PlaybackState::Loading {
                    self.play_requested = true;
                } else {
                    self.state = PlaybackState::Playing;
                }
            }
            Err(e) => log::warn!("play request rejected: {e}"),
        }
    }

    /// The play button on a card: toggles the selected track, otherwise
    /// switches to `id` and starts it.
    pub fn activate(&mut self, id: TrackId) -> Result<(), TrackError> {
        if self.tracks.selected() == Some(id) && self.loaded == Some(id) {
            self.toggle_play_pause();
            return Ok(());
        }
        if let Err(e) = self.tracks.select(id) {
            log::warn!("activate: {e}");
            return Err(e);
        }
        self.load_selected(true);
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Loading => {
                if self.play_requested {
                    self.play_requested = false;
                    self.driver.pause();
                } else {
                    self.request_play();
                }
            }
            _ => self.play(),
        }
    }

    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle => self.load_selected(true),
            PlaybackState::Ready | PlaybackState::Paused => {
                if let Some(id) = self.loaded {
                    let end = self.tracks.effective_end_time(id, self.duration);
                    // Parked on the trim point: start over instead of stopping again at once.
                    if self.duration > 0.0 && self.current_time >= end {
                        self.seek(0.0);
                    }
                }
                self.request_play();
            }
            PlaybackState::Loading => {
                if !self.play_requested {
                    self.request_play();
                }
            }
            PlaybackState::Playing => {}
        }
    }

    pub fn pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.driver.pause();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Loading if self.play_requested => {
                self.driver.pause();
                self.play_requested = false;
            }
            _ => {}
        }
    }

    /// Move the playhead of the loaded track, clamped into `[0, duration]`.
    pub fn seek(&mut self, seconds: f64) {
        if self.loaded.is_none() || seconds.is_nan() {
            return;
        }
        let t = seconds.clamp(0.0, self.duration.max(0.0));
        self.pinned = false;
        self.driver.seek(t);
        self.current_time = t;
    }

    /// Seek to a fraction (0..=1) of the loaded track.
    pub fn seek_fraction(&mut self, fraction: f64) {
        self.seek(fraction.clamp(0.0, 1.0) * self.duration);
    }

    /// Seek relative to the current position.
    pub fn scrub(&mut self, delta: f64) {
        self.seek(self.current_time + delta);
    }

    /// Move a card. The loaded track stays loaded whatever its new id.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), TrackError> {
        self.tracks.reorder(from, to)?;
        if self.loaded.is_some() {
            self.loaded = self.tracks.selected();
        }
        Ok(())
    }

    /// Set the trim point of the selected track.
    pub fn set_trim(&mut self, seconds: f64) {
        let Some(id) = self.tracks.selected() else {
            return;
        };
        match self.media_duration_for(id) {
            Some(d) => self.tracks.set_trim_end_time(id, seconds, d),
            None => log::debug!("set_trim: duration of {id} not known yet"),
        }
    }

    pub fn nudge_trim(&mut self, delta: f64) {
        if let Some(id) = self.tracks.selected() {
            self.set_trim(self.end_time_for(id) + delta);
        }
    }

    pub fn trim_at_playhead(&mut self) {
        if self.loaded.is_some() && self.loaded == self.tracks.selected() {
            self.set_trim(self.current_time);
        }
    }

    /// Drop the trim of the selected track back to its full length.
    pub fn reset_trim(&mut self) {
        let Some(id) = self.tracks.selected() else {
            return;
        };
        self.tracks.clear_trim(id);
        if let Some(d) = self.media_duration_for(id) {
            self.tracks.on_metadata_loaded(id, d);
        }
    }

    pub fn handle_event(&mut self, event: MediaEvent) {
        let Some(id) = self.loaded else {
            return;
        };
        match event {
            MediaEvent::MetadataLoaded(d) => {
                self.duration = if d.is_finite() && d > 0.0 { d } else { 0.0 };
                self.tracks.on_metadata_loaded(id, self.duration);
                if self.state == PlaybackState::Loading {
                    self.state = if self.play_requested {
                        PlaybackState::Playing
                    } else {
                        PlaybackState::Ready
                    };
                }
                self.play_requested = false;
            }
            MediaEvent::TimeUpdate(t) => {
                if self.pinned || t.is_nan() {
                    return;
                }
                let end = self.tracks.effective_end_time(id, self.duration);
                if self.state == PlaybackState::Playing && self.duration > 0.0 && t >= end {
                    self.driver.pause();
                    self.driver.seek(end);
                    self.state = PlaybackState::Paused;
                    self.current_time = end;
                    self.pinned = true;
                    log::debug!("{id} reached its end point at {end:.2}s");
                } else {
                    self.current_time = t;
                }
            }
            MediaEvent::Ended => {
                if self.state == PlaybackState::Playing {
                    self.state = PlaybackState::Paused;
                }
                self.current_time = self.driver.current_time();
            }
            MediaEvent::Failed(e) => {
                log::warn!("playback failed for {id}: {e}");
                self.play_requested = false;
                self.state = match self.state {
                    PlaybackState::Loading => PlaybackState::Idle,
                    PlaybackState::Playing => PlaybackState::Paused,
                    other => other,
                };
            }
        }
    }

    /// Apply every event the driver has queued for the current load.
    /// Reports about a source that has since been replaced are dropped.
    pub fn pump(&mut self) {
        while let Some((load, event)) = self.driver.poll_event() {
            if self.load_id != Some(load) {
                log::debug!("dropping {event:?} from replaced load {}", load.0);
                continue;
            }
            self.handle_event(event);
        }
    }
}
