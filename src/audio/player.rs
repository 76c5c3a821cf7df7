use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;

use super::driver::MediaDriver;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, LoadId, MediaError, MediaEvent, PlaybackHandle, PlaybackInfo};

/// `rodio`-backed media driver running on its own thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<(LoadId, MediaEvent)>,
    playback: PlaybackHandle,
    last_load: LoadId,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<(LoadId, MediaEvent)>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, event_tx, playback_info.clone(), audio_settings);

        Self {
            tx,
            events: event_rx,
            playback: playback_info,
            last_load: LoadId::default(),
            join: Mutex::new(Some(audio_handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), MediaError> {
        self.tx.send(cmd).map_err(|_| MediaError::Disconnected)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaDriver for AudioPlayer {
    fn load(&mut self, src: &Path) -> Result<LoadId, MediaError> {
        let load = LoadId(self.last_load.0.wrapping_add(1));
        self.send(AudioCmd::Load {
            path: src.to_path_buf(),
            load,
        })?;
        self.last_load = load;
        Ok(load)
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) {
        if let Err(e) = self.send(AudioCmd::Pause) {
            log::warn!("pause: {e}");
        }
    }

    fn seek(&mut self, seconds: f64) {
        if let Err(e) = self.send(AudioCmd::Seek(seconds)) {
            log::warn!("seek: {e}");
        }
    }

    fn current_time(&self) -> f64 {
        self.playback.lock().map(|info| info.elapsed).unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.playback.lock().ok().and_then(|info| info.duration)
    }

    fn poll_event(&mut self) -> Option<(LoadId, MediaEvent)> {
        self.events.try_recv().ok()
    }
}
