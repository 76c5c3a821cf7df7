use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;

use super::clock::PlayClock;
use super::sink::{create_sink_at, probe_duration};
use super::types::{AudioCmd, LoadId, MediaError, MediaEvent, PlaybackHandle};

struct ThreadState {
    stream: Result<OutputStream, String>,
    path: Option<PathBuf>,
    sink: Option<Sink>,
    clock: PlayClock,
    playback_info: PlaybackHandle,
    events: Sender<(LoadId, MediaEvent)>,
    /// Load the emitted events belong to.
    load: LoadId,
}

impl ThreadState {
    fn emit(&self, event: MediaEvent) {
        // The receiver only goes away during shutdown.
        let _ = self.events.send((self.load, event));
    }

    fn publish(&self) {
        if let Ok(mut info) = self.playback_info.lock() {
            info.elapsed = self.clock.elapsed().as_secs_f64();
            info.playing = self.clock.is_running();
        }
    }

    fn load(&mut self, path: PathBuf, load: LoadId) {
        self.load = load;
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.clock = PlayClock::default();

        match probe_duration(&path) {
            Ok(duration) => {
                log::debug!("loaded {} ({duration:.2}s)", path.display());
                if let Ok(mut info) = self.playback_info.lock() {
                    info.duration = Some(duration);
                }
                self.path = Some(path);
                self.publish();
                self.emit(MediaEvent::MetadataLoaded(duration));
            }
            Err(e) => {
                self.path = None;
                if let Ok(mut info) = self.playback_info.lock() {
                    info.duration = None;
                }
                self.publish();
                self.emit(MediaEvent::Failed(e));
            }
        }
    }

    fn play(&mut self) {
        let Some(path) = self.path.as_ref() else {
            self.emit(MediaEvent::Failed(MediaError::NothingLoaded));
            return;
        };
        let stream = match self.stream.as_ref() {
            Ok(s) => s,
            Err(msg) => {
                self.emit(MediaEvent::Failed(MediaError::NoOutputDevice(msg.clone())));
                return;
            }
        };

        if self.sink.is_none() {
            match create_sink_at(stream, path, self.clock.elapsed()) {
                Ok(s) => self.sink = Some(s),
                Err(e) => {
                    self.emit(MediaEvent::Failed(e));
                    return;
                }
            }
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        self.clock.start(Instant::now());
        self.publish();
    }

    fn pause(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.clock.pause(Instant::now());
        self.publish();
        self.emit(MediaEvent::TimeUpdate(self.clock.elapsed().as_secs_f64()));
    }

    fn seek(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let target = Duration::from_secs_f64(secs.max(0.0));
        self.clock.reset_to(target, Instant::now());

        // Scrubbing: rebuild the current sink and skip into the file.
        if let (Some(old), Some(path), Ok(stream)) =
            (self.sink.take(), self.path.as_ref(), self.stream.as_ref())
        {
            old.stop();
            match create_sink_at(stream, path, target) {
                Ok(new_sink) => {
                    if self.clock.is_running() {
                        new_sink.play();
                    }
                    self.sink = Some(new_sink);
                }
                Err(e) => {
                    self.clock.pause(Instant::now());
                    self.emit(MediaEvent::Failed(e));
                }
            }
        }

        self.publish();
        self.emit(MediaEvent::TimeUpdate(target.as_secs_f64()));
    }

    fn tick(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        let finished = self.sink.as_ref().map(Sink::empty).unwrap_or(true);
        if finished {
            self.clock.pause(Instant::now());
            if let Some(s) = self.sink.take() {
                s.stop();
            }
            self.publish();
            self.emit(MediaEvent::Ended);
        } else {
            self.publish();
            self.emit(MediaEvent::TimeUpdate(self.clock.elapsed().as_secs_f64()));
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            // Fade out gently before stopping.
            fade_out_sink(s, fade_out_ms);
            s.stop();
        }
        self.clock.pause(Instant::now());
        self.publish();
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    sink.set_volume(1.0);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(1.0 - t);
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<(LoadId, MediaEvent)>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut s) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                s.log_on_drop(false);
                Ok(s)
            }
            Err(e) => {
                log::error!("no audio output device: {e}");
                Err(e.to_string())
            }
        };

        let mut state = ThreadState {
            stream,
            path: None,
            sink: None,
            clock: PlayClock::default(),
            playback_info,
            events,
            load: LoadId::default(),
        };
        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));

        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load { path, load } => state.load(path, load),
                    AudioCmd::Play => state.play(),
                    AudioCmd::Pause => state.pause(),
                    AudioCmd::Seek(secs) => state.seek(secs),
                    AudioCmd::Quit { fade_out_ms } => {
                        state.quit(fade_out_ms);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => state.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
