use std::f64::consts::PI;

/// Opacity of unplayed bars while paused (`0x50` out of `0xff`).
const PAUSED_UNPLAYED_ALPHA: f32 = 0x50 as f32 / 255.0;
/// Ceiling of the unplayed-bar opacity while playing, out of 255.
const PLAYING_UNPLAYED_SCALE: f32 = 50.0;

/// One bar of the strip for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left edge as a fraction of the strip width.
    pub x: f64,
    /// Height as a fraction of the strip height.
    pub height: f64,
    /// Left of the playhead.
    pub played: bool,
    /// How strongly to paint the bar, 0..=1.
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    points: Vec<f64>,
}

impl Waveform {
    /// The decorative curve `0.3 + 0.2·sin(4πx)` sampled at `points` steps.
    pub fn generate(points: usize) -> Self {
        let n = points.max(1);
        let points = (0..n)
            .map(|i| {
                let x = i as f64 / n as f64;
                0.3 + 0.2 * (x * PI * 4.0).sin()
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Playback progress in `0..=1`; 0 when the duration is unknown.
    pub fn progress(current_time: f64, duration: f64) -> f64 {
        if !(duration > 0.0) || !current_time.is_finite() {
            return 0.0;
        }
        (current_time / duration).clamp(0.0, 1.0)
    }

    /// Lay out every bar for one frame.
    pub fn bars(&self, current_time: f64, duration: f64, is_playing: bool) -> Vec<Bar> {
        let progress = Self::progress(current_time, duration);
        let n = self.points.len() as f64;

        self.points
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = i as f64 / n;
                let played = x < progress;
                let alpha = if played {
                    1.0
                } else if is_playing {
                    let near = (1.0 - (x - progress).abs()).max(0.3) as f32;
                    (near * PLAYING_UNPLAYED_SCALE).floor() / 255.0
                } else {
                    PAUSED_UNPLAYED_ALPHA
                };
                Bar {
                    x,
                    height: value,
                    played,
                    alpha,
                }
            })
            .collect()
    }
}

/// Translate a click `offset` along a strip of `width` into a seek time.
pub fn seek_time(offset: f64, width: f64, duration: f64) -> f64 {
    if !(width > 0.0) || !(duration > 0.0) {
        return 0.0;
    }
    (offset / width).clamp(0.0, 1.0) * duration
}
