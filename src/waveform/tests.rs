use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::*;
use crate::library::TrackColor;

#[test]
fn generate_is_deterministic_and_in_range() {
    let a = Waveform::generate(100);
    let b = Waveform::generate(100);
    assert_eq!(a, b);
    assert_eq!(a.len(), 100);
    assert!(a.points().iter().all(|&v| (0.1..=0.5).contains(&v)));
    assert!((a.points()[0] - 0.3).abs() < 1e-12);
    // Quarter of a period at x = 1/8.
    let w = Waveform::generate(8);
    assert!((w.points()[1] - 0.5).abs() < 1e-12);
}

#[test]
fn progress_is_zero_without_a_duration() {
    assert_eq!(Waveform::progress(10.0, 0.0), 0.0);
    assert_eq!(Waveform::progress(10.0, f64::NAN), 0.0);
    assert_eq!(Waveform::progress(30.0, 120.0), 0.25);
    assert_eq!(Waveform::progress(500.0, 120.0), 1.0);
}

#[test]
fn bars_mark_played_region_and_fade_the_rest() {
    let w = Waveform::generate(4);
    let bars = w.bars(60.0, 120.0, false);
    assert_eq!(bars.iter().map(|b| b.played).collect::<Vec<_>>(), vec![true, true, false, false]);
    assert_eq!(bars[0].alpha, 1.0);
    assert_eq!(bars[2].alpha, 80.0 / 255.0);

    let playing = w.bars(60.0, 120.0, true);
    // x = 0.5 sits on the playhead: full-strength tail, 50/255.
    assert_eq!(playing[2].alpha, 50.0 / 255.0);
    // x = 0.75 is a quarter away: floor(0.75 * 50) = 37.
    assert_eq!(playing[3].alpha, 37.0 / 255.0);
}

#[test]
fn bars_fade_floor_is_thirty_percent() {
    let w = Waveform::generate(10);
    let bars = w.bars(0.0, 100.0, true);
    // Far from the playhead the opacity bottoms out at floor(0.3 * 50) / 255.
    assert_eq!(bars[9].alpha, 15.0 / 255.0);
    assert!(bars.iter().all(|b| !b.played));
}

#[test]
fn seek_time_maps_offset_to_duration() {
    assert_eq!(seek_time(200.0, 800.0, 120.0), 30.0);
    assert_eq!(seek_time(-5.0, 800.0, 120.0), 0.0);
    assert_eq!(seek_time(900.0, 800.0, 120.0), 120.0);
    assert_eq!(seek_time(10.0, 0.0, 120.0), 0.0);
    assert_eq!(seek_time(10.0, 80.0, 0.0), 0.0);
}

#[test]
fn view_paints_every_column_in_the_track_colour() {
    let w = Waveform::generate(10);
    let area = Rect::new(0, 0, 20, 2);
    let mut buf = Buffer::empty(area);
    let color = TrackColor::rgb(250, 200, 200);
    WaveformView {
        waveform: &w,
        current_time: 50.0,
        duration: 100.0,
        is_playing: true,
        color,
        background: TrackColor::rgb(0, 0, 0),
    }
    .render(area, &mut buf);

    // Bottom row is always at least partly filled (every value >= 0.1).
    for x in 0..20u16 {
        assert_ne!(buf[(x, 1)].symbol(), " ", "column {x}");
    }
    // Played columns keep the full colour.
    assert_eq!(buf[(0, 1)].fg, ratatui::style::Color::Rgb(250, 200, 200));
}
