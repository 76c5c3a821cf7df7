use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::*;
use crate::audio::{LoadId, MediaDriver, MediaError, MediaEvent};
use crate::config::IdMode;
use crate::library::{Track, TrackColor, TrackId, TrackSource};

fn src(name: &str) -> TrackSource {
    TrackSource {
        name: name.into(),
        src: PathBuf::from(format!("/music/{name}.wav")),
        color: TrackColor::rgb(200, 200, 200),
        duration: None,
    }
}

fn track(id: u64, name: &str) -> Track {
    src(name).into_track(TrackId(id))
}

fn list(mode: IdMode, names: &[&str]) -> TrackList {
    let mut l = TrackList::new(mode);
    l.ingest_sources(names.iter().map(|n| src(n)).collect());
    l
}

fn names(l: &TrackList) -> Vec<&str> {
    l.tracks().iter().map(|t| t.name.as_str()).collect()
}

fn ids(l: &TrackList) -> Vec<u64> {
    l.tracks().iter().map(|t| t.id.0).collect()
}

fn id_of(l: &TrackList, name: &str) -> TrackId {
    l.tracks().iter().find(|t| t.name == name).unwrap().id
}

// ---------------------------------------------------------------------------
// TrackList

#[test]
fn reorder_uses_splice_semantics() {
    let mut l = list(IdMode::Stable, &["A", "B", "C", "D"]);
    l.reorder(0, 2).unwrap();
    assert_eq!(names(&l), vec!["B", "C", "A", "D"]);

    let mut l = list(IdMode::Stable, &["T0", "T1", "T2", "T3"]);
    l.reorder(2, 0).unwrap();
    assert_eq!(names(&l), vec!["T2", "T0", "T1", "T3"]);
}

#[test]
fn reorder_preserves_the_set_of_tracks() {
    for mode in [IdMode::Stable, IdMode::Positional] {
        for from in 0..4 {
            for to in 0..4 {
                let mut l = list(mode, &["A", "B", "C", "D"]);
                l.reorder(from, to).unwrap();
                let mut n = names(&l);
                n.sort_unstable();
                assert_eq!(n, vec!["A", "B", "C", "D"]);
                let mut i = ids(&l);
                i.sort_unstable();
                i.dedup();
                assert_eq!(i.len(), 4, "{mode:?} {from}->{to}");
            }
        }
    }
}

#[test]
fn reorder_rejects_out_of_range_positions() {
    let mut l = list(IdMode::Stable, &["A", "B"]);
    assert_eq!(
        l.reorder(2, 0),
        Err(TrackError::PositionOutOfRange { position: 2, len: 2 })
    );
    assert_eq!(
        l.reorder(0, 5),
        Err(TrackError::PositionOutOfRange { position: 5, len: 2 })
    );
    assert_eq!(names(&l), vec!["A", "B"]);

    let mut empty = TrackList::new(IdMode::Stable);
    assert!(empty.reorder(0, 0).is_err());
}

#[test]
fn stable_ids_keep_selection_and_trims_on_the_same_track() {
    let mut l = list(IdMode::Stable, &["A", "B", "C", "D"]);
    let b = id_of(&l, "B");
    l.select(b).unwrap();
    l.set_trim_end_time(b, 42.0, 120.0);

    l.reorder(1, 3).unwrap();
    assert_eq!(names(&l), vec!["A", "C", "D", "B"]);
    assert_eq!(l.selected(), Some(b));
    assert_eq!(l.selected_position(), Some(3));
    assert_eq!(l.selected_track().unwrap().name, "B");
    assert_eq!(l.trim_of(b), Some(42.0));
    assert_eq!(ids(&l), vec![0, 2, 3, 1]);
}

#[test]
fn positional_ids_follow_positions_and_remap_selection() {
    let mut l = list(IdMode::Positional, &["A", "B", "C", "D"]);
    l.select(TrackId(1)).unwrap();

    l.reorder(1, 3).unwrap();
    assert_eq!(names(&l), vec!["A", "C", "D", "B"]);
    assert_eq!(ids(&l), vec![0, 1, 2, 3]);
    assert_eq!(l.selected(), Some(TrackId(3)));
    assert_eq!(l.selected_track().unwrap().name, "B");
}

#[test]
fn positional_reorder_covers_every_remap_branch() {
    // selected is the moved track
    let mut l = list(IdMode::Positional, &["A", "B", "C", "D"]);
    l.select(TrackId(2)).unwrap();
    l.reorder(2, 0).unwrap();
    assert_eq!(l.selected_track().unwrap().name, "C");
    assert_eq!(l.selected(), Some(TrackId(0)));

    // moved from before the selection to at/after it
    let mut l = list(IdMode::Positional, &["A", "B", "C", "D"]);
    l.select(TrackId(2)).unwrap();
    l.reorder(0, 3).unwrap();
    assert_eq!(l.selected_track().unwrap().name, "C");
    assert_eq!(l.selected(), Some(TrackId(1)));

    // moved from after the selection to at/before it
    let mut l = list(IdMode::Positional, &["A", "B", "C", "D"]);
    l.select(TrackId(1)).unwrap();
    l.reorder(3, 1).unwrap();
    assert_eq!(l.selected_track().unwrap().name, "B");
    assert_eq!(l.selected(), Some(TrackId(2)));

    // unrelated move
    let mut l = list(IdMode::Positional, &["A", "B", "C", "D"]);
    l.select(TrackId(0)).unwrap();
    l.reorder(3, 1).unwrap();
    assert_eq!(l.selected_track().unwrap().name, "A");
    assert_eq!(l.selected(), Some(TrackId(0)));
}

#[test]
fn positional_ids_leave_trims_on_the_position() {
    let mut l = list(IdMode::Positional, &["A", "B", "C"]);
    l.set_trim_end_time(TrackId(0), 10.0, 60.0);
    l.reorder(0, 2).unwrap();

    // The trim stays keyed by id 0, which is now "B".
    assert_eq!(l.get(TrackId(0)).unwrap().name, "B");
    assert_eq!(l.trim_of(TrackId(0)), Some(10.0));
    assert_eq!(l.trim_of(TrackId(2)), None);
}

#[test]
fn remap_selection_four_cases() {
    // s == d
    assert_eq!(remap_selection(1, 1, 3), 3);
    // d < s <= t
    assert_eq!(remap_selection(2, 1, 3), 1);
    assert_eq!(remap_selection(3, 1, 3), 2);
    // t <= s < d
    assert_eq!(remap_selection(1, 3, 1), 2);
    assert_eq!(remap_selection(2, 3, 1), 3);
    // otherwise unchanged
    assert_eq!(remap_selection(0, 3, 1), 0);
    assert_eq!(remap_selection(3, 0, 2), 3);
}

#[test]
fn remap_selection_agrees_with_an_actual_splice() {
    for from in 0..5 {
        for to in 0..5 {
            for sel in 0..5 {
                let mut v: Vec<usize> = (0..5).collect();
                let x = v.remove(from);
                v.insert(to, x);
                let expected = v.iter().position(|&e| e == sel).unwrap();
                assert_eq!(remap_selection(sel, from, to), expected, "{sel} {from}->{to}");
            }
        }
    }
}

#[test]
fn trim_is_clamped_into_the_media_duration() {
    let mut l = list(IdMode::Stable, &["A"]);
    let a = id_of(&l, "A");
    assert_eq!(l.effective_end_time(a, 120.0), 120.0);

    l.set_trim_end_time(a, -5.0, 120.0);
    assert_eq!(l.effective_end_time(a, 120.0), 0.0);

    l.set_trim_end_time(a, 500.0, 120.0);
    assert_eq!(l.effective_end_time(a, 120.0), 120.0);

    l.set_trim_end_time(a, 75.5, 120.0);
    assert_eq!(l.effective_end_time(a, 120.0), 75.5);

    l.set_trim_end_time(a, f64::NAN, 120.0);
    assert_eq!(l.trim_of(a), Some(0.0));
}

#[test]
fn non_finite_trim_inputs_count_as_zero() {
    let mut l = list(IdMode::Stable, &["A"]);
    let a = id_of(&l, "A");

    l.set_trim_end_time(a, f64::INFINITY, 120.0);
    assert_eq!(l.trim_of(a), Some(0.0));

    l.set_trim_end_time(a, f64::NEG_INFINITY, 120.0);
    assert_eq!(l.trim_of(a), Some(0.0));

    l.set_trim_end_time(a, 30.0, f64::INFINITY);
    assert_eq!(l.trim_of(a), Some(0.0));

    l.set_trim_end_time(a, f64::INFINITY, f64::INFINITY);
    assert_eq!(l.trim_of(a), Some(0.0));

    l.clear_trim(a);
    l.on_metadata_loaded(a, f64::INFINITY);
    assert_eq!(l.trim_of(a), Some(0.0));
}

#[test]
fn trim_for_unknown_id_is_ignored() {
    let mut l = list(IdMode::Stable, &["A"]);
    l.set_trim_end_time(TrackId(99), 10.0, 60.0);
    assert_eq!(l.trim_of(TrackId(99)), None);
    l.on_metadata_loaded(TrackId(99), 60.0);
    assert_eq!(l.trim_of(TrackId(99)), None);
}

#[test]
fn metadata_seeds_but_never_overwrites_a_trim() {
    let mut l = TrackList::new(IdMode::Stable);
    l.ingest(vec![track(1, "one"), track(2, "two")]);

    l.set_trim_end_time(TrackId(1), 30.0, 180.0);
    l.on_metadata_loaded(TrackId(1), 180.0);
    assert_eq!(l.trim_of(TrackId(1)), Some(30.0));

    l.on_metadata_loaded(TrackId(2), 95.0);
    assert_eq!(l.trim_of(TrackId(2)), Some(95.0));
    l.on_metadata_loaded(TrackId(2), 12.0);
    assert_eq!(l.trim_of(TrackId(2)), Some(95.0));

    l.clear_trim(TrackId(2));
    assert_eq!(l.effective_end_time(TrackId(2), 95.0), 95.0);
    assert_eq!(l.trim_of(TrackId(2)), None);
}

#[test]
fn select_is_idempotent_and_rejects_unknown_ids() {
    let mut l = list(IdMode::Stable, &["A", "B"]);
    let b = id_of(&l, "B");
    l.select(b).unwrap();
    let snapshot = (l.selected(), ids(&l));
    l.select(b).unwrap();
    assert_eq!((l.selected(), ids(&l)), snapshot);

    assert_eq!(l.select(TrackId(77)), Err(TrackError::NotFound(TrackId(77))));
    assert_eq!(l.selected(), Some(b));
}

#[test]
fn ingest_selects_first_track_only_when_empty() {
    let mut l = TrackList::new(IdMode::Stable);
    assert_eq!(l.selected(), None);
    l.ingest(vec![]);
    assert_eq!(l.selected(), None);

    l.ingest(vec![track(5, "five"), track(6, "six")]);
    assert_eq!(l.selected(), Some(TrackId(5)));

    l.ingest(vec![track(7, "seven")]);
    assert_eq!(l.selected(), Some(TrackId(5)));
    assert_eq!(names(&l), vec!["five", "six", "seven"]);
}

#[test]
fn ingest_drops_duplicate_ids() {
    let mut l = TrackList::new(IdMode::Stable);
    l.ingest(vec![track(1, "a"), track(1, "dupe"), track(2, "b")]);
    assert_eq!(names(&l), vec!["a", "b"]);

    // Fresh ids continue after the highest one seen.
    let new = l.ingest_sources(vec![src("c")]);
    assert_eq!(new, vec![TrackId(3)]);
}

#[test]
fn ingest_of_the_largest_id_does_not_overflow() {
    let mut l = TrackList::new(IdMode::Stable);
    l.ingest(vec![track(u64::MAX, "last")]);
    assert_eq!(ids(&l), vec![u64::MAX]);

    // The next generated id collides and is dropped rather than wrapping.
    let added = l.ingest_sources(vec![src("next")]);
    assert_eq!(added, vec![TrackId(u64::MAX)]);
    assert_eq!(names(&l), vec!["last"]);
}

#[test]
fn ingest_sources_assigns_ids_by_mode() {
    let mut stable = list(IdMode::Stable, &["A", "B"]);
    stable.reorder(0, 1).unwrap();
    let new = stable.ingest_sources(vec![src("C"), src("D")]);
    assert_eq!(new, vec![TrackId(2), TrackId(3)]);

    let mut positional = list(IdMode::Positional, &["A", "B"]);
    let new = positional.ingest_sources(vec![src("C")]);
    assert_eq!(new, vec![TrackId(2)]);
    assert_eq!(ids(&positional), vec![0, 1, 2]);
}

// ---------------------------------------------------------------------------
// DragState

#[test]
fn drag_reports_move_only_for_a_different_target() {
    let mut d = DragState::default();
    assert_eq!(d.finish(), None);

    d.start(2);
    d.over(2);
    assert_eq!(d.target(), None);
    d.over(0);
    assert_eq!(d.dragged(), Some(2));
    assert_eq!(d.target(), Some(0));
    d.over(2);
    assert_eq!(d.target(), Some(0));
    assert_eq!(d.finish(), Some((2, 0)));
    assert_eq!(d.dragged(), None);

    d.start(1);
    assert_eq!(d.finish(), None);
}

#[test]
fn drag_over_without_start_is_ignored() {
    let mut d = DragState::default();
    d.over(3);
    assert_eq!(d.target(), None);
    d.start(0);
    d.over(1);
    d.cancel();
    assert_eq!(d.finish(), None);
}

// ---------------------------------------------------------------------------
// Session

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Seek(f64),
}

#[derive(Default)]
struct FakeDriver {
    calls: Vec<Call>,
    events: VecDeque<(LoadId, MediaEvent)>,
    last_load: u64,
    time: f64,
    duration: Option<f64>,
    reject_play: bool,
}

impl MediaDriver for FakeDriver {
    fn load(&mut self, src: &Path) -> Result<LoadId, MediaError> {
        self.calls.push(Call::Load(src.to_path_buf()));
        self.last_load += 1;
        Ok(LoadId(self.last_load))
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.reject_play {
            return Err(MediaError::NoOutputDevice("test".into()));
        }
        self.calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.time = seconds;
        self.calls.push(Call::Seek(seconds));
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn poll_event(&mut self) -> Option<(LoadId, MediaEvent)> {
        self.events.pop_front()
    }
}

fn session(mode: IdMode, names: &[&str]) -> Session<FakeDriver> {
    let mut s = Session::new(TrackList::new(mode), FakeDriver::default());
    s.ingest_sources(names.iter().map(|n| src(n)).collect());
    s
}

fn path(name: &str) -> PathBuf {
    PathBuf::from(format!("/music/{name}.wav"))
}

/// Session with "A" playing, 120 s long.
fn playing_a() -> Session<FakeDriver> {
    let mut s = session(IdMode::Stable, &["A", "B"]);
    s.handle_event(MediaEvent::MetadataLoaded(120.0));
    s.play();
    assert_eq!(s.state(), PlaybackState::Playing);
    s
}

#[test]
fn ingest_loads_first_track_without_playing() {
    let mut s = session(IdMode::Stable, &["A", "B"]);
    assert_eq!(s.driver().calls, vec![Call::Load(path("A"))]);
    assert_eq!(s.state(), PlaybackState::Loading);

    s.handle_event(MediaEvent::MetadataLoaded(180.0));
    assert_eq!(s.state(), PlaybackState::Ready);
    assert_eq!(s.duration(), 180.0);
    let a = id_of(s.tracks(), "A");
    assert_eq!(s.tracks().trim_of(a), Some(180.0));

    // A second batch leaves the loaded track alone.
    s.ingest_sources(vec![src("C")]);
    assert_eq!(s.driver().calls.len(), 1);
}

#[test]
fn activate_other_track_selects_loads_and_plays() {
    let mut s = session(IdMode::Stable, &["A", "B"]);
    s.handle_event(MediaEvent::MetadataLoaded(120.0));
    let b = id_of(s.tracks(), "B");

    s.activate(b).unwrap();
    assert_eq!(s.tracks().selected(), Some(b));
    assert_eq!(s.state(), PlaybackState::Loading);
    assert_eq!(s.current_time(), 0.0);
    assert_eq!(
        s.driver().calls[1..].to_vec(),
        vec![Call::Load(path("B")), Call::Play]
    );

    s.handle_event(MediaEvent::MetadataLoaded(90.0));
    assert_eq!(s.state(), PlaybackState::Playing);
    assert_eq!(s.track_status(b), TrackStatus::Selected(PlaybackState::Playing));
    assert_eq!(s.track_status(id_of(s.tracks(), "A")), TrackStatus::Unselected);
}

#[test]
fn activate_selected_track_toggles_playback() {
    let mut s = playing_a();
    let a = id_of(s.tracks(), "A");
    let loads = |s: &Session<FakeDriver>| {
        s.driver()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Load(_)))
            .count()
    };

    s.activate(a).unwrap();
    assert_eq!(s.state(), PlaybackState::Paused);
    assert_eq!(s.driver().calls.last(), Some(&Call::Pause));

    s.activate(a).unwrap();
    assert_eq!(s.state(), PlaybackState::Playing);
    assert_eq!(loads(&s), 1);
}

#[test]
fn activate_unknown_track_is_not_found() {
    let mut s = playing_a();
    assert_eq!(
        s.activate(TrackId(42)),
        Err(TrackError::NotFound(TrackId(42)))
    );
    assert_eq!(s.state(), PlaybackState::Playing);
}

#[test]
fn time_updates_past_the_trim_pause_and_pin_at_the_boundary() {
    let mut s = playing_a();
    s.set_trim(30.0);

    s.handle_event(MediaEvent::TimeUpdate(29.5));
    assert_eq!(s.current_time(), 29.5);
    assert!(s.is_playing());

    s.handle_event(MediaEvent::TimeUpdate(30.2));
    assert_eq!(s.state(), PlaybackState::Paused);
    assert_eq!(s.current_time(), 30.0);
    assert!(s.driver().calls.ends_with(&[Call::Pause, Call::Seek(30.0)]));

    // Late reports from the driver do not move the pinned playhead.
    s.handle_event(MediaEvent::TimeUpdate(30.25));
    assert_eq!(s.current_time(), 30.0);
}

#[test]
fn playing_from_the_trim_point_starts_over() {
    let mut s = playing_a();
    s.set_trim(30.0);
    s.handle_event(MediaEvent::TimeUpdate(30.0));
    assert_eq!(s.state(), PlaybackState::Paused);

    s.toggle_play_pause();
    assert_eq!(s.state(), PlaybackState::Playing);
    assert_eq!(s.current_time(), 0.0);
    assert!(s.driver().calls.ends_with(&[Call::Seek(0.0), Call::Play]));
}

#[test]
fn trim_helpers_act_on_the_selected_track() {
    let mut s = playing_a();
    let a = id_of(s.tracks(), "A");

    s.nudge_trim(-20.0);
    assert_eq!(s.tracks().trim_of(a), Some(100.0));
    s.nudge_trim(500.0);
    assert_eq!(s.tracks().trim_of(a), Some(120.0));

    s.handle_event(MediaEvent::TimeUpdate(12.5));
    s.trim_at_playhead();
    assert_eq!(s.tracks().trim_of(a), Some(12.5));
    assert_eq!(s.end_time_for(a), 12.5);

    s.reset_trim();
    assert_eq!(s.tracks().trim_of(a), Some(120.0));
}

#[test]
fn end_time_uses_scan_hint_before_load() {
    let mut s = Session::new(TrackList::new(IdMode::Stable), FakeDriver::default());
    let mut with_hint = src("A");
    with_hint.duration = Some(64.0);
    s.ingest_sources(vec![with_hint, src("B")]);

    let a = id_of(s.tracks(), "A");
    let b = id_of(s.tracks(), "B");
    assert_eq!(s.end_time_for(a), 64.0);
    assert_eq!(s.end_time_for(b), 0.0);

    s.handle_event(MediaEvent::MetadataLoaded(63.5));
    assert_eq!(s.end_time_for(a), 63.5);
}

#[test]
fn seek_is_clamped_to_the_loaded_duration() {
    let mut s = playing_a();
    s.seek(500.0);
    assert_eq!(s.current_time(), 120.0);
    s.seek(-3.0);
    assert_eq!(s.current_time(), 0.0);
    s.seek_fraction(0.25);
    assert_eq!(s.current_time(), 30.0);
    s.scrub(5.0);
    assert_eq!(s.current_time(), 35.0);
    assert_eq!(s.driver().calls.last(), Some(&Call::Seek(35.0)));
}

#[test]
fn ended_pauses_playback() {
    let mut s = playing_a();
    s.handle_event(MediaEvent::Ended);
    assert_eq!(s.state(), PlaybackState::Paused);
}

#[test]
fn rejected_play_request_leaves_state_alone() {
    let mut s = session(IdMode::Stable, &["A"]);
    s.handle_event(MediaEvent::MetadataLoaded(10.0));
    // Swap in a driver that refuses to play.
    let mut refusing = Session::new(s.tracks().clone(), FakeDriver {
        reject_play: true,
        ..FakeDriver::default()
    });
    refusing.play();
    assert_eq!(refusing.state(), PlaybackState::Loading);
    refusing.handle_event(MediaEvent::MetadataLoaded(10.0));
    assert_eq!(refusing.state(), PlaybackState::Ready);
    refusing.play();
    assert_eq!(refusing.state(), PlaybackState::Ready);
}

#[test]
fn failure_events_degrade_to_paused_or_idle() {
    let mut s = playing_a();
    s.handle_event(MediaEvent::Failed(MediaError::NothingLoaded));
    assert_eq!(s.state(), PlaybackState::Paused);

    let mut s = session(IdMode::Stable, &["A"]);
    s.handle_event(MediaEvent::Failed(MediaError::Decode {
        path: path("A"),
        reason: "bad header".into(),
    }));
    assert_eq!(s.state(), PlaybackState::Idle);
}

#[test]
fn pump_applies_queued_driver_events_in_order() {
    let mut s = session(IdMode::Stable, &["A"]);
    s.play();
    let load = LoadId(s.driver().last_load);
    s.driver_mut().events.extend([
        (load, MediaEvent::MetadataLoaded(60.0)),
        (load, MediaEvent::TimeUpdate(1.5)),
        (load, MediaEvent::TimeUpdate(2.0)),
    ]);
    s.pump();
    assert_eq!(s.state(), PlaybackState::Playing);
    assert_eq!(s.duration(), 60.0);
    assert_eq!(s.current_time(), 2.0);
}

#[test]
fn pump_drops_events_from_a_replaced_source() {
    let mut s = session(IdMode::Stable, &["A", "B"]);
    let load_a = LoadId(s.driver().last_load);
    let b = id_of(s.tracks(), "B");

    // A's reports are still queued when B takes over.
    s.activate(b).unwrap();
    let load_b = LoadId(s.driver().last_load);
    assert_ne!(load_a, load_b);
    s.driver_mut().events.extend([
        (load_a, MediaEvent::MetadataLoaded(60.0)),
        (load_a, MediaEvent::TimeUpdate(59.0)),
        (load_b, MediaEvent::MetadataLoaded(180.0)),
        (load_a, MediaEvent::Failed(MediaError::NothingLoaded)),
        (load_b, MediaEvent::TimeUpdate(3.0)),
    ]);
    s.pump();

    assert_eq!(s.duration(), 180.0);
    assert_eq!(s.tracks().trim_of(b), Some(180.0));
    assert_eq!(s.end_time_for(b), 180.0);
    assert_eq!(s.state(), PlaybackState::Playing);
    assert_eq!(s.current_time(), 3.0);
    let a = id_of(s.tracks(), "A");
    assert_eq!(s.tracks().trim_of(a), None);
}

#[test]
fn reorder_keeps_the_loaded_track_in_positional_mode() {
    let mut s = session(IdMode::Positional, &["A", "B", "C"]);
    s.handle_event(MediaEvent::MetadataLoaded(50.0));
    s.play();

    s.reorder(0, 2).unwrap();
    let a = id_of(s.tracks(), "A");
    assert_eq!(a, TrackId(2));
    assert_eq!(s.tracks().selected(), Some(a));

    // Same logical track: toggles instead of reloading.
    s.activate(a).unwrap();
    assert_eq!(s.state(), PlaybackState::Paused);
    assert_eq!(
        s.driver()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Load(_)))
            .count(),
        1
    );
}
