use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Session, remap_selection};
use crate::audio::MediaDriver;
use crate::config;
use crate::library;
use crate::ui::{self, HitMap, ViewState};
use crate::waveform::{Waveform, seek_time};

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    pub view: ViewState,
    /// Clickable regions of the last drawn frame.
    pub hits: HitMap,
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main terminal event loop: drains driver events, draws, and dispatches
/// key and mouse input. Returns `Ok(())` when shutdown is requested.
pub fn run<D: MediaDriver>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut Session<D>,
    waveform: &Waveform,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        session.pump();
        state.view.clamp_cursor(session.tracks().len());

        terminal.draw(|f| {
            state.hits = ui::draw(
                f,
                session,
                &state.view,
                waveform,
                &settings.ui,
                &settings.controls,
            );
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, session, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, session, state),
                _ => {}
            }
        }
    }

    Ok(())
}

fn cursor_track<D: MediaDriver>(session: &Session<D>, cursor: usize) -> Option<library::TrackId> {
    session.tracks().tracks().get(cursor).map(|t| t.id)
}

fn activate_at<D: MediaDriver>(session: &mut Session<D>, index: usize) {
    if let Some(id) = cursor_track(session, index) {
        if let Err(e) = session.activate(id) {
            log::warn!("activate {id}: {e}");
        }
    }
}

fn move_card<D: MediaDriver>(session: &mut Session<D>, state: &mut EventLoopState, to: usize) {
    let from = state.view.cursor;
    match session.reorder(from, to) {
        Ok(()) => state.view.cursor = remap_selection(from, from, to),
        Err(e) => log::debug!("move card: {e}"),
    }
}

fn add_from_prompt<D: MediaDriver>(
    input: &str,
    settings: &config::Settings,
    session: &mut Session<D>,
    state: &mut EventLoopState,
) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }
    let sources = library::collect(&[PathBuf::from(input)], &settings.library);
    if sources.is_empty() {
        state.view.notice = Some(format!("nothing to add at {input}"));
        return;
    }
    let added = session.ingest_sources(sources);
    log::info!("added {} tracks from {input}", added.len());
    state.view.notice = Some(format!("added {} tracks", added.len()));
}

/// Returns `true` when the user asked to quit.
fn handle_key_event<D: MediaDriver>(
    key: KeyEvent,
    settings: &config::Settings,
    session: &mut Session<D>,
    state: &mut EventLoopState,
) -> bool {
    if let Some(mut input) = state.view.prompt.take() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => add_from_prompt(&input, settings, session, state),
            KeyCode::Backspace => {
                input.pop();
                state.view.prompt = Some(input);
            }
            KeyCode::Char(c) if !c.is_control() => {
                input.push(c);
                state.view.prompt = Some(input);
            }
            _ => state.view.prompt = Some(input),
        }
        return false;
    }

    let len = session.tracks().len();
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => {
            state.view.notice = None;
            state.view.prompt = Some(String::new());
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                state.view.cursor = 0;
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => state.view.cursor = len.saturating_sub(1),
        KeyCode::Char('j') | KeyCode::Down => {
            if state.view.cursor + 1 < len {
                state.view.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.view.cursor = state.view.cursor.saturating_sub(1);
        }
        KeyCode::Char('J') => {
            let to = state.view.cursor + 1;
            if to < len {
                move_card(session, state, to);
            }
        }
        KeyCode::Char('K') => {
            if let Some(to) = state.view.cursor.checked_sub(1) {
                move_card(session, state, to);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_at(session, state.view.cursor),
        KeyCode::Char('p') => session.toggle_play_pause(),
        KeyCode::Char('h') | KeyCode::Left => {
            session.scrub(-(settings.controls.scrub_seconds as f64))
        }
        KeyCode::Char('l') | KeyCode::Right => {
            session.scrub(settings.controls.scrub_seconds as f64)
        }
        KeyCode::Char('[') => session.nudge_trim(-settings.controls.trim_step_seconds),
        KeyCode::Char(']') => session.nudge_trim(settings.controls.trim_step_seconds),
        KeyCode::Char('e') => session.trim_at_playhead(),
        KeyCode::Char('E') => session.reset_trim(),
        _ => {}
    }

    false
}

fn handle_mouse_event<D: MediaDriver>(
    mouse: MouseEvent,
    session: &mut Session<D>,
    state: &mut EventLoopState,
) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((offset, width)) = state.hits.waveform_offset(column, row) {
                let t = seek_time(offset as f64, width as f64, session.duration());
                session.seek(t);
                return;
            }
            if let Some(index) = state.hits.card_at(column, row) {
                state.view.cursor = index;
                state.view.drag.start(index);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(index) = state.hits.card_at(column, row) {
                state.view.drag.over(index);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let pressed = state.view.drag.dragged();
            match state.view.drag.finish() {
                Some((from, to)) => match session.reorder(from, to) {
                    Ok(()) => state.view.cursor = remap_selection(state.view.cursor, from, to),
                    Err(e) => log::warn!("drop: {e}"),
                },
                None => {
                    // Press and release on the same card is a click.
                    let released = state.hits.card_at(column, row);
                    if let Some(index) = pressed.filter(|&i| released == Some(i)) {
                        activate_at(session, index);
                    }
                }
            }
        }
        _ => {}
    }
}
