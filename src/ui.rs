//! UI rendering helpers for the terminal user interface.
//!
//! `draw` paints the track cards, the selected card's waveform and trim
//! gauge, and returns a `HitMap` so mouse events can be routed back to the
//! card or strip under the pointer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{DragState, PlaybackState, Session, TrackStatus};
use crate::audio::MediaDriver;
use crate::config::{ControlsSettings, UiSettings};
use crate::library::{Track, TrackColor};
use crate::waveform::{Waveform, WaveformView};

const BACKGROUND: TrackColor = TrackColor::rgb(0, 0, 0);

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter/space", "play card");
    map.insert("p", "play/pause");
    map.insert("J/K", "move card");
    map.insert("e/E", "end here/full");
    map.insert("a", "add files");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the configured steps.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "enter/space", "p", "h/l", "J/K", "[/]", "e/E", "gg/G", "a", "q",
    ];
    order
        .iter()
        .filter_map(|k| match *k {
            "h/l" => Some(format!("[h/l] scrub -/+{}s", controls.scrub_seconds)),
            "[/]" => Some(format!("[[/]] end -/+{}s", controls.trim_step_seconds)),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `MM:SS`; anything that is not a real time shows `00:00`.
pub fn format_mmss(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let secs = seconds.floor() as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// UI-only state owned by the event loop.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Card with keyboard focus.
    pub cursor: usize,
    pub drag: DragState,
    /// Text typed into the "add" prompt, when it is open.
    pub prompt: Option<String>,
    /// Last notice shown in the status box.
    pub notice: Option<String>,
}

impl ViewState {
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Screen regions from the last frame, for mouse hit-testing.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub cards: Vec<(usize, Rect)>,
    pub waveform: Option<Rect>,
}

impl HitMap {
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let p = Position::new(column, row);
        self.cards
            .iter()
            .find(|(_, r)| r.contains(p))
            .map(|(i, _)| *i)
    }

    /// Offset and width of the waveform strip when the point lies on it.
    pub fn waveform_offset(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        self.waveform
            .filter(|r| r.contains(Position::new(column, row)))
            .map(|r| (column - r.x, r.width))
    }
}

fn card_height(selected: bool, ui: &UiSettings) -> u16 {
    // borders + title line (+ waveform + trim gauge)
    if selected { 3 + ui.waveform_height + 1 } else { 3 }
}

/// First card to draw so that `cursor` fits into `height` rows.
fn first_visible(heights: &[u16], cursor: usize, height: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let mut used: u16 = 0;
    let mut start = cursor.min(heights.len().saturating_sub(1));
    for i in (0..=start).rev() {
        match used.checked_add(heights[i]) {
            Some(total) if total <= height => {
                used = total;
                start = i;
            }
            _ => break,
        }
    }
    start
}

fn title_line<D: MediaDriver>(session: &Session<D>, track: &Track) -> Line<'static> {
    let status = session.track_status(track.id);
    let marker = match status {
        TrackStatus::Selected(PlaybackState::Playing) => "⏸",
        _ => "▶",
    };
    let elapsed = match status {
        TrackStatus::Selected(_) => format_mmss(session.current_time()),
        TrackStatus::Unselected => format_mmss(0.0),
    };
    let end = format_mmss(session.end_time_for(track.id));

    Line::from(vec![
        Span::raw(format!("{marker} ")),
        Span::styled(
            track.name.clone(),
            Style::default()
                .fg(track.color.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {elapsed} / {end}")),
    ])
}

fn draw_card<D: MediaDriver>(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    session: &Session<D>,
    view: &ViewState,
    waveform: &Waveform,
    ui: &UiSettings,
    hits: &mut HitMap,
) {
    let track = &session.tracks().tracks()[index];
    let selected = session.tracks().selected() == Some(track.id);

    let mut border = Style::default().fg(track.color.into());
    if view.drag.target() == Some(index) {
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    } else if view.drag.dragged() == Some(index) {
        border = border.add_modifier(Modifier::DIM);
    }
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1));
    if view.cursor == index {
        block = block.title(" > ").title_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.cards.push((index, area));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if selected {
            vec![
                Constraint::Length(1),
                Constraint::Length(ui.waveform_height),
                Constraint::Length(1),
            ]
        } else {
            vec![Constraint::Length(1)]
        })
        .split(inner);

    frame.render_widget(Paragraph::new(title_line(session, track)), rows[0]);

    if selected && rows.len() == 3 {
        frame.render_widget(
            WaveformView {
                waveform,
                current_time: session.current_time(),
                duration: session.duration(),
                is_playing: session.is_playing(),
                color: track.color,
                background: BACKGROUND,
            },
            rows[1],
        );
        hits.waveform = Some(rows[1]);

        let duration = session.duration();
        let end = session.end_time_for(track.id);
        let ratio = if duration > 0.0 {
            (end / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let gauge = LineGauge::default()
            .ratio(ratio)
            .label(format!("end {}", format_mmss(end)))
            .filled_style(Style::default().fg(track.color.into()));
        frame.render_widget(gauge, rows[2]);
    }
}

fn status_text<D: MediaDriver>(session: &Session<D>, view: &ViewState) -> String {
    if let Some(prompt) = &view.prompt {
        return format!("Add file or folder: {prompt}_  (enter to add, esc to cancel)");
    }

    let mut parts: Vec<String> = Vec::new();
    let state = match session.state() {
        PlaybackState::Idle => "Idle",
        PlaybackState::Loading => "Loading",
        PlaybackState::Ready => "Ready",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    match session.tracks().selected_track() {
        Some(t) => parts.push(format!("{state}: {}", t.name)),
        None => parts.push("No tracks - press [a] or pass files on the command line".to_string()),
    }
    parts.push(format!("{} tracks", session.tracks().len()));
    parts.push(format!("ids: {:?}", session.tracks().id_mode()).to_lowercase());
    if let Some(n) = &view.notice {
        parts.push(n.clone());
    }
    parts.join(" • ")
}

/// Render the entire UI into `frame`; returns the clickable regions.
pub fn draw<D: MediaDriver>(
    frame: &mut Frame,
    session: &Session<D>,
    view: &ViewState,
    waveform: &Waveform,
    ui: &UiSettings,
    controls: &ControlsSettings,
) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // Track cards, scrolled so the cursor stays visible.
    {
        let list = session.tracks();
        let heights: Vec<u16> = list
            .tracks()
            .iter()
            .map(|t| card_height(list.selected() == Some(t.id), ui))
            .collect();
        let area = chunks[1];
        if !heights.is_empty() {
            let start = first_visible(&heights, view.cursor, area.height);
            let mut y = area.y;
            for (i, &h) in heights.iter().enumerate().skip(start) {
                if y >= area.bottom() {
                    break;
                }
                let h = h.min(area.bottom() - y);
                let card_area = Rect::new(area.x, y, area.width, h);
                draw_card(frame, card_area, i, session, view, waveform, ui, &mut hits);
                y += h;
            }
        }
    }

    let status = Paragraph::new(status_text(session, view))
        .block(Block::bordered().padding(Padding::horizontal(1)).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    let footer = Paragraph::new(controls_text(controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    hits
}
