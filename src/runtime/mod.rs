use std::env;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Session, TrackList};
use crate::audio::AudioPlayer;
use crate::library;
use crate::waveform::Waveform;

mod event_loop;
mod logging;
mod settings;


type BoxError = Box<dyn std::error::Error>;
type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui, BoxError> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<(), BoxError> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Run `body` on what `setup` produced. `teardown` runs whether setup, the
/// body, or neither failed; the first error wins.
fn guarded<S, T>(
    state: &mut S,
    setup: impl FnOnce() -> Result<T, BoxError>,
    body: impl FnOnce(&mut S, T) -> Result<(), BoxError>,
    teardown: impl FnOnce(&mut S) -> Result<(), BoxError>,
) -> Result<(), BoxError> {
    let result = setup().and_then(|t| body(state, t));
    let torn_down = teardown(state);
    result.and(torn_down)
}

pub fn run() -> Result<(), BoxError> {
    let (settings, config_warning) = settings::load_settings();

    let mut print_config = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--print-config" => print_config = true,
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    if print_config {
        if let Some(w) = &config_warning {
            eprintln!("music-builder: {w}");
        }
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    logging::init(&settings.logging);
    if let Some(w) = &config_warning {
        log::warn!("{w}");
    }

    let sources = library::collect(&paths, &settings.library);
    log::info!("{} tracks from {} paths", sources.len(), paths.len());

    let audio_player = AudioPlayer::new(settings.audio.clone());
    let mut session = Session::new(TrackList::new(settings.tracks.id_mode), audio_player);
    session.ingest_sources(sources);

    let waveform = Waveform::generate(settings.ui.waveform_points);

    let run_result = guarded(
        &mut session,
        setup_terminal,
        |session, mut terminal| {
            let mut state = event_loop::EventLoopState::new();
            state.view.notice = config_warning;
            event_loop::run(&mut terminal, &settings, session, &waveform, &mut state)
        },
        |session| {
            session
                .driver()
                .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            restore_terminal()
        },
    );

    if let Err(e) = &run_result {
        log::error!("terminal session failed: {e}");
    }
    run_result
}
