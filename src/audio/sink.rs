//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::MediaError;

fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, MediaError> {
    let file = File::open(path).map_err(|e| MediaError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| MediaError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Duration of the file at `path`, from the decoder or failing that the tags.
pub(super) fn probe_duration(path: &Path) -> Result<f64, MediaError> {
    let decoder = open_decoder(path)?;
    if let Some(d) = decoder.total_duration() {
        return Ok(d.as_secs_f64());
    }

    // Some decoders (mp3) cannot tell without reading the whole stream.
    use lofty::prelude::*;
    let secs = lofty::read_from_path(path)
        .map(|tagged| tagged.properties().duration().as_secs_f64())
        .unwrap_or(0.0);
    Ok(secs)
}

/// Create a paused `Sink` for the file at `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<Sink, MediaError> {
    let source = open_decoder(path)?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
