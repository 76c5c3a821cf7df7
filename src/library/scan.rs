use std::path::{Path, PathBuf};

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::color::TrackColor;
use super::display::{Tags, name_from_fields};
use super::model::TrackSource;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Audio files under `dir`, sorted case-insensitively by file name.
fn walk_dir(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_audio_file(p, settings))
        .collect();

    files.sort_by_key(|p| {
        p.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_lowercase()
    });
    files
}

fn read_source(path: &Path, settings: &LibrarySettings) -> TrackSource {
    let mut tags = Tags::default();
    let mut duration: Option<f64> = None;

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            duration = Some(tagged.properties().duration().as_secs_f64());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                tags.title = tag.title().map(|v| v.to_string());
                tags.artist = tag.artist().map(|v| v.to_string());
                tags.album = tag.album().map(|v| v.to_string());
            }
        }
        Err(e) => log::debug!("no tags for {}: {e}", path.display()),
    }

    TrackSource {
        name: name_from_fields(path, &tags, &settings.name_fields, &settings.name_separator),
        src: path.to_path_buf(),
        color: TrackColor::random_pastel(),
        duration,
    }
}

/// Turn the given files and directories into track sources.
///
/// Explicit files keep their argument order (and are accepted whatever their
/// extension); directories are expanded in place. Missing paths are skipped.
pub fn collect(paths: &[PathBuf], settings: &LibrarySettings) -> Vec<TrackSource> {
    let mut sources: Vec<TrackSource> = Vec::new();

    for path in paths {
        if path.is_dir() {
            let files = walk_dir(path, settings);
            log::info!("found {} audio files under {}", files.len(), path.display());
            sources.extend(files.iter().map(|f| read_source(f, settings)));
        } else if path.is_file() {
            sources.push(read_source(path, settings));
        } else {
            log::warn!("skipping {}: no such file or directory", path.display());
        }
    }

    sources
}
