use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/music-builder/config.toml` or
/// `~/.config/music-builder/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSIC_BUILDER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
    pub tracks: TrackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Interval between playback position updates while playing (milliseconds).
    pub tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Number of bars in the waveform strip.
    pub waveform_points: usize,
    /// Height of the waveform strip in terminal rows.
    pub waveform_height: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " music builder ".to_string(),
            waveform_points: 100,
            waveform_height: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `h` / `l`.
    pub scrub_seconds: u64,
    /// Seconds added or removed from the trim point by `[` / `]`.
    pub trim_step_seconds: f64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            trim_step_seconds: 1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackNameField {
    /// File name including the extension.
    Filename,
    /// File name without the extension.
    Stem,
    Title,
    Artist,
    Album,
    Path,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which fields to use to build a card's name.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub name_fields: Vec<TrackNameField>,
    /// Separator used to join `name_fields`.
    pub name_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            name_fields: vec![TrackNameField::Filename],
            name_separator: " - ".to_string(),
        }
    }
}

/// How track ids relate to list positions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdMode {
    /// Ids are assigned once and never change; trims and selection follow the track.
    #[default]
    Stable,
    /// Ids are reassigned to the list position after every reorder.
    /// Trims stay keyed by the old id and therefore stick to the position.
    #[serde(alias = "position", alias = "index")]
    Positional,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackSettings {
    pub id_mode: IdMode,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "music_builder=debug").
    pub level: Option<String>,
    /// Log file path. Defaults to `music-builder.log` in the temp directory.
    pub file: Option<std::path::PathBuf>,
}
