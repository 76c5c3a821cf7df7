use std::path::Path;

use crate::config::TrackNameField;

/// Tag values read from a file, all optional.
#[derive(Debug, Default, Clone)]
pub(super) struct Tags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// Build a card name for the file at `path` from the configured `fields`.
///
/// Empty tag values are skipped. When nothing was produced the file name is
/// used, so every card always has a label.
pub(super) fn name_from_fields(
    path: &Path,
    tags: &Tags,
    fields: &[TrackNameField],
    sep: &str,
) -> String {
    let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);

    let mut parts: Vec<String> = Vec::new();
    for f in fields {
        let part = match f {
            TrackNameField::Filename => non_empty(path.file_name().and_then(|s| s.to_str())),
            TrackNameField::Stem => non_empty(path.file_stem().and_then(|s| s.to_str())),
            TrackNameField::Title => non_empty(tags.title.as_deref()),
            TrackNameField::Artist => non_empty(tags.artist.as_deref()),
            TrackNameField::Album => non_empty(tags.album.as_deref()),
            TrackNameField::Path => Some(path.display().to_string()),
        };
        parts.extend(part);
    }

    if parts.is_empty() {
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    } else {
        parts.join(sep)
    }
}
