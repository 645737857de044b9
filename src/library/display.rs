use crate::config::SongField;

use super::model::Song;

/// Build a one-line label for `song` from the configured `fields` and separator.
///
/// Empty parts are skipped; when nothing is left the title is used.
pub fn display_from_fields(song: &Song, fields: &[SongField], sep: &str) -> String {
    let parts: Vec<&str> = fields
        .iter()
        .map(|f| match f {
            SongField::Title => song.title,
            SongField::Artist => song.artist,
            SongField::Cover => song.cover,
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        song.title.to_string()
    } else {
        parts.join(sep)
    }
}
