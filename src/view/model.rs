//! View description types produced by `render` and consumed by the terminal UI.

use crate::app::{SettingToggle, Tab};
use crate::library::SongId;

/// Everything the screen shows, derived from one `App` snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: String,
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    /// Placeholder text of the inline search bar, when shown.
    pub search_bar: Option<&'static str>,
    pub content: Content,
    pub mini_player: MiniPlayer,
    pub full_player: Option<FullPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Library(Vec<LibraryRow>),
    Queue { header: String, rows: Vec<QueueRow> },
    Playlists(Vec<PlaylistCard>),
    Settings(Vec<SettingsGroup>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRow {
    pub id: SongId,
    pub title: &'static str,
    pub artist: &'static str,
    pub cover: &'static str,
    pub under_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRow {
    pub id: SongId,
    pub title: &'static str,
    pub duration: String,
    /// The row of the current song.
    pub current: bool,
    pub under_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistCard {
    /// Placeholder tile for creating a playlist.
    New { label: &'static str },
    Playlist {
        icon: &'static str,
        name: &'static str,
        song_count: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsGroup {
    pub title: &'static str,
    pub rows: Vec<SettingsRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRow {
    Toggle {
        toggle: SettingToggle,
        label: &'static str,
        on: bool,
        under_cursor: bool,
    },
    Value {
        label: &'static str,
        value: String,
    },
}

/// The transport glyph. Paused shows `Play`, playing shows `Pause`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
}

impl PlayGlyph {
    pub fn for_playing(playing: bool) -> Self {
        if playing { Self::Pause } else { Self::Play }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniPlayer {
    /// Label built from the configured now-playing fields.
    pub label: String,
    pub cover: &'static str,
    pub glyph: PlayGlyph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullPlayer {
    pub title: &'static str,
    pub artist: &'static str,
    pub cover: &'static str,
    pub glyph: PlayGlyph,
}
