use crate::app::{App, SettingToggle, Tab};
use crate::config::UiSettings;
use crate::library::{self, display_from_fields};

use super::model::*;

const SEARCH_PLACEHOLDER: &str = "Search songs, artists";
const LIKED_SONG_COUNT: u32 = 42;

/// Describe the screen for `app`. Pure: reads the state, returns a fresh `View`.
pub fn render(app: &App, ui: &UiSettings) -> View {
    let glyph = PlayGlyph::for_playing(app.playing);
    let song = app.current;

    View {
        header: ui.header_text.clone(),
        title: app.active_tab.title(),
        nav: Tab::ALL
            .iter()
            .map(|&tab| NavItem {
                tab,
                label: tab.title(),
                active: tab == app.active_tab,
            })
            .collect(),
        search_bar: app.search_visible.then_some(SEARCH_PLACEHOLDER),
        content: content(app, ui),
        mini_player: MiniPlayer {
            label: display_from_fields(song, &ui.now_playing_fields, &ui.now_playing_separator),
            cover: song.cover,
            glyph,
        },
        full_player: app.full_player_open.then(|| FullPlayer {
            title: song.title,
            artist: song.artist,
            cover: song.cover,
            glyph,
        }),
    }
}

fn content(app: &App, ui: &UiSettings) -> Content {
    match app.active_tab {
        Tab::Library => Content::Library(
            library::catalog()
                .iter()
                .enumerate()
                .map(|(i, s)| LibraryRow {
                    id: s.id,
                    title: s.title,
                    artist: s.artist,
                    cover: s.cover,
                    under_cursor: i == app.cursor,
                })
                .collect(),
        ),
        Tab::Queue => {
            let songs = library::catalog();
            Content::Queue {
                header: format!("Now playing queue ({})", songs.len()),
                rows: songs
                    .iter()
                    .enumerate()
                    .map(|(i, s)| QueueRow {
                        id: s.id,
                        title: s.title,
                        duration: ui.queue_duration_placeholder.clone(),
                        current: s.id == app.current.id,
                        under_cursor: i == app.cursor,
                    })
                    .collect(),
            }
        }
        Tab::Playlists => Content::Playlists(vec![
            PlaylistCard::New {
                label: "+ New playlist",
            },
            PlaylistCard::Playlist {
                icon: "❤️",
                name: "Liked songs",
                song_count: LIKED_SONG_COUNT,
            },
        ]),
        Tab::Settings => {
            let toggle_row = |toggle: SettingToggle, label: &'static str| SettingsRow::Toggle {
                toggle,
                label,
                on: app.preferences.get(toggle),
                under_cursor: SettingToggle::ALL.get(app.cursor) == Some(&toggle),
            };
            Content::Settings(vec![
                SettingsGroup {
                    title: "Scanning",
                    rows: vec![toggle_row(
                        SettingToggle::AutoUpdateLibrary,
                        "Auto-update library",
                    )],
                },
                SettingsGroup {
                    title: "Audio",
                    rows: vec![
                        SettingsRow::Value {
                            label: "Equalizer",
                            value: app.preferences.equalizer_preset.clone(),
                        },
                        toggle_row(SettingToggle::HighQualityAudio, "High quality audio"),
                    ],
                },
            ])
        }
    }
}
