use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub preferences: PreferenceSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Tab shown when the app starts.
    pub initial_tab: TabSetting,

    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which song fields the mini-player label shows, and in what order.
    ///
    /// Example: ["title", "artist"]
    pub now_playing_fields: Vec<SongField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,

    /// Length shown next to every queue row. There is no audio, so no real duration.
    pub queue_duration_placeholder: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_tab: TabSetting::Library,
            header_text: " ~ encore ~ ".to_string(),
            now_playing_fields: vec![SongField::Title, SongField::Artist],
            now_playing_separator: " - ".to_string(),
            queue_duration_placeholder: "03:45".to_string(),
        }
    }
}

/// Initial values of the switches on the settings tab.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub auto_update_library: bool,
    pub high_quality_audio: bool,
    /// Label shown on the equalizer row.
    pub equalizer_preset: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            auto_update_library: true,
            high_quality_audio: false,
            equalizer_preset: "Pop".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter level; `RUST_LOG` overrides it.
    pub level: String,
    /// Directory for the rolling log file. Defaults to the XDG state dir.
    pub directory: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabSetting {
    #[serde(alias = "songs")]
    Library,
    #[serde(alias = "up-next", alias = "up_next")]
    Queue,
    Playlists,
    #[serde(alias = "preferences")]
    Settings,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongField {
    Title,
    Artist,
    /// The artwork reference.
    #[serde(alias = "artwork")]
    Cover,
}
