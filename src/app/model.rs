//! Application model types: `App`, `Tab` and the settings-tab `Preferences`.
//!
//! `App` is the single state object of the player. Every user action is a
//! method on it; rendering reads it through `view::render` and never mutates.

use tracing::{debug, warn};

use crate::config::{PreferenceSettings, Settings, TabSetting};
use crate::error::{Error, Result};
use crate::library::{self, Song, SongId};

/// The four views reachable from the navigation bar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Library,
    Queue,
    Playlists,
    Settings,
}

impl Tab {
    /// Tabs in navigation-bar order.
    pub const ALL: [Tab; 4] = [Tab::Library, Tab::Queue, Tab::Playlists, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Library => "Library",
            Tab::Queue => "Queue",
            Tab::Playlists => "Playlists",
            Tab::Settings => "Settings",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

impl From<TabSetting> for Tab {
    fn from(value: TabSetting) -> Self {
        match value {
            TabSetting::Library => Tab::Library,
            TabSetting::Queue => Tab::Queue,
            TabSetting::Playlists => Tab::Playlists,
            TabSetting::Settings => Tab::Settings,
        }
    }
}

/// Switches on the settings tab that can be flipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SettingToggle {
    AutoUpdateLibrary,
    HighQualityAudio,
}

impl SettingToggle {
    /// Toggles in the order the settings tab lists them.
    pub const ALL: [SettingToggle; 2] = [
        SettingToggle::AutoUpdateLibrary,
        SettingToggle::HighQualityAudio,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub auto_update_library: bool,
    pub high_quality_audio: bool,
    pub equalizer_preset: String,
}

impl Preferences {
    pub fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::AutoUpdateLibrary => self.auto_update_library,
            SettingToggle::HighQualityAudio => self.high_quality_audio,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from(&PreferenceSettings::default())
    }
}

impl From<&PreferenceSettings> for Preferences {
    fn from(s: &PreferenceSettings) -> Self {
        Self {
            auto_update_library: s.auto_update_library,
            high_quality_audio: s.high_quality_audio,
            equalizer_preset: s.equalizer_preset.clone(),
        }
    }
}

/// The main application model.
#[derive(Debug)]
pub struct App {
    /// Always a member of `library::catalog()`.
    pub current: &'static Song,
    /// Cosmetic only: flips the play/pause glyph.
    pub playing: bool,
    pub active_tab: Tab,
    pub full_player_open: bool,
    pub search_visible: bool,
    pub preferences: Preferences,
    /// Row under the cursor within the active tab's selectable rows.
    pub cursor: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an `App` on the library tab with the first song selected and paused.
    pub fn new() -> Self {
        Self {
            current: library::first(),
            playing: false,
            active_tab: Tab::Library,
            full_player_open: false,
            search_visible: false,
            preferences: Preferences::default(),
            cursor: 0,
        }
    }

    /// Create an `App` seeded from loaded settings (initial tab and preferences).
    pub fn with_settings(settings: &Settings) -> Self {
        let mut app = Self::new();
        app.preferences = Preferences::from(&settings.preferences);
        app.switch_tab(settings.ui.initial_tab.into());
        app
    }

    /// Make the song with `id` current. Unknown ids leave the state untouched.
    pub fn select_song(&mut self, id: SongId) -> Result<()> {
        let Some(song) = library::find(id) else {
            warn!(id, "ignoring selection of unknown song");
            return Err(Error::UnknownSong(id));
        };
        debug!(id, title = song.title, "song selected");
        self.current = song;
        Ok(())
    }

    /// Show `tab`. The cursor lands on the current song where the tab lists songs.
    pub fn switch_tab(&mut self, tab: Tab) {
        debug!(?tab, "switching tab");
        self.active_tab = tab;
        self.cursor = match tab {
            Tab::Library | Tab::Queue => self.current_position(),
            Tab::Playlists | Tab::Settings => 0,
        };
    }

    /// Move to the next tab in navigation order, wrapping around.
    pub fn next_tab(&mut self) {
        let pos = self.active_tab.position();
        self.switch_tab(Tab::ALL[(pos + 1) % Tab::ALL.len()]);
    }

    /// Move to the previous tab in navigation order, wrapping around.
    pub fn prev_tab(&mut self) {
        let pos = self.active_tab.position();
        self.switch_tab(Tab::ALL[(pos + Tab::ALL.len() - 1) % Tab::ALL.len()]);
    }

    /// Flip between playing and paused. Only the glyph changes.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        debug!(playing = self.playing, "toggled play");
    }

    pub fn open_full_player(&mut self) {
        self.full_player_open = true;
    }

    pub fn close_full_player(&mut self) {
        self.full_player_open = false;
    }

    /// Show or hide the inline search bar.
    pub fn toggle_search_bar(&mut self) {
        self.search_visible = !self.search_visible;
    }

    pub fn toggle_preference(&mut self, toggle: SettingToggle) {
        let flag = match toggle {
            SettingToggle::AutoUpdateLibrary => &mut self.preferences.auto_update_library,
            SettingToggle::HighQualityAudio => &mut self.preferences.high_quality_audio,
        };
        *flag = !*flag;
        debug!(?toggle, on = *flag, "toggled preference");
    }

    /// Number of rows the cursor can visit on the active tab.
    pub fn selectable_rows(&self) -> usize {
        match self.active_tab {
            Tab::Library | Tab::Queue => library::catalog().len(),
            Tab::Settings => SettingToggle::ALL.len(),
            Tab::Playlists => 0,
        }
    }

    /// Move the cursor to the next selectable row, wrapping around.
    pub fn cursor_down(&mut self) {
        let rows = self.selectable_rows();
        if rows > 0 {
            self.cursor = (self.cursor + 1) % rows;
        }
    }

    /// Move the cursor to the previous selectable row, wrapping around.
    pub fn cursor_up(&mut self) {
        let rows = self.selectable_rows();
        if rows > 0 {
            self.cursor = (self.cursor + rows - 1) % rows;
        }
    }

    /// Act on the row under the cursor: pick a song, or flip a setting.
    pub fn activate(&mut self) -> Result<()> {
        match self.active_tab {
            Tab::Library | Tab::Queue => match library::catalog().get(self.cursor) {
                Some(song) => self.select_song(song.id),
                None => Ok(()),
            },
            Tab::Settings => {
                if let Some(&toggle) = SettingToggle::ALL.get(self.cursor) {
                    self.toggle_preference(toggle);
                }
                Ok(())
            }
            Tab::Playlists => Ok(()),
        }
    }

    /// Position of the current song within the catalog.
    pub fn current_position(&self) -> usize {
        library::catalog()
            .iter()
            .position(|s| std::ptr::eq(s, self.current))
            .unwrap_or(0)
    }
}
