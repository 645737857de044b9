use super::*;
use crate::config::{Settings, TabSetting};
use crate::error::Error;
use crate::library::{self, catalog};

#[test]
fn new_app_starts_on_library_with_first_song_paused() {
    let app = App::new();
    assert_eq!(app.active_tab, Tab::Library);
    assert_eq!(app.current.id, 1);
    assert!(!app.playing);
    assert!(!app.full_player_open);
    assert!(!app.search_visible);
    assert!(app.preferences.auto_update_library);
    assert!(!app.preferences.high_quality_audio);
}

#[test]
fn select_song_sets_current_for_every_id() {
    let mut app = App::new();
    for song in catalog() {
        app.select_song(song.id).unwrap();
        assert_eq!(app.current.id, song.id);
        assert!(std::ptr::eq(app.current, song));
    }
}

#[test]
fn select_unknown_song_is_rejected_and_keeps_current() {
    let mut app = App::new();
    app.select_song(3).unwrap();

    let err = app.select_song(42).unwrap_err();
    assert!(matches!(err, Error::UnknownSong(42)));
    assert_eq!(app.current.id, 3);
}

#[test]
fn toggle_play_inverts_and_never_touches_current() {
    let mut app = App::new();
    app.select_song(2).unwrap();

    app.toggle_play();
    assert!(app.playing);
    assert_eq!(app.current.id, 2);

    app.toggle_play();
    assert!(!app.playing);
    assert_eq!(app.current.id, 2);
}

#[test]
fn switching_tabs_keeps_song_and_play_state() {
    let mut app = App::new();
    app.select_song(4).unwrap();
    app.toggle_play();

    for tab in Tab::ALL {
        app.switch_tab(tab);
        assert_eq!(app.active_tab, tab);
        assert_eq!(app.current.id, 4);
        assert!(app.playing);
    }
    assert_eq!(catalog().len(), 4);
}

#[test]
fn switch_tab_puts_cursor_on_current_song_for_song_lists() {
    let mut app = App::new();
    app.select_song(3).unwrap();

    app.switch_tab(Tab::Queue);
    assert_eq!(app.cursor, 2);

    app.switch_tab(Tab::Settings);
    assert_eq!(app.cursor, 0);

    app.switch_tab(Tab::Library);
    assert_eq!(app.cursor, 2);
}

#[test]
fn next_and_prev_tab_wrap() {
    let mut app = App::new();
    app.prev_tab();
    assert_eq!(app.active_tab, Tab::Settings);
    app.next_tab();
    assert_eq!(app.active_tab, Tab::Library);
    app.next_tab();
    app.next_tab();
    assert_eq!(app.active_tab, Tab::Playlists);
}

#[test]
fn cursor_wraps_within_selectable_rows() {
    let mut app = App::new();
    assert_eq!(app.selectable_rows(), 4);
    app.cursor_up();
    assert_eq!(app.cursor, 3);
    app.cursor_down();
    assert_eq!(app.cursor, 0);

    app.switch_tab(Tab::Settings);
    assert_eq!(app.selectable_rows(), 2);
    app.cursor_down();
    app.cursor_down();
    assert_eq!(app.cursor, 0);

    app.switch_tab(Tab::Playlists);
    app.cursor_down();
    assert_eq!(app.cursor, 0);
}

#[test]
fn activate_selects_song_under_cursor() {
    let mut app = App::new();
    app.cursor_down();
    app.activate().unwrap();
    assert_eq!(app.current.id, 2);

    app.switch_tab(Tab::Queue);
    app.cursor_down();
    app.cursor_down();
    app.activate().unwrap();
    assert_eq!(app.current.id, 4);
    assert_eq!(app.active_tab, Tab::Queue);
}

#[test]
fn activate_on_settings_flips_the_toggle_under_cursor() {
    let mut app = App::new();
    app.switch_tab(Tab::Settings);

    app.activate().unwrap();
    assert!(!app.preferences.auto_update_library);

    app.cursor_down();
    app.activate().unwrap();
    assert!(app.preferences.high_quality_audio);
    assert!(app.preferences.get(SettingToggle::HighQualityAudio));
    assert_eq!(app.current.id, library::first().id);
}

#[test]
fn overlay_and_search_flags_toggle() {
    let mut app = App::new();
    app.open_full_player();
    assert!(app.full_player_open);
    app.close_full_player();
    assert!(!app.full_player_open);

    app.toggle_search_bar();
    assert!(app.search_visible);
    app.toggle_search_bar();
    assert!(!app.search_visible);
}

#[test]
fn with_settings_applies_initial_tab_and_preferences() {
    let mut settings = Settings::default();
    settings.ui.initial_tab = TabSetting::Queue;
    settings.preferences.high_quality_audio = true;
    settings.preferences.equalizer_preset = "Jazz".to_string();

    let app = App::with_settings(&settings);
    assert_eq!(app.active_tab, Tab::Queue);
    assert!(app.preferences.high_quality_audio);
    assert_eq!(app.preferences.equalizer_preset, "Jazz");
    assert_eq!(app.current.id, 1);
}
