use super::*;
use crate::config::SongField;
use std::collections::HashSet;

#[test]
fn catalog_has_four_songs_with_unique_ids() {
    let songs = catalog();
    assert_eq!(songs.len(), 4);

    let ids: HashSet<SongId> = songs.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn find_returns_the_matching_song_for_every_id() {
    for song in catalog() {
        let found = find(song.id).unwrap();
        assert!(std::ptr::eq(found, song));
    }
    assert!(find(0).is_none());
    assert!(find(5).is_none());
}

#[test]
fn first_is_the_lowest_id() {
    assert_eq!(first().id, 1);
    assert_eq!(first().title, "七里香");
}

#[test]
fn display_from_fields_joins_in_order() {
    let song = find(2).unwrap();
    assert_eq!(
        display_from_fields(song, &[SongField::Title, SongField::Artist], " - "),
        "Imagine - John Lennon"
    );
    assert_eq!(
        display_from_fields(song, &[SongField::Artist, SongField::Title], " · "),
        "John Lennon · Imagine"
    );
}

#[test]
fn display_from_fields_falls_back_to_title() {
    let song = Song {
        id: 9,
        title: "Untitled",
        artist: "   ",
        cover: "",
    };
    assert_eq!(
        display_from_fields(&song, &[SongField::Artist, SongField::Cover], " - "),
        "Untitled"
    );
    assert_eq!(display_from_fields(&song, &[], " - "), "Untitled");
}
