use super::model::{Song, SongId};

static SONGS: [Song; 4] = [
    Song {
        id: 1,
        title: "七里香",
        artist: "周杰伦",
        cover: "https://picsum.photos/400/400?random=1",
    },
    Song {
        id: 2,
        title: "Imagine",
        artist: "John Lennon",
        cover: "https://picsum.photos/400/400?random=2",
    },
    Song {
        id: 3,
        title: "Stay",
        artist: "The Kid LAROI",
        cover: "https://picsum.photos/400/400?random=3",
    },
    Song {
        id: 4,
        title: "Blinding Lights",
        artist: "The Weeknd",
        cover: "https://picsum.photos/400/400?random=4",
    },
];

/// All songs, in id order.
pub fn catalog() -> &'static [Song] {
    &SONGS
}

/// Look up a song by id.
pub fn find(id: SongId) -> Option<&'static Song> {
    SONGS.iter().find(|s| s.id == id)
}

/// The song selected when the app starts.
pub fn first() -> &'static Song {
    &SONGS[0]
}
