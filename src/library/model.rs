pub type SongId = u32;

#[derive(Debug, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub title: &'static str,
    pub artist: &'static str,
    /// Artwork reference (an image URL). Never fetched, only displayed.
    pub cover: &'static str,
}
