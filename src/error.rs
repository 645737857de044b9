//! Error type shared by the state model, config loading and the runtime.

use thiserror::Error;

use crate::library::SongId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The id does not name a song in the catalog.
    #[error("no song with id {0} in the catalog")]
    UnknownSong(SongId),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
