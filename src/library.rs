//! The song catalog: a fixed, immutable set of songs shown by every tab.
//!
//! Songs are `'static` so the app state can hold a plain reference to the
//! current one without any lifetime bookkeeping.

mod catalog;
mod display;
mod model;

pub use catalog::{catalog, find, first};
pub use display::display_from_fields;
pub use model::{Song, SongId};

#[cfg(test)]
mod tests;
