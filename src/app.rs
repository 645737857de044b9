//! Application module: exposes the state object driven by the runtime.
//!
//! The `App` model lives in `app::model` and holds the current song, the
//! play toggle, the active tab and the overlay flags.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
