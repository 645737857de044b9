//! Pure rendering: turns an `App` snapshot into a `View` description.
//!
//! Nothing here touches the terminal. `ui::draw` binds the description to
//! widgets, which keeps everything the screen shows testable without a backend.

mod model;
mod render;

pub use model::*;
pub use render::render;
