//! Two-line calculator display feature.

mod render;

pub use render::{DISPLAY_HEIGHT, render_display};
