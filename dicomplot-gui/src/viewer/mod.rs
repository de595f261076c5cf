//! Visualization helpers for spot map display.

mod colormap;
pub mod grid;
mod markers;

pub use colormap::Colormap;
pub use markers::{layer_markers, SpotMarker};
