//! CPU-side debug visualization of generated terrain.
//!
//! Provides [`DebugImage`] plus renderers that turn heightfields into
//! color-banded elevation maps and normal maps. The demo binary writes
//! these out as PNGs to diagnose generation parameters; nothing here
//! touches the GPU.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{height_to_color, render_heightfield, render_normal_map};
