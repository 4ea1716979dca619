//! Procedural generator for the gem-trail PWA icons and favicon.
//!
//! Recreates the favicon geometry with drawing primitives instead of
//! rasterizing the original SVG, so regenerating the assets needs no native
//! vector toolchain. All outputs are redrawn from scratch on every run.

pub mod geometry;
pub mod output;
pub mod palette;
pub mod render;

pub use render::render;
