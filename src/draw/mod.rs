//! Drawing support for the stage canvas
//!
//! - `geometry` - Polygon generation and beam footprints
//! - `shapes` - Fixture icon outlines

pub mod geometry;
pub mod shapes;
