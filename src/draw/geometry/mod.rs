//! Geometry module for stage plan drawing
//!
//! Pure functions used by the canvas on every repaint. Nothing here keeps
//! state, so all of it is safe to call from any thread.
//!
//! # Submodules
//! - `types` - Point and Rect primitives
//! - `polygon` - Regular polygon generation with stretch-to-bounds
//! - `beam` - Beam floor footprint and the renderer convenience around it

mod types;
mod polygon;
mod beam;

pub use types::{
    Point,
    Rect,
    bounds_of,
};

pub use polygon::regular_polygon;

pub use beam::{
    beam_footprint,
    intensity_alpha,
    BeamDrawing,
    GeometryError,
    MAX_BEAM_ALPHA,
};
