//! Core geometry types for stage plan drawing
//!
//! Plain value types shared by the polygon generator, the beam footprint
//! calculator and the icon outlines.

use serde::{Deserialize, Serialize};

/// A 2D point in plan units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Round every component to the nearest integer (half away from zero)
    pub fn rounded(&self) -> (i64, i64, i64, i64) {
        (
            self.x.round() as i64,
            self.y.round() as i64,
            self.width.round() as i64,
            self.height.round() as i64,
        )
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x.max(other.x) < (self.x + self.width).min(other.x + other.width)
            && self.y.max(other.y) < (self.y + self.height).min(other.y + other.height)
    }
}

/// Bounding box of a point set, `None` for an empty slice
pub fn bounds_of(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
