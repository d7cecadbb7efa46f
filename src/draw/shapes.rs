//! Fixture icon outlines
//!
//! Maps a fixture definition's shape onto something the canvas can fill:
//! an ellipse, a rectangle, or a polygon from the regular polygon generator.

use crate::draw::geometry::{regular_polygon, Point};
use crate::plan::FixtureShape;
use serde::Serialize;
use std::f64::consts::FRAC_PI_4;

/// Outline of a fixture icon inside a `width` x `height` box at the origin
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outline {
    Ellipse { width: f64, height: f64 },
    Rect { width: f64, height: f64 },
    Polygon { points: Vec<Point> },
}

/// Build the icon outline for a shape
pub fn shape_outline(shape: FixtureShape, width: f64, height: f64) -> Outline {
    let origin = Point::new(0.0, 0.0);
    match shape {
        FixtureShape::Circle => Outline::Ellipse { width, height },
        FixtureShape::Square => Outline::Rect { width, height },
        // Diamond is a square standing on a corner
        FixtureShape::Diamond => Outline::Polygon {
            points: regular_polygon(4, origin, width, height, FRAC_PI_4),
        },
        other => {
            let sides = other.sides().unwrap_or(4);
            Outline::Polygon {
                points: regular_polygon(sides, origin, width, height, 0.0),
            }
        }
    }
}
