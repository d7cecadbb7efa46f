//! Regular polygon generation for fixture icons
//!
//! Points are placed on an ellipse inscribed in the target box and then
//! stretched per axis so the polygon fills the box exactly. Without the
//! stretch, polygons like the pentagon never touch all four box edges.

use super::types::Point;
use std::f64::consts::PI;

/// Generate the vertices of a `sides`-gon filling the box at `origin`
///
/// # Arguments
/// * `sides` - Number of vertices, at least 3
/// * `origin` - Top-left corner of the target box
/// * `width`, `height` - Size of the target box
/// * `angle_offset` - Extra rotation in radians
///
/// # Panics
/// Panics when `sides < 3`.
pub fn regular_polygon(
    sides: usize,
    origin: Point,
    width: f64,
    height: f64,
    angle_offset: f64,
) -> Vec<Point> {
    assert!(sides >= 3, "a polygon needs at least 3 sides, got {}", sides);

    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    // Flat edge at the bottom for odd side counts
    let start = PI / sides as f64 + PI / 2.0 + angle_offset;
    let theta = 2.0 * PI / sides as f64;
    let rx = width / 2.0;
    let ry = height / 2.0;

    let raw: Vec<Point> = (0..sides)
        .map(|i| {
            let angle = i as f64 * theta + start;
            Point::new(rx * angle.cos() + rx, ry * angle.sin() + ry)
        })
        .collect();

    let (min_x, max_x) = extent(raw.iter().map(|p| p.x));
    let (min_y, max_y) = extent(raw.iter().map(|p| p.y));

    raw.into_iter()
        .map(|p| Point {
            x: origin.x + stretch(p.x, min_x, max_x, width),
            y: origin.y + stretch(p.y, min_y, max_y, height),
        })
        .collect()
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Map `value` from `[min, max]` onto `[0, size]`
fn stretch(value: f64, min: f64, max: f64, size: f64) -> f64 {
    let span = max - min;
    if span <= f64::EPSILON {
        return size / 2.0;
    }
    (value - min) / span * size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::geometry::bounds_of;

    #[test]
    fn test_polygon_vertex_count() {
        for sides in 3..=12 {
            let points = regular_polygon(sides, Point::new(0.0, 0.0), 40.0, 20.0, 0.0);
            assert_eq!(points.len(), sides);
        }
    }

    #[test]
    fn test_polygon_respects_origin() {
        let points = regular_polygon(5, Point::new(100.0, -20.0), 30.0, 30.0, 0.0);
        let bounds = bounds_of(&points).unwrap();
        assert_eq!(bounds.rounded(), (100, -20, 30, 30));
    }

    #[test]
    fn test_triangle_flat_edge_at_bottom() {
        let points = regular_polygon(3, Point::new(0.0, 0.0), 50.0, 50.0, 0.0);
        let bottom: Vec<_> = points.iter().filter(|p| (p.y - 50.0).abs() < 1e-9).collect();
        assert_eq!(bottom.len(), 2);
    }

    #[test]
    fn test_degenerate_box_is_empty() {
        assert!(regular_polygon(6, Point::new(0.0, 0.0), 0.0, 10.0, 0.0).is_empty());
        assert!(regular_polygon(6, Point::new(0.0, 0.0), 10.0, -1.0, 0.0).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_two_sides_panics() {
        regular_polygon(2, Point::new(0.0, 0.0), 10.0, 10.0, 0.0);
    }
}
