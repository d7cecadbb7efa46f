// Regression values for polygon bounds and beam footprints
use stage_light_planner::draw::geometry::{beam_footprint, bounds_of, regular_polygon, GeometryError, Point};

#[test]
fn test_polygons_stretch_to_bounds() {
    for sides in 3..=12 {
        for step in 0..16 {
            let offset = (step as f64 * 22.5).to_radians();
            let points = regular_polygon(sides, Point::new(0.0, 0.0), 50.0, 50.0, offset);
            let bounds = bounds_of(&points).expect("polygon should have vertices");
            assert_eq!(
                bounds.rounded(),
                (0, 0, 50, 50),
                "sides={} offset={}deg",
                sides,
                step as f64 * 22.5
            );
        }
    }
}

#[test]
fn test_polygons_stretch_with_raw_offsets() {
    // Offsets passed straight through as radians, including large ones
    let offsets = [0.0, 22.5, 45.0, 67.5, 90.0, 112.5, 135.0, 157.5, 180.0, 202.5];
    for (i, sides) in (3..=12).enumerate() {
        let points = regular_polygon(sides, Point::new(0.0, 0.0), 50.0, 50.0, offsets[i]);
        let bounds = bounds_of(&points).unwrap();
        assert_eq!(bounds.rounded(), (0, 0, 50, 50), "sides={}", sides);
    }
}

#[test]
fn test_non_square_box() {
    for sides in 3..=12 {
        let points = regular_polygon(sides, Point::new(7.0, 3.0), 80.0, 24.0, 0.3);
        let bounds = bounds_of(&points).unwrap();
        assert_eq!(bounds.rounded(), (7, 3, 80, 24), "sides={}", sides);
    }
}

#[test]
fn test_beam_footprint_regression() {
    let cases = [
        ((100.0, 90.0, 0.0), (-100, 0, 200, 200)),
        ((100.0, 45.0, 22.5), (0, 0, 100, 83)),
        ((100.0, 25.0, 65.0), (130, 0, 321, 44)),
        ((100.0, 38.0, -52.0), (-290, 0, 225, 69)),
    ];

    for ((mount_height, field_angle, tilt), expected) in cases {
        let rect = beam_footprint(mount_height, field_angle, tilt).expect("valid beam");
        assert_eq!(
            rect.rounded(),
            expected,
            "beam_footprint({}, {}, {})",
            mount_height,
            field_angle,
            tilt
        );
    }
}

#[test]
fn test_beam_footprint_is_deterministic() {
    let a = beam_footprint(350.0, 19.0, 33.0).unwrap();
    let b = beam_footprint(350.0, 19.0, 33.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_beam_footprint_scales_with_height() {
    let low = beam_footprint(100.0, 25.0, 65.0).unwrap();
    let high = beam_footprint(200.0, 25.0, 65.0).unwrap();
    assert!((high.width - 2.0 * low.width).abs() < 1e-9);
    assert!((high.height - 2.0 * low.height).abs() < 1e-9);
    assert!((high.x - 2.0 * low.x).abs() < 1e-9);
}

#[test]
fn test_beam_past_horizon_errors() {
    let err = beam_footprint(100.0, 60.0, 70.0).unwrap_err();
    match err {
        GeometryError::BeamNotGrounded { edge, .. } => assert_eq!(edge, 100.0),
        other => panic!("unexpected error {:?}", other),
    }
}
