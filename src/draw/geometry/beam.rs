//! Beam footprint calculation
//!
//! Projects a fixture's light cone onto the floor. The cone is split into
//! the triangles formed by its near and far edges; law of cosines gives the
//! footprint length along the pan direction, law of sines its cross-beam
//! extent. All angles are in degrees and all lengths share the unit of
//! `mount_height`.

use super::types::Rect;
use serde::{Deserialize, Serialize};

/// Default alpha for a beam at full intensity
pub const MAX_BEAM_ALPHA: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("beam input is not a finite number")]
    NonFinite,
    #[error("mount height must be positive, got {0}")]
    NonPositiveMountHeight(f64),
    #[error("field angle must be within (0, 180) degrees, got {0}")]
    FieldAngleOutOfRange(f64),
    #[error("beam edge at {edge} degrees never reaches the floor (tilt {tilt}, field angle {field_angle})")]
    BeamNotGrounded { tilt: f64, field_angle: f64, edge: f64 },
}

/// Compute the floor footprint of a beam
///
/// The returned rectangle is relative to the point directly below the
/// fixture: `x` is the signed distance to the near edge, `width` the length
/// of the footprint along the pan direction and `height` its cross-beam size.
/// `y` is always 0.
///
/// # Errors
/// Fails when `mount_height <= 0`, when `field_angle` lies outside (0, 180),
/// or when either cone edge points at or above the horizon
/// (`|tilt| + field_angle / 2 >= 90`).
pub fn beam_footprint(mount_height: f64, field_angle: f64, tilt: f64) -> Result<Rect, GeometryError> {
    if !mount_height.is_finite() || !field_angle.is_finite() || !tilt.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if mount_height <= 0.0 {
        return Err(GeometryError::NonPositiveMountHeight(mount_height));
    }
    if field_angle <= 0.0 || field_angle >= 180.0 {
        return Err(GeometryError::FieldAngleOutOfRange(field_angle));
    }

    let half = field_angle / 2.0;
    let near = tilt - half;
    let far = tilt + half;

    for edge in [near, far] {
        if edge.abs() >= 90.0 {
            return Err(GeometryError::BeamNotGrounded { tilt, field_angle, edge });
        }
    }

    // Slant distances from the fixture to both floor intersections
    let b1 = mount_height / (90.0 - near).to_radians().sin();
    let b2 = mount_height / (90.0 - far).to_radians().sin();

    let width = (b1 * b1 + b2 * b2 - 2.0 * b1 * b2 * field_angle.to_radians().cos()).sqrt();
    let height = (2.0 * mount_height * half.to_radians().sin()) / (90.0 - half).to_radians().sin();

    // sqrt drops the sign, restore it from the near edge
    let mut x = (b1 * b1 - mount_height * mount_height).max(0.0).sqrt();
    if near < 0.0 {
        x = -x;
    }

    Ok(Rect::new(x, 0.0, width, height))
}

/// Everything a renderer needs to paint one beam
///
/// The footprint is untransformed; the renderer rotates it by `rotation`
/// degrees around the fixture before filling it with `fill`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamDrawing {
    pub footprint: Rect,
    pub rotation: f64,
    pub fill: [u8; 4],
}

impl BeamDrawing {
    /// Build the drawing for a fixture's beam
    ///
    /// `intensity` is clamped to 0..=100 and scales `max_alpha`.
    pub fn new(
        mount_height: f64,
        field_angle: f64,
        tilt: f64,
        rotation: f64,
        tint: [u8; 3],
        intensity: i32,
        max_alpha: u8,
    ) -> Result<Self, GeometryError> {
        let footprint = beam_footprint(mount_height, field_angle, tilt)?;
        Ok(BeamDrawing {
            footprint,
            rotation,
            fill: [tint[0], tint[1], tint[2], intensity_alpha(intensity, max_alpha)],
        })
    }
}

/// Alpha channel for a beam intensity in percent
pub fn intensity_alpha(intensity: i32, max_alpha: u8) -> u8 {
    let intensity = intensity.clamp(0, 100) as f64;
    (intensity / 100.0 * max_alpha as f64).round() as u8
}
