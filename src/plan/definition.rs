//! Fixture definitions
//!
//! A definition is a catalog entry describing one kind of lighting fixture.
//! Placed fixtures hold their own clone, so editing the catalog never
//! reaches into a plan.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Text color readable on top of this color
    ///
    /// BT.709 relative luminance compared against the W3C contrast midpoint.
    pub fn contrast_text_color(self) -> Rgb {
        let luminance = (self.r as f64 * 0.2126 + self.g as f64 * 0.7152 + self.b as f64 * 0.0722) / 255.0;
        if luminance > (1.05f64 * 0.05).sqrt() - 0.05 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

/// Icon shape of a fixture; the discriminant is the on-disk ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum FixtureShape {
    Circle = 0,
    Triangle = 1,
    #[default]
    Square = 2,
    Diamond = 3,
    Pentagon = 4,
    Hexagon = 5,
    Heptagon = 6,
    Octagon = 7,
    Nonagon = 8,
    Decagon = 9,
}

impl FixtureShape {
    pub const ALL: [FixtureShape; 10] = [
        FixtureShape::Circle,
        FixtureShape::Triangle,
        FixtureShape::Square,
        FixtureShape::Diamond,
        FixtureShape::Pentagon,
        FixtureShape::Hexagon,
        FixtureShape::Heptagon,
        FixtureShape::Octagon,
        FixtureShape::Nonagon,
        FixtureShape::Decagon,
    ];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Polygon side count, `None` for the circle
    pub fn sides(self) -> Option<usize> {
        match self {
            FixtureShape::Circle => None,
            FixtureShape::Triangle => Some(3),
            FixtureShape::Square | FixtureShape::Diamond => Some(4),
            FixtureShape::Pentagon => Some(5),
            FixtureShape::Hexagon => Some(6),
            FixtureShape::Heptagon => Some(7),
            FixtureShape::Octagon => Some(8),
            FixtureShape::Nonagon => Some(9),
            FixtureShape::Decagon => Some(10),
        }
    }
}

/// Field angle of a definition, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldAngle {
    Fixed { angle: f32 },
    Range { min: f32, max: f32 },
}

impl FieldAngle {
    /// Rebuild from the three stored floats
    ///
    /// A positive fixed angle with an empty range is fixed; anything else is
    /// read as a range, even when it does not form a valid one.
    pub fn from_parts(fixed: f32, min: f32, max: f32) -> Self {
        if fixed > 0.0 && min <= 0.0 && max <= 0.0 {
            FieldAngle::Fixed { angle: fixed }
        } else {
            FieldAngle::Range { min, max }
        }
    }

    /// `(fixed, min, max)` as stored on disk
    pub fn to_parts(self) -> (f32, f32, f32) {
        match self {
            FieldAngle::Fixed { angle } => (angle, 0.0, 0.0),
            FieldAngle::Range { min, max } => (0.0, min, max),
        }
    }

    pub fn is_finite(self) -> bool {
        let (fixed, min, max) = self.to_parts();
        fixed.is_finite() && min.is_finite() && max.is_finite()
    }

    /// Same variant with bit-identical floats; unlike `==`, NaN matches itself
    pub fn same_bits(self, other: FieldAngle) -> bool {
        match (self, other) {
            (FieldAngle::Fixed { angle: a }, FieldAngle::Fixed { angle: b }) => a.to_bits() == b.to_bits(),
            (FieldAngle::Range { min: a, max: b }, FieldAngle::Range { min: c, max: d }) => {
                a.to_bits() == c.to_bits() && b.to_bits() == d.to_bits()
            }
            _ => false,
        }
    }
}

/// Catalog entry for a kind of fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureDefinition {
    pub display_name: String,
    pub label: String,
    pub shape: FixtureShape,
    pub display_color: Rgb,
    pub field_angle: FieldAngle,
}

impl FixtureDefinition {
    /// Definition with a fixed field angle
    pub fn fixed(
        display_name: impl Into<String>,
        label: impl Into<String>,
        shape: FixtureShape,
        display_color: Rgb,
        angle: f32,
    ) -> Self {
        FixtureDefinition {
            display_name: display_name.into(),
            label: label.into(),
            shape,
            display_color,
            field_angle: FieldAngle::Fixed { angle },
        }
    }

    /// Definition whose field angle is chosen per placement within `[min, max]`
    pub fn ranged(
        display_name: impl Into<String>,
        label: impl Into<String>,
        shape: FixtureShape,
        display_color: Rgb,
        min: f32,
        max: f32,
    ) -> Self {
        FixtureDefinition {
            display_name: display_name.into(),
            label: label.into(),
            shape,
            display_color,
            field_angle: FieldAngle::Range { min, max },
        }
    }

    /// True iff the definition carries a usable range (`0 < min <= max <= 180`)
    pub fn is_range(&self) -> bool {
        match self.field_angle {
            FieldAngle::Range { min, max } => 0.0 < min && min <= max && max <= 180.0,
            FieldAngle::Fixed { .. } => false,
        }
    }

    /// Identity used for catalog deduplication
    ///
    /// Reflexive for every value, including definitions whose angles are NaN.
    pub fn same_as(&self, other: &FixtureDefinition) -> bool {
        self.display_name == other.display_name
            && self.label == other.label
            && self.shape == other.shape
            && self.display_color == other.display_color
            && self.field_angle.same_bits(other.field_angle)
    }

    /// Field angle a fresh placement starts with
    pub fn default_field_angle(&self) -> f32 {
        match self.field_angle {
            FieldAngle::Fixed { angle } => angle,
            FieldAngle::Range { max, .. } => max,
        }
    }

    /// Coerce a requested per-placement field angle into what this definition allows
    pub fn clamp_field_angle(&self, requested: f32) -> f32 {
        match self.field_angle {
            FieldAngle::Fixed { angle } => angle,
            FieldAngle::Range { min, max } if self.is_range() => requested.clamp(min, max),
            FieldAngle::Range { .. } => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn par56() -> FixtureDefinition {
        FixtureDefinition::fixed("PAR 56", "P56", FixtureShape::Circle, Rgb::new(200, 10, 10), 25.0)
    }

    fn zoom_profile() -> FixtureDefinition {
        FixtureDefinition::ranged("Zoom profile", "ZP", FixtureShape::Heptagon, Rgb::new(64, 128, 192), 35.0, 45.0)
    }

    #[test]
    fn test_is_range() {
        assert!(!par56().is_range());
        assert!(zoom_profile().is_range());

        let mut broken = zoom_profile();
        broken.field_angle = FieldAngle::Range { min: 50.0, max: 40.0 };
        assert!(!broken.is_range());
        broken.field_angle = FieldAngle::Range { min: 0.0, max: 40.0 };
        assert!(!broken.is_range());
        broken.field_angle = FieldAngle::Range { min: 10.0, max: 190.0 };
        assert!(!broken.is_range());
    }

    #[test]
    fn test_field_angle_parts() {
        assert_eq!(FieldAngle::from_parts(25.0, 0.0, 0.0), FieldAngle::Fixed { angle: 25.0 });
        assert_eq!(FieldAngle::from_parts(0.0, 35.0, 45.0), FieldAngle::Range { min: 35.0, max: 45.0 });
        assert_eq!(FieldAngle::Range { min: 35.0, max: 45.0 }.to_parts(), (0.0, 35.0, 45.0));
    }

    #[test]
    fn test_clamp_field_angle() {
        assert_eq!(par56().clamp_field_angle(60.0), 25.0);
        assert_eq!(zoom_profile().clamp_field_angle(60.0), 45.0);
        assert_eq!(zoom_profile().clamp_field_angle(10.0), 35.0);
        assert_eq!(zoom_profile().clamp_field_angle(40.0), 40.0);
        assert_eq!(zoom_profile().default_field_angle(), 45.0);
    }

    #[test]
    fn test_same_as_matches_nan_angles() {
        let mut broken = zoom_profile();
        broken.field_angle = FieldAngle::Range { min: f32::NAN, max: f32::NAN };
        assert_ne!(broken, broken.clone());
        assert!(broken.same_as(&broken.clone()));
        assert!(!broken.same_as(&zoom_profile()));
        assert!(!broken.field_angle.is_finite());

        assert!(zoom_profile().same_as(&zoom_profile()));
        assert!(!zoom_profile().same_as(&par56()));
    }

    #[test]
    fn test_shape_ordinals() {
        assert_eq!(FixtureShape::Heptagon.ordinal(), 6);
        assert_eq!(FixtureShape::from_ordinal(3), Some(FixtureShape::Diamond));
        assert_eq!(FixtureShape::from_ordinal(10), None);
        assert_eq!(FixtureShape::from_ordinal(-1), None);
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(Rgb::YELLOW.contrast_text_color(), Rgb::BLACK);
        assert_eq!(Rgb::new(0, 0, 128).contrast_text_color(), Rgb::WHITE);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = zoom_profile();
        let mut copy = original.clone();
        copy.display_name.push_str(" (edited)");
        assert_ne!(original, copy);
        assert_eq!(original.display_name, "Zoom profile");
    }
}
