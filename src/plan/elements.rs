//! Placed stage elements: mounting rails, fixtures and text labels

use crate::draw::geometry::Rect;
use super::definition::{FixtureDefinition, Rgb};
use serde::{Deserialize, Serialize};

/// Thickness of a mounting rail across its length, in plan units
pub const RAIL_THICKNESS: i32 = 10;
/// Side length of a fixture icon, in plan units
pub const FIXTURE_SIZE: i32 = 30;

/// Integer grid cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        GridPos { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum Orientation {
    #[default]
    Horizontal = 0,
    Vertical = 1,
}

impl Orientation {
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Mounting rail (batten) that fixtures hang from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountingRail {
    pub position: GridPos,
    /// Length in cm
    pub length: i32,
    pub orientation: Orientation,
    /// Height above the floor in cm
    pub height_from_floor: i32,
}

impl MountingRail {
    pub fn new(position: GridPos, length: i32, orientation: Orientation, height_from_floor: i32) -> Self {
        MountingRail { position, length, orientation, height_from_floor }
    }

    pub fn bounds(&self) -> Rect {
        let (w, h) = match self.orientation {
            Orientation::Horizontal => (self.length, RAIL_THICKNESS),
            Orientation::Vertical => (RAIL_THICKNESS, self.length),
        };
        Rect::new(self.position.x as f64, self.position.y as f64, w as f64, h as f64)
    }
}

/// A light placed on the plan
///
/// Deserializing goes through [`Fixture::from_parts`], so intensity and
/// field angle are clamped however the fixture arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FixtureFields")]
pub struct Fixture {
    pub position: GridPos,
    pub definition: FixtureDefinition,
    pub beam_tint: Rgb,
    /// Pan in degrees
    pub rotation: f32,
    /// Tilt in degrees
    pub tilt: f32,
    pub field_angle: f32,
    pub connection_id: String,
    beam_intensity: i32,
}

#[derive(Deserialize)]
struct FixtureFields {
    position: GridPos,
    definition: FixtureDefinition,
    beam_tint: Rgb,
    #[serde(default)]
    rotation: f32,
    #[serde(default)]
    tilt: f32,
    field_angle: f32,
    #[serde(default)]
    connection_id: String,
    beam_intensity: i32,
}

impl From<FixtureFields> for Fixture {
    fn from(fields: FixtureFields) -> Self {
        Fixture::from_parts(
            fields.position,
            fields.definition,
            fields.beam_tint,
            fields.rotation,
            fields.tilt,
            fields.field_angle,
            fields.connection_id,
            fields.beam_intensity,
        )
    }
}

impl Fixture {
    /// Place a fixture using a private copy of `definition`
    pub fn place(position: GridPos, definition: &FixtureDefinition) -> Self {
        Fixture {
            position,
            definition: definition.clone(),
            beam_tint: Rgb::YELLOW,
            rotation: 0.0,
            tilt: 0.0,
            field_angle: definition.default_field_angle(),
            connection_id: String::new(),
            beam_intensity: 100,
        }
    }

    /// Rebuild a fixture with every attribute given, as read from a file
    ///
    /// Intensity is clamped to 0..=100 and the field angle to what the
    /// definition allows.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        position: GridPos,
        definition: FixtureDefinition,
        beam_tint: Rgb,
        rotation: f32,
        tilt: f32,
        field_angle: f32,
        connection_id: String,
        beam_intensity: i32,
    ) -> Self {
        Fixture {
            position,
            field_angle: definition.clamp_field_angle(field_angle),
            definition,
            beam_tint,
            rotation,
            tilt,
            connection_id,
            beam_intensity: beam_intensity.clamp(0, 100),
        }
    }

    pub fn beam_intensity(&self) -> i32 {
        self.beam_intensity
    }

    pub fn set_beam_intensity(&mut self, intensity: i32) {
        self.beam_intensity = intensity.clamp(0, 100);
    }

    /// Choose the field angle, limited to what the definition allows
    pub fn set_field_angle(&mut self, angle: f32) {
        self.field_angle = self.definition.clamp_field_angle(angle);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x as f64,
            self.position.y as f64,
            FIXTURE_SIZE as f64,
            FIXTURE_SIZE as f64,
        )
    }
}

/// Free text placed on the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub position: GridPos,
    pub text: String,
    pub color: Rgb,
    pub font_size: i32,
    pub font_family: String,
}

impl TextLabel {
    pub fn new(
        position: GridPos,
        text: impl Into<String>,
        color: Rgb,
        font_size: i32,
        font_family: impl Into<String>,
    ) -> Self {
        TextLabel {
            position,
            text: text.into(),
            color,
            font_size,
            font_family: font_family.into(),
        }
    }
}

/// Any element of a scene plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageElement {
    Rail(MountingRail),
    Fixture(Fixture),
    Label(TextLabel),
}

impl StageElement {
    pub fn position(&self) -> GridPos {
        match self {
            StageElement::Rail(rail) => rail.position,
            StageElement::Fixture(fixture) => fixture.position,
            StageElement::Label(label) => label.position,
        }
    }
}

impl From<MountingRail> for StageElement {
    fn from(rail: MountingRail) -> Self {
        StageElement::Rail(rail)
    }
}

impl From<Fixture> for StageElement {
    fn from(fixture: Fixture) -> Self {
        StageElement::Fixture(fixture)
    }
}

impl From<TextLabel> for StageElement {
    fn from(label: TextLabel) -> Self {
        StageElement::Label(label)
    }
}
