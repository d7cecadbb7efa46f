//! Scene model
//!
//! # Submodules
//! - `definition` - Fixture definitions, shapes, colors and field angles
//! - `elements` - Rails, fixtures and labels placed on a plan
//! - `scene` - The plan itself

mod definition;
mod elements;
mod scene;

pub use definition::{
    FieldAngle,
    FixtureDefinition,
    FixtureShape,
    Rgb,
};

pub use elements::{
    Fixture,
    GridPos,
    MountingRail,
    Orientation,
    StageElement,
    TextLabel,
    FIXTURE_SIZE,
    RAIL_THICKNESS,
};

pub use scene::ScenePlan;
