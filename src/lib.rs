//! Stage light planner core
//!
//! Geometry for drawing fixtures and their beams on a stage plan, the scene
//! model those drawings come from, and the binary file formats the model is
//! saved in.
//!
//! # Example
//! ```
//! use stage_light_planner::draw::geometry::beam_footprint;
//!
//! let rect = beam_footprint(100.0, 90.0, 0.0).unwrap();
//! assert_eq!(rect.rounded(), (-100, 0, 200, 200));
//! ```

pub mod codec;
pub mod draw;
pub mod plan;
pub mod server;

pub use codec::{
    load_catalog,
    load_scene,
    save_catalog,
    save_scene,
    CodecError,
};
pub use draw::geometry::{beam_footprint, regular_polygon, BeamDrawing, GeometryError, Point, Rect};
pub use plan::{
    FieldAngle,
    Fixture,
    FixtureDefinition,
    FixtureShape,
    GridPos,
    MountingRail,
    Orientation,
    Rgb,
    ScenePlan,
    StageElement,
    TextLabel,
};
