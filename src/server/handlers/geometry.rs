//! Geometry queries: BeamFootprint, RegularPolygon, GetBeams, GetIcon

use crate::draw::geometry::{beam_footprint, regular_polygon, Point};
use crate::draw::shapes::shape_outline;
use crate::plan::StageElement;
use crate::server::protocol::{error_codes, parse_params, Response};
use crate::server::state::ServerState;
use serde::Deserialize;

/// Handle BeamFootprint request - raw footprint for explicit inputs
pub fn handle_beam_footprint(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    #[derive(Deserialize)]
    struct FootprintParams {
        mount_height: f64,
        field_angle: f64,
        #[serde(default)]
        tilt: f64,
    }

    let params: FootprintParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{mount_height, field_angle, tilt}", e),
    };

    match beam_footprint(params.mount_height, params.field_angle, params.tilt) {
        Ok(rect) => Response::from_serializable(id, &rect),
        Err(e) => Response::error(id, error_codes::GEOMETRY_FAILED, e.to_string()),
    }
}

/// Handle RegularPolygon request - polygon vertices for a box
pub fn handle_regular_polygon(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    #[derive(Deserialize)]
    struct PolygonParams {
        sides: usize,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        angle_offset: f64,
    }

    let params: PolygonParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{sides, width, height}", e),
    };

    // The generator panics below 3 sides; a remote caller gets an error instead
    if params.sides < 3 {
        return Response::error(id, error_codes::INVALID_PARAMS,
            format!("A polygon needs at least 3 sides, got {}", params.sides));
    }

    let points = regular_polygon(
        params.sides,
        Point::new(params.x, params.y),
        params.width,
        params.height,
        params.angle_offset,
    );
    Response::from_serializable(id, &points)
}

/// Handle GetBeams request - beam drawing for every fixture in the plan
///
/// Fixtures not hanging from a rail report `beam: null`; fixtures whose
/// beam cannot reach the floor report an `error` string.
pub fn handle_get_beams(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let max_alpha = state.config.max_beam_alpha;

    let beams: Vec<serde_json::Value> = state
        .plan
        .iter()
        .enumerate()
        .filter_map(|(index, element)| match element {
            StageElement::Fixture(fixture) => Some((index, fixture)),
            _ => None,
        })
        .map(|(index, fixture)| match state.plan.beam_for(fixture, max_alpha) {
            None => serde_json::json!({ "index": index, "beam": null }),
            Some(Ok(beam)) => serde_json::json!({ "index": index, "beam": beam }),
            Some(Err(e)) => serde_json::json!({ "index": index, "beam": null, "error": e.to_string() }),
        })
        .collect();

    Response::success(id, serde_json::Value::Array(beams))
}

/// Handle GetIcon request - icon outline of the fixture at an index
pub fn handle_get_icon(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct IconParams {
        index: usize,
        width: f64,
        height: f64,
    }

    let params: IconParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{index, width, height}", e),
    };

    match state.plan.get(params.index) {
        Some(StageElement::Fixture(fixture)) => {
            let outline = shape_outline(fixture.definition.shape, params.width, params.height);
            Response::success(id, serde_json::json!({
                "outline": outline,
                "color": fixture.definition.display_color,
                "label": fixture.definition.label,
                "label_color": fixture.definition.display_color.contrast_text_color()
            }))
        }
        _ => Response::error(id, error_codes::INDEX_OUT_OF_RANGE,
            format!("No fixture at index {}", params.index)),
    }
}
