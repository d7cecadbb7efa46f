//! Plan editing: GetPlan, GetCatalog, AddElement, RemoveElement, PlaceFixture

use crate::plan::{Fixture, GridPos, StageElement};
use crate::server::protocol::{error_codes, parse_params, Response};
use crate::server::state::ServerState;
use serde::Deserialize;

/// Handle GetPlan request - returns every element of the open plan
pub fn handle_get_plan(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    Response::from_serializable(id, &state.plan)
}

/// Handle GetCatalog request - returns the fixture palette
pub fn handle_get_catalog(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    Response::from_serializable(id, &state.catalog)
}

/// Handle AddElement request - appends a fully specified element
pub fn handle_add_element(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct AddParams {
        element: StageElement,
    }

    let params: AddParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{element}", e),
    };

    let index = state.plan.add(params.element);
    Response::success(id, serde_json::json!({ "index": index }))
}

/// Handle RemoveElement request - removes the element at an index
pub fn handle_remove_element(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct RemoveParams {
        index: usize,
    }

    let params: RemoveParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{index: number}", e),
    };

    match state.plan.remove(params.index) {
        Some(removed) => Response::success(id, serde_json::json!({ "removed": removed })),
        None => Response::error(id, error_codes::INDEX_OUT_OF_RANGE,
            format!("No element at index {} (plan has {})", params.index, state.plan.len())),
    }
}

/// Handle PlaceFixture request - places a copy of a palette entry on the plan
pub fn handle_place_fixture(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct PlaceParams {
        catalog_index: usize,
        x: i32,
        y: i32,
    }

    let params: PlaceParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{catalog_index, x, y}", e),
    };

    let Some(definition) = state.catalog.get(params.catalog_index) else {
        return Response::error(id, error_codes::INDEX_OUT_OF_RANGE,
            format!("No fixture definition at index {} (palette has {})",
                params.catalog_index, state.catalog.len()));
    };

    let mut fixture = Fixture::place(GridPos::new(params.x, params.y), definition);
    fixture.beam_tint = state.config.default_beam_tint;

    let index = state.plan.add(fixture);
    Response::success(id, serde_json::json!({ "index": index }))
}
