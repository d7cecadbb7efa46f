//! Plan server - JSON-RPC bridge between an editor shell and the core
//!
//! One request per line on stdin, one response per line on stdout.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Server state management
//! - `config` - Runtime configuration
//! - `handlers` - Request handlers organized by functionality

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod state;

pub use config::PlannerConfig;
pub use protocol::{error_codes, ErrorResponse, Request, Response};
pub use state::ServerState;

use handlers::*;

/// Route a request to its handler
pub fn dispatch(state: &mut ServerState, request: Request) -> Response {
    let Request { id, method, params } = request;

    match method.as_str() {
        "NewPlan" => handle_new_plan(state, id),
        "LoadPlan" => handle_load_plan(state, id, params),
        "SavePlan" => handle_save_plan(state, id, params),
        "LoadCatalog" => handle_load_catalog(state, id, params),
        "SaveCatalog" => handle_save_catalog(state, id, params),
        "GetPlan" => handle_get_plan(state, id),
        "GetCatalog" => handle_get_catalog(state, id),
        "AddElement" => handle_add_element(state, id, params),
        "RemoveElement" => handle_remove_element(state, id, params),
        "PlaceFixture" => handle_place_fixture(state, id, params),
        "BeamFootprint" => handle_beam_footprint(id, params),
        "RegularPolygon" => handle_regular_polygon(id, params),
        "GetBeams" => handle_get_beams(state, id),
        "GetIcon" => handle_get_icon(state, id, params),
        "Configure" => handle_configure(state, id, params),
        _ => Response::error(id, error_codes::METHOD_NOT_FOUND, format!("Unknown method: {}", method)),
    }
}

/// Parse one line and dispatch it; malformed JSON yields a parse error response
pub fn handle_line(state: &mut ServerState, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => Response::error(None, error_codes::PARSE_ERROR, format!("Failed to parse request: {}", e)),
    }
}
