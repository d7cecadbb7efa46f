//! File operations: NewPlan, LoadPlan, SavePlan, LoadCatalog, SaveCatalog

use crate::codec::{load_catalog, load_scene, save_catalog, save_scene, CodecError};
use crate::server::protocol::{error_codes, parse_optional_params, parse_params, Response};
use crate::server::state::ServerState;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize)]
struct PathParams {
    file_path: String,
}

fn codec_error(id: Option<serde_json::Value>, fallback_code: i32, err: CodecError) -> Response {
    let code = if err.is_unsupported_version() {
        error_codes::UNSUPPORTED_VERSION
    } else {
        fallback_code
    };
    Response::error(id, code, err.to_string())
}

/// Handle NewPlan request - drops the open plan without saving
pub fn handle_new_plan(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    state.reset_plan();
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

/// Handle LoadPlan request - replaces the open plan with a file's contents
pub fn handle_load_plan(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: PathParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{file_path: string}", e),
    };

    log::info!("Loading plan: {}", params.file_path);

    // Decode fully before touching the live plan
    let plan = match load_scene(&params.file_path) {
        Ok(plan) => plan,
        Err(e) => {
            log::warn!("Failed to load plan {}: {}", params.file_path, e);
            return codec_error(id, error_codes::LOAD_FAILED, e);
        }
    };

    let catalog_count = plan.catalog().len();
    let element_count = plan.len();
    state.plan = plan;
    state.plan_path = Some(PathBuf::from(&params.file_path));

    Response::success(id, serde_json::json!({
        "status": "ok",
        "file_path": params.file_path,
        "element_count": element_count,
        "catalog_count": catalog_count
    }))
}

/// Handle SavePlan request - writes the open plan, optionally to a new path
pub fn handle_save_plan(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize, Default)]
    struct SaveParams {
        #[serde(default)]
        file_path: Option<String>,
    }

    let params: SaveParams = match parse_optional_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{file_path?: string}", e),
    };

    let target = match params.file_path.map(PathBuf::from).or_else(|| state.plan_path.clone()) {
        Some(path) => path,
        None => {
            return Response::error(id, error_codes::NO_FILE_PATH,
                "Plan has never been saved. Pass file_path.".to_string());
        }
    };

    match save_scene(&target, &state.plan) {
        Ok(written) => {
            let file_path = written.to_string_lossy().to_string();
            state.plan_path = Some(written);
            Response::success(id, serde_json::json!({
                "status": "ok",
                "file_path": file_path
            }))
        }
        Err(e) => codec_error(id, error_codes::SAVE_FAILED, e),
    }
}

/// Handle LoadCatalog request - replaces the fixture palette
pub fn handle_load_catalog(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: PathParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{file_path: string}", e),
    };

    match load_catalog(&params.file_path) {
        Ok(catalog) => {
            state.catalog = catalog;
            Response::success(id, serde_json::json!({
                "status": "ok",
                "count": state.catalog.len()
            }))
        }
        Err(e) => codec_error(id, error_codes::LOAD_FAILED, e),
    }
}

/// Handle SaveCatalog request - writes the fixture palette
pub fn handle_save_catalog(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: PathParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{file_path: string}", e),
    };

    match save_catalog(&params.file_path, &state.catalog) {
        Ok(written) => Response::success(id, serde_json::json!({
            "status": "ok",
            "file_path": written.to_string_lossy()
        })),
        Err(e) => codec_error(id, error_codes::SAVE_FAILED, e),
    }
}
