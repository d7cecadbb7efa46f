// End-to-end request flow through the JSON-RPC plan server
use serde_json::json;
use stage_light_planner::codec::save_catalog;
use stage_light_planner::plan::{FixtureDefinition, FixtureShape, Rgb};
use stage_light_planner::server::{error_codes, handle_line, Response, ServerState};
use std::fs;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("slp_server_{}_{}", std::process::id(), name))
}

fn call(state: &mut ServerState, method: &str, params: serde_json::Value) -> Response {
    let line = json!({ "id": 1, "method": method, "params": params }).to_string();
    handle_line(state, &line)
}

fn result(response: Response) -> serde_json::Value {
    assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
    response.result.expect("missing result")
}

fn error_code(response: &Response) -> i32 {
    response.error.as_ref().expect("expected an error").code
}

#[test]
fn test_build_save_and_reload_plan() {
    let mut state = ServerState::default();

    let palette = scratch_path("palette");
    let palette = save_catalog(&palette, &[FixtureDefinition::ranged(
        "Zoom profile", "ZP", FixtureShape::Heptagon, Rgb::new(64, 128, 192), 15.0, 30.0,
    )])
    .unwrap();

    let loaded = result(call(&mut state, "LoadCatalog", json!({ "file_path": palette })));
    assert_eq!(loaded["count"], 1);

    let rail = json!({
        "kind": "rail",
        "position": { "x": 0, "y": 0 },
        "length": 600,
        "orientation": "Horizontal",
        "height_from_floor": 500
    });
    result(call(&mut state, "AddElement", json!({ "element": rail })));

    let placed = result(call(&mut state, "PlaceFixture", json!({ "catalog_index": 0, "x": 100, "y": -10 })));
    assert_eq!(placed["index"], 1);

    let beams = result(call(&mut state, "GetBeams", json!(null)));
    let beam = &beams[0]["beam"];
    assert_eq!(beams[0]["index"], 1);
    assert!(beam["footprint"]["width"].as_f64().unwrap() > 0.0);
    assert_eq!(beam["fill"][3], 128);

    let plan_path = scratch_path("show");
    let saved = result(call(&mut state, "SavePlan", json!({ "file_path": plan_path })));
    let written = saved["file_path"].as_str().unwrap().to_string();
    assert!(written.ends_with(".slpsp"));

    result(call(&mut state, "NewPlan", json!(null)));
    let empty = result(call(&mut state, "GetPlan", json!(null)));
    assert_eq!(empty["elements"].as_array().unwrap().len(), 0);

    let reloaded = result(call(&mut state, "LoadPlan", json!({ "file_path": written })));
    assert_eq!(reloaded["element_count"], 2);
    assert_eq!(reloaded["catalog_count"], 1);

    fs::remove_file(&written).ok();
    fs::remove_file(&palette).ok();
}

#[test]
fn test_failed_load_keeps_live_plan() {
    let mut state = ServerState::default();
    let label = json!({
        "kind": "label",
        "position": { "x": 1, "y": 2 },
        "text": "DSR",
        "color": { "r": 0, "g": 0, "b": 0 },
        "font_size": 12,
        "font_family": "Arial"
    });
    result(call(&mut state, "AddElement", json!({ "element": label })));

    let bogus = scratch_path("future.slpsp");
    fs::write(&bogus, [9u8, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();

    let response = call(&mut state, "LoadPlan", json!({ "file_path": bogus }));
    assert_eq!(error_code(&response), error_codes::UNSUPPORTED_VERSION);
    assert_eq!(state.plan.len(), 1);

    fs::remove_file(&bogus).ok();
}

#[test]
fn test_save_without_path_fails() {
    let mut state = ServerState::default();
    let response = call(&mut state, "SavePlan", json!({}));
    assert_eq!(error_code(&response), error_codes::NO_FILE_PATH);
}

#[test]
fn test_geometry_requests() {
    let mut state = ServerState::default();

    let rect = result(call(&mut state, "BeamFootprint", json!({ "mount_height": 100.0, "field_angle": 90.0, "tilt": 0.0 })));
    assert!((rect["width"].as_f64().unwrap() - 200.0).abs() < 1e-9);

    let bad = call(&mut state, "BeamFootprint", json!({ "mount_height": -1.0, "field_angle": 90.0 }));
    assert_eq!(error_code(&bad), error_codes::GEOMETRY_FAILED);

    let points = result(call(&mut state, "RegularPolygon", json!({ "sides": 6, "width": 50.0, "height": 50.0 })));
    assert_eq!(points.as_array().unwrap().len(), 6);

    let too_few = call(&mut state, "RegularPolygon", json!({ "sides": 2, "width": 50.0, "height": 50.0 }));
    assert_eq!(error_code(&too_few), error_codes::INVALID_PARAMS);
}

#[test]
fn test_protocol_errors() {
    let mut state = ServerState::default();

    let garbage = handle_line(&mut state, "{not json");
    assert_eq!(error_code(&garbage), error_codes::PARSE_ERROR);

    let unknown = call(&mut state, "Teleport", json!(null));
    assert_eq!(error_code(&unknown), error_codes::METHOD_NOT_FOUND);

    let out_of_range = call(&mut state, "RemoveElement", json!({ "index": 3 }));
    assert_eq!(error_code(&out_of_range), error_codes::INDEX_OUT_OF_RANGE);

    let no_palette = call(&mut state, "PlaceFixture", json!({ "catalog_index": 0, "x": 0, "y": 0 }));
    assert_eq!(error_code(&no_palette), error_codes::INDEX_OUT_OF_RANGE);
}

#[test]
fn test_configure_changes_beam_alpha() {
    let mut state = ServerState::default();
    let config = result(call(&mut state, "Configure", json!({ "max_beam_alpha": 200 })));
    assert_eq!(config["max_beam_alpha"], 200);
    assert_eq!(state.config.max_beam_alpha, 200);
}

#[test]
fn test_icon_for_placed_fixture() {
    let mut state = ServerState::default();
    state.catalog.push(FixtureDefinition::fixed(
        "Profile", "P1", FixtureShape::Hexagon, Rgb::new(0, 0, 128), 26.0,
    ));
    let placed = result(call(&mut state, "PlaceFixture", json!({ "catalog_index": 0, "x": 0, "y": 0 })));
    let index = placed["index"].clone();

    let icon = result(call(&mut state, "GetIcon", json!({ "index": index, "width": 30.0, "height": 30.0 })));
    assert_eq!(icon["outline"]["kind"], "polygon");
    assert_eq!(icon["outline"]["points"].as_array().unwrap().len(), 6);
    assert_eq!(icon["label"], "P1");
    assert_eq!(icon["label_color"], json!({ "r": 255, "g": 255, "b": 255 }));
}

#[test]
fn test_added_fixture_is_clamped() {
    let mut state = ServerState::default();
    let fixture = json!({
        "kind": "fixture",
        "position": { "x": 0, "y": 0 },
        "definition": {
            "display_name": "Zoom profile",
            "label": "ZP",
            "shape": "Heptagon",
            "display_color": { "r": 64, "g": 128, "b": 192 },
            "field_angle": { "kind": "range", "min": 35.0, "max": 45.0 }
        },
        "beam_tint": { "r": 255, "g": 255, "b": 0 },
        "rotation": 0.0,
        "tilt": 0.0,
        "field_angle": 170.0,
        "connection_id": "",
        "beam_intensity": 500
    });
    result(call(&mut state, "AddElement", json!({ "element": fixture })));

    let stored = state.plan.fixtures().next().unwrap();
    assert_eq!(stored.beam_intensity(), 100);
    assert_eq!(stored.field_angle, 45.0);

    let plan = result(call(&mut state, "GetPlan", json!(null)));
    assert_eq!(plan["elements"][0]["beam_intensity"], 100);
}

#[test]
fn test_malformed_save_params_keep_plan_path() {
    let mut state = ServerState::default();
    let first = scratch_path("kept_path");
    let saved = result(call(&mut state, "SavePlan", json!({ "file_path": first })));
    let written = PathBuf::from(saved["file_path"].as_str().unwrap());

    let response = call(&mut state, "SavePlan", json!({ "file_path": 42 }));
    assert_eq!(error_code(&response), error_codes::INVALID_PARAMS);
    assert_eq!(state.plan_path.as_deref(), Some(written.as_path()));

    // null params fall back to the remembered path
    let again = result(call(&mut state, "SavePlan", json!(null)));
    assert_eq!(again["file_path"], saved["file_path"]);

    fs::remove_file(&written).ok();
}
