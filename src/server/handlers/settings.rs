//! Configure handler

use crate::server::protocol::{parse_optional_params, Response};
use crate::server::state::ServerState;
use crate::plan::Rgb;
use serde::Deserialize;

/// Handle Configure request - updates any given config field, returns the result
pub fn handle_configure(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize, Default)]
    struct ConfigureParams {
        max_beam_alpha: Option<u8>,
        default_beam_tint: Option<Rgb>,
    }

    let params: ConfigureParams = match parse_optional_params(params) {
        Ok(p) => p,
        Err(e) => return Response::invalid_params(id, "{max_beam_alpha?, default_beam_tint?}", e),
    };

    if let Some(alpha) = params.max_beam_alpha {
        state.config.max_beam_alpha = alpha;
    }
    if let Some(tint) = params.default_beam_tint {
        state.config.default_beam_tint = tint;
    }

    Response::from_serializable(id, &state.config)
}
