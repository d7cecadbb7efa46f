//! Wire types for the plan server
//!
//! Requests and responses are JSON-RPC shaped objects, one per line.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// Reply to one request; exactly one of `result` and `error` is set
#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Response { id, result: Some(result), error: None }
    }

    /// Success carrying any serializable model value
    ///
    /// Falls back to `INTERNAL_ERROR` if the value cannot become JSON.
    pub fn from_serializable<T: Serialize>(id: Option<Value>, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Response::success(id, value),
            Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, format!("Failed to encode result: {}", e)),
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Response { id, result: None, error: Some(ErrorResponse { code, message }) }
    }

    /// `INVALID_PARAMS` naming the expected shape and what serde rejected
    pub fn invalid_params(id: Option<Value>, expected: &str, err: serde_json::Error) -> Self {
        Response::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("Invalid params: expected {}: {}", expected, err),
        )
    }
}

pub mod error_codes {
    // JSON-RPC reserved range
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Planner failures
    pub const NO_FILE_PATH: i32 = 2;
    pub const UNSUPPORTED_VERSION: i32 = 3;
    pub const SAVE_FAILED: i32 = 4;
    pub const LOAD_FAILED: i32 = 5;
    pub const GEOMETRY_FAILED: i32 = 6;
    pub const INDEX_OUT_OF_RANGE: i32 = 7;
}

/// Decode request params into `T`, treating missing params as `null`
pub fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(params.unwrap_or(Value::Null))
}

/// Like [`parse_params`], but absent or `null` params give `T::default()`
pub fn parse_optional_params<T: DeserializeOwned + Default>(params: Option<Value>) -> Result<T, serde_json::Error> {
    match params {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}
