// ABOUTME: JSON-RPC 2.0 request, response, and error types for the stdio transport
// ABOUTME: Provides the request/response envelope consumed by the MCP serve loop
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! JSON-RPC 2.0 foundation.
//!
//! Strongly-typed envelope for the stdio transport. Exactly one of `result`
//! or `error` is present on a response; notifications (requests without an
//! `id`) never receive a response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 version string
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard error code: malformed JSON payload
pub const PARSE_ERROR: i32 = -32700;
/// Standard error code: structurally invalid request
pub const INVALID_REQUEST: i32 = -32600;
/// Standard error code: unknown method
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Standard error code: invalid method parameters
pub const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Method name to invoke
    pub method: String,
    /// Optional parameters for the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Request identifier; absent for notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Whether this request is a notification (no id, no response expected).
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Result of the method call (mutually exclusive with `error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error information (mutually exclusive with `result`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    /// Request identifier for correlation
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Additional error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response.
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requests_without_id_are_notifications() {
        let request: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(request.is_notification());
    }

    #[test]
    fn success_and_error_are_mutually_exclusive() {
        let ok = JsonRpcResponse::success(Some(json!(1)), json!({"status": "ok"}));
        assert!(ok.result.is_some() && ok.error.is_none());

        let err = JsonRpcResponse::error(Some(json!(1)), METHOD_NOT_FOUND, "Method not found");
        assert!(err.result.is_none() && err.error.is_some());

        let body = serde_json::to_string(&err).unwrap();
        assert!(body.contains("-32601"));
        assert!(!body.contains("result"));
    }
}
