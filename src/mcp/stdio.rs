// ABOUTME: Newline-delimited JSON-RPC stdio transport for the MCP server
// ABOUTME: Handles initialize, tools/list, and tools/call; notifications get no response
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Stdio transport.
//!
//! Requests arrive one per line on stdin; responses leave one per line on
//! stdout. Logging goes to stderr so the protocol stream stays clean.

use crate::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::mcp::dispatcher::ToolDispatcher;
use crate::tools::ToolArgs;
use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

/// MCP protocol revision this server implements.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Serve MCP over stdin/stdout until stdin closes.
///
/// # Errors
///
/// Returns an error only on stdio failures; tool and protocol errors are
/// answered in-band.
pub async fn serve(dispatcher: &ToolDispatcher) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => process_request(dispatcher, request).await,
            Err(err) => {
                warn!("Malformed JSON-RPC request: {err}");
                Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
            }
        };
        if let Some(response) = response {
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            stdout.write_all(&payload).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Handle one JSON-RPC request. Returns `None` for notifications.
pub async fn process_request(
    dispatcher: &ToolDispatcher,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    if request.is_notification() {
        debug!("Notification received: {}", request.method);
        return None;
    }
    let id = request.id.clone();
    match request.method.as_str() {
        "initialize" => Some(JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        )),
        "ping" => Some(JsonRpcResponse::success(id, json!({}))),
        "tools/list" => Some(JsonRpcResponse::success(
            id,
            json!({ "tools": dispatcher.list_tools() }),
        )),
        "tools/call" => Some(handle_tools_call(dispatcher, id, request.params).await),
        other => {
            warn!("Unsupported method: {other}");
            Some(JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ))
        }
    }
}

async fn handle_tools_call(
    dispatcher: &ToolDispatcher,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    let Some(params) = params else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing parameters for tools/call");
    };
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing tool name");
    };
    let arguments = tool_arguments(params.get("arguments"));
    let content = dispatcher.call_tool(name, &arguments).await;
    JsonRpcResponse::success(id, json!({ "content": content, "isError": false }))
}

/// Project the `arguments` object into the string-keyed, string-valued map
/// handlers consume. Non-string scalars are rendered as their JSON text.
fn tool_arguments(raw: Option<&Value>) -> ToolArgs {
    let mut args = ToolArgs::new();
    if let Some(Value::Object(map)) = raw {
        for (key, value) in map {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            args.insert(key.clone(), rendered);
        }
    }
    args
}
