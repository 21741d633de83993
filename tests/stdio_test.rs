// ABOUTME: Integration tests for the JSON-RPC request handling behind the stdio transport
// ABOUTME: Covers initialize, tools/list, tools/call framing, notifications, and unknown methods
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(missing_docs)]

mod common;

use common::dispatcher_with;
use serde_json::{json, Value};
use std::collections::HashMap;
use wellness_mcp_server::jsonrpc::{JsonRpcRequest, INVALID_PARAMS, METHOD_NOT_FOUND};
use wellness_mcp_server::mcp::stdio::{process_request, MCP_PROTOCOL_VERSION};
use wellness_mcp_server::mcp::ToolDispatcher;

fn dispatcher() -> ToolDispatcher {
    dispatcher_with(json!({"totalSteps": 5000}), Value::Null, HashMap::new())
}

fn request(method: &str, params: Option<Value>, id: Option<Value>) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id,
    }))
    .unwrap()
}

#[tokio::test]
async fn initialize_reports_protocol_and_server_info() {
    let response = process_request(&dispatcher(), request("initialize", None, Some(json!(1))))
        .await
        .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
    assert!(result["capabilities"]["tools"].is_object());
    assert_eq!(result["serverInfo"]["name"], "wellness-mcp-server");
}

#[tokio::test]
async fn tools_list_advertises_all_seventeen() {
    let response = process_request(&dispatcher(), request("tools/list", None, Some(json!(2))))
        .await
        .unwrap();
    let tools = response.result.unwrap();
    assert_eq!(tools["tools"].as_array().unwrap().len(), 17);
}

#[tokio::test]
async fn tools_call_wraps_content_without_the_error_flag() {
    let params = json!({
        "name": "get_daily_stats",
        "arguments": {"date": "2026-02-20"},
    });
    let response = process_request(
        &dispatcher(),
        request("tools/call", Some(params), Some(json!(3))),
    )
    .await
    .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    let content = result["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");
    let text = content[0]["text"].as_str().unwrap();
    assert!(text.contains("totalSteps"), "text was: {text}");
}

#[tokio::test]
async fn tool_failures_are_still_successful_rpc_responses() {
    let params = json!({
        "name": "get_daily_stats",
        "arguments": {"date": "junk"},
    });
    let response = process_request(
        &dispatcher(),
        request("tools/call", Some(params), Some(json!(4))),
    )
    .await
    .unwrap();
    assert!(response.error.is_none());
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Invalid argument: "), "text was: {text}");
}

#[tokio::test]
async fn tools_call_without_params_is_invalid() {
    let response = process_request(&dispatcher(), request("tools/call", None, Some(json!(5))))
        .await
        .unwrap();
    assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
}

#[tokio::test]
async fn tools_call_without_a_name_is_invalid() {
    let params = json!({"arguments": {"date": "2026-02-20"}});
    let response = process_request(
        &dispatcher(),
        request("tools/call", Some(params), Some(json!(6))),
    )
    .await
    .unwrap();
    assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
}

#[tokio::test]
async fn non_string_argument_values_are_rendered_as_json_text() {
    // A numeric date is not a valid date string, and the validator should see
    // the rendered text rather than a type error.
    let params = json!({
        "name": "get_daily_stats",
        "arguments": {"date": 20260220},
    });
    let response = process_request(
        &dispatcher(),
        request("tools/call", Some(params), Some(json!(7))),
    )
    .await
    .unwrap();
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("20260220"), "text was: {text}");
}

#[tokio::test]
async fn unknown_methods_get_method_not_found() {
    let response = process_request(
        &dispatcher(),
        request("resources/list", None, Some(json!(8))),
    )
    .await
    .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, METHOD_NOT_FOUND);
    assert!(error.message.contains("resources/list"));
}

#[tokio::test]
async fn notifications_produce_no_response() {
    let response = process_request(
        &dispatcher(),
        request("notifications/initialized", None, None),
    )
    .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn ping_answers_with_an_empty_object() {
    let response = process_request(&dispatcher(), request("ping", None, Some(json!(9))))
        .await
        .unwrap();
    assert_eq!(response.result.unwrap(), json!({}));
}
