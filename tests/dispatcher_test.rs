// ABOUTME: End-to-end dispatch tests over stub provider clients
// ABOUTME: Exercises success shaping and proves every failure becomes a text response
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(missing_docs)]

mod common;

use common::{args, date, dispatcher_with, failing_dispatcher, text_of};
use serde_json::{json, Value};
use std::collections::HashMap;
use wellness_mcp_server::constants::tools;

fn garmin_dispatcher(payload: Value) -> wellness_mcp_server::mcp::ToolDispatcher {
    dispatcher_with(payload, Value::Null, HashMap::new())
}

#[tokio::test]
async fn daily_stats_returns_the_payload_as_pretty_json() {
    let dispatcher = garmin_dispatcher(json!({"totalSteps": 5000}));
    let content = dispatcher
        .call_tool(tools::GET_DAILY_STATS, &args(&[("date", "2026-02-20")]))
        .await;
    let text = text_of(&content);
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({"totalSteps": 5000})
    );
    // 2-space indentation is part of the response contract.
    assert!(text.contains("{\n  \"totalSteps\": 5000\n}"), "text was: {text}");
}

#[tokio::test]
async fn unknown_tool_is_answered_in_band() {
    let dispatcher = garmin_dispatcher(Value::Null);
    let content = dispatcher.call_tool("get_blood_pressure", &args(&[])).await;
    assert_eq!(text_of(&content), "Unknown tool: get_blood_pressure");
}

#[tokio::test]
async fn auth_failure_text_is_the_verbatim_guidance() {
    let message = "Garmin tokens not found at /home/nobody/.garminconnect. \
                   Run the garmin login helper to authenticate.";
    let dispatcher = failing_dispatcher(message);
    let content = dispatcher
        .call_tool(tools::GET_SLEEP, &args(&[("date", "2026-02-20")]))
        .await;
    assert_eq!(text_of(&content), message);
}

#[tokio::test]
async fn invalid_date_gets_the_invalid_argument_prefix() {
    let dispatcher = garmin_dispatcher(Value::Null);
    let content = dispatcher
        .call_tool(tools::GET_HEART_RATE, &args(&[("date", "02/20/2026")]))
        .await;
    let text = text_of(&content);
    assert!(text.starts_with("Invalid argument: "), "text was: {text}");
    assert!(text.contains("02/20/2026"), "text was: {text}");
}

#[tokio::test]
async fn missing_required_parameter_is_a_validation_response() {
    let dispatcher = garmin_dispatcher(Value::Null);
    let content = dispatcher.call_tool(tools::GET_DAILY_STATS, &args(&[])).await;
    let text = text_of(&content);
    assert!(text.starts_with("Invalid argument: "), "text was: {text}");
    assert!(text.contains("date"), "text was: {text}");
}

#[tokio::test]
async fn reversed_range_is_rejected_before_the_provider_runs() {
    let dispatcher = garmin_dispatcher(Value::Null);
    let content = dispatcher
        .call_tool(
            tools::GET_ACTIVITIES,
            &args(&[("start_date", "2026-02-25"), ("end_date", "2026-02-01")]),
        )
        .await;
    let text = text_of(&content);
    assert!(text.starts_with("Invalid argument: "), "text was: {text}");
    assert!(text.contains("on or before"), "text was: {text}");
}

#[tokio::test]
async fn sleep_response_is_stripped_of_timeseries() {
    let dispatcher = garmin_dispatcher(json!({
        "dailySleepDTO": {"sleepTimeSeconds": 27000},
        "sleepMovement": [{"value": 1}],
        "sleepHeartRate": [{"value": 60}],
        "hrvData": [{"value": 45}],
    }));
    let content = dispatcher
        .call_tool(tools::GET_SLEEP, &args(&[("date", "2026-02-20")]))
        .await;
    let shaped: Value = serde_json::from_str(&text_of(&content)).unwrap();
    assert_eq!(shaped, json!({"dailySleepDTO": {"sleepTimeSeconds": 27000}}));
}

#[tokio::test]
async fn nutrition_diary_projects_the_day_document() {
    let day = json!({
        "meals": {"lunch": [{"name": "salad"}]},
        "totals": {"calories": 1200},
        "goals": {"calories": 2000},
        "water": 750,
        "complete": false,
    });
    let dispatcher = dispatcher_with(Value::Null, day, HashMap::new());
    let content = dispatcher
        .call_tool(tools::GET_NUTRITION_DIARY, &args(&[("date", "2026-02-20")]))
        .await;
    let shaped: Value = serde_json::from_str(&text_of(&content)).unwrap();
    assert_eq!(shaped["date"], "2026-02-20");
    assert_eq!(shaped["totals"]["calories"], 1200);
    assert_eq!(shaped["water"], 750);
    assert_eq!(shaped["complete"], false);
}

#[tokio::test]
async fn nutrition_summary_returns_one_row_per_day() {
    let day = json!({"meals": {}, "totals": {"calories": 1800}, "goals": {}});
    let dispatcher = dispatcher_with(Value::Null, day, HashMap::new());
    let content = dispatcher
        .call_tool(
            tools::GET_NUTRITION_SUMMARY,
            &args(&[("start_date", "2026-02-20"), ("end_date", "2026-02-22")]),
        )
        .await;
    let rows: Value = serde_json::from_str(&text_of(&content)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2026-02-20");
    assert_eq!(rows[2]["date"], "2026-02-22");
    for row in rows {
        assert_eq!(row["totals"]["calories"], 1800);
    }
}

#[tokio::test]
async fn misshapen_day_surfaces_the_drift_message() {
    let dispatcher = dispatcher_with(Value::Null, json!({"meals": {}}), HashMap::new());
    let content = dispatcher
        .call_tool(tools::GET_NUTRITION_DIARY, &args(&[("date", "2026-02-20")]))
        .await;
    let text = text_of(&content);
    assert!(text.contains("missing fields"), "text was: {text}");
    assert!(text.contains("2026-02-20"), "text was: {text}");
}

#[tokio::test]
async fn weight_log_entries_come_back_date_ordered() {
    let mut measurements = HashMap::new();
    measurements.insert(date("2026-02-22"), 81.2);
    measurements.insert(date("2026-02-20"), 81.6);
    let dispatcher = dispatcher_with(Value::Null, Value::Null, measurements);
    let content = dispatcher
        .call_tool(
            tools::GET_WEIGHT_LOG,
            &args(&[("start_date", "2026-02-19"), ("end_date", "2026-02-23")]),
        )
        .await;
    let rows: Value = serde_json::from_str(&text_of(&content)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], json!({"date": "2026-02-20", "weight": 81.6}));
    assert_eq!(rows[1], json!({"date": "2026-02-22", "weight": 81.2}));
}

#[tokio::test]
async fn every_single_date_garmin_tool_dispatches() {
    let dispatcher = garmin_dispatcher(json!({"ok": true}));
    for name in [
        tools::GET_DAILY_STATS,
        tools::GET_HEART_RATE,
        tools::GET_HRV,
        tools::GET_STRESS,
        tools::GET_TRAINING_READINESS,
        tools::GET_MAX_METRICS,
        tools::GET_TRAINING_STATUS,
        tools::GET_RESPIRATION,
        tools::GET_SPO2,
        tools::GET_HYDRATION,
    ] {
        let content = dispatcher
            .call_tool(name, &args(&[("date", "2026-02-20")]))
            .await;
        let shaped: Value = serde_json::from_str(&text_of(&content)).unwrap();
        assert_eq!(shaped, json!({"ok": true}), "{name}");
    }
}

#[tokio::test]
async fn every_range_garmin_tool_dispatches() {
    let dispatcher = garmin_dispatcher(json!([{"activityId": 1}]));
    for name in [
        tools::GET_ACTIVITIES,
        tools::GET_ENDURANCE_SCORE,
        tools::GET_RACE_PREDICTIONS,
    ] {
        let content = dispatcher
            .call_tool(
                name,
                &args(&[("start_date", "2026-02-01"), ("end_date", "2026-02-20")]),
            )
            .await;
        let shaped: Value = serde_json::from_str(&text_of(&content)).unwrap();
        assert_eq!(shaped, json!([{"activityId": 1}]), "{name}");
    }
}
