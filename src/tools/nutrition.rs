// ABOUTME: MyFitnessPal nutrition tools: single-day diary and per-day totals over a range
// ABOUTME: Day documents are shape-checked before serialization to catch upstream drift
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Nutrition tools.

use crate::constants::tools::{GET_NUTRITION_DIARY, GET_NUTRITION_SUMMARY};
use crate::providers::MyFitnessPalApi;
use crate::shaping::{serialize_day, validate_day_shape};
use crate::tools::{
    date_arg, date_range_tool, date_tool, json_result, range_args, HandlerResult, ToolArgs,
    ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;
use serde_json::{json, Value};

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_tool(
            GET_NUTRITION_DIARY,
            "Full diary for a single day: meals, foods, calories, macros, and daily totals vs goals.",
        ),
        ToolHandler::MyFitnessPal(get_nutrition_diary),
    );
    registry.register(
        date_range_tool(
            GET_NUTRITION_SUMMARY,
            "Aggregated daily nutrition totals over a date range. One row per day.",
        ),
        ToolHandler::MyFitnessPal(get_nutrition_summary),
    );
}

fn get_nutrition_diary<'a>(
    client: &'a dyn MyFitnessPalApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        let day = client.get_day(date).await?;
        json_result(&serialize_day(&day, &date.to_string())?)
    })
}

fn get_nutrition_summary<'a>(
    client: &'a dyn MyFitnessPalApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        // One provider call per calendar day; the range cap bounds the loop.
        let (start, end) = range_args(args)?;
        let mut rows = Vec::new();
        let mut current = start;
        while current <= end {
            let day = client.get_day(current).await?;
            let date_str = current.to_string();
            validate_day_shape(&day, &date_str)?;
            rows.push(json!({
                "date": date_str,
                "totals": day.get("totals").cloned().unwrap_or(Value::Null),
            }));
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        json_result(&Value::Array(rows))
    })
}
