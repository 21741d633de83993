// ABOUTME: MyFitnessPal body tools: weight log entries over a bounded date range
// ABOUTME: Projects the provider's date-to-value map into a date-ordered entry list
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Body measurement tools.

use crate::constants::tools::GET_WEIGHT_LOG;
use crate::providers::MyFitnessPalApi;
use crate::tools::{
    date_range_tool, json_result, range_args, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use serde_json::{json, Value};

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_range_tool(GET_WEIGHT_LOG, "Weight log entries over a date range."),
        ToolHandler::MyFitnessPal(get_weight_log),
    );
}

fn get_weight_log<'a>(
    client: &'a dyn MyFitnessPalApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let (start, end) = range_args(args)?;
        let measurements = client.get_measurements("Weight", start, end).await?;
        let mut entries: Vec<(NaiveDate, f64)> = measurements.into_iter().collect();
        entries.sort_by_key(|(date, _)| *date);
        let rows: Vec<Value> = entries
            .iter()
            .map(|(date, weight)| json!({ "date": date.to_string(), "weight": weight }))
            .collect();
        json_result(&Value::Array(rows))
    })
}
