// ABOUTME: Garmin goal-tracking tools: endurance score and race predictions over a date range
// ABOUTME: Pass-through operations bound by the range cap
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Goal and trend tools.

use crate::constants::tools::{GET_ENDURANCE_SCORE, GET_RACE_PREDICTIONS};
use crate::providers::GarminApi;
use crate::tools::{
    date_range_tool, json_result, range_args, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_range_tool(GET_ENDURANCE_SCORE, "Endurance score trend over a date range."),
        ToolHandler::Garmin(get_endurance_score),
    );
    registry.register(
        date_range_tool(
            GET_RACE_PREDICTIONS,
            "Predicted race finish times (5K, 10K, half marathon, marathon) over a date range.",
        ),
        ToolHandler::Garmin(get_race_predictions),
    );
}

fn get_endurance_score<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let (start, end) = range_args(args)?;
        json_result(&client.get_endurance_score(start, end).await?)
    })
}

fn get_race_predictions<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let (start, end) = range_args(args)?;
        json_result(&client.get_race_predictions(start, end).await?)
    })
}
