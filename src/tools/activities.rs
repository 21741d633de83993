// ABOUTME: Garmin activity-list tool over a bounded date range
// ABOUTME: Range arguments are validated for ordering and the range cap
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Activity tools.

use crate::constants::tools::GET_ACTIVITIES;
use crate::providers::GarminApi;
use crate::tools::{
    date_range_tool, json_result, range_args, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_range_tool(
            GET_ACTIVITIES,
            "Workouts in a date range with type, duration, heart rate, distance, and pace.",
        ),
        ToolHandler::Garmin(get_activities),
    );
}

fn get_activities<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let (start, end) = range_args(args)?;
        json_result(&client.get_activities_by_date(start, end).await?)
    })
}
