// ABOUTME: Garmin wellness tools: hydration intake for a single date
// ABOUTME: Pass-through operation with no shaping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Wellness tools.

use crate::constants::tools::GET_HYDRATION;
use crate::providers::GarminApi;
use crate::tools::{
    date_arg, date_tool, json_result, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_tool(GET_HYDRATION, "Hydration intake data for the day."),
        ToolHandler::Garmin(get_hydration),
    );
}

fn get_hydration<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_hydration_data(date).await?)
    })
}
