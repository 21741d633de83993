// ABOUTME: Daily Garmin tools: activity totals, heart rate, and sleep for a single date
// ABOUTME: Sleep responses pass through the time-series reduction before serialization
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Daily data tools.

use crate::constants::tools::{GET_DAILY_STATS, GET_HEART_RATE, GET_SLEEP};
use crate::providers::GarminApi;
use crate::shaping::summarize_sleep;
use crate::tools::{
    date_arg, date_tool, json_result, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_tool(
            GET_DAILY_STATS,
            "Daily activity stats: steps, calories burned, stress, active minutes.",
        ),
        ToolHandler::Garmin(get_daily_stats),
    );
    registry.register(
        date_tool(
            GET_HEART_RATE,
            "Heart rate data for the day including resting HR and HR time series.",
        ),
        ToolHandler::Garmin(get_heart_rate),
    );
    registry.register(
        date_tool(
            GET_SLEEP,
            "Sleep data: duration, stages (deep/light/REM/awake), and sleep score.",
        ),
        ToolHandler::Garmin(get_sleep),
    );
}

fn get_daily_stats<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_stats(date).await?)
    })
}

fn get_heart_rate<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_heart_rates(date).await?)
    })
}

fn get_sleep<'a>(client: &'a dyn GarminApi, args: &'a ToolArgs) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&summarize_sleep(client.get_sleep_data(date).await?))
    })
}
