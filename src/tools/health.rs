// ABOUTME: Garmin health tools: HRV, stress, readiness, VO2 max, training status, respiration, SpO2
// ABOUTME: All single-date pass-through operations with no shaping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Health metric tools.

use crate::constants::tools::{
    GET_HRV, GET_MAX_METRICS, GET_RESPIRATION, GET_SPO2, GET_STRESS, GET_TRAINING_READINESS,
    GET_TRAINING_STATUS,
};
use crate::providers::GarminApi;
use crate::tools::{
    date_arg, date_tool, json_result, HandlerResult, ToolArgs, ToolHandler, ToolRegistry,
};
use futures_util::future::BoxFuture;

pub(crate) fn register(registry: &mut ToolRegistry) {
    registry.register(
        date_tool(GET_HRV, "Heart Rate Variability data for the day."),
        ToolHandler::Garmin(get_hrv),
    );
    registry.register(
        date_tool(GET_STRESS, "Detailed stress data throughout the day."),
        ToolHandler::Garmin(get_stress),
    );
    registry.register(
        date_tool(
            GET_TRAINING_READINESS,
            "Training readiness score and contributing factors.",
        ),
        ToolHandler::Garmin(get_training_readiness),
    );
    registry.register(
        date_tool(GET_MAX_METRICS, "VO2 max and fitness age estimates."),
        ToolHandler::Garmin(get_max_metrics),
    );
    registry.register(
        date_tool(GET_TRAINING_STATUS, "Current training status and load."),
        ToolHandler::Garmin(get_training_status),
    );
    registry.register(
        date_tool(GET_RESPIRATION, "Respiration rate data throughout the day."),
        ToolHandler::Garmin(get_respiration),
    );
    registry.register(
        date_tool(
            GET_SPO2,
            "Blood oxygen saturation (SpO2) data throughout the day.",
        ),
        ToolHandler::Garmin(get_spo2),
    );
}

fn get_hrv<'a>(client: &'a dyn GarminApi, args: &'a ToolArgs) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_hrv_data(date).await?)
    })
}

fn get_stress<'a>(client: &'a dyn GarminApi, args: &'a ToolArgs) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_stress_data(date).await?)
    })
}

fn get_training_readiness<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_training_readiness(date).await?)
    })
}

fn get_max_metrics<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_max_metrics(date).await?)
    })
}

fn get_training_status<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_training_status(date).await?)
    })
}

fn get_respiration<'a>(
    client: &'a dyn GarminApi,
    args: &'a ToolArgs,
) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_respiration_data(date).await?)
    })
}

fn get_spo2<'a>(client: &'a dyn GarminApi, args: &'a ToolArgs) -> BoxFuture<'a, HandlerResult> {
    Box::pin(async move {
        let date = date_arg(args, "date")?;
        json_result(&client.get_spo2_data(date).await?)
    })
}
