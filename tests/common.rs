// ABOUTME: Shared stub provider clients and helpers for integration tests
// ABOUTME: Stubs return canned payloads so dispatch paths run without network access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(missing_docs, dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use wellness_mcp_server::errors::{ToolError, ToolResult};
use wellness_mcp_server::mcp::{Content, ToolDispatcher};
use wellness_mcp_server::providers::factory::ClientProvider;
use wellness_mcp_server::providers::{GarminApi, MyFitnessPalApi, ProviderResult};
use wellness_mcp_server::tools::{ToolArgs, ToolRegistry};

/// Garmin stub returning the same canned payload from every accessor.
#[derive(Debug)]
pub struct StubGarmin {
    pub payload: Value,
}

#[async_trait]
impl GarminApi for StubGarmin {
    async fn get_stats(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_heart_rates(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_sleep_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_hrv_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_stress_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_training_readiness(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_max_metrics(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_training_status(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_respiration_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_spo2_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_hydration_data(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_activities_by_date(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_endurance_score(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
    async fn get_race_predictions(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> ProviderResult<Value> {
        Ok(self.payload.clone())
    }
}

/// MyFitnessPal stub with a canned day document and measurement map.
#[derive(Debug)]
pub struct StubMfp {
    pub day: Value,
    pub measurements: HashMap<NaiveDate, f64>,
}

#[async_trait]
impl MyFitnessPalApi for StubMfp {
    async fn get_day(&self, _date: NaiveDate) -> ProviderResult<Value> {
        Ok(self.day.clone())
    }
    async fn get_measurements(
        &self,
        _kind: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> ProviderResult<HashMap<NaiveDate, f64>> {
        Ok(self.measurements.clone())
    }
}

/// Client provider handing out pre-built stub clients.
pub struct StubClients {
    pub garmin: Arc<dyn GarminApi>,
    pub myfitnesspal: Arc<dyn MyFitnessPalApi>,
}

#[async_trait]
impl ClientProvider for StubClients {
    async fn garmin(&self) -> ToolResult<Arc<dyn GarminApi>> {
        Ok(Arc::clone(&self.garmin))
    }
    async fn myfitnesspal(&self) -> ToolResult<Arc<dyn MyFitnessPalApi>> {
        Ok(Arc::clone(&self.myfitnesspal))
    }
}

/// Client provider whose construction always fails, like a missing
/// credential store.
pub struct FailingClients {
    pub message: String,
}

#[async_trait]
impl ClientProvider for FailingClients {
    async fn garmin(&self) -> ToolResult<Arc<dyn GarminApi>> {
        Err(ToolError::Authentication(self.message.clone()))
    }
    async fn myfitnesspal(&self) -> ToolResult<Arc<dyn MyFitnessPalApi>> {
        Err(ToolError::Authentication(self.message.clone()))
    }
}

pub fn dispatcher_with(
    garmin: Value,
    day: Value,
    measurements: HashMap<NaiveDate, f64>,
) -> ToolDispatcher {
    let clients = StubClients {
        garmin: Arc::new(StubGarmin { payload: garmin }),
        myfitnesspal: Arc::new(StubMfp { day, measurements }),
    };
    ToolDispatcher::new(ToolRegistry::new(), Arc::new(clients))
}

pub fn failing_dispatcher(message: &str) -> ToolDispatcher {
    ToolDispatcher::new(
        ToolRegistry::new(),
        Arc::new(FailingClients {
            message: message.to_owned(),
        }),
    )
}

pub fn args(pairs: &[(&str, &str)]) -> ToolArgs {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

/// The text body of a single-block response.
pub fn text_of(content: &[Content]) -> String {
    assert_eq!(content.len(), 1, "expected exactly one content block");
    let Content::Text { text } = &content[0];
    text.clone()
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}
