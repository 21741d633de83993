// ABOUTME: Provider capability traits for the two upstream health-data services
// ABOUTME: Handlers consume these opaque authenticated clients through named accessors only
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Provider integrations.
//!
//! Each upstream service is an opaque capability object behind a trait:
//! handlers borrow a client for the duration of one call, invoke exactly the
//! accessor(s) they need, and never retain or reconfigure it. The concrete
//! clients live in [`garmin`] and [`myfitnesspal`]; [`factory`] owns their
//! once-per-process construction.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

pub mod errors;
pub mod factory;
pub mod garmin;
pub mod myfitnesspal;

pub use errors::ProviderError;

/// Result type for provider accessor calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Authenticated Garmin Connect capability.
///
/// Accessors return the provider-shaped nested JSON unmodified; any shaping
/// happens in the tool layer.
#[async_trait]
pub trait GarminApi: std::fmt::Debug + Send + Sync {
    /// Daily activity totals: steps, calories, stress, active minutes.
    async fn get_stats(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Heart-rate data for the day, including resting HR and the HR series.
    async fn get_heart_rates(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Full sleep payload for the day, per-epoch time series included.
    async fn get_sleep_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Heart-rate variability data for the day.
    async fn get_hrv_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Detailed stress data for the day.
    async fn get_stress_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Training readiness score and contributing factors.
    async fn get_training_readiness(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// VO2 max and fitness age estimates.
    async fn get_max_metrics(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Current training status and load.
    async fn get_training_status(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Respiration rate data for the day.
    async fn get_respiration_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Blood oxygen saturation data for the day.
    async fn get_spo2_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Hydration intake data for the day.
    async fn get_hydration_data(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Activities recorded between the two dates, inclusive.
    async fn get_activities_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<Value>;

    /// Endurance score trend over the date range.
    async fn get_endurance_score(&self, start: NaiveDate, end: NaiveDate)
        -> ProviderResult<Value>;

    /// Race finish-time predictions over the date range.
    async fn get_race_predictions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<Value>;
}

/// Authenticated MyFitnessPal capability.
#[async_trait]
pub trait MyFitnessPalApi: std::fmt::Debug + Send + Sync {
    /// The raw diary document for one day. Expected to carry `meals`,
    /// `totals`, and `goals`; the shape check in the tool layer catches
    /// upstream drift.
    async fn get_day(&self, date: NaiveDate) -> ProviderResult<Value>;

    /// Body measurements of the given kind (e.g. "Weight") between the two
    /// dates, keyed by measurement date. Iteration order is unspecified.
    async fn get_measurements(
        &self,
        kind: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<HashMap<NaiveDate, f64>>;
}
