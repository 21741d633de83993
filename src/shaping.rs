// ABOUTME: Pure response shapers applied to raw provider payloads before serialization
// ABOUTME: Sleep time-series reduction, nutrition day-shape check, and day projection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Response shaping.
//!
//! Shapers are pure functions from a provider's raw nested JSON to the
//! structure returned to the caller. They never perform I/O and never mutate
//! their input beyond consuming it.

use crate::errors::{ToolError, ToolResult};
use serde_json::{json, Value};

/// Per-epoch time-series keys stripped from Garmin sleep payloads.
///
/// Summary statistics for all of these arrays are already present in
/// `dailySleepDTO` or as top-level scalar fields (e.g. `avgOvernightHrv`,
/// `restingHeartRate`, `bodyBatteryChange`). Left in place they inflate the
/// payload by two orders of magnitude. `sleepLevels` (sleep-stage
/// transitions, ~24 items) is retained for its timeline context.
pub const SLEEP_TIMESERIES_KEYS: [&str; 8] = [
    "sleepMovement",
    "sleepHeartRate",
    "sleepBodyBattery",
    "sleepStress",
    "sleepRestlessMoments",
    "hrvData",
    "wellnessEpochRespirationDataDTOList",
    "wellnessEpochSPO2DataDTOList",
];

/// Attributes every MyFitnessPal day document must expose.
pub const DAY_ATTRS: [&str; 3] = ["meals", "totals", "goals"];

/// Strip the per-epoch time-series arrays from a sleep payload.
///
/// All keys outside [`SLEEP_TIMESERIES_KEYS`] survive unchanged; non-object
/// payloads pass through untouched. Idempotent.
#[must_use]
pub fn summarize_sleep(data: Value) -> Value {
    match data {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !SLEEP_TIMESERIES_KEYS.contains(&key.as_str()))
                .collect(),
        ),
        other => other,
    }
}

/// Fail with a shape-drift error if the day document is missing any of
/// [`DAY_ATTRS`], naming every absent attribute.
///
/// MyFitnessPal is an unversioned scraped integration; a missing attribute
/// means the upstream format changed, which must be distinguishable from bad
/// input or an authentication problem.
pub fn validate_day_shape(day: &Value, date: &str) -> ToolResult<()> {
    let missing: Vec<&str> = DAY_ATTRS
        .iter()
        .copied()
        .filter(|attr| day.get(attr).is_none())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(ToolError::Shape(format!(
        "MyFitnessPal response for {date} is missing fields: {missing:?}. \
         MyFitnessPal may have changed their format — the diary integration needs updating."
    )))
}

/// Project a shape-checked day document to the caller-facing structure.
///
/// `water` and `complete` are optional upstream and serialize as null when
/// absent.
pub fn serialize_day(day: &Value, date: &str) -> ToolResult<Value> {
    validate_day_shape(day, date)?;
    Ok(json!({
        "date": date,
        "meals": day.get("meals").cloned().unwrap_or(Value::Null),
        "totals": day.get("totals").cloned().unwrap_or(Value::Null),
        "goals": day.get("goals").cloned().unwrap_or(Value::Null),
        "water": day.get("water").cloned().unwrap_or(Value::Null),
        "complete": day.get("complete").cloned().unwrap_or(Value::Null),
    }))
}
