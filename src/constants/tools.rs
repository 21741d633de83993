// ABOUTME: MCP tool identifier constants to eliminate hardcoded tool names
// ABOUTME: Tool names are the external contract and must stay byte-for-byte stable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! MCP tool identifier constants

// Garmin daily tools
/// Daily activity totals for one date
pub const GET_DAILY_STATS: &str = "get_daily_stats";
/// Heart-rate series for one date
pub const GET_HEART_RATE: &str = "get_heart_rate";
/// Sleep data for one date (time-series arrays stripped)
pub const GET_SLEEP: &str = "get_sleep";

// Garmin health tools
/// Heart-rate variability for one date
pub const GET_HRV: &str = "get_hrv";
/// Stress detail for one date
pub const GET_STRESS: &str = "get_stress";
/// Training readiness for one date
pub const GET_TRAINING_READINESS: &str = "get_training_readiness";
/// VO2 max and fitness age estimates for one date
pub const GET_MAX_METRICS: &str = "get_max_metrics";
/// Training status and load for one date
pub const GET_TRAINING_STATUS: &str = "get_training_status";
/// Respiration rate data for one date
pub const GET_RESPIRATION: &str = "get_respiration";
/// Blood oxygen saturation data for one date
pub const GET_SPO2: &str = "get_spo2";

// Garmin activity and goal tools
/// Workouts in a date range
pub const GET_ACTIVITIES: &str = "get_activities";
/// Endurance score trend over a date range
pub const GET_ENDURANCE_SCORE: &str = "get_endurance_score";
/// Predicted race finish times over a date range
pub const GET_RACE_PREDICTIONS: &str = "get_race_predictions";

// Garmin wellness tools
/// Hydration intake for one date
pub const GET_HYDRATION: &str = "get_hydration";

// MyFitnessPal tools
/// Full nutrition diary for one date
pub const GET_NUTRITION_DIARY: &str = "get_nutrition_diary";
/// Daily nutrition totals over a date range
pub const GET_NUTRITION_SUMMARY: &str = "get_nutrition_summary";
/// Weight log entries over a date range
pub const GET_WEIGHT_LOG: &str = "get_weight_log";
