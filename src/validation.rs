// ABOUTME: Date and date-range validation for caller-supplied tool arguments
// ABOUTME: Enforces the literal YYYY-MM-DD grammar, calendar validity, ordering, and the range cap
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Argument validation shared by all tool handlers.
//!
//! Dates must match the literal `YYYY-MM-DD` pattern *and* denote a real
//! calendar date. Ranges must be ordered and fit inside the range cap, which
//! also bounds the per-day iteration in `get_nutrition_summary`.

use crate::errors::{ToolError, ToolResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum day-count difference between the bounds of a date range. A range
/// whose difference reaches this value is rejected, so an accepted range
/// covers at most 365 calendar days inclusive.
pub const MAX_RANGE_DAYS: i64 = 365;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Safe: fixed literal pattern, known to compile.
    #[allow(clippy::expect_used)]
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"))
}

/// Validate a single `YYYY-MM-DD` argument and return the parsed date.
///
/// `param_name` is the schema parameter being validated (`date`,
/// `start_date`, `end_date`) and appears in the error message together with
/// the offending literal.
pub fn validate_date(value: &str, param_name: &str) -> ToolResult<NaiveDate> {
    if !date_pattern().is_match(value) {
        return Err(ToolError::Validation(format!(
            "Invalid {param_name}: {value:?}. Expected YYYY-MM-DD."
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ToolError::Validation(format!(
            "Invalid {param_name}: {value:?}. Expected a real calendar date."
        ))
    })
}

/// Validate a `(start_date, end_date)` pair and return the parsed bounds.
///
/// Each bound is validated individually (errors are tagged `start_date` or
/// `end_date`), the pair must be ordered, and the day-count difference must
/// stay under [`MAX_RANGE_DAYS`].
pub fn validate_date_range(start: &str, end: &str) -> ToolResult<(NaiveDate, NaiveDate)> {
    let start_date = validate_date(start, "start_date")?;
    let end_date = validate_date(end, "end_date")?;
    if start_date > end_date {
        return Err(ToolError::Validation(format!(
            "start_date {start:?} must be on or before end_date {end:?}."
        )));
    }
    if (end_date - start_date).num_days() >= MAX_RANGE_DAYS {
        return Err(ToolError::Validation(format!(
            "Date range exceeds {MAX_RANGE_DAYS} days ({start} to {end})."
        )));
    }
    Ok((start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_the_parameter_and_literal() {
        let err = validate_date("20-01-2026", "start_date").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("start_date"));
        assert!(message.contains("20-01-2026"));
    }

    #[test]
    fn pattern_match_alone_is_not_enough() {
        assert!(validate_date("2026-02-30", "date").is_err());
        assert!(validate_date("2026-02-20", "date").is_ok());
    }
}
