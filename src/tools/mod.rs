// ABOUTME: Tool registry composing descriptors and statically-typed handlers from every family
// ABOUTME: Shared helpers for descriptor construction, argument parsing, and JSON results
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Tool registry and handler plumbing.
//!
//! Each operation family contributes its descriptors and handler function
//! pointers at composition time; the registry is immutable afterwards.
//! Handlers are plain functions bound per tool (no reflective accessor
//! lookup), tagged by provider family so the dispatcher knows which client
//! to supply.

use crate::errors::{ToolError, ToolResult};
use crate::mcp::schema::{Content, JsonSchema, PropertySchema, ToolSchema};
use crate::providers::{GarminApi, MyFitnessPalApi};
use crate::validation::{validate_date, validate_date_range};
use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;

pub mod activities;
pub mod body;
pub mod daily;
pub mod goals;
pub mod health;
pub mod nutrition;
pub mod wellness;

/// String-keyed, string-valued tool arguments.
pub type ToolArgs = HashMap<String, String>;

/// Outcome of a tool handler: content blocks or a classified failure.
pub type HandlerResult = Result<Vec<Content>, ToolError>;

/// Handler over the Garmin client.
pub type GarminHandlerFn =
    for<'a> fn(&'a dyn GarminApi, &'a ToolArgs) -> BoxFuture<'a, HandlerResult>;

/// Handler over the MyFitnessPal client.
pub type MfpHandlerFn =
    for<'a> fn(&'a dyn MyFitnessPalApi, &'a ToolArgs) -> BoxFuture<'a, HandlerResult>;

/// A tool handler, tagged by the provider client it consumes.
pub enum ToolHandler {
    /// Executes against the Garmin Connect client.
    Garmin(GarminHandlerFn),
    /// Executes against the MyFitnessPal client.
    MyFitnessPal(MfpHandlerFn),
}

/// Immutable catalogue of all tools: descriptors in stable registration
/// order, plus name-to-handler resolution.
pub struct ToolRegistry {
    schemas: Vec<ToolSchema>,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistry {
    /// Compose the full registry from every operation family.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            schemas: Vec::new(),
            handlers: HashMap::new(),
        };
        daily::register(&mut registry);
        activities::register(&mut registry);
        health::register(&mut registry);
        goals::register(&mut registry);
        wellness::register(&mut registry);
        nutrition::register(&mut registry);
        body::register(&mut registry);
        registry
    }

    pub(crate) fn register(&mut self, schema: ToolSchema, handler: ToolHandler) {
        // Name uniqueness is a hard invariant of the catalogue.
        debug_assert!(
            !self.handlers.contains_key(&schema.name),
            "duplicate tool name: {}",
            schema.name
        );
        self.handlers.insert(schema.name.clone(), handler);
        self.schemas.push(schema);
    }

    /// All tool descriptors, in registration order.
    #[must_use]
    pub fn schemas(&self) -> &[ToolSchema] {
        &self.schemas
    }

    /// Resolve a tool name to its handler. Absent names are a caller-visible
    /// condition handled by the dispatcher.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ToolHandler> {
        self.handlers.get(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor for a tool taking one required `date` parameter.
pub(crate) fn date_tool(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "date".to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("Date in YYYY-MM-DD format".into()),
        },
    );
    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["date".to_owned()]),
        },
    }
}

/// Descriptor for a tool taking required `start_date` and `end_date`
/// parameters.
pub(crate) fn date_range_tool(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "start_date".to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("Start date in YYYY-MM-DD format".into()),
        },
    );
    properties.insert(
        "end_date".to_owned(),
        PropertySchema {
            property_type: "string".into(),
            description: Some("End date in YYYY-MM-DD format".into()),
        },
    );
    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["start_date".to_owned(), "end_date".to_owned()]),
        },
    }
}

/// Serialize shaped data into the single text content block every successful
/// invocation returns. 2-space indentation is part of the external contract.
pub(crate) fn json_result(data: &Value) -> HandlerResult {
    Ok(vec![Content::text(serde_json::to_string_pretty(data)?)])
}

pub(crate) fn required_arg<'a>(args: &'a ToolArgs, name: &str) -> ToolResult<&'a str> {
    args.get(name).map(String::as_str).ok_or_else(|| {
        ToolError::Validation(format!("missing required parameter {name:?}"))
    })
}

/// Parse and validate a single-date argument.
pub(crate) fn date_arg(args: &ToolArgs, name: &str) -> ToolResult<NaiveDate> {
    validate_date(required_arg(args, name)?, name)
}

/// Parse and validate the `start_date`/`end_date` pair.
pub(crate) fn range_args(args: &ToolArgs) -> ToolResult<(NaiveDate, NaiveDate)> {
    let start = required_arg(args, "start_date")?;
    let end = required_arg(args, "end_date")?;
    validate_date_range(start, end)
}
