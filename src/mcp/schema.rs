// ABOUTME: MCP protocol schema definitions for tool descriptors and content blocks
// ABOUTME: Wire-faithful serde types; field renames match the MCP JSON contract
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! MCP schema types.
//!
//! Type-safe definitions for the parts of the MCP protocol this server
//! speaks: tool descriptors with JSON-schema argument specs, and the text
//! content blocks returned from tool calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// MCP tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool name; part of the external contract
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON-schema-style argument specification
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type (always "object" for tool inputs)
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Parameter name to property schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Names of required parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON schema property definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Content block in a tool response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text body
    #[serde(rename = "text")]
    Text {
        /// The text payload
        text: String,
    },
}

impl Content {
    /// Create a text content block.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { text: body.into() }
    }
}
