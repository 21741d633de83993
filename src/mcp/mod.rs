// ABOUTME: Model Context Protocol implementation: schema types, dispatcher, stdio transport
// ABOUTME: The dispatcher is the only place tool failures are converted into responses
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! MCP protocol layer.

pub mod dispatcher;
pub mod schema;
pub mod stdio;

pub use dispatcher::ToolDispatcher;
pub use schema::{Content, JsonSchema, PropertySchema, ToolSchema};
