// ABOUTME: Tool dispatcher: resolves names, acquires clients, executes handlers, shapes failures
// ABOUTME: Every outcome becomes a normal text response; nothing escapes to the transport
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Tool dispatch.
//!
//! An invocation moves through resolve, authenticate, execute, respond. An
//! unresolved name is a normal, expected outcome for a malformed client, not
//! a fault. Client construction failures and handler errors are matched
//! exhaustively against the closed error enumeration and converted into text
//! responses; the dispatcher never returns an error to its caller.

use crate::errors::{ToolError, ToolResult};
use crate::mcp::schema::{Content, ToolSchema};
use crate::providers::factory::ClientProvider;
use crate::tools::{ToolArgs, ToolHandler, ToolRegistry};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Resolves and executes tool invocations against the registry.
pub struct ToolDispatcher {
    registry: ToolRegistry,
    clients: Arc<dyn ClientProvider>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given registry and client provider.
    #[must_use]
    pub fn new(registry: ToolRegistry, clients: Arc<dyn ClientProvider>) -> Self {
        Self { registry, clients }
    }

    /// The canonical tool list, in stable registration order.
    #[must_use]
    pub fn list_tools(&self) -> &[ToolSchema] {
        self.registry.schemas()
    }

    /// Invoke a tool by name. Always responds; never raises.
    pub async fn call_tool(&self, name: &str, arguments: &ToolArgs) -> Vec<Content> {
        info!("Tool called: {name}");
        let Some(handler) = self.registry.resolve(name) else {
            warn!("Unknown tool requested: {name}");
            return vec![Content::text(format!("Unknown tool: {name}"))];
        };
        match self.execute(handler, arguments).await {
            Ok(content) => content,
            Err(err) => {
                match &err {
                    ToolError::Authentication(message) => {
                        error!("Auth error in tool {name}: {message}");
                    }
                    ToolError::Validation(message) => {
                        error!("Validation error in tool {name}: {message}");
                    }
                    ToolError::Shape(message) => {
                        error!("Shape error in tool {name}: {message}");
                    }
                    ToolError::Provider(source) => {
                        error!("Unexpected error in tool {name}: {source:?}");
                    }
                    ToolError::Serialization(source) => {
                        error!("Serialization error in tool {name}: {source}");
                    }
                }
                vec![Content::text(err.user_message())]
            }
        }
    }

    async fn execute(
        &self,
        handler: &ToolHandler,
        arguments: &ToolArgs,
    ) -> ToolResult<Vec<Content>> {
        match handler {
            ToolHandler::Garmin(run) => {
                let client = self.clients.garmin().await?;
                run(client.as_ref(), arguments).await
            }
            ToolHandler::MyFitnessPal(run) => {
                let client = self.clients.myfitnesspal().await?;
                run(client.as_ref(), arguments).await
            }
        }
    }
}
