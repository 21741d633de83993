// ABOUTME: Server binary: logging, configuration, and the stdio MCP serve loop
// ABOUTME: Provider clients are constructed lazily on first tool call, not here
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Wellness MCP server entry point.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use wellness_mcp_server::config::ServerConfig;
use wellness_mcp_server::logging::LoggingConfig;
use wellness_mcp_server::mcp::{stdio, ToolDispatcher};
use wellness_mcp_server::providers::factory::CredentialClients;
use wellness_mcp_server::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let config = ServerConfig::from_env();
    let clients = Arc::new(CredentialClients::new(config));
    let dispatcher = ToolDispatcher::new(ToolRegistry::new(), clients);

    info!(
        "wellness-mcp-server {} serving {} tools on stdio",
        env!("CARGO_PKG_VERSION"),
        dispatcher.list_tools().len()
    );
    stdio::serve(&dispatcher).await
}
