// ABOUTME: Main library entry point for the wellness MCP server
// ABOUTME: Exposes Garmin Connect and MyFitnessPal data as MCP tools over stdio
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![deny(unsafe_code)]

//! # Wellness MCP Server
//!
//! A Model Context Protocol (MCP) server that exposes two personal-health data
//! providers, Garmin Connect (activity, sleep, and wellness data) and
//! MyFitnessPal (nutrition and body measurements), as typed, discoverable
//! tools.
//!
//! ## Architecture
//!
//! - **Validation**: date and date-range argument checks shared by all tools
//! - **Shaping**: pure transforms applied to raw provider payloads before
//!   serialization (notably the sleep time-series reduction)
//! - **Tools**: one handler per operation, composed into an immutable registry
//! - **Dispatch**: name resolution, client acquisition, and conversion of
//!   every failure into a normal text response
//! - **Providers**: opaque authenticated clients built once per process from
//!   local credential stores
//!
//! Credentials are produced out of band by the provider login helpers; this
//! crate only consumes the resulting token store and cookie file.

/// Environment-driven server configuration
pub mod config;

/// Tool-name identifier constants
pub mod constants;

/// Closed error enumeration shared by handlers, shapers, and the dispatcher
pub mod errors;

/// JSON-RPC 2.0 request, response, and error types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP protocol schema, dispatcher, and stdio transport
pub mod mcp;

/// Provider capability traits and authenticated clients
pub mod providers;

/// Pure response shapers for provider payloads
pub mod shaping;

/// Tool descriptors, handlers, and the operation registry
pub mod tools;

/// Date and date-range argument validation
pub mod validation;
