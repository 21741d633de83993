// ABOUTME: Application constants organized by concern
// ABOUTME: Currently holds the MCP tool-name identifiers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Application constants

pub mod tools;
