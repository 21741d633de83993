// ABOUTME: Closed error enumeration for tool execution and response mapping
// ABOUTME: Every handler and shaper failure is one of these kinds; the dispatcher matches exhaustively
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Unified error handling for tool execution.
//!
//! The failure surface is a closed enumeration rather than a catch-all type:
//! handlers, shapers, and the client provider can only fail with one of the
//! kinds below, and the dispatcher converts each kind into its documented
//! user-visible text response.

use crate::providers::errors::ProviderError;
use thiserror::Error;

/// Errors that can surface from a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A provider client could not be constructed from its credential store.
    /// Surfaced verbatim; never retried.
    #[error("{0}")]
    Authentication(String),

    /// A caller-supplied argument failed format or range rules.
    #[error("{0}")]
    Validation(String),

    /// A provider response is missing fields a shaper requires, which signals
    /// the upstream format drifted out from under the integration.
    #[error("{0}")]
    Shape(String),

    /// A provider call failed after the client was constructed.
    #[error(transparent)]
    Provider(ProviderError),

    /// The shaped response could not be serialized for the caller.
    #[error("response serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ProviderError> for ToolError {
    fn from(err: ProviderError) -> Self {
        // Construction failures keep their authentication identity so the
        // dispatcher surfaces the credential-store message verbatim.
        match err {
            ProviderError::Authentication(message) => Self::Authentication(message),
            other => Self::Provider(other),
        }
    }
}

impl ToolError {
    /// The text body returned to the caller for this error.
    ///
    /// Validation failures carry a distinguishing prefix, authentication and
    /// shape-drift messages pass through verbatim, and everything else is
    /// reported generically without internal detail beyond the error's own
    /// message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication(message) | Self::Shape(message) => message.clone(),
            Self::Validation(message) => format!("Invalid argument: {message}"),
            Self::Provider(err) => format!("Unexpected error: {err}"),
            Self::Serialization(err) => format!("Unexpected error: {err}"),
        }
    }
}

/// Result type alias for tool execution paths.
pub type ToolResult<T> = Result<T, ToolError>;
