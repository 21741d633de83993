// ABOUTME: Structured error types for provider client construction and calls
// ABOUTME: Distinguishes credential-store failures from transport and API failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Provider error types.

use thiserror::Error;

/// Errors from the provider client layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The client could not be constructed from its credential store, or the
    /// provider rejected the stored credentials. The message is operator
    /// facing and names the store and the login helper.
    #[error("{0}")]
    Authentication(String),

    /// Transport-level failure on an outbound call.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{provider} API returned {status}: {message}")]
    Api {
        /// Provider display name
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },
}
