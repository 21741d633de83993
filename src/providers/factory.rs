// ABOUTME: Once-per-process provider client construction behind an explicit capability trait
// ABOUTME: Replaces lazy global singletons with a dependency handed to the dispatcher
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Client provider.
//!
//! The dispatcher receives a [`ClientProvider`] explicitly instead of reading
//! shared global state. The production implementation constructs each client
//! at most once per process, on first use, behind a [`tokio::sync::OnceCell`]
//! (first-caller-wins initialization; concurrent callers await the same
//! construction). Only successful construction is cached, so a misconfigured
//! credential store is re-reported on every invocation.

use crate::config::ServerConfig;
use crate::errors::{ToolError, ToolResult};
use crate::providers::garmin::GarminClient;
use crate::providers::myfitnesspal::MfpClient;
use crate::providers::{GarminApi, MyFitnessPalApi};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Supplies authenticated provider clients to the dispatcher.
///
/// Handlers borrow the returned handle for one call and never retain it.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// The Garmin Connect client, constructing it on first use.
    async fn garmin(&self) -> ToolResult<Arc<dyn GarminApi>>;

    /// The MyFitnessPal client, constructing it on first use.
    async fn myfitnesspal(&self) -> ToolResult<Arc<dyn MyFitnessPalApi>>;
}

/// Production [`ClientProvider`] backed by the local credential stores.
pub struct CredentialClients {
    config: ServerConfig,
    garmin: OnceCell<Arc<GarminClient>>,
    myfitnesspal: OnceCell<Arc<MfpClient>>,
}

impl CredentialClients {
    /// Create a provider that will construct clients from the given
    /// configuration on first use.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            garmin: OnceCell::new(),
            myfitnesspal: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ClientProvider for CredentialClients {
    async fn garmin(&self) -> ToolResult<Arc<dyn GarminApi>> {
        let client = self
            .garmin
            .get_or_try_init(|| async {
                GarminClient::connect(&self.config.garmin_token_dir)
                    .await
                    .map(Arc::new)
            })
            .await
            .map_err(ToolError::from)?;
        Ok(Arc::clone(client) as Arc<dyn GarminApi>)
    }

    async fn myfitnesspal(&self) -> ToolResult<Arc<dyn MyFitnessPalApi>> {
        let client = self
            .myfitnesspal
            .get_or_try_init(|| async {
                MfpClient::connect(self.config.mfp_cookie_path.as_deref()).map(Arc::new)
            })
            .await
            .map_err(ToolError::from)?;
        Ok(Arc::clone(client) as Arc<dyn MyFitnessPalApi>)
    }
}
