// ABOUTME: Garmin Connect client authenticated from the local OAuth token store
// ABOUTME: Thin JSON accessor layer over the connectapi endpoints, one method per tool capability
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Garmin Connect provider client.
//!
//! The login helper persists an OAuth token store under
//! `~/.garminconnect` (or `GARMIN_TOKEN_DIR`). Construction reads the bearer
//! token from that store and resolves the account's `displayName`, which
//! several endpoints embed in their path. All accessors return the raw
//! provider JSON.

use crate::providers::{errors::ProviderError, GarminApi, ProviderResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

const API_BASE: &str = "https://connectapi.garmin.com";
const OAUTH2_TOKEN_FILE: &str = "oauth2_token.json";
const PROVIDER_NAME: &str = "Garmin Connect";

#[derive(Debug, Deserialize)]
struct OAuth2Token {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SocialProfile {
    #[serde(rename = "displayName")]
    display_name: String,
}

/// Garmin Connect client backed by the persisted token store.
#[derive(Debug)]
pub struct GarminClient {
    http: reqwest::Client,
    display_name: String,
}

impl GarminClient {
    /// Construct an authenticated client from the token store directory.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Authentication`] when the token store is
    /// missing or unreadable, or when Garmin rejects the stored token.
    pub async fn connect(token_dir: &Path) -> ProviderResult<Self> {
        if !token_dir.exists() {
            return Err(ProviderError::Authentication(format!(
                "Garmin tokens not found at {}. Run the garmin login helper to authenticate.",
                token_dir.display()
            )));
        }

        let token_path = token_dir.join(OAUTH2_TOKEN_FILE);
        let raw = fs::read_to_string(&token_path).map_err(|err| {
            ProviderError::Authentication(format!(
                "Failed to read Garmin token at {}: {err}. Run the garmin login helper to re-authenticate.",
                token_path.display()
            ))
        })?;
        let token: OAuth2Token = serde_json::from_str(&raw).map_err(|err| {
            ProviderError::Authentication(format!(
                "Garmin token at {} is malformed: {err}. Run the garmin login helper to re-authenticate.",
                token_path.display()
            ))
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.access_token)).map_err(
            |_| {
                ProviderError::Authentication(format!(
                    "Garmin token at {} contains non-header-safe characters. Run the garmin login helper to re-authenticate.",
                    token_path.display()
                ))
            },
        )?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("wellness-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // The display name is embedded in several endpoint paths; resolve it
        // once here. A failure at this point means the token is stale.
        let response = http
            .get(format!("{API_BASE}/userprofile-service/socialProfile"))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Authentication(format!(
                "Garmin rejected the stored token (HTTP {status}). Run the garmin login helper to re-authenticate."
            )));
        }
        let profile: SocialProfile = response.json().await?;

        info!(
            "Garmin client authenticated from token store at {}",
            token_dir.display()
        );
        Ok(Self {
            http,
            display_name: profile.display_name,
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ProviderResult<Value> {
        let response = self
            .http
            .get(format!("{API_BASE}{path}"))
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl GarminApi for GarminClient {
    async fn get_stats(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/usersummary-service/usersummary/daily/{}", self.display_name),
            &[("calendarDate", date.to_string())],
        )
        .await
    }

    async fn get_heart_rates(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/wellness-service/wellness/dailyHeartRate/{}", self.display_name),
            &[("date", date.to_string())],
        )
        .await
    }

    async fn get_sleep_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/wellness-service/wellness/dailySleepData/{}", self.display_name),
            &[
                ("date", date.to_string()),
                ("nonSleepBufferMinutes", "60".to_owned()),
            ],
        )
        .await
    }

    async fn get_hrv_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(&format!("/hrv-service/hrv/{date}"), &[]).await
    }

    async fn get_stress_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(&format!("/wellness-service/wellness/dailyStress/{date}"), &[])
            .await
    }

    async fn get_training_readiness(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/metrics-service/metrics/trainingreadiness/{date}"),
            &[],
        )
        .await
    }

    async fn get_max_metrics(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/metrics-service/metrics/maxmet/daily/{date}/{date}"),
            &[],
        )
        .await
    }

    async fn get_training_status(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/metrics-service/metrics/trainingstatus/aggregated/{date}"),
            &[],
        )
        .await
    }

    async fn get_respiration_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/wellness-service/wellness/daily/respiration/{date}"),
            &[],
        )
        .await
    }

    async fn get_spo2_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(&format!("/wellness-service/wellness/daily/spo2/{date}"), &[])
            .await
    }

    async fn get_hydration_data(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json(
            &format!("/usersummary-service/usersummary/hydration/allData/{date}"),
            &[],
        )
        .await
    }

    async fn get_activities_by_date(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<Value> {
        self.get_json(
            "/activitylist-service/activities/search/activities",
            &[
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
                ("start", "0".to_owned()),
                ("limit", "1000".to_owned()),
            ],
        )
        .await
    }

    async fn get_endurance_score(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<Value> {
        self.get_json(
            "/metrics-service/metrics/endurancescore/stats",
            &[
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
                ("aggregation", "weekly".to_owned()),
            ],
        )
        .await
    }

    async fn get_race_predictions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<Value> {
        self.get_json(
            &format!(
                "/metrics-service/metrics/racepredictions/daily/{}",
                self.display_name
            ),
            &[
                ("fromCalendarDate", start.to_string()),
                ("toCalendarDate", end.to_string()),
            ],
        )
        .await
    }
}
