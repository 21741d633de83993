// ABOUTME: MyFitnessPal client authenticated by replaying a persisted session cookie jar
// ABOUTME: Fetches diary days and body measurements through the site's JSON endpoints
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! MyFitnessPal provider client.
//!
//! MyFitnessPal has no public API; the login helper captures a browser
//! session into a Netscape-format cookie file, and this client replays those
//! cookies against the site's JSON endpoints. The diary document is passed
//! through untouched so the tool layer's shape check can catch upstream
//! format drift.

use crate::providers::{errors::ProviderError, MyFitnessPalApi, ProviderResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

const SITE_BASE: &str = "https://www.myfitnesspal.com";
const PROVIDER_NAME: &str = "MyFitnessPal";

/// MyFitnessPal client backed by the persisted cookie jar.
#[derive(Debug)]
pub struct MfpClient {
    http: reqwest::Client,
}

impl MfpClient {
    /// Construct an authenticated client from the configured cookie file.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Authentication`] when `MFP_COOKIE_PATH` is
    /// unset, the file is missing or unreadable, the file permissions grant
    /// group/other access, or the jar contains no MyFitnessPal cookies.
    pub fn connect(cookie_path: Option<&Path>) -> ProviderResult<Self> {
        let Some(path) = cookie_path else {
            return Err(ProviderError::Authentication(
                "MFP_COOKIE_PATH is not set. Run the myfitnesspal login helper to generate a \
                 cookie file, then set MFP_COOKIE_PATH."
                    .to_owned(),
            ));
        };
        if !path.exists() {
            return Err(ProviderError::Authentication(format!(
                "Cookie file not found at {}. Run the myfitnesspal login helper to generate it.",
                path.display()
            )));
        }
        check_permissions(path)?;

        let header = load_cookie_header(path)?;
        let mut cookie = HeaderValue::from_str(&header).map_err(|_| {
            ProviderError::Authentication(format!(
                "Cookie file {} contains non-header-safe characters. Run the myfitnesspal login \
                 helper to regenerate it.",
                path.display()
            ))
        })?;
        cookie.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("wellness-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "MyFitnessPal client authenticated from cookie file at {}",
            path.display()
        );
        Ok(Self { http })
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> ProviderResult<Value> {
        let response = self
            .http
            .get(format!("{SITE_BASE}{path}"))
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

#[cfg(unix)]
fn check_permissions(path: &Path) -> ProviderResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|err| {
        ProviderError::Authentication(format!(
            "Failed to inspect cookie file {}: {err}",
            path.display()
        ))
    })?;
    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        return Err(ProviderError::Authentication(format!(
            "Cookie file {} has insecure permissions ({mode:o}). Run: chmod 600 {}",
            path.display(),
            path.display()
        )));
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) -> ProviderResult<()> {
    Ok(())
}

/// Flatten a Netscape-format cookie jar into a single `Cookie` header value,
/// keeping only MyFitnessPal cookies.
fn load_cookie_header(path: &Path) -> ProviderResult<String> {
    let raw = fs::read_to_string(path).map_err(|err| {
        ProviderError::Authentication(format!(
            "Failed to read cookie file {}: {err}",
            path.display()
        ))
    })?;

    let mut pairs = Vec::new();
    for line in raw.lines() {
        // curl-style jars mark HttpOnly cookies with a #HttpOnly_ prefix on
        // the domain field; strip it before the comment check.
        let line = line.trim();
        let line = line.strip_prefix("#HttpOnly_").unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 7 {
            continue;
        }
        let (domain, name, value) = (fields[0], fields[5], fields[6]);
        if !domain.trim_start_matches('.').ends_with("myfitnesspal.com") {
            continue;
        }
        pairs.push(format!("{name}={value}"));
    }

    if pairs.is_empty() {
        return Err(ProviderError::Authentication(format!(
            "Cookie file {} contains no MyFitnessPal cookies. Run the myfitnesspal login helper \
             to regenerate it.",
            path.display()
        )));
    }
    Ok(pairs.join("; "))
}

#[async_trait]
impl MyFitnessPalApi for MfpClient {
    async fn get_day(&self, date: NaiveDate) -> ProviderResult<Value> {
        self.get_json("/api/services/diary", &[("date", date.to_string())])
            .await
    }

    async fn get_measurements(
        &self,
        kind: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ProviderResult<HashMap<NaiveDate, f64>> {
        let payload = self
            .get_json(
                "/api/services/measurements",
                &[
                    ("type", kind.to_owned()),
                    ("start_date", start.to_string()),
                    ("end_date", end.to_string()),
                ],
            )
            .await?;

        let mut measurements = HashMap::new();
        if let Some(items) = payload.get("items").and_then(Value::as_array) {
            for item in items {
                let Some(date) = item
                    .get("date")
                    .and_then(Value::as_str)
                    .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
                else {
                    continue;
                };
                let Some(value) = item.get("value").and_then(Value::as_f64) else {
                    continue;
                };
                measurements.insert(date, value);
            }
        }
        Ok(measurements)
    }
}
