// ABOUTME: Environment-driven server configuration for credential store locations
// ABOUTME: Resolves the Garmin token directory and the MyFitnessPal cookie file path
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Server configuration.
//!
//! Configuration is environment-only. The two provider credential stores are
//! produced out of band by the login helpers; this crate only needs to know
//! where they live. A missing or misconfigured store is not a configuration
//! error here: it surfaces as an authentication error when the corresponding
//! client is first constructed.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the Garmin token store directory.
pub const GARMIN_TOKEN_DIR_ENV: &str = "GARMIN_TOKEN_DIR";

/// Environment variable pointing at the MyFitnessPal cookie file.
pub const MFP_COOKIE_PATH_ENV: &str = "MFP_COOKIE_PATH";

/// Locations of the provider credential stores.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the Garmin Connect OAuth token store.
    pub garmin_token_dir: PathBuf,
    /// MyFitnessPal session cookie file, when configured.
    pub mfp_cookie_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let garmin_token_dir = env::var_os(GARMIN_TOKEN_DIR_ENV)
            .map_or_else(default_garmin_token_dir, PathBuf::from);
        let mfp_cookie_path = env::var_os(MFP_COOKIE_PATH_ENV).map(PathBuf::from);
        Self {
            garmin_token_dir,
            mfp_cookie_path,
        }
    }
}

fn default_garmin_token_dir() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from(".garminconnect"),
        |home| home.join(".garminconnect"),
    )
}
