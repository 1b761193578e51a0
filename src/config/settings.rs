//! Application settings and configuration
//!
//! Loads the deployment context (stage, local flag, optional region
//! override) from environment variables with sensible defaults. The
//! resolver itself takes these as explicit arguments; this module is the
//! hosting layer that fetches them once.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Deployment context settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub log_level: String,

    /// Deployment stage identifier (e.g. `prd-eu`, `tst-2`, `dev-alice`)
    pub stage: String,

    /// Whether this is a local dev-mode run (overrides stage classification)
    pub is_local: bool,

    /// Explicit AWS region; when unset, discovery falls back to the SDK's
    /// default provider chain
    pub aws_region: Option<String>,
}

impl Settings {
    /// Load settings from environment variables with defaults.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "portal-domains"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env_or_default("LOG_LEVEL", "info"),

            stage: env_or_default("STAGE", "local"),
            is_local: env_or_default("LOCAL_DEV", "false")
                .parse()
                .unwrap_or(false),

            aws_region: env::var("AWS_REGION").ok(),
        };

        settings.validate();

        Ok(settings)
    }

    /// Sanity-check settings, warning on suspicious values.
    ///
    /// Classification is total, so nothing here is fatal; an empty stage
    /// is still worth flagging because it silently lands in the local tier.
    fn validate(&self) {
        if self.stage.is_empty() {
            tracing::warn!("Empty STAGE value; deployment will be classified as local");
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "portal-domains".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            stage: "local".to_string(),
            is_local: false,
            aws_region: None,
        }
    }
}

/// Get environment variable or return default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.stage, "local");
        assert!(!settings.is_local);
        assert!(settings.aws_region.is_none());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_env_or_default_fallback() {
        assert_eq!(
            env_or_default("PORTAL_DOMAINS_UNSET_TEST_VAR", "fallback"),
            "fallback"
        );
    }
}
