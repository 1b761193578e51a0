//! AWS region discovery
//!
//! This module provides the production [`RegionLookup`] implementation on
//! top of the AWS SDK's region provider chain, plus a static lookup for
//! tests and offline tooling.

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, Region};

use crate::config::Settings;
use crate::domains::RegionLookup;
use crate::error::RegionLookupError;

/// Region lookup backed by the AWS SDK provider chain.
///
/// An explicit region (from settings or CLI) is tried first; otherwise the
/// chain falls through the usual sources (env vars, profile, IMDS).
pub struct AwsRegionLookup {
    region_override: Option<String>,
}

impl AwsRegionLookup {
    pub fn new() -> Self {
        Self { region_override: None }
    }

    pub fn with_override(region: Option<String>) -> Self {
        Self { region_override: region }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_override(settings.aws_region.clone())
    }
}

impl Default for AwsRegionLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionLookup for AwsRegionLookup {
    async fn region_code(&self) -> Result<String, RegionLookupError> {
        let chain = match &self.region_override {
            Some(region) => RegionProviderChain::first_try(Region::new(region.clone()))
                .or_default_provider(),
            None => RegionProviderChain::default_provider(),
        };

        chain
            .region()
            .await
            .map(|region| region.as_ref().to_string())
            .ok_or(RegionLookupError::Unavailable)
    }
}

/// Region lookup that returns a fixed code without touching the network.
pub struct StaticRegionLookup {
    code: String,
}

impl StaticRegionLookup {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl RegionLookup for StaticRegionLookup {
    async fn region_code(&self) -> Result<String, RegionLookupError> {
        Ok(self.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_override_takes_priority() {
        let lookup = AwsRegionLookup::with_override(Some("eu-west-1".to_string()));
        let code = lookup.region_code().await.unwrap();
        assert_eq!(code, "eu-west-1");
    }

    #[tokio::test]
    async fn test_static_lookup() {
        let lookup = StaticRegionLookup::new("us-east-1");
        assert_eq!(lookup.region_code().await.unwrap(), "us-east-1");
    }

    #[tokio::test]
    async fn test_from_settings_uses_configured_region() {
        let mut settings = Settings::default();
        settings.aws_region = Some("us-west-2".to_string());

        let lookup = AwsRegionLookup::from_settings(&settings);
        assert_eq!(lookup.region_code().await.unwrap(), "us-west-2");
    }
}
