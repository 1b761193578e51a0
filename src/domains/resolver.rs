//! Domain configuration resolver
//!
//! Combines stage classification, async region discovery, and template
//! substitution into the final per-deployment domain configuration. The
//! region lookup is the single suspension point; everything else is pure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::domains::templates::{substitute, template_for, Placeholder};
use crate::environment::Tier;
use crate::error::RegionLookupError;

/// Short region token used in generated names.
///
/// Any region code that does not start with `us-` maps to `Eu`, so the
/// conversion is total and `Eu` doubles as the fallback when discovery
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionPrefix {
    Us,
    Eu,
}

impl RegionPrefix {
    /// Derive the prefix from a full region code such as `us-east-1`.
    pub fn from_region_code(code: &str) -> Self {
        if code.starts_with("us-") {
            RegionPrefix::Us
        } else {
            RegionPrefix::Eu
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionPrefix::Us => "us",
            RegionPrefix::Eu => "eu",
        }
    }
}

impl fmt::Display for RegionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the current deployment region.
///
/// The production implementation queries the AWS SDK's region provider
/// chain ([`crate::config::AwsRegionLookup`]); tests and offline tooling
/// use [`crate::config::StaticRegionLookup`].
#[async_trait]
pub trait RegionLookup: Send + Sync {
    /// Return the current region code (e.g. `eu-west-1`).
    ///
    /// Called once per resolution; the resolver adds no retry or timeout
    /// around it. Callers needing bounded latency wrap the resolve call
    /// in an external deadline.
    async fn region_code(&self) -> Result<String, RegionLookupError>;
}

/// Fully resolved domain configuration for one deployment.
///
/// All placeholder tokens are substituted; the record is constructed fresh
/// on every resolve call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDomainConfig {
    pub tier: Tier,
    pub region_prefix: RegionPrefix,
    pub hosted_zone: String,
    pub domain: String,
    pub auth_domain_prefix: String,
}

/// Resolves domain configuration from a stage identifier and the
/// discovered region.
///
/// Stage and local flag are explicit arguments rather than ambient state,
/// so the resolver stays a pure boundary over its injected [`RegionLookup`].
#[derive(Clone)]
pub struct DomainResolver {
    lookup: Arc<dyn RegionLookup>,
}

impl DomainResolver {
    pub fn new(lookup: Arc<dyn RegionLookup>) -> Self {
        Self { lookup }
    }

    /// Resolve the domain configuration for a stage.
    ///
    /// Infallible: if the region lookup errors, the `eu` default is used
    /// and a warning is logged. Domain naming is not worth failing a
    /// deployment over; callers that disagree use [`Self::try_resolve`].
    pub async fn resolve(&self, stage: &str, is_local: bool) -> ResolvedDomainConfig {
        let prefix = match self.lookup.region_code().await {
            Ok(code) => RegionPrefix::from_region_code(&code),
            Err(err) => {
                tracing::warn!(error = %err, "Region lookup failed, defaulting to eu");
                RegionPrefix::Eu
            }
        };
        self.materialize(stage, is_local, prefix)
    }

    /// Resolve the domain configuration, surfacing region-lookup failures.
    pub async fn try_resolve(
        &self,
        stage: &str,
        is_local: bool,
    ) -> Result<ResolvedDomainConfig, RegionLookupError> {
        let code = self.lookup.region_code().await?;
        Ok(self.materialize(stage, is_local, RegionPrefix::from_region_code(&code)))
    }

    fn materialize(&self, stage: &str, is_local: bool, prefix: RegionPrefix) -> ResolvedDomainConfig {
        let tier = Tier::from_stage(stage, is_local);
        let template = template_for(tier);

        let mut bindings = vec![(Placeholder::Prefix, prefix.as_str())];
        if tier == Tier::Local {
            bindings.push((Placeholder::Stage, stage));
        }

        let config = ResolvedDomainConfig {
            tier,
            region_prefix: prefix,
            hosted_zone: substitute(template.hosted_zone, &bindings),
            domain: substitute(template.domain, &bindings),
            auth_domain_prefix: substitute(template.auth_domain_prefix, &bindings),
        };

        tracing::debug!(
            stage = %stage,
            tier = %config.tier,
            region_prefix = %config.region_prefix,
            domain = %config.domain,
            "Resolved domain configuration"
        );

        config
    }
}

/// A [`DomainResolver`] that memoizes its first resolution.
///
/// Stage and region are immutable for the life of one deployment run, so
/// repeated resolutions can skip the region lookup after the first call.
#[derive(Clone)]
pub struct CachedDomainResolver {
    inner: DomainResolver,
    cell: Arc<OnceCell<ResolvedDomainConfig>>,
}

impl CachedDomainResolver {
    pub fn new(inner: DomainResolver) -> Self {
        Self {
            inner,
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Resolve once and replay the cached record on subsequent calls.
    ///
    /// The cache is keyed by process lifetime, not by arguments; callers
    /// must pass the same stage and flag for every call on one instance.
    pub async fn resolve(&self, stage: &str, is_local: bool) -> ResolvedDomainConfig {
        self.cell
            .get_or_init(|| self.inner.resolve(stage, is_local))
            .await
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticRegionLookup;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingLookup;

    #[async_trait]
    impl RegionLookup for FailingLookup {
        async fn region_code(&self) -> Result<String, RegionLookupError> {
            Err(RegionLookupError::Unavailable)
        }
    }

    struct CountingLookup {
        calls: AtomicUsize,
        code: String,
    }

    #[async_trait]
    impl RegionLookup for CountingLookup {
        async fn region_code(&self) -> Result<String, RegionLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.code.clone())
        }
    }

    fn resolver_with(code: &str) -> DomainResolver {
        DomainResolver::new(Arc::new(StaticRegionLookup::new(code)))
    }

    #[test]
    fn test_region_prefix_mapping() {
        assert_eq!(RegionPrefix::from_region_code("us-east-1"), RegionPrefix::Us);
        assert_eq!(RegionPrefix::from_region_code("us-west-2"), RegionPrefix::Us);
        assert_eq!(RegionPrefix::from_region_code("eu-west-1"), RegionPrefix::Eu);
        assert_eq!(RegionPrefix::from_region_code("ap-southeast-2"), RegionPrefix::Eu);
        assert_eq!(RegionPrefix::from_region_code(""), RegionPrefix::Eu);
        // "us" without the dash is not a recognized US code
        assert_eq!(RegionPrefix::from_region_code("us"), RegionPrefix::Eu);
    }

    #[tokio::test]
    async fn test_production_scenario() {
        let resolver = resolver_with("us-west-2");
        let config = resolver.resolve("prd-us-1", false).await;

        assert_eq!(config.tier, Tier::Production);
        assert_eq!(config.region_prefix, RegionPrefix::Us);
        assert_eq!(config.hosted_zone, "portal.oncosignal.com");
        assert_eq!(config.domain, "us.portal.oncosignal.com");
        assert_eq!(config.auth_domain_prefix, "us-portal-oncosignal-auth");
    }

    #[tokio::test]
    async fn test_local_scenario() {
        let resolver = resolver_with("eu-central-1");
        let config = resolver.resolve("my-feature", true).await;

        assert_eq!(config.tier, Tier::Local);
        assert_eq!(config.region_prefix, RegionPrefix::Eu);
        assert_eq!(config.domain, "eu.my-feature.dev.portal.oncosignal.com");
        assert_eq!(
            config.auth_domain_prefix,
            "eu-my-feature-dev-portal-oncosignal-auth"
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_defaults_to_eu() {
        let resolver = DomainResolver::new(Arc::new(FailingLookup));
        let config = resolver.resolve("tst-2", false).await;

        assert_eq!(config.tier, Tier::Test);
        assert_eq!(config.region_prefix, RegionPrefix::Eu);
        assert_eq!(config.hosted_zone, "tst.portal.oncosignal.com");
        assert_eq!(config.domain, "eu.tst.portal.oncosignal.com");
    }

    #[tokio::test]
    async fn test_try_resolve_surfaces_lookup_failure() {
        let resolver = DomainResolver::new(Arc::new(FailingLookup));
        let result = resolver.try_resolve("tst-2", false).await;
        assert!(matches!(result, Err(RegionLookupError::Unavailable)));
    }

    #[tokio::test]
    async fn test_try_resolve_success() {
        let resolver = resolver_with("us-east-1");
        let config = resolver.try_resolve("dev", false).await.unwrap();
        assert_eq!(config.tier, Tier::Dev);
        assert_eq!(config.domain, "us.dev.portal.oncosignal.com");
    }

    #[tokio::test]
    async fn test_no_leftover_placeholders() {
        let resolver = resolver_with("eu-west-1");
        let cases = [
            ("prd-eu", false),
            ("tst-1", false),
            ("dev-bob", false),
            ("local", false),
            ("anything", true),
            ("", false),
        ];
        for (stage, is_local) in cases {
            let config = resolver.resolve(stage, is_local).await;
            for field in [&config.hosted_zone, &config.domain, &config.auth_domain_prefix] {
                assert!(!field.contains("PREFIX"), "leftover PREFIX in {field}");
                assert!(!field.contains("STAGE"), "leftover STAGE in {field}");
            }
        }
    }

    #[tokio::test]
    async fn test_repeated_resolution_is_idempotent() {
        let resolver = resolver_with("eu-west-1");
        let first = resolver.resolve("dev-carol", false).await;
        let second = resolver.resolve("dev-carol", false).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_stage_containing_placeholder_token_is_preserved() {
        // Textual collision case: the stage name contains the literal text
        // PREFIX and must come through verbatim.
        let resolver = resolver_with("eu-west-1");
        let config = resolver.resolve("PREFIX-branch", true).await;
        assert_eq!(
            config.domain,
            "eu.PREFIX-branch.dev.portal.oncosignal.com"
        );
    }

    #[tokio::test]
    async fn test_cached_resolver_looks_up_region_once() {
        let lookup = Arc::new(CountingLookup {
            calls: AtomicUsize::new(0),
            code: "us-east-1".to_string(),
        });
        let cached = CachedDomainResolver::new(DomainResolver::new(lookup.clone()));

        let first = cached.resolve("prd-us", false).await;
        let second = cached.resolve("prd-us", false).await;

        assert_eq!(first, second);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_serialized_field_names() {
        let resolver = resolver_with("us-east-1");
        let config = resolver.resolve("prd", false).await;
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["hostedZone"], "portal.oncosignal.com");
        assert_eq!(json["domain"], "us.portal.oncosignal.com");
        assert_eq!(json["authDomainPrefix"], "us-portal-oncosignal-auth");
        assert_eq!(json["tier"], "production");
        assert_eq!(json["regionPrefix"], "us");
    }
}
