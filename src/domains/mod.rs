//! Domain configuration core
//!
//! Contains the per-tier template table, the placeholder substitution
//! engine, and the resolver that ties them to region discovery.

pub mod resolver;
pub mod templates;

pub use resolver::{
    CachedDomainResolver, DomainResolver, RegionLookup, RegionPrefix, ResolvedDomainConfig,
};
pub use templates::{substitute, template_for, DomainTemplate, Placeholder};
