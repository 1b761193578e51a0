//! Environment-aware domain configuration resolver library

// Public modules
pub mod config;
pub mod domains;
pub mod environment;
pub mod error;

// Re-export commonly used types
pub use config::{AwsRegionLookup, Settings, StaticRegionLookup};
pub use domains::{
    CachedDomainResolver, DomainResolver, RegionLookup, RegionPrefix, ResolvedDomainConfig,
};
pub use environment::Tier;
pub use error::RegionLookupError;
