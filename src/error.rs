//! Library error types

use thiserror::Error;

/// Errors from the region lookup step.
///
/// This is the only fallible operation in the resolver; classification and
/// template substitution are total. [`crate::DomainResolver::resolve`]
/// absorbs these into the `eu` default, while
/// [`crate::DomainResolver::try_resolve`] surfaces them to the caller.
#[derive(Error, Debug)]
pub enum RegionLookupError {
    #[error("no region could be determined from the provider chain")]
    Unavailable,

    #[error("region lookup failed: {0}")]
    Lookup(String),
}
