//! Configuration management module
//!
//! This module handles loading the deployment context from environment
//! variables and .env files, and provides the AWS-backed region lookup.

pub mod aws;
pub mod settings;

pub use aws::{AwsRegionLookup, StaticRegionLookup};
pub use settings::Settings;
