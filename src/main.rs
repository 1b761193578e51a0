//! Portal Domains
//!
//! CLI host for the domain configuration resolver. Fetches the deployment
//! context (stage, local flag, region override) once, resolves the domain
//! configuration, and prints it as JSON for the infrastructure layer.

use anyhow::Result;
use clap::Parser;
use portal_domains::{AwsRegionLookup, DomainResolver, Settings};
use std::sync::Arc;

/// Portal Domains
///
/// Resolves environment-aware domain configuration for a deployment stage.
#[derive(Parser, Debug)]
#[command(name = "portal-domains")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deployment stage identifier (overrides STAGE env var)
    #[arg(short, long)]
    stage: Option<String>,

    /// Treat this as a local dev-mode run (overrides LOCAL_DEV env var)
    #[arg(short, long)]
    local: bool,

    /// AWS region to use, skipping discovery (overrides AWS_REGION env var)
    #[arg(short, long)]
    region: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first (before logging, so we can use log_level)
    let mut settings = Settings::load()?;

    // Override settings with CLI arguments
    if let Some(stage) = args.stage {
        settings.stage = stage;
    }
    if args.local {
        settings.is_local = true;
    }
    if let Some(region) = args.region {
        settings.aws_region = Some(region);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    init_tracing(&settings.log_level);

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        stage = %settings.stage,
        is_local = settings.is_local,
        "Resolving domain configuration"
    );

    let lookup = Arc::new(AwsRegionLookup::from_settings(&settings));
    let resolver = DomainResolver::new(lookup);
    let config = resolver.resolve(&settings.stage, settings.is_local).await;

    tracing::info!(
        tier = %config.tier,
        region_prefix = %config.region_prefix,
        multi_region = config.tier.is_multi_region(),
        "Classified deployment"
    );

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

/// Initialize tracing subscriber with the specified log level.
///
/// Logs go to stderr so stdout stays clean JSON for piping.
fn init_tracing(log_level: &str) {
    // Build filter from RUST_LOG env var or use provided log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
