//! Environment tier classification
//!
//! This module classifies a deployment stage identifier into one of four
//! environment tiers. Classification is total: every stage string maps to
//! exactly one tier, with `Local` as the catch-all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment environment tier
///
/// Tiers are mutually exclusive; a stage is assigned exactly one tier
/// by [`Tier::from_stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Production,
    Test,
    Dev,
    Local,
}

impl Tier {
    /// Classify a stage identifier into a tier.
    ///
    /// Precedence matters here because the naming conventions overlap
    /// (a stage named `prd-local` would otherwise be ambiguous). Evaluated
    /// in this exact order, first match wins:
    ///
    /// 1. `is_local` flag set, or stage is exactly `local` -> `Local`
    /// 2. stage starts with `prd` -> `Production`
    /// 3. stage starts with `tst` -> `Test`
    /// 4. stage is exactly `dev` or starts with `dev` -> `Dev`
    /// 5. anything else -> `Local`
    ///
    /// Comparison is case-sensitive. This never fails; unrecognized stages
    /// (including the empty string) are treated as local-style deployments.
    pub fn from_stage(stage: &str, is_local: bool) -> Self {
        if is_local || stage == "local" {
            Tier::Local
        } else if stage.starts_with("prd") {
            Tier::Production
        } else if stage.starts_with("tst") {
            Tier::Test
        } else if stage == "dev" || stage.starts_with("dev") {
            Tier::Dev
        } else {
            Tier::Local
        }
    }

    /// Whether deployments in this tier span multiple regions.
    ///
    /// Only production uses multi-region naming; all other tiers are
    /// single-region.
    pub fn is_multi_region(&self) -> bool {
        matches!(self, Tier::Production)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Production => write!(f, "production"),
            Tier::Test => write!(f, "test"),
            Tier::Dev => write!(f, "dev"),
            Tier::Local => write!(f, "local"),
        }
    }
}
