//! Domain name templates and placeholder substitution
//!
//! Each environment tier has a hardcoded template record whose fields carry
//! placeholder tokens (`PREFIX`, and `STAGE` for the local tier) that are
//! filled in at resolution time. No environment variables are involved; the
//! table is a process-wide constant.

use crate::environment::Tier;

/// A named placeholder token inside a domain template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Region prefix (`us`/`eu`), present in every tier's templates.
    Prefix,
    /// Stage identifier, present only in the local tier's templates.
    Stage,
}

impl Placeholder {
    /// The literal token as it appears in template strings.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Prefix => "PREFIX",
            Placeholder::Stage => "STAGE",
        }
    }
}

/// Per-tier domain naming templates.
///
/// Fields hold template strings, not final values; pass them through
/// [`substitute`] to produce a usable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainTemplate {
    pub hosted_zone: &'static str,
    pub domain: &'static str,
    pub auth_domain_prefix: &'static str,
}

const PRODUCTION: DomainTemplate = DomainTemplate {
    hosted_zone: "portal.oncosignal.com",
    domain: "PREFIX.portal.oncosignal.com",
    auth_domain_prefix: "PREFIX-portal-oncosignal-auth",
};

const TEST: DomainTemplate = DomainTemplate {
    hosted_zone: "tst.portal.oncosignal.com",
    domain: "PREFIX.tst.portal.oncosignal.com",
    auth_domain_prefix: "PREFIX-tst-portal-oncosignal-auth",
};

const DEV: DomainTemplate = DomainTemplate {
    hosted_zone: "dev.portal.oncosignal.com",
    domain: "PREFIX.dev.portal.oncosignal.com",
    auth_domain_prefix: "PREFIX-dev-portal-oncosignal-auth",
};

const LOCAL: DomainTemplate = DomainTemplate {
    hosted_zone: "dev.portal.oncosignal.com",
    domain: "PREFIX.STAGE.dev.portal.oncosignal.com",
    auth_domain_prefix: "PREFIX-STAGE-dev-portal-oncosignal-auth",
};

/// Look up the template record for a tier.
///
/// Total over `Tier`, so a classified tier always has a template.
pub const fn template_for(tier: Tier) -> &'static DomainTemplate {
    match tier {
        Tier::Production => &PRODUCTION,
        Tier::Test => &TEST,
        Tier::Dev => &DEV,
        Tier::Local => &LOCAL,
    }
}

/// Substitute placeholder tokens in a template string.
///
/// The input is scanned left to right exactly once. At each position the
/// bindings are tried in order; on a match the bound value is copied to the
/// output and the scan continues after the token. Replacement values are
/// never rescanned, so a value containing another binding's token (e.g. a
/// stage literally named `PREFIX`) cannot be expanded a second time.
pub fn substitute(template: &str, bindings: &[(Placeholder, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (placeholder, value) in bindings {
            let token = placeholder.token();
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        // No token starts here; copy one character and advance.
        let ch = rest.chars().next().unwrap();
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
