//! Canonicalization driver.
//!
//! One pass per location: activation check, then the guard chain
//! ignore → canonical → extract, then at most one navigation.

use crate::activation::ActivationRules;
use crate::asin::{match_asin, Asin, AsinPattern};
use crate::location::PageLocation;
use crate::navigator::Navigator;
use crate::shape::{is_canonical_path, is_ignored_path};
use anyhow::{Context, Result};
use std::fmt;

/// Outcome of one pass over a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not on the activation allow-list.
    OutOfScope,
    /// Path is in the `/gp/` family.
    Ignored,
    /// Path is already `/dp/<asin>` (optionally with trailing slash).
    AlreadyCanonical,
    /// No ASIN could be extracted.
    NoIdentifier,
    /// The location should be replaced by `target`.
    Redirect {
        asin: Asin,
        pattern: AsinPattern,
        target: String,
    },
}

impl Decision {
    pub fn target(&self) -> Option<&str> {
        match self {
            Decision::Redirect { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::OutOfScope => "out-of-scope",
            Decision::Ignored => "ignored",
            Decision::AlreadyCanonical => "canonical",
            Decision::NoIdentifier => "no-identifier",
            Decision::Redirect { .. } => "redirect",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Redirect { target, .. } => write!(f, "redirect {target}"),
            other => f.write_str(other.label()),
        }
    }
}

/// `<scheme>://<host>/dp/<asin>/` for the given location.
pub fn canonical_url(location: &PageLocation, asin: &Asin) -> String {
    format!("{}://{}/dp/{}/", location.scheme(), location.host(), asin)
}

/// The guard chain, without the activation check.
pub fn plan(location: &PageLocation) -> Decision {
    let path = location.pathname();
    if is_ignored_path(path) {
        return Decision::Ignored;
    }
    if is_canonical_path(path) {
        return Decision::AlreadyCanonical;
    }
    match match_asin(location.href()) {
        Some(m) => Decision::Redirect {
            target: canonical_url(location, &m.asin),
            asin: m.asin,
            pattern: m.pattern,
        },
        None => Decision::NoIdentifier,
    }
}

/// Applies the guard chain to locations on its activation allow-list.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    rules: ActivationRules,
}

impl Canonicalizer {
    pub fn new(rules: ActivationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ActivationRules {
        &self.rules
    }

    pub fn decide(&self, location: &PageLocation) -> Decision {
        if !self.rules.matches(location) {
            return Decision::OutOfScope;
        }
        plan(location)
    }

    /// Decides and, for a redirect, calls `navigator` exactly once.
    pub fn run(&self, location: &PageLocation, navigator: &mut dyn Navigator) -> Result<Decision> {
        let decision = self.decide(location);
        match &decision {
            Decision::Redirect {
                asin,
                pattern,
                target,
            } => {
                tracing::debug!(href = location.href(), %asin, %pattern, target = target.as_str(), "redirect");
                navigator
                    .replace(target)
                    .with_context(|| format!("navigate to {target}"))?;
            }
            other => {
                tracing::debug!(href = location.href(), decision = other.label(), "no navigation");
            }
        }
        Ok(decision)
    }
}
