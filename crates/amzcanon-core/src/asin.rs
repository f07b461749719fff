//! ASIN extraction from a page URL.
//!
//! Three patterns are tried in priority order against the full URL; the
//! first one that matches decides the identifier.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Amazon Standard Identification Number, as captured from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asin(String);

impl Asin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which URL shape an ASIN was found in. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsinPattern {
    /// `.../dp/<asin>`
    Dp,
    /// `.../gp/product/<asin>`
    GpProduct,
    /// `.../ASIN/<asin>`
    AsinPath,
}

impl AsinPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            AsinPattern::Dp => "dp",
            AsinPattern::GpProduct => "gp-product",
            AsinPattern::AsinPath => "asin",
        }
    }

    fn source(self) -> &'static str {
        match self {
            AsinPattern::Dp => r"(?:.+/)?dp/([^/?]+)",
            AsinPattern::GpProduct => r"gp/product/([^/?]+)",
            AsinPattern::AsinPath => r"ASIN/([^/?]+)",
        }
    }
}

impl fmt::Display for AsinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful extraction: the identifier and the shape it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsinMatch {
    pub pattern: AsinPattern,
    pub asin: Asin,
}

const PRIORITY: [AsinPattern; 3] = [AsinPattern::Dp, AsinPattern::GpProduct, AsinPattern::AsinPath];

static PATTERNS: OnceLock<Vec<(AsinPattern, Regex)>> = OnceLock::new();

fn patterns() -> &'static [(AsinPattern, Regex)] {
    PATTERNS.get_or_init(|| {
        PRIORITY
            .iter()
            .map(|&p| (p, Regex::new(p.source()).expect("compile ASIN pattern")))
            .collect()
    })
}

/// Finds the ASIN in `href` and reports which pattern produced it.
///
/// Returns `None` when no pattern matches; that is an ordinary outcome.
pub fn match_asin(href: &str) -> Option<AsinMatch> {
    patterns().iter().find_map(|(pattern, re)| {
        re.captures(href)
            .and_then(|caps| caps.get(1))
            .map(|m| AsinMatch {
                pattern: *pattern,
                asin: Asin(m.as_str().to_string()),
            })
    })
}

/// Finds the ASIN in `href`.
pub fn extract_asin(href: &str) -> Option<Asin> {
    match_asin(href).map(|m| m.asin)
}
