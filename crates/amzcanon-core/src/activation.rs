//! Activation allow-list.
//!
//! Canonicalization only ever runs on locations matched by one of these
//! userscript-style match patterns (`<scheme>://<host><path-glob>`).
//! Anything else is out of scope and left untouched.

use crate::location::PageLocation;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Marketplaces covered when no configuration says otherwise.
pub const DEFAULT_DOMAINS: [&str; 2] = ["amazon.co.jp", "amazon.com"];

/// Path families combined with every domain.
pub const PATH_FAMILIES: [&str; 4] = ["/dp/*", "/*/dp/*", "/gp/product/*", "/*/ASIN/*"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("match pattern {0:?} has no scheme separator")]
    MissingScheme(String),
    #[error("match pattern {0:?} has an unsupported scheme")]
    InvalidScheme(String),
    #[error("match pattern {0:?} has no path")]
    MissingPath(String),
    #[error("invalid host in match pattern {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SchemePattern {
    /// `*`: http or https.
    Web,
    Exact(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostPattern {
    Any,
    /// `*.example.com`: the domain itself or any subdomain.
    Domain(String),
    Exact(String),
}

/// One parsed match pattern.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    raw: String,
    scheme: SchemePattern,
    host: HostPattern,
    path: Regex,
}

impl MatchPattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let (scheme, rest) = raw
            .split_once("://")
            .ok_or_else(|| PatternError::MissingScheme(raw.to_string()))?;

        let scheme = match scheme {
            "*" => SchemePattern::Web,
            "http" | "https" => SchemePattern::Exact(scheme.to_string()),
            _ => return Err(PatternError::InvalidScheme(raw.to_string())),
        };

        let slash = rest
            .find('/')
            .ok_or_else(|| PatternError::MissingPath(raw.to_string()))?;
        let (host, path) = rest.split_at(slash);

        let host = parse_host(host).ok_or_else(|| PatternError::InvalidHost(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            scheme,
            host,
            path: glob_to_regex(path),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, location: &PageLocation) -> bool {
        let scheme_ok = match &self.scheme {
            SchemePattern::Web => matches!(location.scheme(), "http" | "https"),
            SchemePattern::Exact(s) => location.scheme() == s,
        };
        if !scheme_ok {
            return false;
        }

        let host = location.host();
        let host_ok = match &self.host {
            HostPattern::Any => true,
            HostPattern::Exact(h) => host == h,
            HostPattern::Domain(d) => {
                host == d
                    || host
                        .strip_suffix(d.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        };
        if !host_ok {
            return false;
        }

        match location.query() {
            Some(q) => self.path.is_match(&format!("{}?{}", location.pathname(), q)),
            None => self.path.is_match(location.pathname()),
        }
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_host(host: &str) -> Option<HostPattern> {
    if host == "*" {
        return Some(HostPattern::Any);
    }
    let (wildcard, name) = match host.strip_prefix("*.") {
        Some(name) => (true, name),
        None => (false, host),
    };
    if !is_valid_domain(name) {
        return None;
    }
    let name = name.to_ascii_lowercase();
    Some(if wildcard {
        HostPattern::Domain(name)
    } else {
        HostPattern::Exact(name)
    })
}

fn is_valid_domain(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.ends_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

fn glob_to_regex(glob: &str) -> Regex {
    let body = glob
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    // Escaped literals joined by `.*` always form a valid expression.
    Regex::new(&format!("(?s)^{body}$")).expect("escaped glob compiles")
}

/// The full allow-list: every path family on every configured domain.
#[derive(Debug, Clone)]
pub struct ActivationRules {
    patterns: Vec<MatchPattern>,
}

impl ActivationRules {
    /// Builds rules for `domains` crossed with [`PATH_FAMILIES`].
    pub fn for_domains<I, S>(domains: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for domain in domains {
            let domain = domain.as_ref().trim();
            if !is_valid_domain(domain) {
                return Err(PatternError::InvalidHost(domain.to_string()));
            }
            for family in PATH_FAMILIES {
                patterns.push(MatchPattern::parse(&format!("*://*.{domain}{family}"))?);
            }
        }
        Ok(Self { patterns })
    }

    /// Rules for [`DEFAULT_DOMAINS`].
    pub fn default_rules() -> Self {
        Self::for_domains(DEFAULT_DOMAINS).expect("default domains are valid")
    }

    pub fn from_patterns(patterns: Vec<MatchPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[MatchPattern] {
        &self.patterns
    }

    pub fn matches(&self, location: &PageLocation) -> bool {
        self.patterns.iter().any(|p| p.matches(location))
    }
}

impl Default for ActivationRules {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> PageLocation {
        PageLocation::parse(s).unwrap()
    }

    #[test]
    fn default_rules_cover_all_families() {
        let rules = ActivationRules::default_rules();
        assert_eq!(rules.patterns().len(), 8);
        assert_eq!(rules.patterns()[0].as_str(), "*://*.amazon.co.jp/dp/*");

        for url in [
            "https://www.amazon.co.jp/dp/B000123456",
            "https://www.amazon.co.jp/Some-Title/dp/B000123456/ref=sr_1_1?keywords=x",
            "https://www.amazon.com/gp/product/B000123456",
            "http://www.amazon.com/exec/obidos/ASIN/4000000000",
        ] {
            assert!(rules.matches(&loc(url)), "{url}");
        }
    }

    #[test]
    fn rejects_other_paths_and_hosts() {
        let rules = ActivationRules::default_rules();
        for url in [
            "https://www.amazon.com/",
            "https://www.amazon.com/s?k=books",
            "https://www.amazon.com/gp/cart/view.html",
            "https://www.amazon.de/dp/B000123456",
            "https://notamazon.com/dp/B000123456",
            "ftp://www.amazon.com/dp/B000123456",
        ] {
            assert!(!rules.matches(&loc(url)), "{url}");
        }
    }

    #[test]
    fn wildcard_host_includes_bare_domain() {
        let p = MatchPattern::parse("*://*.amazon.com/dp/*").unwrap();
        assert!(p.matches(&loc("https://amazon.com/dp/B0")));
        assert!(p.matches(&loc("https://smile.amazon.com/dp/B0")));
    }

    #[test]
    fn path_glob_sees_query() {
        let p = MatchPattern::parse("https://example.com/*?ref=*").unwrap();
        assert!(p.matches(&loc("https://example.com/a/b?ref=x")));
        assert!(!p.matches(&loc("https://example.com/a/b")));
        assert!(!p.matches(&loc("http://example.com/a/b?ref=x")));
    }

    #[test]
    fn glob_escapes_literals() {
        let p = MatchPattern::parse("*://*/a.b/*").unwrap();
        assert!(p.matches(&loc("https://x.test/a.b/c")));
        assert!(!p.matches(&loc("https://x.test/aXb/c")));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            MatchPattern::parse("amazon.com/dp/*"),
            Err(PatternError::MissingScheme(_))
        ));
        assert!(matches!(
            MatchPattern::parse("ftp://amazon.com/dp/*"),
            Err(PatternError::InvalidScheme(_))
        ));
        assert!(matches!(
            MatchPattern::parse("*://amazon.com"),
            Err(PatternError::MissingPath(_))
        ));
        assert!(matches!(
            MatchPattern::parse("*://ama*zon.com/dp/*"),
            Err(PatternError::InvalidHost(_))
        ));
    }

    #[test]
    fn for_domains_rejects_bad_domain() {
        assert!(ActivationRules::for_domains(["amazon.com/evil"]).is_err());
        assert!(ActivationRules::for_domains([""]).is_err());
    }

    #[test]
    fn empty_domains_match_nothing() {
        let rules = ActivationRules::for_domains(Vec::<String>::new()).unwrap();
        assert!(!rules.matches(&loc("https://www.amazon.com/dp/B0")));
    }
}
