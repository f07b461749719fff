//! Path shape checks run before extraction.

use regex::Regex;
use std::sync::OnceLock;

static CANONICAL: OnceLock<Regex> = OnceLock::new();
static IGNORED: OnceLock<Regex> = OnceLock::new();

fn canonical_re() -> &'static Regex {
    CANONICAL.get_or_init(|| Regex::new(r"^/dp/[a-zA-Z0-9]+/?$").expect("compile CANONICAL"))
}

fn ignored_re() -> &'static Regex {
    IGNORED.get_or_init(|| Regex::new(r"/gp/[a-zA-Z0-9-]+").expect("compile IGNORED"))
}

/// True iff `path` is exactly `/dp/<alnum>+` with an optional trailing slash.
pub fn is_canonical_path(path: &str) -> bool {
    canonical_re().is_match(path)
}

/// True iff `path` contains a `/gp/<alnum-or-hyphen>+` segment anywhere.
///
/// This covers the whole `/gp/` family, `/gp/product/<asin>` included.
pub fn is_ignored_path(path: &str) -> bool {
    ignored_re().is_match(path)
}
