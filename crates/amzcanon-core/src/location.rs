//! Page location: the one input every canonicalization step reads.
//!
//! A `PageLocation` is parsed once from an absolute URL and then treated as
//! immutable for the whole pass.

use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors from turning a raw string into a [`PageLocation`].
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid url {input:?}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("url has no host: {0}")]
    MissingHost(String),
}

/// The current page location, split the way a browser exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    href: String,
    scheme: String,
    host: String,
    pathname: String,
    query: Option<String>,
}

impl PageLocation {
    /// Parses an absolute URL. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let input = input.trim();
        let url = Url::parse(input).map_err(|source| LocationError::Invalid {
            input: input.to_string(),
            source,
        })?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| LocationError::MissingHost(input.to_string()))?
            .to_string();

        Ok(Self {
            href: url.as_str().to_string(),
            scheme: url.scheme().to_string(),
            host,
            pathname: url.path().to_string(),
            query: url.query().map(str::to_string),
        })
    }

    /// Full serialized URL, including query and fragment.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Scheme without the trailing colon, e.g. `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host name without port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path only; always starts with `/` for http(s) URLs.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}
