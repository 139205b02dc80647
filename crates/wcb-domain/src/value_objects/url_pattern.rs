//! Servlet-style URL patterns
//!
//! Three forms are accepted:
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `/*` | every path |
//! | `/app/*` | `/app` and everything below `/app/` |
//! | `/status` | exactly `/status` |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const WILDCARD_SUFFIX: &str = "/*";

/// A validated URL pattern used by dispatcher and filter mappings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlPattern(String);

impl UrlPattern {
    /// Parse and validate a URL pattern
    pub fn parse<S: AsRef<str>>(pattern: S) -> Result<Self> {
        let pattern = pattern.as_ref().trim();
        if pattern.is_empty() {
            return Err(Error::invalid_argument("URL pattern cannot be empty"));
        }
        if !pattern.starts_with('/') {
            return Err(Error::invalid_argument(format!(
                "URL pattern '{pattern}' must start with '/'"
            )));
        }
        let body = pattern.strip_suffix(WILDCARD_SUFFIX).unwrap_or(pattern);
        if body.contains('*') {
            return Err(Error::invalid_argument(format!(
                "URL pattern '{pattern}' may only use '*' as a trailing '/*'"
            )));
        }
        Ok(Self(pattern.to_string()))
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a path-prefix pattern (`/*` or `/seg/*`)
    pub fn is_prefix(&self) -> bool {
        self.0.ends_with(WILDCARD_SUFFIX)
    }

    /// The path prefix of a prefix pattern, without the trailing `/*`
    ///
    /// `/*` yields an empty prefix; exact patterns yield `None`.
    pub fn prefix(&self) -> Option<&str> {
        self.0.strip_suffix(WILDCARD_SUFFIX)
    }

    /// Whether a request path is covered by this pattern
    pub fn matches(&self, path: &str) -> bool {
        match self.prefix() {
            Some("") => true,
            Some(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == self.0,
        }
    }

    /// Ranking used when several patterns match the same path
    ///
    /// Exact patterns outrank every prefix pattern; among prefix patterns
    /// the longer prefix wins.
    pub fn specificity(&self) -> usize {
        match self.prefix() {
            Some(prefix) => prefix.len(),
            None => usize::MAX,
        }
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UrlPattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<UrlPattern> for String {
    fn from(pattern: UrlPattern) -> Self {
        pattern.0
    }
}
