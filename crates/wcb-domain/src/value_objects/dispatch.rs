//! Request dispatch types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The way a request reached a filter or dispatcher
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchType {
    /// A request arriving directly from a client
    Request,
    /// A request forwarded by another dispatcher
    Forward,
    /// A request included into another response
    Include,
    /// A request resumed on an asynchronous context
    Async,
    /// A request routed to an error page
    Error,
}

impl fmt::Display for DispatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Request => "REQUEST",
            Self::Forward => "FORWARD",
            Self::Include => "INCLUDE",
            Self::Async => "ASYNC",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}
