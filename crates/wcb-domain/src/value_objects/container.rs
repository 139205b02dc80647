//! Container identity and state
//!
//! A container is addressed by its index in the owning container tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a container inside its container tree
///
/// Ids are indices into the owning tree and are only meaningful together
/// with that tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(usize);

impl ContainerId {
    /// Wrap a raw tree index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw tree index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// State of a single container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainerState {
    /// Created, possibly configured, not yet able to resolve objects
    #[default]
    Created,
    /// Activated and resolving objects
    Active,
    /// Closed; its objects have been released
    Closed,
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Active => write!(f, "active"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
