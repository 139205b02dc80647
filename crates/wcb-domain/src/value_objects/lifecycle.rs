//! Lifecycle state machine values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the bootstrap orchestrator
///
/// `Uninitialized → Initialized → Destroyed`; there is no way back out of
/// `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Startup has not completed
    #[default]
    Uninitialized,
    /// Containers, dispatchers and the security filter are in place
    Initialized,
    /// The root container has been closed
    Destroyed,
}

impl LifecycleState {
    /// Whether startup may run from this state
    pub fn can_start(self) -> bool {
        self == Self::Uninitialized
    }

    /// Whether shutdown may run from this state
    pub fn can_stop(self) -> bool {
        self == Self::Initialized
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Initialized => write!(f, "initialized"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}
