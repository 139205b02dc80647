//! Dispatcher wiring configuration

use serde::{Deserialize, Serialize};
use wcb_domain::constants::{
    API_DISPATCHER_NAME, API_DISPATCHER_PREFIX, UI_DISPATCHER_NAME, UI_DISPATCHER_PREFIX,
};

/// Name and URL mapping of one front-end dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Registration name
    pub name: String,

    /// URL mapping, e.g. `/app/*`
    pub prefix: String,
}

impl DispatcherConfig {
    /// Create dispatcher settings
    pub fn new<N: Into<String>, P: Into<String>>(name: N, prefix: P) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
        }
    }
}

/// Front-end dispatchers wired under the root container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// UI front end
    pub ui: DispatcherConfig,

    /// Public API front end
    pub api: DispatcherConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            ui: DispatcherConfig::new(UI_DISPATCHER_NAME, UI_DISPATCHER_PREFIX),
            api: DispatcherConfig::new(API_DISPATCHER_NAME, API_DISPATCHER_PREFIX),
        }
    }
}
