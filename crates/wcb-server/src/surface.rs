//! Registration surface snapshot
//!
//! What the host exposes after startup: dispatcher mappings in activation
//! order and the installed filters.

use serde::Serialize;
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::{DispatcherRegistration, FilterRegistration};

/// Dispatcher and filter registrations observed on a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSurface {
    /// Host the registrations were read from
    pub host: String,
    /// Dispatchers, in activation order
    pub dispatchers: Vec<DispatcherRegistration>,
    /// Filters, looked up by name
    pub filters: Vec<FilterRegistration>,
}

impl RegistrationSurface {
    /// Capture the dispatchers and the named filters of `env`
    pub fn capture(env: &dyn HostEnvironment, filter_names: &[&str]) -> Self {
        Self {
            host: env.name().to_string(),
            dispatchers: env.dispatcher_registrations(),
            filters: filter_names
                .iter()
                .filter_map(|name| env.filter_registration(name))
                .collect(),
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
