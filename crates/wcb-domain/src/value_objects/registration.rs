//! Registration records
//!
//! A registration is produced in one call and never mutated afterwards.
//! The `with_*` methods consume the record and return a new one, so a
//! record handed to the host is complete before it is submitted.

use super::container::ContainerId;
use super::dispatch::DispatchType;
use super::url_pattern::UrlPattern;
use serde::Serialize;
use std::collections::BTreeSet;

/// A request dispatcher bound to URL mappings and a child container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatcherRegistration {
    name: String,
    mappings: Vec<UrlPattern>,
    load_on_startup: i32,
    async_supported: bool,
    container: ContainerId,
}

impl DispatcherRegistration {
    /// Create a registration with a single mapping
    ///
    /// Defaults: startup priority `-1` (lazy), async disabled.
    pub fn new<S: Into<String>>(name: S, mapping: UrlPattern, container: ContainerId) -> Self {
        Self {
            name: name.into(),
            mappings: vec![mapping],
            load_on_startup: -1,
            async_supported: false,
            container,
        }
    }

    /// Set the startup priority (lower activates first, negative is lazy)
    pub fn with_load_on_startup(mut self, priority: i32) -> Self {
        self.load_on_startup = priority;
        self
    }

    /// Enable or disable asynchronous request processing
    pub fn with_async_supported(mut self, enabled: bool) -> Self {
        self.async_supported = enabled;
        self
    }

    /// Registration name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL mappings served by the dispatcher
    pub fn mappings(&self) -> &[UrlPattern] {
        &self.mappings
    }

    /// Startup priority
    pub fn load_on_startup(&self) -> i32 {
        self.load_on_startup
    }

    /// Whether asynchronous processing is enabled
    pub fn async_supported(&self) -> bool {
        self.async_supported
    }

    /// The child container backing the dispatcher
    pub fn container(&self) -> ContainerId {
        self.container
    }
}

/// A named filter applied to URL patterns for a set of dispatch types
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRegistration {
    name: String,
    dispatch_types: BTreeSet<DispatchType>,
    url_patterns: Vec<UrlPattern>,
    match_after: bool,
    async_supported: bool,
}

impl FilterRegistration {
    /// Create a registration for one URL pattern
    ///
    /// Defaults: matched before previously declared filters, async disabled.
    pub fn new<S, I>(name: S, dispatch_types: I, url_pattern: UrlPattern) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = DispatchType>,
    {
        Self {
            name: name.into(),
            dispatch_types: dispatch_types.into_iter().collect(),
            url_patterns: vec![url_pattern],
            match_after: false,
            async_supported: false,
        }
    }

    /// Whether the filter is matched after previously declared filters
    pub fn with_match_after(mut self, match_after: bool) -> Self {
        self.match_after = match_after;
        self
    }

    /// Enable or disable asynchronous request processing
    pub fn with_async_supported(mut self, enabled: bool) -> Self {
        self.async_supported = enabled;
        self
    }

    /// Registration name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch types the filter intercepts
    pub fn dispatch_types(&self) -> &BTreeSet<DispatchType> {
        &self.dispatch_types
    }

    /// URL patterns the filter covers
    pub fn url_patterns(&self) -> &[UrlPattern] {
        &self.url_patterns
    }

    /// Whether the filter is matched after previously declared filters
    pub fn match_after(&self) -> bool {
        self.match_after
    }

    /// Whether asynchronous processing is enabled
    pub fn async_supported(&self) -> bool {
        self.async_supported
    }

    /// Whether the filter applies to a path reached through `dispatch_type`
    pub fn applies_to(&self, path: &str, dispatch_type: DispatchType) -> bool {
        self.dispatch_types.contains(&dispatch_type)
            && self.url_patterns.iter().any(|pattern| pattern.matches(path))
    }
}
