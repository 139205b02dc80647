//! In-memory host environment
//!
//! Keeps registrations and attributes in process memory and resolves request
//! paths the way a servlet host would: matching filters first, then the
//! dispatcher with the most specific mapping.

use crate::constants::IN_MEMORY_HOST_NAME;
use dashmap::DashMap;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use wcb_domain::error::{Error, RegistrationKind, Result};
use wcb_domain::ports::{Attribute, HostEnvironment, RequestDispatcher, RequestFilter};
use wcb_domain::value_objects::{
    DispatchType, DispatcherRegistration, FilterRegistration, UrlPattern,
};

/// Filters and dispatcher a request path goes through, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    /// Names of the matching filters, in the order they run
    pub filters: Vec<String>,
    /// Name of the dispatcher serving the request
    pub dispatcher: String,
    /// Mapping of the dispatcher that matched
    pub mapping: UrlPattern,
}

struct DispatcherEntry {
    registration: DispatcherRegistration,
    dispatcher: Arc<dyn RequestDispatcher>,
}

struct FilterEntry {
    registration: FilterRegistration,
    filter: Arc<dyn RequestFilter>,
}

/// Host environment backed by process memory
pub struct InMemoryHostEnvironment {
    name: String,
    attributes: DashMap<String, Attribute>,
    dispatchers: RwLock<Vec<DispatcherEntry>>,
    filters: RwLock<Vec<FilterEntry>>,
}

impl InMemoryHostEnvironment {
    /// Create an empty host with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            attributes: DashMap::new(),
            dispatchers: RwLock::new(Vec::new()),
            filters: RwLock::new(Vec::new()),
        }
    }

    /// Look up a registered dispatcher by name
    pub fn dispatcher(&self, name: &str) -> Option<Arc<dyn RequestDispatcher>> {
        self.dispatchers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|entry| entry.registration.name() == name)
            .map(|entry| Arc::clone(&entry.dispatcher))
    }

    /// Look up a registered filter by name
    pub fn filter(&self, name: &str) -> Option<Arc<dyn RequestFilter>> {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|entry| entry.registration.name() == name)
            .map(|entry| Arc::clone(&entry.filter))
    }

    /// All filter registrations, in execution order
    ///
    /// Filters not marked `match_after` run first, each group in
    /// registration order.
    pub fn filter_registrations(&self) -> Vec<FilterRegistration> {
        let filters = self.filters.read().unwrap_or_else(PoisonError::into_inner);
        let (before, after): (Vec<_>, Vec<_>) = filters
            .iter()
            .map(|entry| entry.registration.clone())
            .partition(|registration| !registration.match_after());
        before.into_iter().chain(after).collect()
    }

    /// Number of stored attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Resolve which filters and which dispatcher handle a request
    ///
    /// Returns `None` when no dispatcher mapping covers `path`.
    pub fn route(&self, path: &str, dispatch_type: DispatchType) -> Option<RoutePlan> {
        let (dispatcher, mapping) = {
            let dispatchers = self
                .dispatchers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            dispatchers
                .iter()
                .flat_map(|entry| {
                    entry
                        .registration
                        .mappings()
                        .iter()
                        .filter(|mapping| mapping.matches(path))
                        .map(move |mapping| (entry.registration.name(), mapping))
                })
                .max_by_key(|(_, mapping)| mapping.specificity())
                .map(|(name, mapping)| (name.to_string(), mapping.clone()))?
        };

        let filters = self
            .filter_registrations()
            .into_iter()
            .filter(|registration| registration.applies_to(path, dispatch_type))
            .map(|registration| registration.name().to_string())
            .collect();

        Some(RoutePlan {
            filters,
            dispatcher,
            mapping,
        })
    }
}

impl Default for InMemoryHostEnvironment {
    fn default() -> Self {
        Self::new(IN_MEMORY_HOST_NAME)
    }
}

impl HostEnvironment for InMemoryHostEnvironment {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_dispatcher(
        &self,
        registration: DispatcherRegistration,
        dispatcher: Arc<dyn RequestDispatcher>,
    ) -> Result<DispatcherRegistration> {
        let mut dispatchers = self
            .dispatchers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if dispatchers
            .iter()
            .any(|entry| entry.registration.name() == registration.name())
        {
            return Err(Error::duplicate(
                RegistrationKind::Dispatcher,
                registration.name(),
            ));
        }
        if let Some(taken) = registration.mappings().iter().find(|mapping| {
            dispatchers
                .iter()
                .any(|entry| entry.registration.mappings().contains(*mapping))
        }) {
            return Err(Error::duplicate(
                RegistrationKind::DispatcherMapping,
                taken.as_str(),
            ));
        }

        debug!(
            host = %self.name,
            dispatcher = registration.name(),
            mappings = ?registration.mappings(),
            "Dispatcher added"
        );
        dispatchers.push(DispatcherEntry {
            registration: registration.clone(),
            dispatcher,
        });
        Ok(registration)
    }

    fn add_filter(
        &self,
        registration: FilterRegistration,
        filter: Arc<dyn RequestFilter>,
    ) -> Result<FilterRegistration> {
        let mut filters = self.filters.write().unwrap_or_else(PoisonError::into_inner);

        if filters
            .iter()
            .any(|entry| entry.registration.name() == registration.name())
        {
            return Err(Error::duplicate(
                RegistrationKind::Filter,
                registration.name(),
            ));
        }

        debug!(
            host = %self.name,
            filter = registration.name(),
            patterns = ?registration.url_patterns(),
            "Filter added"
        );
        filters.push(FilterEntry {
            registration: registration.clone(),
            filter,
        });
        Ok(registration)
    }

    fn dispatcher_registration(&self, name: &str) -> Option<DispatcherRegistration> {
        self.dispatchers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|entry| entry.registration.name() == name)
            .map(|entry| entry.registration.clone())
    }

    fn dispatcher_registrations(&self) -> Vec<DispatcherRegistration> {
        let mut registrations: Vec<_> = self
            .dispatchers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| entry.registration.clone())
            .collect();
        registrations.sort_by(|a, b| {
            a.load_on_startup()
                .cmp(&b.load_on_startup())
                .then_with(|| a.name().cmp(b.name()))
        });
        registrations
    }

    fn filter_registration(&self, name: &str) -> Option<FilterRegistration> {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|entry| entry.registration.name() == name)
            .map(|entry| entry.registration.clone())
    }

    fn set_attribute(&self, key: &str, value: Attribute) {
        self.attributes.insert(key.to_string(), value);
    }

    fn get_attribute(&self, key: &str) -> Option<Attribute> {
        self.attributes
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn remove_attribute(&self, key: &str) -> Option<Attribute> {
        self.attributes.remove(key).map(|(_, value)| value)
    }
}

impl fmt::Debug for InMemoryHostEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryHostEnvironment")
            .field("name", &self.name)
            .field("attributes", &self.attributes.len())
            .field("dispatchers", &self.dispatcher_registrations().len())
            .field("filters", &self.filter_registrations().len())
            .finish()
    }
}
