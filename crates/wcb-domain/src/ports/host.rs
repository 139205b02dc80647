//! Host Environment Port
//!
//! The hosting runtime owns the process lifecycle and exposes registration
//! and attribute APIs. The bootstrap core only calls into it.
//!
//! ```text
//! LifecycleCoordinator ──► HostEnvironment
//!   ├── add_dispatcher(registration, dispatcher)
//!   ├── add_filter(registration, filter)
//!   └── set/get/remove_attribute(key)
//! ```

use crate::error::Result;
use crate::value_objects::{ContainerId, DispatcherRegistration, FilterRegistration};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Value stored in the host's process-wide attribute store
pub type Attribute = Arc<dyn Any + Send + Sync>;

/// A request router bound to one container
pub trait RequestDispatcher: Send + Sync + fmt::Debug {
    /// Name the dispatcher is registered under
    fn name(&self) -> &str;

    /// The container the dispatcher resolves its handlers from
    fn container_id(&self) -> ContainerId;
}

/// A request interceptor executed before dispatch
pub trait RequestFilter: Send + Sync + fmt::Debug {
    /// Name the filter is registered under
    fn name(&self) -> &str;

    /// Name of the container object the filter delegates to
    fn target(&self) -> &str;
}

/// The external runtime hosting the dispatchers and filters
pub trait HostEnvironment: Send + Sync {
    /// Human-readable name of the host
    fn name(&self) -> &str;

    /// Register a dispatcher with a complete registration record
    ///
    /// Fails with `DuplicateRegistration` when the name or one of the
    /// mappings is already taken.
    fn add_dispatcher(
        &self,
        registration: DispatcherRegistration,
        dispatcher: Arc<dyn RequestDispatcher>,
    ) -> Result<DispatcherRegistration>;

    /// Register a filter with a complete registration record
    ///
    /// Fails with `DuplicateRegistration` when the name is already taken.
    fn add_filter(
        &self,
        registration: FilterRegistration,
        filter: Arc<dyn RequestFilter>,
    ) -> Result<FilterRegistration>;

    /// Look up a dispatcher registration by name
    fn dispatcher_registration(&self, name: &str) -> Option<DispatcherRegistration>;

    /// All dispatcher registrations, in activation order
    fn dispatcher_registrations(&self) -> Vec<DispatcherRegistration>;

    /// Look up a filter registration by name
    fn filter_registration(&self, name: &str) -> Option<FilterRegistration>;

    /// Store a process-wide attribute, replacing any previous value
    fn set_attribute(&self, key: &str, value: Attribute);

    /// Read a process-wide attribute
    fn get_attribute(&self, key: &str) -> Option<Attribute>;

    /// Remove a process-wide attribute, returning the previous value
    fn remove_attribute(&self, key: &str) -> Option<Attribute>;
}
