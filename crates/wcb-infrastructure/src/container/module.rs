//! Configuration modules
//!
//! A configuration module is the opaque collaborator that fills a container
//! during activation. The bootstrap core registers it on a container and
//! activates that container; it never looks inside.

use super::tree::Container;
use dill::{Catalog, CatalogBuilder};
use std::any::{TypeId, type_name};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use wcb_domain::error::{Error, Result};
use wcb_domain::value_objects::ContainerId;

/// Source of the objects held by a container
pub trait ConfigModule: Send + Sync + fmt::Debug {
    /// Module name used in logs and errors
    fn name(&self) -> &str;

    /// Register the module's objects into the container being activated
    ///
    /// Returning an error aborts activation and leaves the container in the
    /// `Created` state.
    fn configure(&self, scope: &mut ContainerScope) -> Result<()>;

    /// Called once the container built from this module has been closed
    fn on_close(&self, _container: ContainerId) {}
}

/// Registration surface handed to [`ConfigModule::configure`]
///
/// Objects added here end up in the container's dill catalog. Objects of
/// the parent chain are readable through [`ContainerScope::resolve`].
pub struct ContainerScope {
    container: Container,
    builder: CatalogBuilder,
    registered: HashSet<TypeId>,
}

impl ContainerScope {
    pub(crate) fn new(container: Container) -> Self {
        Self {
            container,
            builder: CatalogBuilder::new(),
            registered: HashSet::new(),
        }
    }

    /// Id of the container being activated
    pub fn container_id(&self) -> ContainerId {
        self.container.id()
    }

    /// Register an object in the container
    ///
    /// A container holds at most one object per type; registering a type
    /// twice fails with `Configuration`.
    pub fn add_value<T>(&mut self, value: T) -> Result<&mut Self>
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.registered.insert(TypeId::of::<T>()) {
            return Err(Error::configuration(format!(
                "{} already holds an object of type {}",
                self.container.id(),
                type_name::<T>()
            )));
        }
        self.builder.add_value(value);
        Ok(self)
    }

    /// Resolve an object already provided by an ancestor container
    pub fn resolve<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.container.parent()?.get_one::<T>()
    }

    /// Number of objects registered so far
    pub fn registered(&self) -> usize {
        self.registered.len()
    }

    pub(crate) fn into_catalog(mut self) -> (Catalog, usize) {
        let registered = self.registered.len();
        (self.builder.build(), registered)
    }
}

impl fmt::Debug for ContainerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerScope")
            .field("container", &self.container.id())
            .field("registered", &self.registered.len())
            .finish()
    }
}
