//! Container factory

use super::module::ConfigModule;
use super::tree::Container;
use std::sync::Arc;
use tracing::debug;
use wcb_domain::error::Result;

/// Creates containers, optionally parented to an existing one
///
/// Without a parent a new container tree is started. With a parent the new
/// container joins the parent's tree and resolves missing objects through it.
pub struct ContainerFactory;

impl ContainerFactory {
    /// Create an empty container
    ///
    /// Fails with `IllegalState` when `parent` is already closed.
    pub fn create(parent: Option<&Container>) -> Result<Container> {
        let container = match parent {
            Some(parent) => parent.new_child()?,
            None => Container::new_root(),
        };
        debug!(
            container = %container.id(),
            parent = ?container.parent_id(),
            "Container created"
        );
        Ok(container)
    }

    /// Create a container with its configuration module registered
    pub fn create_configured(
        config: Arc<dyn ConfigModule>,
        parent: Option<&Container>,
    ) -> Result<Container> {
        let container = Self::create(parent)?;
        container.register(config)?;
        Ok(container)
    }
}
