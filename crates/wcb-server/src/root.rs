//! Root container initialization
//!
//! Guarantees a single activated root container per running instance and
//! publishes it into the host's attribute store so shutdown can find it
//! without holding a direct reference.

use std::sync::Arc;
use tracing::debug;
use wcb_domain::constants::ROOT_CONTAINER_ATTRIBUTE;
use wcb_domain::error::{Error, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_infrastructure::container::{ConfigModule, Container, ContainerFactory};

/// Creates or adopts the root container
pub struct RootContainerInitializer;

impl RootContainerInitializer {
    /// Ensure a root container exists, is bound to `env` and is active
    ///
    /// An `existing` container is reused as root. Its host binding is only
    /// set when missing, and it is activated only when not active yet. A
    /// container with no configuration module is rejected, since nothing
    /// could ever be resolved from it. Without `existing` a new container
    /// is built from `config`.
    ///
    /// The resulting root is published under
    /// [`ROOT_CONTAINER_ATTRIBUTE`].
    pub fn ensure_root(
        existing: Option<Container>,
        env: &Arc<dyn HostEnvironment>,
        config: Arc<dyn ConfigModule>,
    ) -> Result<Container> {
        let root = match existing {
            Some(root) => Self::adopt(root, env)?,
            None => Self::create(env, config)?,
        };

        env.set_attribute(ROOT_CONTAINER_ATTRIBUTE, Arc::new(root.clone()));
        debug!(
            container = %root.id(),
            key = ROOT_CONTAINER_ATTRIBUTE,
            "Root container published"
        );
        Ok(root)
    }

    fn adopt(root: Container, env: &Arc<dyn HostEnvironment>) -> Result<Container> {
        if root.is_closed() {
            return Err(Error::illegal_state(
                format!("reuse {} as root", root.id()),
                root.state(),
            ));
        }
        if root.parent_id().is_some() {
            return Err(Error::configuration(format!(
                "{} has a parent and cannot be used as root",
                root.id()
            )));
        }
        if !root.has_config() {
            return Err(Error::configuration(format!(
                "Supplied root {} has no configuration module registered",
                root.id()
            )));
        }

        root.bind_host(env);
        if root.is_active() {
            debug!(container = %root.id(), "Reusing active root container");
        } else {
            debug!(container = %root.id(), "Activating supplied root container");
            root.activate()?;
        }
        Ok(root)
    }

    fn create(env: &Arc<dyn HostEnvironment>, config: Arc<dyn ConfigModule>) -> Result<Container> {
        let root = ContainerFactory::create_configured(config, None)?;
        root.bind_host(env);
        root.activate()?;
        debug!(container = %root.id(), "Root container created");
        Ok(root)
    }
}
