//! Dispatcher registration
//!
//! Each front end gets its own child container under the root and one
//! dispatcher bound to a URL prefix. The registration record is built
//! complete and handed to the host in a single call.

use std::sync::Arc;
use tracing::debug;
use wcb_domain::constants::DISPATCHER_LOAD_ON_STARTUP;
use wcb_domain::error::{Error, RegistrationKind, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::{DispatcherRegistration, UrlPattern};
use wcb_infrastructure::container::{ConfigModule, Container, ContainerFactory};
use wcb_infrastructure::web::ContainerDispatcher;

/// Wires front-end dispatchers under the root container
pub struct DispatcherRegistrar;

impl DispatcherRegistrar {
    /// Register a dispatcher named `name` serving `prefix`
    ///
    /// Name and prefix collisions are detected before any container is
    /// created. The child container is activated before the dispatcher is
    /// handed to the host, so a module failure leaves no registration
    /// behind. The dispatcher is eager (priority `1`) and async-capable.
    pub fn register_dispatcher(
        env: &Arc<dyn HostEnvironment>,
        root: &Container,
        name: &str,
        config: Arc<dyn ConfigModule>,
        prefix: &str,
    ) -> Result<DispatcherRegistration> {
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("Dispatcher name cannot be empty"));
        }
        let mapping = UrlPattern::parse(prefix)?;
        Self::ensure_available(env.as_ref(), name, &mapping)?;

        let child = ContainerFactory::create_configured(config, Some(root))?;
        child.bind_host(env);
        child.activate()?;

        let registration = DispatcherRegistration::new(name, mapping, child.id())
            .with_load_on_startup(DISPATCHER_LOAD_ON_STARTUP)
            .with_async_supported(true);
        let dispatcher = Arc::new(ContainerDispatcher::new(name, child));
        let registration = env.add_dispatcher(registration, dispatcher)?;

        debug!(
            dispatcher = registration.name(),
            mapping = %prefix,
            container = %registration.container(),
            "Dispatcher registered"
        );
        Ok(registration)
    }

    fn ensure_available(env: &dyn HostEnvironment, name: &str, mapping: &UrlPattern) -> Result<()> {
        if env.dispatcher_registration(name).is_some() {
            return Err(Error::duplicate(RegistrationKind::Dispatcher, name));
        }
        let taken = env
            .dispatcher_registrations()
            .iter()
            .any(|registration| registration.mappings().contains(mapping));
        if taken {
            return Err(Error::duplicate(
                RegistrationKind::DispatcherMapping,
                mapping.as_str(),
            ));
        }
        Ok(())
    }
}
