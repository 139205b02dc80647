//! Lifecycle Coordinator
//!
//! Sole entry and exit point invoked by the host environment.
//!
//! ```text
//! Uninitialized ──on_start──► Initialized ──on_stop──► Destroyed
//! ```
//!
//! Startup runs root container → UI dispatcher → API dispatcher → security
//! filter and stops at the first failure. Shutdown finds the root through
//! the host's attribute store and closes it, children first.

use crate::builder::LifecycleCoordinatorBuilder;
use crate::dispatcher::DispatcherRegistrar;
use crate::root::RootContainerInitializer;
use crate::security::SecurityChainInstaller;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};
use wcb_domain::constants::{ROOT_CONTAINER_ATTRIBUTE, SECURITY_DISPATCH_TYPES};
use wcb_domain::error::{Error, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::LifecycleState;
use wcb_infrastructure::config::WebConfig;
use wcb_infrastructure::container::{ConfigModule, Container};

/// Sequences startup and shutdown of the web application contexts
pub struct LifecycleCoordinator {
    root_config: Arc<dyn ConfigModule>,
    ui_config: Arc<dyn ConfigModule>,
    api_config: Arc<dyn ConfigModule>,
    web: WebConfig,
    state: LifecycleState,
    root: Option<Container>,
}

impl LifecycleCoordinator {
    /// Create a coordinator with the default dispatcher names and prefixes
    pub fn new(
        root_config: Arc<dyn ConfigModule>,
        ui_config: Arc<dyn ConfigModule>,
        api_config: Arc<dyn ConfigModule>,
    ) -> Self {
        Self::with_web_config(root_config, ui_config, api_config, WebConfig::default())
    }

    /// Create a coordinator with explicit dispatcher names and prefixes
    pub fn with_web_config(
        root_config: Arc<dyn ConfigModule>,
        ui_config: Arc<dyn ConfigModule>,
        api_config: Arc<dyn ConfigModule>,
        web: WebConfig,
    ) -> Self {
        Self {
            root_config,
            ui_config,
            api_config,
            web,
            state: LifecycleState::Uninitialized,
            root: None,
        }
    }

    /// Start building a coordinator
    pub fn builder() -> LifecycleCoordinatorBuilder {
        LifecycleCoordinatorBuilder::new()
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The root container, while initialized
    pub fn root(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    /// Dispatcher names and prefixes in use
    pub fn web_config(&self) -> &WebConfig {
        &self.web
    }

    /// Run the startup sequence
    ///
    /// Valid only from `Uninitialized`. On failure the state does not change
    /// and later steps are not attempted; anything already registered with
    /// the host stays there, but the application is not considered started.
    pub fn on_start(
        &mut self,
        env: &Arc<dyn HostEnvironment>,
        existing_root: Option<Container>,
    ) -> Result<()> {
        if !self.state.can_start() {
            return Err(Error::illegal_state("start", self.state));
        }
        info!(host = env.name(), "Starting web application contexts");

        let root = RootContainerInitializer::ensure_root(
            existing_root,
            env,
            Arc::clone(&self.root_config),
        )?;
        debug!(container = %root.id(), "Root container ready");

        for (dispatcher, config) in [
            (&self.web.ui, &self.ui_config),
            (&self.web.api, &self.api_config),
        ] {
            DispatcherRegistrar::register_dispatcher(
                env,
                &root,
                &dispatcher.name,
                Arc::clone(config),
                &dispatcher.prefix,
            )?;
        }

        SecurityChainInstaller::install_security_chain(env, SECURITY_DISPATCH_TYPES)?;

        self.root = Some(root);
        self.state = LifecycleState::Initialized;
        info!(host = env.name(), "Web application contexts initialized");
        Ok(())
    }

    /// Run the shutdown sequence
    ///
    /// Valid only from `Initialized`. Fails with `Lookup` when the host has
    /// no root container bound; nothing is closed and the state is kept.
    pub fn on_stop(&mut self, env: &Arc<dyn HostEnvironment>) -> Result<()> {
        if !self.state.can_stop() {
            return Err(Error::illegal_state("stop", self.state));
        }

        let root = match Self::lookup_root(env.as_ref()) {
            Ok(root) => root,
            Err(err) => {
                error!(
                    host = env.name(),
                    key = ROOT_CONTAINER_ATTRIBUTE,
                    error = %err,
                    "Shutdown aborted: root container not found"
                );
                return Err(err);
            }
        };

        root.close();
        env.remove_attribute(ROOT_CONTAINER_ATTRIBUTE);
        self.root = None;
        self.state = LifecycleState::Destroyed;
        info!(
            host = env.name(),
            closed = root.closed_order().len(),
            "Web application contexts destroyed"
        );
        Ok(())
    }

    fn lookup_root(env: &dyn HostEnvironment) -> Result<Arc<Container>> {
        env.get_attribute(ROOT_CONTAINER_ATTRIBUTE)
            .and_then(|attribute| attribute.downcast::<Container>().ok())
            .ok_or_else(|| Error::lookup(ROOT_CONTAINER_ATTRIBUTE))
    }
}

impl fmt::Debug for LifecycleCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleCoordinator")
            .field("root_config", &self.root_config.name())
            .field("ui_config", &self.ui_config.name())
            .field("api_config", &self.api_config.name())
            .field("web", &self.web)
            .field("state", &self.state)
            .field("root", &self.root)
            .finish()
    }
}
