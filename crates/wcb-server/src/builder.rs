//! Lifecycle Coordinator Builder
//!
//! Builder pattern for constructing the lifecycle coordinator.
//! Ensures all three configuration modules are provided before construction.

use crate::lifecycle::LifecycleCoordinator;
use std::sync::Arc;
use wcb_infrastructure::config::WebConfig;
use wcb_infrastructure::container::ConfigModule;

/// Builder for [`LifecycleCoordinator`]
///
/// The root, UI and API modules are required. Dispatcher names and prefixes
/// default to `app` on `/app/*` and `api` on `/api/*`.
#[derive(Default)]
pub struct LifecycleCoordinatorBuilder {
    root_config: Option<Arc<dyn ConfigModule>>,
    ui_config: Option<Arc<dyn ConfigModule>>,
    api_config: Option<Arc<dyn ConfigModule>>,
    web: WebConfig,
}

impl LifecycleCoordinatorBuilder {
    /// Create a new coordinator builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module filling the root container
    pub fn with_root_config(mut self, config: Arc<dyn ConfigModule>) -> Self {
        self.root_config = Some(config);
        self
    }

    /// Set the module filling the UI dispatcher's container
    pub fn with_ui_config(mut self, config: Arc<dyn ConfigModule>) -> Self {
        self.ui_config = Some(config);
        self
    }

    /// Set the module filling the API dispatcher's container
    pub fn with_api_config(mut self, config: Arc<dyn ConfigModule>) -> Self {
        self.api_config = Some(config);
        self
    }

    /// Override dispatcher names and prefixes
    pub fn with_web_config(mut self, web: WebConfig) -> Self {
        self.web = web;
        self
    }

    /// Build the coordinator
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if any module is not provided
    pub fn try_build(self) -> Result<LifecycleCoordinator, BuilderError> {
        let root_config = self
            .root_config
            .ok_or(BuilderError::MissingDependency("root configuration module"))?;
        let ui_config = self
            .ui_config
            .ok_or(BuilderError::MissingDependency("UI configuration module"))?;
        let api_config = self
            .api_config
            .ok_or(BuilderError::MissingDependency("API configuration module"))?;

        Ok(LifecycleCoordinator::with_web_config(
            root_config,
            ui_config,
            api_config,
            self.web,
        ))
    }
}

/// Errors that can occur during coordinator building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
