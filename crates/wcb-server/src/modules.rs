//! Built-in configuration modules
//!
//! The business and route modules are supplied by the embedding
//! application. The binary has none, so it wires these instead: the root
//! container holds the loaded settings and each front-end container holds
//! its own dispatcher settings.

use wcb_domain::error::{Error, Result};
use wcb_infrastructure::config::{AppConfig, DispatcherConfig};
use wcb_infrastructure::container::{ConfigModule, ContainerScope};

/// Root module publishing the application settings
#[derive(Debug, Clone)]
pub struct SettingsModule {
    settings: AppConfig,
}

impl SettingsModule {
    pub fn new(settings: AppConfig) -> Self {
        Self { settings }
    }
}

impl ConfigModule for SettingsModule {
    fn name(&self) -> &str {
        "settings"
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        scope.add_value(self.settings.clone())?;
        Ok(())
    }
}

/// Front-end module publishing its dispatcher settings
///
/// Requires [`AppConfig`] from the parent container.
#[derive(Debug, Clone)]
pub struct FrontEndModule {
    name: String,
    dispatcher: DispatcherConfig,
}

impl FrontEndModule {
    pub fn new<S: Into<String>>(name: S, dispatcher: DispatcherConfig) -> Self {
        Self {
            name: name.into(),
            dispatcher,
        }
    }
}

impl ConfigModule for FrontEndModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        if scope.resolve::<AppConfig>().is_none() {
            return Err(Error::configuration(format!(
                "Module '{}' requires application settings in the parent container",
                self.name
            )));
        }
        scope.add_value(self.dispatcher.clone())?;
        Ok(())
    }
}
