//! Application configuration root

use super::logging::LoggingConfig;
use super::web::WebConfig;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Dispatcher wiring settings
    pub web: WebConfig,
}
