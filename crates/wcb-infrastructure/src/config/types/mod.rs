//! Configuration types module

pub mod app;
pub mod logging;
pub mod web;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use web::{DispatcherConfig, WebConfig};
