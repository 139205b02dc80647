//! Application Initialization
//!
//! Loads configuration, installs logging, starts the lifecycle coordinator
//! against the in-memory host, and stops it again on Ctrl-C.

use crate::lifecycle::LifecycleCoordinator;
use crate::modules::{FrontEndModule, SettingsModule};
use crate::surface::RegistrationSurface;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use wcb_domain::constants::SECURITY_FILTER_NAME;
use wcb_domain::ports::HostEnvironment;
use wcb_infrastructure::config::{AppConfig, ConfigLoader};
use wcb_infrastructure::web::InMemoryHostEnvironment;

/// Run the web context bootstrap
///
/// Prints the registration surface as JSON once startup succeeds. With
/// `dry_run` the contexts are torn down immediately instead of waiting for
/// Ctrl-C.
pub async fn run(
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    wcb_infrastructure::logging::init_logging(config.logging.clone())?;

    let host: Arc<dyn HostEnvironment> = Arc::new(InMemoryHostEnvironment::default());
    let mut coordinator = create_coordinator(config)?;

    coordinator.on_start(&host, None)?;
    let surface = RegistrationSurface::capture(host.as_ref(), &[SECURITY_FILTER_NAME]);
    println!("{}", surface.to_json()?);

    if dry_run {
        info!("Dry run requested, shutting down");
    } else {
        info!("Waiting for Ctrl-C");
        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received");
    }

    coordinator.on_stop(&host)?;
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Build a coordinator wired with the built-in modules
pub fn create_coordinator(
    config: AppConfig,
) -> Result<LifecycleCoordinator, Box<dyn std::error::Error>> {
    let web = config.web.clone();
    LifecycleCoordinator::builder()
        .with_ui_config(Arc::new(FrontEndModule::new("ui", web.ui.clone())))
        .with_api_config(Arc::new(FrontEndModule::new("public-api", web.api.clone())))
        .with_root_config(Arc::new(SettingsModule::new(config)))
        .with_web_config(web)
        .try_build()
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
}
