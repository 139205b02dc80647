//! # Web Context Bootstrap Server
//!
//! Assembles the container hierarchy of a multi-context web application,
//! registers the UI and public API dispatchers under a shared root, installs
//! the security filter chain in front of every route, and tears it all down
//! again on shutdown.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wcb_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config (wcb.toml + WCB__ environment), wait for Ctrl-C
//!     run(None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LifecycleCoordinator`] | Start/stop state machine invoked by the host |
//! | [`LifecycleCoordinatorBuilder`] | Builder checking that every module is supplied |
//! | [`RootContainerInitializer`] | Creates or adopts the root container |
//! | [`DispatcherRegistrar`] | Child container plus dispatcher per front end |
//! | [`SecurityChainInstaller`] | Delegating security filter on `/*` |

pub mod builder;
pub mod dispatcher;
pub mod init;
pub mod lifecycle;
pub mod modules;
pub mod root;
pub mod security;
pub mod surface;

pub use builder::{BuilderError, LifecycleCoordinatorBuilder};
pub use dispatcher::DispatcherRegistrar;
pub use init::run;
pub use lifecycle::LifecycleCoordinator;
pub use root::RootContainerInitializer;
pub use security::SecurityChainInstaller;
pub use surface::RegistrationSurface;
