//! # Web Context Bootstrap
//!
//! Bootstrap orchestrator for a multi-context web application: a root
//! container, a UI dispatcher and a public API dispatcher built as its
//! children, and a security filter chain in front of every route.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wcb::infrastructure::web::InMemoryHostEnvironment;
//! use wcb::{HostEnvironment, LifecycleCoordinator};
//!
//! let host: Arc<dyn HostEnvironment> = Arc::new(InMemoryHostEnvironment::default());
//! let mut coordinator = LifecycleCoordinator::new(root_module, ui_module, api_module);
//!
//! coordinator.on_start(&host, None)?;
//! // ... serve requests ...
//! coordinator.on_stop(&host)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, registration records, lifecycle state and host ports
//! - `infrastructure` - Container tree, host adapters, configuration and logging
//! - `server` - Root initializer, dispatcher registrar, security installer and lifecycle

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wcb_domain::*;
}

/// Server layer - lifecycle coordination and registration components
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use wcb_server::*;
}

/// Infrastructure layer - containers, host adapters, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wcb_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run;

// Re-export server types for convenience
pub use server::{LifecycleCoordinator, LifecycleCoordinatorBuilder};
