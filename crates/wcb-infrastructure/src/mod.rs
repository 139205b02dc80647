//! # Infrastructure Layer
//!
//! Technical building blocks used by the bootstrap orchestrator.
//!
//! ## Module Categories
//!
//! ### Containers
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Container tree, factory and dill-backed configuration modules |
//!
//! ### Hosting
//! | Module | Description |
//! |--------|-------------|
//! | [`web`] | Dispatcher/filter adapters and the in-memory host environment |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration |
//! | [`constants`] | Infrastructure constants |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;
pub mod web;

// Re-export commonly used types
pub use container::{ConfigModule, Container, ContainerFactory, ContainerScope};
pub use error_ext::ErrorContext;
pub use web::{ContainerDispatcher, DelegatingFilter, InMemoryHostEnvironment, RoutePlan};
