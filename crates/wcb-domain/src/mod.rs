//! # Web Context Bootstrap - Domain Layer
//!
//! Core types shared by every layer of the bootstrap orchestrator.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy raised by container, registration and lifecycle steps |
//! | [`constants`] | Well-known names, prefixes and attribute keys |
//! | [`value_objects`] | Dispatch types, URL patterns, registration records, lifecycle state |
//! | [`ports`] | Host environment and request-handling contracts |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, RegistrationKind, Result};
pub use ports::{Attribute, HostEnvironment, RequestDispatcher, RequestFilter};
pub use value_objects::{
    ContainerId, ContainerState, DispatchType, DispatcherRegistration, FilterRegistration,
    LifecycleState, UrlPattern,
};
