//! Value Objects
//!
//! Immutable values exchanged between the registration components and the
//! host environment.

/// Container identity and state
pub mod container;
/// Request dispatch types
pub mod dispatch;
/// Lifecycle state machine values
pub mod lifecycle;
/// Dispatcher and filter registration records
pub mod registration;
/// Servlet-style URL patterns
pub mod url_pattern;

pub use container::{ContainerId, ContainerState};
pub use dispatch::DispatchType;
pub use lifecycle::LifecycleState;
pub use registration::{DispatcherRegistration, FilterRegistration};
pub use url_pattern::UrlPattern;
