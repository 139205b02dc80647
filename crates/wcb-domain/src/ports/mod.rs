//! Domain Port Interfaces
//!
//! Contracts implemented by the hosting runtime and by the request-handling
//! adapters registered with it.

/// Host environment and request-handling contracts
pub mod host;

pub use host::{Attribute, HostEnvironment, RequestDispatcher, RequestFilter};
