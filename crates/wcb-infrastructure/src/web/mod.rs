//! Web hosting adapters
//!
//! Concrete dispatcher and filter types registered with a host, plus an
//! in-memory [`HostEnvironment`](wcb_domain::ports::HostEnvironment) used by
//! the binary and the test suites.

pub mod dispatcher;
pub mod filter;
pub mod host;

pub use dispatcher::ContainerDispatcher;
pub use filter::DelegatingFilter;
pub use host::{InMemoryHostEnvironment, RoutePlan};
