//! Domain constants
//!
//! Well-known names shared between the registration components and the
//! host environment.

use crate::value_objects::DispatchType;

// ============================================================================
// ATTRIBUTE KEYS
// ============================================================================

/// Attribute key under which the root container is published in the host
pub const ROOT_CONTAINER_ATTRIBUTE: &str = "wcb.context.ROOT";

// ============================================================================
// DISPATCHER CONSTANTS
// ============================================================================

/// Name of the UI front-end dispatcher
pub const UI_DISPATCHER_NAME: &str = "app";

/// URL mapping of the UI front-end dispatcher
pub const UI_DISPATCHER_PREFIX: &str = "/app/*";

/// Name of the public API dispatcher
pub const API_DISPATCHER_NAME: &str = "api";

/// URL mapping of the public API dispatcher
pub const API_DISPATCHER_PREFIX: &str = "/api/*";

/// Startup priority given to every dispatcher (eager initialization)
pub const DISPATCHER_LOAD_ON_STARTUP: i32 = 1;

// ============================================================================
// SECURITY FILTER CONSTANTS
// ============================================================================

/// Registration name of the delegating security filter
pub const SECURITY_FILTER_NAME: &str = "securityFilterChain";

/// URL pattern covered by the security filter
pub const SECURITY_FILTER_PATTERN: &str = "/*";

/// Dispatch types intercepted by the security filter
pub const SECURITY_DISPATCH_TYPES: [DispatchType; 3] = [
    DispatchType::Request,
    DispatchType::Forward,
    DispatchType::Async,
];
