//! Infrastructure layer constants
//!
//! Domain-level names (dispatcher prefixes, filter name, attribute keys) are
//! defined in `wcb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wcb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wcb";

/// Environment variable prefix for configuration (`WCB__WEB__UI__PREFIX`)
pub const CONFIG_ENV_PREFIX: &str = "WCB";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WCB_LOG";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// Log file name prefix used when the configured path has no usable stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "wcb";

// ============================================================================
// HOST CONSTANTS
// ============================================================================

/// Name reported by the in-memory host environment
pub const IN_MEMORY_HOST_NAME: &str = "in-memory";
