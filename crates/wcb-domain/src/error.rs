//! Error handling types

use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// What kind of registration collided with an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    /// A dispatcher registered under an already used name
    Dispatcher,
    /// A dispatcher URL mapping already claimed by another dispatcher
    DispatcherMapping,
    /// A filter registered under an already used name
    Filter,
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatcher => write!(f, "dispatcher"),
            Self::DispatcherMapping => write!(f, "dispatcher mapping"),
            Self::Filter => write!(f, "filter"),
        }
    }
}

/// Main error type for the web context bootstrap
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration module could not be resolved or activated,
    /// or the bootstrap settings are invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A dispatcher or filter name/prefix was registered twice
    #[error("Duplicate {kind} registration: {name}")]
    DuplicateRegistration {
        /// Which registration collided
        kind: RegistrationKind,
        /// The colliding name or URL pattern
        name: String,
    },

    /// Shutdown found no root container bound in the host environment
    #[error("Lookup error: no value bound under '{key}'")]
    Lookup {
        /// The attribute key that was looked up
        key: String,
    },

    /// An operation was invoked from the wrong lifecycle or container state
    #[error("Illegal state: cannot {operation} while {state}")]
    IllegalState {
        /// The rejected operation
        operation: String,
        /// The state the target was in
        state: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Registration and lifecycle error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate<S: Into<String>>(kind: RegistrationKind, name: S) -> Self {
        Self::DuplicateRegistration {
            kind,
            name: name.into(),
        }
    }

    /// Create a lookup error for a missing attribute
    pub fn lookup<S: Into<String>>(key: S) -> Self {
        Self::Lookup { key: key.into() }
    }

    /// Create an illegal state error
    pub fn illegal_state<O: Into<String>, S: fmt::Display>(operation: O, state: S) -> Self {
        Self::IllegalState {
            operation: operation.into(),
            state: state.to_string(),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this is a duplicate registration error
    pub fn is_duplicate_registration(&self) -> bool {
        matches!(self, Self::DuplicateRegistration { .. })
    }

    /// Whether this is a lookup error
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    /// Whether this is an illegal state error
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }
}
