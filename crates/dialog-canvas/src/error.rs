//! Error types for the widget layer
//!
//! Configuration and lookup problems are recoverable: the widget layer
//! degrades to an empty value and records the error on the manager's
//! warning channel. Invalid operations abort the call that caused them.

use std::fmt;

/// Errors raised while building, resolving or driving widgets
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiError {
    /// A constraint value is neither an integer nor a percentage
    Configuration {
        /// Which pattern field was malformed (`x`, `y`, `width`, `height`)
        field: &'static str,
        /// The offending raw value
        value: String,
    },

    /// A style name is not present in the registry
    Lookup {
        /// The missing style name
        name: String,
    },

    /// A precondition of the operation does not hold
    InvalidOperation(String),
}

impl UiError {
    /// Create a configuration error
    pub fn configuration(field: &'static str, value: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            value: value.into(),
        }
    }

    /// Create a lookup error
    pub fn lookup(name: impl Into<String>) -> Self {
        Self::Lookup { name: name.into() }
    }

    /// Create an invalid operation error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Whether the session can continue with a degraded default
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, UiError::InvalidOperation(_))
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Configuration { field, value } => {
                write!(f, "Malformed value for `{}`: {:?}", field, value)
            }
            UiError::Lookup { name } => write!(f, "Unknown style: {}", name),
            UiError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
