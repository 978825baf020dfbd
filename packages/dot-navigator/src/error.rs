//! Error types for the navigator.

use std::fmt;

/// The mutating operation that was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Set,
    Unset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Set => write!(f, "set"),
            Operation::Unset => write!(f, "unset"),
        }
    }
}

/// Errors raised by a [`DotNavigator`](crate::DotNavigator).
///
/// The navigation operations themselves only ever fail with
/// `AlreadyInitialized` or `ReadOnly`. The `Encode` and `Decode` variants
/// come from the typed helpers `get_as` and `set_as`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the navigator data is already initialized and cannot be overwritten")]
    AlreadyInitialized,

    #[error("the navigator is in read only mode: cannot {operation}")]
    ReadOnly { operation: Operation },

    #[error("failed to encode value for {path}: {message}")]
    Encode { path: String, message: String },

    #[error("failed to decode value at {path}: {message}")]
    Decode { path: String, message: String },
}

impl Error {
    pub fn read_only(operation: Operation) -> Self {
        Error::ReadOnly { operation }
    }

    pub fn encode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Encode {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Decode {
            path: path.into(),
            message: message.into(),
        }
    }
}
