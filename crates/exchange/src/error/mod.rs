//! Error handling for key-agreement sessions

use core::fmt;

use wsnkey_algorithms::error::Error as PrimitiveError;
use wsnkey_api::error::Error as CoreError;

/// Error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Invalid key material
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid group parameters
    InvalidParameters {
        context: &'static str,
        reason: &'static str,
    },

    /// `value` has no inverse modulo `modulus`
    NoInverse { value: u64, modulus: u64 },

    /// A protocol run could not proceed
    Protocol {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidParameters { context, reason } => {
                write!(f, "Invalid parameters for {}: {}", context, reason)
            }
            Error::NoInverse { value, modulus } => {
                write!(f, "{} has no inverse modulo {}", value, modulus)
            }
            Error::Protocol { context, details } => {
                write!(f, "Protocol error in {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidParameters { context, reason } => CoreError::InvalidParameter {
                context,
                message: reason.to_string(),
            },
            Error::NoInverse { value, modulus } => CoreError::Other {
                context: "GDH mod_inv",
                message: format!("{} has no inverse modulo {}", value, modulus),
            },
            Error::Protocol { context, details } => CoreError::Other {
                context,
                message: details.to_string(),
            },
        }
    }
}

pub mod validate;
