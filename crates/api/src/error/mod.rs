//! Error handling for the key-agreement ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

/// Extension trait for attaching call-site context to foreign errors
pub trait ResultExt<T, E>: Sized {
    /// Convert the error into [`Error`] and replace its context
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| Into::<Error>::into(e).with_context(context))
    }
}
