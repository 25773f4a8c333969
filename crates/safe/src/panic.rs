//! Panics captured by a safe scope.

use std::any::Any;

/// A panic caught inside a safe scope, kept as the failure's exception.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Read the panic message from a `catch_unwind` payload.
    ///
    /// `panic!` payloads are `&str` or `String`; anything else gets a
    /// generic message.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_owned());
        Self { message }
    }

    /// Panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
