//! Error fixtures for custom-error outcomes and captured exceptions.

use serde::{Deserialize, Serialize};
use tristate_shared::Exception;

/// Standalone error used as a captured exception.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sample failure: {0}")]
pub struct SampleError(pub String);

/// Typed error carried on the custom-error channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DomainError {
    /// The requested record is missing.
    #[error("not found: {key}")]
    NotFound {
        /// Lookup key.
        key: String,
    },
    /// A validation rule rejected the input.
    #[error("rejected with code {code}")]
    Rejected {
        /// Rule code.
        code: u16,
    },
    /// Fallback error for failures that had none.
    #[error("unexpected failure")]
    Unexpected,
}

impl DomainError {
    /// `NotFound` fixture.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// A captured `SampleError`.
pub fn sample_exception() -> Exception {
    Exception::new(SampleError("fixture".to_owned()))
}
