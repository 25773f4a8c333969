//! Contract error types raised synchronously on API misuse.
//!
//! Domain failures are never represented here: they are data carried by an
//! outcome. A `ContractError` means the caller broke a precondition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractErrorKind {
    /// A required argument was empty or otherwise unusable.
    InvalidArgument,
    /// The operation is not legal for the receiver's current category.
    IllegalState,
    /// Two values of unrelated outcome shapes were compared.
    TypeMismatch,
}

impl ContractErrorKind {
    /// Stable error code associated with the kind.
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::InvalidArgument => ErrorCode::invalid_argument(),
            Self::IllegalState => ErrorCode::illegal_state(),
            Self::TypeMismatch => ErrorCode::type_mismatch(),
        }
    }
}

impl fmt::Display for ContractErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => formatter.write_str("invalid argument"),
            Self::IllegalState => formatter.write_str("illegal state"),
            Self::TypeMismatch => formatter.write_str("type mismatch"),
        }
    }
}

/// Stable error code with namespace and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode {
    namespace: String,
    code: String,
}

impl ErrorCode {
    /// Create a new error code with a namespace and code.
    pub fn new(namespace: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            code: code.into(),
        }
    }

    /// Invalid argument code.
    pub fn invalid_argument() -> Self {
        Self::new("outcome", "invalid_argument")
    }

    /// Illegal state code.
    pub fn illegal_state() -> Self {
        Self::new("outcome", "illegal_state")
    }

    /// Type mismatch code.
    pub fn type_mismatch() -> Self {
        Self::new("outcome", "type_mismatch")
    }

    /// Returns the namespace portion.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the code identifier.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.namespace, self.code)
    }
}

/// Programmer-error condition returned by outcome constructors, accessors and
/// combinators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ContractError {
    kind: ContractErrorKind,
    message: String,
}

impl ContractError {
    /// Create an error of the given kind.
    pub fn new(kind: ContractErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A required argument was empty.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ContractErrorKind::InvalidArgument, message)
    }

    /// The receiver is in the wrong category for the requested operation.
    pub fn illegal_state(message: impl Into<String>) -> Self {
        let error = Self::new(ContractErrorKind::IllegalState, message);
        tracing::debug!(code = %error.code(), message = %error.message, "outcome contract violated");
        error
    }

    /// The compared values have unrelated shapes.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        let error = Self::new(ContractErrorKind::TypeMismatch, message);
        tracing::debug!(code = %error.code(), message = %error.message, "outcome contract violated");
        error
    }

    /// Returns the violation kind.
    #[must_use]
    pub const fn kind(&self) -> ContractErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the stable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Returns true for [`ContractErrorKind::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ContractErrorKind::InvalidArgument)
    }

    /// Returns true for [`ContractErrorKind::IllegalState`].
    #[must_use]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self.kind, ContractErrorKind::IllegalState)
    }

    /// Returns true for [`ContractErrorKind::TypeMismatch`].
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ContractErrorKind::TypeMismatch)
    }
}
