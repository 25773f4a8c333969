//! Captured error values attached to warnings and failures.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A captured error, shared by reference between clones.
///
/// Cloning an `Exception` keeps the same underlying instance, so
/// [`Exception::same_instance`] survives clones while a freshly captured error
/// with identical text only compares equal under [`EqualityMode::Loose`].
#[derive(Clone)]
pub struct Exception {
    error: SharedError,
    type_name: Arc<str>,
}

impl Exception {
    /// Capture an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            error: Arc::new(error),
            type_name: Arc::from(std::any::type_name::<E>()),
        }
    }

    /// Capture an already boxed error under an explicit type name.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync>, type_name: impl AsRef<str>) -> Self {
        Self {
            error: Arc::from(error),
            type_name: Arc::from(type_name.as_ref()),
        }
    }

    /// Build an opaque exception that only remembers a type name and message.
    pub fn opaque(type_name: impl AsRef<str>, message: impl Into<String>) -> Self {
        Self {
            error: Arc::new(OpaqueError {
                message: message.into(),
            }),
            type_name: Arc::from(type_name.as_ref()),
        }
    }

    /// Fully qualified type name of the captured error.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Display message of the captured error.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Borrow the captured error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Downcast to the concrete captured type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// True when both handles point at the same captured instance.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }

    /// True when both exceptions have the same type name and message.
    #[must_use]
    pub fn structurally_eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.message() == other.message()
    }

    /// Serializable snapshot of the exception.
    #[must_use]
    pub fn to_record(&self) -> ExceptionRecord {
        ExceptionRecord {
            type_name: self.type_name.to_string(),
            message: self.message(),
        }
    }

    /// Rebuild an opaque exception from a snapshot.
    #[must_use]
    pub fn from_record(record: ExceptionRecord) -> Self {
        Self::opaque(record.type_name, record.message)
    }
}

impl<E> From<E> for Exception
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("type_name", &self.type_name)
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, formatter)
    }
}

/// Serialized form of an [`Exception`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRecord {
    /// Type name recorded at capture time.
    pub type_name: String,
    /// Display message recorded at capture time.
    pub message: String,
}

/// Stand-in for an error whose concrete type is no longer available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct OpaqueError {
    message: String,
}

/// How exceptions are compared when two outcomes are checked for equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityMode {
    /// Exceptions must be the same captured instance.
    Strict,
    /// Exceptions must share type name and message.
    #[default]
    Loose,
}

impl EqualityMode {
    /// Compare two exceptions under this mode.
    #[must_use]
    pub fn exceptions_equal(self, left: &Exception, right: &Exception) -> bool {
        match self {
            Self::Strict => left.same_instance(right),
            Self::Loose => left.structurally_eq(right),
        }
    }

    /// Compare two optional exceptions; two absent exceptions are equal.
    #[must_use]
    pub fn optional_exceptions_equal(
        self,
        left: Option<&Exception>,
        right: Option<&Exception>,
    ) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => self.exceptions_equal(left, right),
            _ => false,
        }
    }
}
