//! The generic outcome type and its factories, predicates, and accessors.
//!
//! One type covers all four shapes: `()` stands in for "no value" and for
//! "no custom error".

use crate::state::{Category, Detail, OutcomeState, TypedState};
use std::fmt;
use tristate_shared::{ContractError, Exception};

/// Success, warning, or failure, with an optional payload and typed error.
///
/// The payload is readable only on successes and warnings; the error only on
/// failures.
#[derive(Debug, Clone)]
pub struct Outcome<T = (), E = ()> {
    pub(crate) repr: Repr<T, E>,
}

#[derive(Debug, Clone)]
pub(crate) enum Repr<T, E> {
    Success(T),
    Warning { value: T, detail: Detail },
    Failure { error: E, detail: Detail },
}

/// Outcome without payload and without custom error.
pub type UnitOutcome = Outcome<(), ()>;
/// Outcome with a payload and without custom error.
pub type ValueOutcome<T> = Outcome<T, ()>;
/// Outcome without payload and with a custom error.
pub type CustomOutcome<E> = Outcome<(), E>;
/// Outcome with a payload and a custom error.
pub type ValueCustomOutcome<T, E> = Outcome<T, E>;

impl<E> Outcome<(), E> {
    /// Pure success without payload.
    #[must_use]
    pub const fn ok() -> Self {
        Self::success(())
    }

    /// Warning without payload.
    pub fn warn(message: impl Into<String>) -> Result<Self, ContractError> {
        Self::warning((), message)
    }

    /// Warning without payload, carrying an exception.
    pub fn warn_with(
        message: impl Into<String>,
        exception: impl Into<Exception>,
    ) -> Result<Self, ContractError> {
        Self::warning_with((), message, exception)
    }
}

impl<T> Outcome<T, ()> {
    /// Failure on a default-error shape.
    pub fn fail(message: impl Into<String>) -> Result<Self, ContractError> {
        Self::failure((), message)
    }

    /// Failure on a default-error shape, carrying an exception.
    pub fn fail_with(
        message: impl Into<String>,
        exception: impl Into<Exception>,
    ) -> Result<Self, ContractError> {
        Self::failure_with((), message, exception)
    }
}

impl<T, E> Outcome<T, E> {
    /// Pure success carrying `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            repr: Repr::Success(value),
        }
    }

    /// Warning carrying `value`.
    pub fn warning(value: T, message: impl Into<String>) -> Result<Self, ContractError> {
        Ok(Self::warned(value, Detail::parse(message, None)?))
    }

    /// Warning carrying `value` and an exception.
    pub fn warning_with(
        value: T,
        message: impl Into<String>,
        exception: impl Into<Exception>,
    ) -> Result<Self, ContractError> {
        Ok(Self::warned(
            value,
            Detail::parse(message, Some(exception.into()))?,
        ))
    }

    /// Failure carrying `error`.
    pub fn failure(error: E, message: impl Into<String>) -> Result<Self, ContractError> {
        Ok(Self::failed(error, Detail::parse(message, None)?))
    }

    /// Failure carrying `error` and an exception.
    pub fn failure_with(
        error: E,
        message: impl Into<String>,
        exception: impl Into<Exception>,
    ) -> Result<Self, ContractError> {
        Ok(Self::failed(
            error,
            Detail::parse(message, Some(exception.into()))?,
        ))
    }

    /// Failure from an already validated detail.
    #[must_use]
    pub const fn failure_with_detail(error: E, detail: Detail) -> Self {
        Self::failed(error, detail)
    }

    pub(crate) const fn warned(value: T, detail: Detail) -> Self {
        Self {
            repr: Repr::Warning { value, detail },
        }
    }

    pub(crate) const fn failed(error: E, detail: Detail) -> Self {
        Self {
            repr: Repr::Failure { error, detail },
        }
    }

    /// Rebuild the outcome with converted payload and error, keeping the
    /// category, message, and exception.
    pub(crate) fn map_parts<U, E2, V, R>(self, value: V, error: R) -> Outcome<U, E2>
    where
        V: FnOnce(T) -> U,
        R: FnOnce(E, &Detail) -> E2,
    {
        match self.repr {
            Repr::Success(inner) => Outcome::success(value(inner)),
            Repr::Warning {
                value: inner,
                detail,
            } => Outcome::warned(value(inner), detail),
            Repr::Failure {
                error: inner,
                detail,
            } => {
                let converted = error(inner, &detail);
                Outcome::failed(converted, detail)
            },
        }
    }

    /// True for successes and warnings.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// True for a success without message.
    #[must_use]
    pub const fn is_pure_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// True for a success with an advisory message.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.repr, Repr::Warning { .. })
    }

    /// True for failures.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.repr, Repr::Failure { .. })
    }

    /// Category of the outcome.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self.repr {
            Repr::Success(_) => Category::Success,
            Repr::Warning { .. } => Category::Warning,
            Repr::Failure { .. } => Category::Failure,
        }
    }

    /// Message and exception of a warning or failure.
    #[must_use]
    pub const fn detail(&self) -> Option<&Detail> {
        match &self.repr {
            Repr::Success(_) => None,
            Repr::Warning { detail, .. } | Repr::Failure { detail, .. } => Some(detail),
        }
    }

    /// Message of a warning or failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.detail().map(Detail::message)
    }

    /// Exception of a warning or failure.
    #[must_use]
    pub fn exception(&self) -> Option<&Exception> {
        self.detail().and_then(Detail::exception)
    }

    /// Payload of a success or warning.
    pub fn value(&self) -> Result<&T, ContractError> {
        self.ok_value().ok_or_else(value_on_failure)
    }

    /// Payload of a success or warning, or `None` on failure.
    #[must_use]
    pub const fn ok_value(&self) -> Option<&T> {
        match &self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => Some(value),
            Repr::Failure { .. } => None,
        }
    }

    /// Consume the outcome and return its payload.
    pub fn into_value(self) -> Result<T, ContractError> {
        match self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => Ok(value),
            Repr::Failure { .. } => Err(value_on_failure()),
        }
    }

    /// Error of a failure.
    pub fn error(&self) -> Result<&E, ContractError> {
        self.err().ok_or_else(|| error_on_non_failure(self.category()))
    }

    /// Error of a failure, or `None` on success and warning.
    #[must_use]
    pub const fn err(&self) -> Option<&E> {
        match &self.repr {
            Repr::Failure { error, .. } => Some(error),
            Repr::Success(_) | Repr::Warning { .. } => None,
        }
    }

    /// Consume the outcome and return its error.
    pub fn into_error(self) -> Result<E, ContractError> {
        let category = self.category();
        match self.repr {
            Repr::Failure { error, .. } => Ok(error),
            Repr::Success(_) | Repr::Warning { .. } => Err(error_on_non_failure(category)),
        }
    }

    /// Untyped view of the tri-state record.
    #[must_use]
    pub fn state(&self) -> OutcomeState<'_> {
        match &self.repr {
            Repr::Success(_) => OutcomeState::success(),
            Repr::Warning { detail, .. } => OutcomeState::warning(detail),
            Repr::Failure { detail, .. } => OutcomeState::failure(detail),
        }
    }

    /// View of the tri-state record including the error channel.
    #[must_use]
    pub fn typed_state(&self) -> TypedState<'_, E> {
        TypedState::new(self.state(), self.err())
    }
}

fn value_on_failure() -> ContractError {
    ContractError::illegal_state("an outcome in the failure category has no value")
}

fn error_on_non_failure(category: Category) -> ContractError {
    ContractError::illegal_state(format!("an outcome in the {category} category has no error"))
}

impl<T, E> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(_) => formatter.write_str("Success"),
            Repr::Warning { detail, .. } => write!(formatter, "Warning: {}", detail.message()),
            Repr::Failure { detail, .. } => write!(formatter, "Failure: {}", detail.message()),
        }
    }
}
