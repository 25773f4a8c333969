//! Safe scopes: run an operation and turn an error or panic into a failure.

use crate::panic::PanicError;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tristate_config::{MessageTemplates, ValidatedOutcomeConfig};
use tristate_core::{
    CustomOutcome, Detail, Outcome, Produce, UnitOutcome, ValueCustomOutcome, ValueOutcome,
};
use tristate_shared::Exception;

/// Runs operations and captures their errors and panics as failures.
///
/// The failure message is the configured safe-scope template with the
/// captured error's message substituted; the error itself becomes the
/// failure's exception.
#[derive(Debug, Clone, Default)]
pub struct SafeScope {
    templates: MessageTemplates,
}

impl SafeScope {
    /// Scope using the templates of a validated config.
    #[must_use]
    pub fn new(config: &ValidatedOutcomeConfig) -> Self {
        Self {
            templates: config.messages().clone(),
        }
    }

    /// Message templates used by this scope.
    #[must_use]
    pub const fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Run an operation without payload.
    pub fn outcome<F, X>(&self, operation: F) -> UnitOutcome
    where
        F: FnOnce() -> Result<(), X>,
        X: Into<Exception>,
    {
        self.value_outcome(operation)
    }

    /// Run an operation producing a payload.
    pub fn value_outcome<T, F, X>(&self, operation: F) -> ValueOutcome<T>
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<Exception>,
    {
        match run(operation) {
            Ok(value) => Outcome::success(value),
            Err(exception) => Outcome::failure_with_detail((), self.capture(exception)),
        }
    }

    /// Run an operation without payload; a captured error gets a custom error
    /// from `default_error`.
    pub fn custom_outcome<E, F, X, P>(&self, operation: F, default_error: P) -> CustomOutcome<E>
    where
        F: FnOnce() -> Result<(), X>,
        X: Into<Exception>,
        P: Produce<Exception, E>,
    {
        self.value_custom_outcome(operation, default_error)
    }

    /// Run an operation producing a payload; a captured error gets a custom
    /// error from `default_error`.
    pub fn value_custom_outcome<T, E, F, X, P>(
        &self,
        operation: F,
        default_error: P,
    ) -> ValueCustomOutcome<T, E>
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<Exception>,
        P: Produce<Exception, E>,
    {
        match run(operation) {
            Ok(value) => Outcome::success(value),
            Err(exception) => {
                let error = default_error.produce(&exception);
                Outcome::failure_with_detail(error, self.capture(exception))
            },
        }
    }

    fn capture(&self, exception: Exception) -> Detail {
        Detail::captured(&self.templates, exception)
    }
}

fn run<T, F, X>(operation: F) -> Result<T, Exception>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
{
    let exception = match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => error.into(),
        Err(payload) => Exception::new(PanicError::from_payload(payload.as_ref())),
    };
    tracing::debug!(
        exception_type = exception.type_name(),
        exception_message = %exception,
        "safe scope captured an error"
    );
    Err(exception)
}

/// [`SafeScope::outcome`] with the default templates.
pub fn safe_outcome<F, X>(operation: F) -> UnitOutcome
where
    F: FnOnce() -> Result<(), X>,
    X: Into<Exception>,
{
    SafeScope::default().outcome(operation)
}

/// [`SafeScope::value_outcome`] with the default templates.
pub fn safe_value_outcome<T, F, X>(operation: F) -> ValueOutcome<T>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
{
    SafeScope::default().value_outcome(operation)
}

/// [`SafeScope::custom_outcome`] with the default templates.
pub fn safe_custom_outcome<E, F, X, P>(operation: F, default_error: P) -> CustomOutcome<E>
where
    F: FnOnce() -> Result<(), X>,
    X: Into<Exception>,
    P: Produce<Exception, E>,
{
    SafeScope::default().custom_outcome(operation, default_error)
}

/// [`SafeScope::value_custom_outcome`] with the default templates.
pub fn safe_value_custom_outcome<T, E, F, X, P>(
    operation: F,
    default_error: P,
) -> ValueCustomOutcome<T, E>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
    P: Produce<Exception, E>,
{
    SafeScope::default().value_custom_outcome(operation, default_error)
}
