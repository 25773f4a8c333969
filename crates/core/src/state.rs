//! Tri-state record shared by every outcome shape.
//!
//! A warning is a success that carries a message, never a separate flag:
//! `is_warning == is_success && message.is_some()`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tristate_config::{DEFAULT_SAFE_SCOPE, MessageTemplates};
use tristate_shared::{ContractError, EqualityMode, Exception};

/// Prefix placed before the outer message when a warning wraps another
/// warning or failure during flattening.
pub const RESULTING_IN: &str = "Resulting in: ";

/// Category of an outcome, ordered `Failure < Warning < Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The operation failed; a message is always present.
    Failure,
    /// The operation succeeded with an advisory message.
    Warning,
    /// The operation succeeded without remarks.
    Success,
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => formatter.write_str("failure"),
            Self::Warning => formatter.write_str("warning"),
            Self::Success => formatter.write_str("success"),
        }
    }
}

/// Non-empty message carried by warnings and failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Box<str>);

impl Message {
    /// Validate a message; empty text is an invalid argument.
    pub fn new(text: impl Into<String>) -> Result<Self, ContractError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ContractError::invalid_argument(
                "warning and failure messages must be non-empty",
            ));
        }
        Ok(Self(text.into_boxed_str()))
    }

    /// Borrow the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Message from `text`, or from `fallback` when `text` is empty.
    ///
    /// Callers pass one of the non-empty library defaults as `fallback`.
    pub(crate) fn or_fallback(text: &str, fallback: &'static str) -> Self {
        let text = if text.is_empty() { fallback } else { text };
        Self(text.into())
    }

    fn resulting_in(inner: &Self, outer: &Self) -> Self {
        Self(format!("{inner}\n{RESULTING_IN}{outer}").into_boxed_str())
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Message and optional captured exception of a warning or failure.
///
/// Error producers that build an error from the source outcome receive this.
#[derive(Debug, Clone)]
pub struct Detail {
    message: Message,
    exception: Option<Exception>,
}

impl Detail {
    /// Build a detail from a validated message.
    #[must_use]
    pub const fn new(message: Message, exception: Option<Exception>) -> Self {
        Self { message, exception }
    }

    /// Detail of an error captured by a safe scope: the safe-scope template
    /// rendered with the error's message, and the error as exception.
    ///
    /// An empty rendering falls back to the default safe-scope template.
    #[must_use]
    pub fn captured(templates: &MessageTemplates, exception: Exception) -> Self {
        let rendered = templates.render_safe_scope(&exception.message());
        Self::new(
            Message::or_fallback(&rendered, DEFAULT_SAFE_SCOPE),
            Some(exception),
        )
    }

    /// Validate a message and attach an optional exception.
    pub fn parse(
        message: impl Into<String>,
        exception: Option<Exception>,
    ) -> Result<Self, ContractError> {
        Ok(Self::new(Message::new(message)?, exception))
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Captured exception, if any.
    #[must_use]
    pub const fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }

    /// Merge an inner detail with the outer warning that wrapped it.
    ///
    /// The inner exception wins when both are present.
    #[must_use]
    pub(crate) fn resulting_in(self, outer: Self) -> Self {
        Self {
            message: Message::resulting_in(&self.message, &outer.message),
            exception: self.exception.or(outer.exception),
        }
    }
}

/// Borrowed view of the tri-state record.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeState<'a> {
    is_success: bool,
    message: Option<&'a str>,
    exception: Option<&'a Exception>,
}

impl<'a> OutcomeState<'a> {
    pub(crate) const fn success() -> Self {
        Self {
            is_success: true,
            message: None,
            exception: None,
        }
    }

    pub(crate) fn warning(detail: &'a Detail) -> Self {
        Self {
            is_success: true,
            message: Some(detail.message()),
            exception: detail.exception(),
        }
    }

    pub(crate) fn failure(detail: &'a Detail) -> Self {
        Self {
            is_success: false,
            message: Some(detail.message()),
            exception: detail.exception(),
        }
    }

    /// True for successes and warnings.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// True for a success that carries a message.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.is_success && self.message.is_some()
    }

    /// True for failures.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// Category derived from the success flag and message presence.
    #[must_use]
    pub const fn category(&self) -> Category {
        if !self.is_success {
            Category::Failure
        } else if self.message.is_some() {
            Category::Warning
        } else {
            Category::Success
        }
    }

    /// Message of a warning or failure.
    #[must_use]
    pub const fn message(&self) -> Option<&'a str> {
        self.message
    }

    /// Exception of a warning or failure.
    #[must_use]
    pub const fn exception(&self) -> Option<&'a Exception> {
        self.exception
    }

    /// Warnings and failures can be turned into failures without inventing a message.
    #[must_use]
    pub const fn is_convertible_to_failure(&self) -> bool {
        !matches!(self.category(), Category::Success)
    }

    /// Successes and warnings can be turned into warnings without losing a payload.
    #[must_use]
    pub const fn is_convertible_to_warning(&self) -> bool {
        self.is_success
    }

    /// Compare success flag, message, and (for warnings and failures) exception.
    #[must_use]
    pub fn equals(&self, other: &Self, mode: EqualityMode) -> bool {
        if self.is_success != other.is_success || self.message != other.message {
            return false;
        }
        if self.category() == Category::Success {
            return true;
        }
        mode.optional_exceptions_equal(self.exception, other.exception)
    }

    /// Order by category only.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category())
    }
}

/// Borrowed view of the record plus the typed error channel.
///
/// `error` is present exactly when the state is a failure.
#[derive(Debug)]
pub struct TypedState<'a, E> {
    state: OutcomeState<'a>,
    error: Option<&'a E>,
}

impl<E> Clone for TypedState<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TypedState<'_, E> {}

impl<'a, E> TypedState<'a, E> {
    pub(crate) const fn new(state: OutcomeState<'a>, error: Option<&'a E>) -> Self {
        Self { state, error }
    }

    /// Untyped part of the record.
    #[must_use]
    pub const fn state(&self) -> OutcomeState<'a> {
        self.state
    }

    /// Error of a failure.
    #[must_use]
    pub const fn error(&self) -> Option<&'a E> {
        self.error
    }

    /// Compare the untyped record and the errors.
    ///
    /// `mode` applies to exceptions only; errors always compare with
    /// `PartialEq`.
    #[must_use]
    pub fn equals(&self, other: &Self, mode: EqualityMode) -> bool
    where
        E: PartialEq,
    {
        self.state.equals(&other.state, mode) && self.error == other.error
    }
}
