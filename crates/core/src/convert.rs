//! Conversions between outcome shapes and to/from `Option` and `Either`.
//!
//! Narrowings (dropping the value or the custom error) are total. Widenings
//! that would have to invent a value or an error are only defined for
//! failures, and only when the error can be copied or is supplied.

use crate::outcome::{Outcome, Repr};
use crate::produce::{Literal, Produce};
use crate::state::{Category, Detail, Message};
use std::fmt;
use tristate_config::{
    DEFAULT_LEFT_BRANCH, DEFAULT_MISSING_VALUE, DEFAULT_UNSET_UNION, MessageTemplates,
};
use tristate_shared::{ContractError, Either, Exception};

/// Failure split out of an outcome by [`Outcome::into_result`].
#[derive(Debug, Clone)]
pub struct FailureReport<E> {
    /// Typed error of the failure.
    pub error: E,
    /// Failure message.
    pub message: String,
    /// Captured exception, if any.
    pub exception: Option<Exception>,
}

impl<E> fmt::Display for FailureReport<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl<E: fmt::Debug> std::error::Error for FailureReport<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.exception
            .as_ref()
            .map(|exception| exception.as_error() as &(dyn std::error::Error + 'static))
    }
}

impl<T, E> Outcome<T, E> {
    /// Drop the custom error channel.
    #[must_use]
    pub fn without_error(self) -> Outcome<T, ()> {
        self.map_parts(|value| value, |_, _| ())
    }

    /// Drop the payload.
    #[must_use]
    pub fn without_value(self) -> Outcome<(), E> {
        self.map_parts(|_| (), |error, _| error)
    }

    /// Drop both payload and custom error.
    #[must_use]
    pub fn into_plain(self) -> Outcome {
        self.map_parts(|_| (), |_, _| ())
    }

    /// `Some(value)` for successes and warnings, `None` for failures.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into_value().ok()
    }

    /// `Right(value)` for successes and warnings, `Left(error)` for failures.
    #[must_use]
    pub fn into_either(self) -> Either<E, T> {
        match self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => Either::Right(value),
            Repr::Failure { error, .. } => Either::Left(error),
        }
    }

    /// `Ok(value)` for successes and warnings, `Err(report)` for failures.
    pub fn into_result(self) -> Result<T, FailureReport<E>> {
        match self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => Ok(value),
            Repr::Failure { error, detail } => Err(FailureReport {
                error,
                message: detail.message().to_owned(),
                exception: detail.exception().cloned(),
            }),
        }
    }

    /// Re-type a failure, copying its error, message, and exception.
    pub fn fail_from<U>(source: Outcome<U, E>) -> Result<Self, ContractError> {
        let category = source.category();
        match source.repr {
            Repr::Failure { error, detail } => Ok(Self::failed(error, detail)),
            Repr::Success(_) | Repr::Warning { .. } => Err(not_a_failure(category)),
        }
    }

    /// Re-type a default-error failure into this custom-error shape.
    pub fn fail_from_with_error<U>(source: Outcome<U, ()>, error: E) -> Result<Self, ContractError> {
        let category = source.category();
        match source.repr {
            Repr::Failure { detail, .. } => Ok(Self::failed(error, detail)),
            Repr::Success(_) | Repr::Warning { .. } => Err(not_a_failure(category)),
        }
    }

    /// Lift a present optional into a success.
    ///
    /// An absent optional cannot be lifted without an error to attach.
    pub fn try_from_option(option: Option<T>) -> Result<Self, ContractError> {
        option.map(Self::success).ok_or_else(|| {
            ContractError::illegal_state(
                "an absent optional cannot become a custom-error failure without an error",
            )
        })
    }

    /// Lift an optional; absence becomes a failure with `message` and a
    /// produced error.
    pub fn from_option_with<P>(
        option: Option<T>,
        message: impl Into<String>,
        error: P,
    ) -> Result<Self, ContractError>
    where
        P: Produce<(), E>,
    {
        let message = Message::new(message)?;
        Ok(match option {
            Some(value) => Self::success(value),
            None => Self::failed(error.produce(&()), Detail::new(message, None)),
        })
    }

    /// Lift a union: `Right` becomes a success, `Left` a failure carrying the
    /// left value as error.
    pub fn try_from_either(either: Either<E, T>) -> Result<Self, ContractError> {
        Self::try_from_either_with(either, &MessageTemplates::default())
    }

    /// [`Outcome::try_from_either`] with explicit message templates.
    pub fn try_from_either_with(
        either: Either<E, T>,
        templates: &MessageTemplates,
    ) -> Result<Self, ContractError> {
        match either {
            Either::Right(value) => Ok(Self::success(value)),
            Either::Left(error) => Ok(Self::failed(
                error,
                template_detail(&templates.left_branch, DEFAULT_LEFT_BRANCH),
            )),
            Either::Neither => Err(ContractError::illegal_state(
                "a union with neither branch set cannot become a custom-error failure",
            )),
        }
    }
}

impl<E> Outcome<(), E> {
    /// Re-type a failure into a value-bearing shape.
    pub fn widen_value<U>(self) -> Result<Outcome<U, E>, ContractError> {
        Outcome::fail_from(self)
    }

    /// `Some(true)` for successes and warnings, `None` for failures.
    #[must_use]
    pub fn into_flag(self) -> Option<bool> {
        self.is_success().then_some(true)
    }
}

impl<T> Outcome<T, ()> {
    /// Lift an optional; absence becomes a failure with the default message.
    #[must_use]
    pub fn from_option(option: Option<T>) -> Self {
        Self::from_option_using(option, &MessageTemplates::default())
    }

    /// [`Outcome::from_option`] with explicit message templates.
    #[must_use]
    pub fn from_option_using(option: Option<T>, templates: &MessageTemplates) -> Self {
        match option {
            Some(value) => Self::success(value),
            None => Self::failed(
                (),
                template_detail(&templates.missing_value, DEFAULT_MISSING_VALUE),
            ),
        }
    }

    /// Lift an optional; absence becomes a failure with `message`.
    pub fn from_option_or(
        option: Option<T>,
        message: impl Into<String>,
    ) -> Result<Self, ContractError> {
        Self::from_option_with(option, message, Literal(()))
    }

    /// Lift a union: `Right` becomes a success; `Left` and an unset union
    /// become failures with library-defined messages.
    #[must_use]
    pub fn from_either<L>(either: Either<L, T>) -> Self {
        Self::from_either_with(either, &MessageTemplates::default())
    }

    /// [`Outcome::from_either`] with explicit message templates.
    #[must_use]
    pub fn from_either_with<L>(either: Either<L, T>, templates: &MessageTemplates) -> Self {
        match either {
            Either::Right(value) => Self::success(value),
            Either::Left(_) => Self::failed(
                (),
                template_detail(&templates.left_branch, DEFAULT_LEFT_BRANCH),
            ),
            Either::Neither => Self::failed(
                (),
                template_detail(&templates.unset_union, DEFAULT_UNSET_UNION),
            ),
        }
    }
}

fn template_detail(template: &str, default: &'static str) -> Detail {
    Detail::new(Message::or_fallback(template, default), None)
}

fn not_a_failure(category: Category) -> ContractError {
    ContractError::illegal_state(format!(
        "only a failure can be re-typed without inventing a value or error, got a {category}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{CustomOutcome, UnitOutcome, ValueCustomOutcome, ValueOutcome};
    use crate::produce::{lazy, literal};
    use std::cell::Cell;
    use std::error::Error;

    #[test]
    fn narrowings_keep_category_and_detail() -> Result<(), ContractError> {
        let failure = ValueCustomOutcome::<i32, &str>::failure("disk", "broken")?;
        let without_error = failure.clone().without_error();
        let without_value = failure.clone().without_value();
        let plain = failure.into_plain();

        assert!(without_error.is_failure());
        assert_eq!(without_error.message(), Some("broken"));
        assert_eq!(without_value.error()?, &"disk");
        assert_eq!(plain.message(), Some("broken"));

        let warning = ValueCustomOutcome::<i32, &str>::warning(4, "slow")?.without_error();
        assert_eq!(warning.ok_value(), Some(&4));
        assert_eq!(warning.message(), Some("slow"));
        Ok(())
    }

    #[test]
    fn widening_requires_a_failure() -> Result<(), ContractError> {
        let failure = CustomOutcome::failure("disk", "broken")?;
        let widened: ValueCustomOutcome<i32, &str> = failure.widen_value()?;
        assert_eq!(widened.error()?, &"disk");
        assert_eq!(widened.message(), Some("broken"));

        let warning = CustomOutcome::<&str>::warn("slow")?;
        let error = warning.widen_value::<i32>().err();
        assert!(error.is_some_and(|error| error.is_illegal_state()));

        let success = ValueOutcome::<i32>::fail_from(UnitOutcome::ok()).err();
        assert!(success.is_some_and(|error| error.is_illegal_state()));
        Ok(())
    }

    #[test]
    fn fail_from_with_error_attaches_the_error() -> Result<(), ContractError> {
        let source = UnitOutcome::fail("offline")?;
        let typed = ValueCustomOutcome::<String, u16>::fail_from_with_error(source, 503)?;

        assert_eq!(typed.error()?, &503);
        assert_eq!(typed.message(), Some("offline"));
        Ok(())
    }

    #[test]
    fn option_round_trip() -> Result<(), ContractError> {
        assert_eq!(ValueOutcome::warning(2, "slow")?.into_option(), Some(2));
        assert_eq!(ValueOutcome::<i32>::fail("down")?.into_option(), None);
        assert_eq!(UnitOutcome::ok().into_flag(), Some(true));
        assert_eq!(UnitOutcome::warn("slow")?.into_flag(), Some(true));
        assert_eq!(UnitOutcome::fail("down")?.into_flag(), None);

        let present = ValueOutcome::from_option(Some(9));
        assert_eq!(present.ok_value(), Some(&9));

        let absent = ValueOutcome::<i32>::from_option(None);
        assert_eq!(absent.message(), Some("Value is missing"));

        let custom = ValueOutcome::<i32>::from_option_or(None, "no row")?;
        assert_eq!(custom.message(), Some("no row"));
        Ok(())
    }

    #[test]
    fn custom_option_lifting_needs_an_error() -> Result<(), ContractError> {
        let lifted = ValueCustomOutcome::<i32, &str>::try_from_option(Some(1))?;
        assert_eq!(lifted.ok_value(), Some(&1));

        let error = ValueCustomOutcome::<i32, &str>::try_from_option(None).err();
        assert!(error.is_some_and(|error| error.is_illegal_state()));

        let calls = Cell::new(0);
        let present = ValueCustomOutcome::<i32, &str>::from_option_with(
            Some(1),
            "missing",
            lazy(|| {
                calls.set(calls.get() + 1);
                "not_found"
            }),
        )?;
        assert!(present.is_pure_success());
        assert_eq!(calls.get(), 0);

        let absent = ValueCustomOutcome::<i32, &str>::from_option_with(
            None,
            "missing",
            lazy(|| {
                calls.set(calls.get() + 1);
                "not_found"
            }),
        )?;
        assert_eq!(absent.error()?, &"not_found");
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn empty_option_message_is_rejected_before_lifting() -> Result<(), ContractError> {
        let error =
            ValueCustomOutcome::<i32, &str>::from_option_with(Some(1), "", literal("x")).err();
        assert!(error.is_some_and(|error| error.is_invalid_argument()));

        let spaced = ValueCustomOutcome::<i32, &str>::from_option_with(None, " ", literal("x"))?;
        assert_eq!(spaced.message(), Some(" "));
        Ok(())
    }

    #[test]
    fn either_conversions() -> Result<(), ContractError> {
        let right = ValueOutcome::<i32>::from_either(Either::<String, i32>::Right(3));
        assert_eq!(right.ok_value(), Some(&3));

        let left = ValueOutcome::<i32>::from_either(Either::Left("bad"));
        assert_eq!(left.message(), Some("Union holds a left value"));

        let neither = ValueOutcome::<i32>::from_either(Either::<(), i32>::Neither);
        assert_eq!(
            neither.message(),
            Some("Union holds neither a left nor a right value")
        );

        let custom = ValueCustomOutcome::<i32, u8>::try_from_either(Either::Left(4))?;
        assert_eq!(custom.error()?, &4);
        assert_eq!(custom.into_either(), Either::Left(4));

        let unset = ValueCustomOutcome::<i32, u8>::try_from_either(Either::Neither).err();
        assert!(unset.is_some_and(|error| error.is_illegal_state()));

        assert_eq!(ValueOutcome::success(5).into_either(), Either::Right(5));
        Ok(())
    }

    #[test]
    fn either_templates_are_configurable() {
        let templates = MessageTemplates {
            unset_union: "nothing set".to_owned(),
            ..MessageTemplates::default()
        };
        let neither = UnitOutcome::from_either_with(Either::<u8, ()>::Neither, &templates);
        assert_eq!(neither.message(), Some("nothing set"));
    }

    #[test]
    fn into_result_exposes_a_report() -> Result<(), Box<dyn Error>> {
        let failure = ValueCustomOutcome::<i32, u16>::failure_with(
            404,
            "lookup failed",
            std::io::Error::other("no route"),
        )?;
        let report = failure.into_result().err();

        assert_eq!(report.as_ref().map(|report| report.error), Some(404));
        assert_eq!(report.as_ref().map(ToString::to_string), Some("lookup failed".to_owned()));
        let source = report.as_ref().and_then(|report| report.source()).map(ToString::to_string);
        assert_eq!(source, Some("no route".to_owned()));

        assert_eq!(ValueOutcome::warning(1, "slow")?.into_result().ok(), Some(1));
        Ok(())
    }
}
