//! Bind-style chaining.
//!
//! The continuation's outcome replaces the receiver entirely: nothing of a
//! warning's message survives a chain step unless the continuation re-adds it.

use super::WarningPolicy;
use crate::outcome::{Outcome, Repr};
use crate::produce::Produce;
use crate::state::Detail;

/// Receiver split into "continue" and "stop" halves.
enum Step<T, E> {
    Continue(T),
    Stop { error: Option<E>, detail: Detail },
}

impl<T, E> Outcome<T, E> {
    fn step(self, policy: WarningPolicy) -> Step<T, E> {
        match self.repr {
            Repr::Success(value) => Step::Continue(value),
            Repr::Warning { value, .. } if policy.proceeds() => Step::Continue(value),
            Repr::Warning { detail, .. } => Step::Stop {
                error: None,
                detail,
            },
            Repr::Failure { error, detail } => Step::Stop {
                error: Some(error),
                detail,
            },
        }
    }

    /// Chain a continuation on successes and warnings; failures propagate
    /// with their error, message, and exception.
    pub fn on_success<U, F>(self, continuation: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => continuation(value),
            Repr::Failure { error, detail } => Outcome::failed(error, detail),
        }
    }

    /// [`Outcome::on_success`] with a warning policy.
    ///
    /// A warning stopped by the policy has no error to copy, so `error_channel`
    /// produces one from its detail. Failures keep their own error and never
    /// invoke the producer.
    pub fn on_success_or<U, F, P>(
        self,
        policy: WarningPolicy,
        continuation: F,
        error_channel: P,
    ) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        P: Produce<Detail, E>,
    {
        match self.step(policy) {
            Step::Continue(value) => continuation(value),
            Step::Stop {
                error: Some(error),
                detail,
            } => Outcome::failed(error, detail),
            Step::Stop {
                error: None,
                detail,
            } => Outcome::failed(error_channel.produce(&detail), detail),
        }
    }

    /// Map the payload to a bare value; a stopped receiver yields the
    /// fallback instead, and the continuation is not invoked.
    pub fn on_success_value<U, F, P>(self, policy: WarningPolicy, continuation: F, fallback: P) -> U
    where
        F: FnOnce(T) -> U,
        P: Produce<Detail, U>,
    {
        match self.step(policy) {
            Step::Continue(value) => continuation(value),
            Step::Stop { detail, .. } => fallback.produce(&detail),
        }
    }

    /// Run an action for effect when the chain is not stopped and return the
    /// receiver unchanged.
    #[must_use]
    pub fn on_success_do<F>(self, policy: WarningPolicy, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        match &self.repr {
            Repr::Success(value) => action(value),
            Repr::Warning { value, .. } if policy.proceeds() => action(value),
            Repr::Warning { .. } | Repr::Failure { .. } => {},
        }
        self
    }
}

impl<T> Outcome<T, ()> {
    /// [`Outcome::on_success`] with a warning policy for default-error shapes.
    pub fn on_success_gated<U, F>(self, policy: WarningPolicy, continuation: F) -> Outcome<U, ()>
    where
        F: FnOnce(T) -> Outcome<U, ()>,
    {
        match self.step(policy) {
            Step::Continue(value) => continuation(value),
            Step::Stop { detail, .. } => Outcome::failed((), detail),
        }
    }

    /// Chain into a custom-error shape.
    ///
    /// Failures (and warnings stopped by the policy) carry no error of the
    /// target type, so `error_channel` produces one from their detail.
    pub fn on_success_with_error<U, E2, F, P>(
        self,
        policy: WarningPolicy,
        continuation: F,
        error_channel: P,
    ) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> Outcome<U, E2>,
        P: Produce<Detail, E2>,
    {
        match self.step(policy) {
            Step::Continue(value) => continuation(value),
            Step::Stop { detail, .. } => Outcome::failed(error_channel.produce(&detail), detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{UnitOutcome, ValueCustomOutcome, ValueOutcome};
    use crate::produce::{from_source, lazy, literal};
    use std::cell::Cell;
    use tristate_shared::ContractError;

    #[test]
    fn warning_continuation_replaces_the_receiver() -> Result<(), ContractError> {
        let chained = ValueOutcome::warning(42, "W")?.on_success(|value| Outcome::success(value + 1));
        assert_eq!(chained, ValueOutcome::success(43));
        Ok(())
    }

    #[test]
    fn gated_warning_becomes_failure_without_running() -> Result<(), ContractError> {
        let calls = Cell::new(0);
        let chained = ValueOutcome::warning(42, "W")?.on_success_gated(
            WarningPolicy::TreatAsFailure,
            |value| {
                calls.set(calls.get() + 1);
                Outcome::success(value + 1)
            },
        );
        assert_eq!(chained, ValueOutcome::<i32>::fail("W")?);
        assert_eq!(calls.get(), 0);
        Ok(())
    }

    #[test]
    fn failure_skips_the_continuation_and_keeps_the_error() -> Result<(), ContractError> {
        let calls = Cell::new(0);
        let failure = ValueCustomOutcome::<i32, &str>::failure("disk", "broken")?;
        let chained: ValueCustomOutcome<String, &str> = failure.on_success(|value| {
            calls.set(calls.get() + 1);
            Outcome::success(value.to_string())
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(chained.error()?, &"disk");
        assert_eq!(chained.message(), Some("broken"));
        Ok(())
    }

    #[test]
    fn custom_gate_produces_an_error_only_for_warnings() -> Result<(), ContractError> {
        let produced = Cell::new(0);

        let warning = ValueCustomOutcome::<i32, usize>::warning(1, "slow")?;
        let stopped = warning.on_success_or(
            WarningPolicy::TreatAsFailure,
            Outcome::success,
            from_source(|detail: &Detail| {
                produced.set(produced.get() + 1);
                detail.message().len()
            }),
        );
        assert_eq!(stopped.error()?, &4);
        assert_eq!(stopped.message(), Some("slow"));
        assert_eq!(produced.get(), 1);

        let failure = ValueCustomOutcome::<i32, usize>::failure(99, "down")?;
        let propagated = failure.on_success_or(
            WarningPolicy::TreatAsFailure,
            Outcome::success,
            from_source(|detail: &Detail| {
                produced.set(produced.get() + 1);
                detail.message().len()
            }),
        );
        assert_eq!(propagated.error()?, &99);
        assert_eq!(produced.get(), 1);
        Ok(())
    }

    #[test]
    fn error_channel_is_produced_once_per_failure() -> Result<(), ContractError> {
        let produced = Cell::new(0);
        let failure = ValueOutcome::<i32>::fail_with("down", std::io::Error::other("eof"))?;
        let chained: ValueCustomOutcome<i32, &str> = failure.on_success_with_error(
            WarningPolicy::Proceed,
            Outcome::success,
            lazy(|| {
                produced.set(produced.get() + 1);
                "io"
            }),
        );

        assert_eq!(produced.get(), 1);
        assert_eq!(chained.error()?, &"io");
        assert_eq!(chained.message(), Some("down"));
        assert!(chained.exception().is_some());

        let success = ValueOutcome::success(1).on_success_with_error(
            WarningPolicy::Proceed,
            |value| ValueCustomOutcome::<i32, &str>::success(value * 2),
            lazy(|| {
                produced.set(produced.get() + 1);
                "io"
            }),
        );
        assert_eq!(success.ok_value(), Some(&2));
        assert_eq!(produced.get(), 1);
        Ok(())
    }

    #[test]
    fn value_family_falls_back_on_stop() -> Result<(), ContractError> {
        let doubled = ValueOutcome::warning(4, "slow")?.on_success_value(
            WarningPolicy::Proceed,
            |value| value * 2,
            literal(0),
        );
        assert_eq!(doubled, 8);

        let stopped = ValueOutcome::warning(4_usize, "slow")?.on_success_value(
            WarningPolicy::TreatAsFailure,
            |value| value * 2,
            from_source(|detail: &Detail| detail.message().len()),
        );
        assert_eq!(stopped, 4);

        let failed = ValueOutcome::<i32>::fail("down")?.on_success_value(
            WarningPolicy::Proceed,
            |value| value * 2,
            literal(-1),
        );
        assert_eq!(failed, -1);
        Ok(())
    }

    #[test]
    fn action_family_returns_the_receiver() -> Result<(), ContractError> {
        let seen = Cell::new(0);
        let warning = UnitOutcome::warn("slow")?;

        let same = warning
            .clone()
            .on_success_do(WarningPolicy::Proceed, |_| seen.set(seen.get() + 1));
        assert_eq!(same, warning);
        assert_eq!(seen.get(), 1);

        let gated = warning
            .clone()
            .on_success_do(WarningPolicy::TreatAsFailure, |_| seen.set(seen.get() + 1));
        assert_eq!(gated, warning);
        assert_eq!(seen.get(), 1);
        Ok(())
    }
}
