//! Predicate-gated downgrade to failure.

use crate::outcome::{Outcome, Repr};
use crate::produce::Produce;
use crate::state::{Detail, Message};
use tristate_shared::ContractError;

impl<T> Outcome<T, ()> {
    /// Fail with `message` when `predicate` rejects the payload of a success
    /// or warning. Failures pass through without evaluating `predicate`.
    pub fn ensure<F>(self, predicate: F, message: impl Into<String>) -> Result<Self, ContractError>
    where
        F: FnOnce(&T) -> bool,
    {
        let message = Message::new(message)?;
        Ok(self.ensure_inner(predicate, message, |_| ()))
    }
}

impl<T, E> Outcome<T, E> {
    /// [`Outcome::ensure`] for custom-error shapes; the error is produced
    /// from the rejected payload, only on rejection.
    pub fn ensure_or<F, P>(
        self,
        predicate: F,
        message: impl Into<String>,
        error_channel: P,
    ) -> Result<Self, ContractError>
    where
        F: FnOnce(&T) -> bool,
        P: Produce<T, E>,
    {
        let message = Message::new(message)?;
        Ok(self.ensure_inner(predicate, message, |value| error_channel.produce(value)))
    }

    fn ensure_inner<F, R>(self, predicate: F, message: Message, error: R) -> Self
    where
        F: FnOnce(&T) -> bool,
        R: FnOnce(&T) -> E,
    {
        let rejected = match &self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => !predicate(value),
            Repr::Failure { .. } => false,
        };
        if !rejected {
            return self;
        }
        match self.repr {
            Repr::Success(value) | Repr::Warning { value, .. } => {
                Self::failed(error(&value), Detail::new(message, None))
            },
            Repr::Failure {
                error: existing,
                detail,
            } => Self::failed(existing, detail),
        }
    }
}
