//! Combinator algebra over outcomes.
//!
//! Error-channel rule shared by every combinator: a failure that already
//! carries an error of the target type is copied as is; an error producer is
//! invoked (once) only when a failure, or a warning treated as one, has to be
//! re-expressed in a shape whose error it does not carry.

mod cast;
mod ensure;
mod flatten;
mod on_success;

/// What chaining combinators do with a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WarningPolicy {
    /// Continue the chain; the warning's message does not survive.
    #[default]
    Proceed,
    /// Stop the chain and turn the warning into a failure.
    TreatAsFailure,
}

impl WarningPolicy {
    /// True when a warning continues the chain.
    #[must_use]
    pub const fn proceeds(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

impl From<bool> for WarningPolicy {
    /// `true` means "treat warnings as errors".
    fn from(treat_warning_as_error: bool) -> Self {
        if treat_warning_as_error {
            Self::TreatAsFailure
        } else {
            Self::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_to_proceed() {
        assert_eq!(WarningPolicy::default(), WarningPolicy::Proceed);
        assert!(WarningPolicy::from(false).proceeds());
        assert!(!WarningPolicy::from(true).proceeds());
    }
}
