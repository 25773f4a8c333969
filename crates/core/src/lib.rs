//! # tristate-core
//!
//! The tri-state outcome model: success, warning (success with an advisory
//! message), and failure (with a required message).
//!
//! One generic [`Outcome<T, E>`] covers the four shapes; `()` stands in for
//! "no payload" and "no custom error":
//!
//! | Alias | Payload | Error |
//! |---|---|---|
//! | [`UnitOutcome`] | none | none |
//! | [`ValueOutcome<T>`] | `T` | none |
//! | [`CustomOutcome<E>`] | none | `E` |
//! | [`ValueCustomOutcome<T, E>`] | `T` | `E` |
//!
//! ## Features
//!
//! - [`OutcomeState`] / [`TypedState`] - borrowed views of the tri-state record
//! - Conversions to and from `Option`, [`Either`] and between shapes
//! - Category-first ordering and loose/strict equality
//! - Combinators: `on_success*`, `ensure*`, `cast*`, `flatten`
//! - A `status`-tagged serde wire form
//!
//! ```
//! use tristate_core::{Outcome, ValueOutcome, WarningPolicy};
//!
//! # fn main() -> Result<(), tristate_core::ContractError> {
//! let warned = ValueOutcome::warning(42, "W")?;
//! let next = warned.clone().on_success(|value| Outcome::success(value + 1));
//! assert_eq!(next, ValueOutcome::success(43));
//!
//! let stopped = warned.on_success_gated(WarningPolicy::TreatAsFailure, |value| {
//!     Outcome::success(value + 1)
//! });
//! assert_eq!(stopped, ValueOutcome::fail("W")?);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod combinators;
mod convert;
mod ordering;
mod outcome;
mod produce;
mod state;
mod wire;

pub use combinators::WarningPolicy;
pub use convert::FailureReport;
pub use outcome::{CustomOutcome, Outcome, UnitOutcome, ValueCustomOutcome, ValueOutcome};
pub use produce::{FromSource, Lazy, Literal, Produce, from_source, lazy, literal};
pub use state::{Category, Detail, Message, OutcomeState, RESULTING_IN, TypedState};
pub use tristate_shared::{ContractError, ContractErrorKind, Either, EqualityMode, Exception};

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_crate_compiles() {
        let version = core_crate_version();
        assert!(!version.is_empty());
    }
}
