//! # tristate-testkit
//!
//! Test helpers shared by the tristate crates: invocation counters for
//! producers and continuations, error fixtures, and a test tracing
//! subscriber.
//! This crate depends on `shared` only.

pub mod counter;
pub mod errors;
pub mod logging;

pub use counter::CallCounter;
pub use errors::{DomainError, SampleError, sample_exception};
pub use logging::init_test_tracing;

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_shared::shared_crate_version;

    #[test]
    fn testkit_crate_compiles() {
        let version = testkit_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn testkit_can_use_shared() {
        assert!(!shared_crate_version().is_empty());
    }

    #[test]
    fn error_fixtures_are_available() {
        assert_eq!(sample_exception().message(), "sample failure: fixture");
    }
}
