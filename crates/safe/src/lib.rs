//! # tristate-safe
//!
//! Safe-scope adapters: run an operation and turn a returned error, or a
//! panic, into a failure outcome of the matching shape.
//!
//! ```
//! use std::io;
//! use tristate_safe::safe_value_outcome;
//!
//! let parsed = safe_value_outcome(|| "42".parse::<u32>());
//! assert_eq!(parsed.ok_value(), Some(&42));
//!
//! let failed = safe_value_outcome(|| Err::<u32, _>(io::Error::other("eof")));
//! assert_eq!(failed.message(), Some("Unhandled error: eof"));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod panic;
mod scope;

pub use panic::PanicError;
pub use scope::{
    SafeScope, safe_custom_outcome, safe_outcome, safe_value_custom_outcome, safe_value_outcome,
};

/// Returns the safe crate version.
#[must_use]
pub const fn safe_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_crate_compiles() {
        let version = safe_crate_version();
        assert!(!version.is_empty());
    }
}
