//! # tristate-shared
//!
//! Shared building blocks for the tristate workspace.
//!
//! This crate provides foundational types that are used across all other crates:
//!
//! - Contract error taxonomy (`InvalidArgument`, `IllegalState`, `TypeMismatch`)
//! - Captured exceptions and the equality modes used to compare them
//! - The two-branch union consumed by outcome conversions
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Programmer errors are values** - Nothing here panics
//! 3. **Serde-compatible** - Public data types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod either;
pub mod errors;
pub mod exception;

pub use either::Either;
pub use errors::{ContractError, ContractErrorKind, ErrorCode};
pub use exception::{EqualityMode, Exception, ExceptionRecord, OpaqueError};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
