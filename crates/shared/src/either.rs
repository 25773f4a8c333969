//! Two-branch union value.
//!
//! Only the surface needed to lift unions into outcomes and back lives here.

use serde::{Deserialize, Serialize};

/// A value that is either a `Left`, a `Right`, or has neither branch set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    /// Left branch, conventionally the error side.
    Left(L),
    /// Right branch, conventionally the value side.
    Right(R),
    /// No branch set.
    Neither,
}

impl<L, R> Default for Either<L, R> {
    fn default() -> Self {
        Self::Neither
    }
}

impl<L, R> Either<L, R> {
    /// Returns true when the left branch is set.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns true when the right branch is set.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns true when no branch is set.
    #[must_use]
    pub const fn is_neither(&self) -> bool {
        matches!(self, Self::Neither)
    }

    /// Borrow the left value.
    #[must_use]
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) | Self::Neither => None,
        }
    }

    /// Borrow the right value.
    #[must_use]
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Right(right) => Some(right),
            Self::Left(_) | Self::Neither => None,
        }
    }

    /// Map the left value, leaving other branches untouched.
    pub fn map_left<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(left) => Either::Left(op(left)),
            Self::Right(right) => Either::Right(right),
            Self::Neither => Either::Neither,
        }
    }

    /// Map the right value, leaving other branches untouched.
    pub fn map_right<R2, F>(self, op: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(op(right)),
            Self::Neither => Either::Neither,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Self::Right(right),
            Err(left) => Self::Left(left),
        }
    }
}
