//! Equality and ordering.
//!
//! Outcomes order by category first (`Failure < Warning < Success`). Within
//! the success and warning categories a comparable payload breaks ties;
//! failures always tie. This order is coarser than equality, so no `Ord`
//! impl is provided; use [`Outcome::compare`] and friends.

use crate::outcome::Outcome;
use crate::state::Category;
use std::any::Any;
use std::cmp::Ordering;
use tristate_shared::{ContractError, EqualityMode};

impl<T, E> Outcome<T, E> {
    /// Order by category only.
    #[must_use]
    pub fn compare_category<U, E2>(&self, other: &Outcome<U, E2>) -> Ordering {
        self.category().cmp(&other.category())
    }

    /// Order by category, then by payload using `compare_values` for
    /// successes and warnings.
    pub fn compare_by<F>(&self, other: &Self, compare_values: F) -> Ordering
    where
        F: FnOnce(&T, &T) -> Ordering,
    {
        compare_parts(
            self.category(),
            self.ok_value(),
            other.category(),
            other.ok_value(),
            compare_values,
        )
    }

    /// Order by category, then by the payload's natural order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering
    where
        T: Ord,
    {
        self.compare_by(other, Ord::cmp)
    }

    /// [`Outcome::compare`] against a possibly absent outcome; absence sorts
    /// below everything.
    #[must_use]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering
    where
        T: Ord,
    {
        other.map_or(Ordering::Greater, |other| self.compare(other))
    }

    /// Compare against an outcome of unknown shape.
    ///
    /// The other outcome must have this shape or one of its narrowings
    /// (payload dropped, error dropped, or both); anything else is a type
    /// mismatch.
    ///
    /// Only `self` is narrowed. A wider `other` (for example a
    /// `ValueOutcome` compared from a `UnitOutcome`) is a type mismatch even
    /// though it narrows to this shape; call the method on the wider side.
    pub fn compare_dyn(&self, other: Option<&dyn Any>) -> Result<Ordering, ContractError>
    where
        T: Ord + 'static,
        E: 'static,
    {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        if let Some(other) = other.downcast_ref::<Self>() {
            return Ok(self.compare(other));
        }
        if let Some(other) = other.downcast_ref::<Outcome<T, ()>>() {
            return Ok(compare_parts(
                self.category(),
                self.ok_value(),
                other.category(),
                other.ok_value(),
                Ord::cmp,
            ));
        }
        if let Some(other) = other.downcast_ref::<Outcome<(), E>>() {
            return Ok(self.compare_category(other));
        }
        if let Some(other) = other.downcast_ref::<Outcome>() {
            return Ok(self.compare_category(other));
        }
        Err(shape_mismatch::<T, E>())
    }

    /// Compare state, error, and payload with the given exception mode.
    #[must_use]
    pub fn equals_with(&self, other: &Self, mode: EqualityMode) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        self.typed_state().equals(&other.typed_state(), mode) && self.ok_value() == other.ok_value()
    }

    /// Equality with exceptions compared by identity.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        self.equals_with(other, EqualityMode::Strict)
    }

    /// True for a success or warning whose payload equals `value`.
    #[must_use]
    pub fn value_equals(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.ok_value() == Some(value)
    }

    /// Loose equality against an outcome of unknown shape.
    ///
    /// Narrowings of this shape are compared on the channels they keep. An
    /// absent outcome is never equal. As with [`Outcome::compare_dyn`], a
    /// wider `other` is a type mismatch.
    pub fn equals_dyn(&self, other: Option<&dyn Any>) -> Result<bool, ContractError>
    where
        T: PartialEq + 'static,
        E: PartialEq + 'static,
    {
        let Some(other) = other else {
            return Ok(false);
        };
        let mode = EqualityMode::Loose;
        if let Some(other) = other.downcast_ref::<Self>() {
            return Ok(self.equals_with(other, mode));
        }
        if let Some(other) = other.downcast_ref::<Outcome<T, ()>>() {
            return Ok(self.state().equals(&other.state(), mode)
                && self.ok_value() == other.ok_value());
        }
        if let Some(other) = other.downcast_ref::<Outcome<(), E>>() {
            return Ok(self.typed_state().equals(&other.typed_state(), mode));
        }
        if let Some(other) = other.downcast_ref::<Outcome>() {
            return Ok(self.state().equals(&other.state(), mode));
        }
        Err(shape_mismatch::<T, E>())
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_with(other, EqualityMode::default())
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

fn compare_parts<T, F>(
    left_category: Category,
    left_value: Option<&T>,
    right_category: Category,
    right_value: Option<&T>,
    compare_values: F,
) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    let by_category = left_category.cmp(&right_category);
    if by_category != Ordering::Equal {
        return by_category;
    }
    match (left_value, right_value) {
        (Some(left), Some(right)) => compare_values(left, right),
        _ => Ordering::Equal,
    }
}

fn shape_mismatch<T, E>() -> ContractError {
    ContractError::type_mismatch(format!(
        "cannot compare Outcome<{}, {}> with an unrelated shape",
        std::any::type_name::<T>(),
        std::any::type_name::<E>()
    ))
}
