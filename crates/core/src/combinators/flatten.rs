//! Collapsing nested outcomes.

use crate::outcome::{Outcome, Repr};

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapse one level of nesting.
    ///
    /// A failed outer wins outright and a successful outer yields the inner.
    /// A warning outer takes the inner's category; when the inner has a
    /// message the two are joined as `inner\nResulting in: outer`, and the
    /// inner exception is preferred.
    #[must_use]
    pub fn flatten(self) -> Outcome<T, E> {
        match self.repr {
            Repr::Success(inner) => inner,
            Repr::Failure { error, detail } => Outcome::failed(error, detail),
            Repr::Warning {
                value: inner,
                detail: outer,
            } => match inner.repr {
                Repr::Success(value) => Outcome::warned(value, outer),
                Repr::Warning { value, detail } => Outcome::warned(value, detail.resulting_in(outer)),
                Repr::Failure { error, detail } => {
                    Outcome::failed(error, detail.resulting_in(outer))
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::outcome::{CustomOutcome, Outcome, ValueOutcome};
    use tristate_shared::{ContractError, Exception};

    #[test]
    fn success_outer_yields_the_inner() -> Result<(), ContractError> {
        let nested = ValueOutcome::success(ValueOutcome::warning(12, "inner")?);
        assert_eq!(nested.flatten(), ValueOutcome::warning(12, "inner")?);
        Ok(())
    }

    #[test]
    fn warning_outer_over_success_keeps_the_outer_message() -> Result<(), ContractError> {
        let nested = ValueOutcome::warning(ValueOutcome::success(22), "outer")?;
        assert_eq!(nested.flatten(), ValueOutcome::warning(22, "outer")?);
        Ok(())
    }

    #[test]
    fn warning_outer_over_failure_merges_messages() -> Result<(), ContractError> {
        let nested = ValueOutcome::warning(ValueOutcome::<i32>::fail("inner")?, "outer")?;
        assert_eq!(
            nested.flatten(),
            ValueOutcome::<i32>::fail("inner\nResulting in: outer")?
        );
        Ok(())
    }

    #[test]
    fn warning_outer_over_warning_merges_messages() -> Result<(), ContractError> {
        let nested = ValueOutcome::warning(ValueOutcome::warning(1, "first")?, "second")?;
        let flat = nested.flatten();
        assert!(flat.is_warning());
        assert_eq!(flat.message(), Some("first\nResulting in: second"));
        Ok(())
    }

    #[test]
    fn failed_outer_ignores_the_inner() -> Result<(), ContractError> {
        let nested: Outcome<CustomOutcome<u8>, u8> = Outcome::failure(1, "outer")?;
        assert_eq!(nested.flatten(), CustomOutcome::failure(1, "outer")?);
        Ok(())
    }

    #[test]
    fn inner_error_and_exception_win() -> Result<(), ContractError> {
        let inner = CustomOutcome::failure_with(3_u8, "inner", Exception::opaque("x::Inner", "i"))?;
        let nested =
            Outcome::warning_with(inner, "outer", Exception::opaque("x::Outer", "o"))?;
        let flat = nested.flatten();

        assert_eq!(flat.error()?, &3);
        assert_eq!(flat.exception().map(Exception::type_name), Some("x::Inner"));
        Ok(())
    }

    #[test]
    fn outer_exception_fills_in_for_a_bare_inner() -> Result<(), ContractError> {
        let nested = ValueOutcome::warning_with(
            ValueOutcome::<i32>::fail("inner")?,
            "outer",
            Exception::opaque("x::Outer", "o"),
        )?;
        let flat = nested.flatten();

        assert!(flat.is_failure());
        assert_eq!(flat.message(), Some("inner\nResulting in: outer"));
        assert_eq!(flat.exception().map(Exception::type_name), Some("x::Outer"));
        Ok(())
    }
}
