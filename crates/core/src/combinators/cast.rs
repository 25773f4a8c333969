//! Category-preserving payload and error conversion.

use crate::outcome::Outcome;
use crate::produce::Produce;
use crate::state::Detail;
use std::any::Any;

impl<T, E> Outcome<T, E> {
    /// Convert the payload of a success or warning. The converter is not
    /// invoked for failures.
    pub fn cast_value<U, F>(self, converter: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map_parts(converter, |error, _| error)
    }

    /// Convert the payload with `From`.
    #[must_use]
    pub fn cast_into<U>(self) -> Outcome<U, E>
    where
        U: From<T>,
    {
        self.cast_value(U::from)
    }

    /// Narrow the payload to `U`; a payload of another type becomes `None`
    /// instead of an error.
    #[must_use]
    pub fn cast_as<U>(self) -> Outcome<Option<U>, E>
    where
        T: 'static,
        U: 'static,
    {
        self.cast_value(|value| {
            let boxed: Box<dyn Any> = Box::new(value);
            boxed.downcast::<U>().ok().map(|narrowed| *narrowed)
        })
    }

    /// Convert the error of a failure. The converter is not invoked for
    /// successes and warnings.
    pub fn cast_error<E2, R>(self, converter: R) -> Outcome<T, E2>
    where
        R: FnOnce(E) -> E2,
    {
        self.map_parts(|value| value, |error, _| converter(error))
    }

    /// Convert the error with `From`.
    #[must_use]
    pub fn cast_into_error<E2>(self) -> Outcome<T, E2>
    where
        E2: From<E>,
    {
        self.cast_error(E2::from)
    }
}

impl<T> Outcome<T, ()> {
    /// Convert the payload and move into a custom-error shape. A failure has
    /// no error of the target type, so `error_channel` produces one.
    pub fn cast_with_error<U, E2, F, P>(self, converter: F, error_channel: P) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        P: Produce<Detail, E2>,
    {
        self.map_parts(converter, |(), detail| error_channel.produce(detail))
    }
}
