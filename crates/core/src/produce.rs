//! Deferred values for failure paths.
//!
//! Combinators that may need to invent an error (or a fallback value) take a
//! [`Produce`] implementation instead of a ready value. The producer is
//! consumed by value, so it runs at most once, and only on the path that
//! actually needs it.

/// A one-shot source of a `V`, optionally derived from an `S`.
pub trait Produce<S: ?Sized, V> {
    /// Produce the value.
    fn produce(self, source: &S) -> V;
}

/// Produces a ready-made value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<V>(pub V);

/// Produces a value from a zero-argument factory.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F>(pub F);

/// Produces a value from a factory that inspects the source.
#[derive(Debug, Clone, Copy)]
pub struct FromSource<F>(pub F);

impl<S: ?Sized, V> Produce<S, V> for Literal<V> {
    fn produce(self, _source: &S) -> V {
        self.0
    }
}

impl<S: ?Sized, V, F> Produce<S, V> for Lazy<F>
where
    F: FnOnce() -> V,
{
    fn produce(self, _source: &S) -> V {
        (self.0)()
    }
}

impl<S: ?Sized, V, F> Produce<S, V> for FromSource<F>
where
    F: FnOnce(&S) -> V,
{
    fn produce(self, source: &S) -> V {
        (self.0)(source)
    }
}

/// Wrap a ready value.
pub const fn literal<V>(value: V) -> Literal<V> {
    Literal(value)
}

/// Wrap a zero-argument factory.
pub const fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy(factory)
}

/// Wrap a factory that receives the source.
pub const fn from_source<F>(factory: F) -> FromSource<F> {
    FromSource(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn literal_ignores_the_source() {
        assert_eq!(Produce::<str, i32>::produce(literal(7), "ignored"), 7);
    }

    #[test]
    fn lazy_runs_only_when_produced() {
        let calls = Cell::new(0);
        let producer = lazy(|| {
            calls.set(calls.get() + 1);
            "made"
        });
        assert_eq!(calls.get(), 0);

        let value: &str = Produce::<(), _>::produce(producer, &());
        assert_eq!(value, "made");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn from_source_sees_the_source() {
        let producer = from_source(|source: &String| source.len());
        assert_eq!(producer.produce(&"four".to_owned()), 4);
    }
}
