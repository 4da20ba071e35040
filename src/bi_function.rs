use crate::{BoxError, Outcome, ThrowingFunction};

/// A function of two arguments that produces an `R` or fails with `E`.
///
/// This is the two-argument counterpart of [`ThrowingFunction`], implemented for every
/// `Fn(T, U) -> Result<R, E>`.
///
/// # Example
///
/// ```
/// use throwing::{example, ThrowingBiFunction};
///
/// let sum = [1, 2, 3].into_iter().reduce(ThrowingBiFunction::unchecked(example::add));
/// assert_eq!(sum, Some(6));
///
/// let add = ThrowingBiFunction::lift(example::add);
/// assert_eq!(add(i32::MAX, 1), None);
/// ```
///
/// ```compile_fail
/// use throwing::ThrowingBiFunction;
///
/// let f = ThrowingBiFunction::lift(None::<fn(i32, i32) -> Result<i32, std::fmt::Error>>);
/// ```
pub trait ThrowingBiFunction<T, U, R, E> {
    /// Apply this function to the given arguments.
    fn apply(&self, first: T, second: U) -> Result<R, E>;

    /// Convert into a function that unwinds with a [`WrappedError`](crate::WrappedError) on
    /// failure.
    fn unchecked(self) -> impl Fn(T, U) -> R
    where
        Self: Sized,
        E: Into<BoxError> + 'static,
    {
        move |first, second| self.apply(first, second).unwrap_or_wrap()
    }

    /// Convert into a function that unwinds with the original error on failure.
    fn sneaky(self) -> impl Fn(T, U) -> R
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |first, second| self.apply(first, second).unwrap_or_sneak()
    }

    /// Convert into a function that returns `None` on failure.
    fn lift(self) -> impl Fn(T, U) -> Option<R>
    where
        Self: Sized,
    {
        move |first, second| self.apply(first, second).lift()
    }

    /// Like [`lift`](Self::lift), for functions with optional results: a successful `None` is
    /// reported the same way as a failure.
    fn lift_flatten<V>(self) -> impl Fn(T, U) -> Option<V>
    where
        Self: Sized + ThrowingBiFunction<T, U, Option<V>, E>,
    {
        move |first, second| {
            <Self as ThrowingBiFunction<T, U, Option<V>, E>>::apply(&self, first, second)
                .lift()
                .flatten()
        }
    }

    /// Chain `after` behind this function.
    ///
    /// `after` is not called if this function fails.
    fn and_then<V, E2, G>(self, after: G) -> impl Fn(T, U) -> Result<V, E>
    where
        Self: Sized,
        G: ThrowingFunction<R, V, E2>,
        E2: Into<E>,
    {
        move |first, second| {
            after
                .apply(self.apply(first, second)?)
                .map_err(Into::into)
        }
    }
}

impl<T, U, R, E, F: Fn(T, U) -> Result<R, E>> ThrowingBiFunction<T, U, R, E> for F {
    fn apply(&self, first: T, second: U) -> Result<R, E> {
        self(first, second)
    }
}
