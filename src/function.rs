use crate::{BoxError, Outcome};

/// A function of one argument that produces an `R` or fails with `E`.
///
/// Implemented for every `Fn(T) -> Result<R, E>`, including plain `fn` items such as
/// [`Uri::parse`](crate::example::Uri::parse). The adapters turn it into an ordinary
/// `Fn(T) -> R` (or `Fn(T) -> Option<R>`) that can be handed to APIs like [`Iterator::map`]:
///
/// ```
/// use throwing::{example::Uri, ThrowingFunction};
///
/// let parsed = [".", "a", ". ."]
///     .into_iter()
///     .map(ThrowingFunction::lift(Uri::parse))
///     .filter(Option::is_some)
///     .count();
/// assert_eq!(parsed, 2);
/// ```
///
/// Adapters take the function by value, so there is no such thing as adapting a missing one:
///
/// ```compile_fail
/// use throwing::ThrowingFunction;
///
/// // the trait `ThrowingFunction<_, _, _>` is not implemented for `Option<fn(i32) -> ...>`
/// let f = ThrowingFunction::unchecked(None::<fn(i32) -> Result<i32, std::fmt::Error>>);
/// ```
pub trait ThrowingFunction<T, R, E> {
    /// Apply this function to `arg`.
    fn apply(&self, arg: T) -> Result<R, E>;

    /// Convert into a function that unwinds with a [`WrappedError`](crate::WrappedError) on
    /// failure.
    ///
    /// The carrier renders exactly like the original error and keeps it as its source. Use
    /// [`checked`](crate::checked) or [`checked_as`](crate::checked_as) to get the original
    /// error back.
    fn unchecked(self) -> impl Fn(T) -> R
    where
        Self: Sized,
        E: Into<BoxError> + 'static,
    {
        move |arg| self.apply(arg).unwrap_or_wrap()
    }

    /// Convert into a function that unwinds with the original error on failure.
    ///
    /// ```
    /// use std::panic;
    /// use throwing::{example::{Uri, UriSyntaxError}, ThrowingFunction};
    ///
    /// let parse = ThrowingFunction::sneaky(Uri::parse);
    /// let payload = panic::catch_unwind(|| parse(". .")).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<UriSyntaxError>().unwrap().index(), 1);
    /// ```
    fn sneaky(self) -> impl Fn(T) -> R
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |arg| self.apply(arg).unwrap_or_sneak()
    }

    /// Convert into a function that returns `None` on failure.
    fn lift(self) -> impl Fn(T) -> Option<R>
    where
        Self: Sized,
    {
        move |arg| self.apply(arg).lift()
    }

    /// Like [`lift`](Self::lift), for functions with optional results: a successful `None` is
    /// reported the same way as a failure.
    fn lift_flatten<U>(self) -> impl Fn(T) -> Option<U>
    where
        Self: Sized + ThrowingFunction<T, Option<U>, E>,
    {
        move |arg| {
            <Self as ThrowingFunction<T, Option<U>, E>>::apply(&self, arg)
                .lift()
                .flatten()
        }
    }

    /// Chain `after` behind this function.
    ///
    /// `after` is not called if this function fails.
    ///
    /// ```
    /// use throwing::{example::{Uri, UriSyntaxError}, ThrowingFunction};
    ///
    /// let path_len = Uri::parse.and_then(|uri: Uri| Ok::<_, UriSyntaxError>(uri.path().len()));
    /// assert_eq!(path_len.apply("abc"), Ok(3));
    /// assert!(path_len.apply("a b").is_err());
    /// ```
    fn and_then<V, E2, G>(self, after: G) -> impl Fn(T) -> Result<V, E>
    where
        Self: Sized,
        G: ThrowingFunction<R, V, E2>,
        E2: Into<E>,
    {
        move |arg| after.apply(self.apply(arg)?).map_err(Into::into)
    }

    /// Chain `before` in front of this function.
    ///
    /// This function is not called if `before` fails.
    fn compose<V, E2, G>(self, before: G) -> impl Fn(V) -> Result<R, E>
    where
        Self: Sized,
        G: ThrowingFunction<V, T, E2>,
        E2: Into<E>,
    {
        move |arg| self.apply(before.apply(arg).map_err(Into::<E>::into)?)
    }
}

impl<T, R, E, F: Fn(T) -> Result<R, E>> ThrowingFunction<T, R, E> for F {
    fn apply(&self, arg: T) -> Result<R, E> {
        self(arg)
    }
}
