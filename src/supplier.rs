use crate::{BoxError, Outcome};

/// A computation that takes no arguments and produces a `T` or fails with `E`.
///
/// Implemented for every `Fn() -> Result<T, E>`.
///
/// # Example
///
/// ```
/// use throwing::ThrowingSupplier;
///
/// let supplier = || "42".parse::<i32>();
///
/// assert_eq!(supplier.get(), Ok(42));
/// assert_eq!(supplier.lift()(), Some(42));
/// assert_eq!(ThrowingSupplier::unchecked(supplier)(), 42);
/// ```
///
/// There is no supplier to adapt in a `None`:
///
/// ```compile_fail
/// use throwing::ThrowingSupplier;
///
/// let s = ThrowingSupplier::unchecked(None::<fn() -> Result<i32, std::fmt::Error>>);
/// ```
pub trait ThrowingSupplier<T, E> {
    /// Get a result.
    fn get(&self) -> Result<T, E>;

    /// Convert into a supplier that unwinds with a [`WrappedError`](crate::WrappedError) on
    /// failure.
    fn unchecked(self) -> impl Fn() -> T
    where
        Self: Sized,
        E: Into<BoxError> + 'static,
    {
        move || self.get().unwrap_or_wrap()
    }

    /// Convert into a supplier that unwinds with the original error on failure.
    fn sneaky(self) -> impl Fn() -> T
    where
        Self: Sized,
        E: Send + 'static,
    {
        move || self.get().unwrap_or_sneak()
    }

    /// Convert into a supplier that returns `None` on failure.
    fn lift(self) -> impl Fn() -> Option<T>
    where
        Self: Sized,
    {
        move || self.get().lift()
    }

    /// Like [`lift`](Self::lift), for suppliers of optional values: a successful `None` is
    /// reported the same way as a failure.
    ///
    /// ```
    /// use throwing::ThrowingSupplier;
    ///
    /// let empty = || Ok::<Option<i32>, std::fmt::Error>(None);
    /// assert_eq!(empty.lift()(), Some(None));
    /// assert_eq!(empty.lift_flatten()(), None);
    /// ```
    fn lift_flatten<U>(self) -> impl Fn() -> Option<U>
    where
        Self: Sized + ThrowingSupplier<Option<U>, E>,
    {
        move || <Self as ThrowingSupplier<Option<U>, E>>::get(&self).lift().flatten()
    }

    /// View this supplier as a function that ignores its argument.
    fn as_function<A>(self) -> impl Fn(A) -> Result<T, E>
    where
        Self: Sized,
    {
        move |_| self.get()
    }
}

impl<T, E, F: Fn() -> Result<T, E>> ThrowingSupplier<T, E> for F {
    fn get(&self) -> Result<T, E> {
        self()
    }
}

/// An action that may fail with `E`.
///
/// Every `Fn() -> Result<(), E>` is a runnable; the adapters are those of
/// [`ThrowingSupplier`].
pub trait ThrowingRunnable<E>: ThrowingSupplier<(), E> {
    /// Run the action.
    fn run(&self) -> Result<(), E> {
        self.get()
    }
}

impl<E, F: ThrowingSupplier<(), E>> ThrowingRunnable<E> for F {}
