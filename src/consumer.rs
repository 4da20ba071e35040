use crate::{ThrowingBiFunction, ThrowingFunction};

/// An operation on one argument that returns nothing and may fail with `E`.
///
/// Every `Fn(T) -> Result<(), E>` is a consumer. The adapters are those of
/// [`ThrowingFunction`], so a consumer turns into an `Fn(T)` suitable for
/// [`Iterator::for_each`]:
///
/// ```
/// use std::cell::RefCell;
/// use throwing::{checked, example::{Uri, UriSyntaxError}, ThrowingFunction};
///
/// let seen = RefCell::new(Vec::new());
/// let record = |s: &str| -> Result<(), UriSyntaxError> {
///     seen.borrow_mut().push(Uri::parse(s)?);
///     Ok(())
/// };
///
/// let result = checked(|| ["a", ". .", "b"].into_iter().for_each(record.unchecked()));
/// assert!(result.is_err());
/// assert_eq!(seen.borrow().len(), 1);
/// ```
pub trait ThrowingConsumer<T, E>: ThrowingFunction<T, (), E> {
    /// Perform this operation on `arg`.
    fn accept(&self, arg: T) -> Result<(), E> {
        self.apply(arg)
    }

    /// Run `after` on the same argument once this operation has succeeded.
    ///
    /// `after` is not called if this operation fails.
    fn and_then_consume<E2, C>(self, after: C) -> impl Fn(T) -> Result<(), E>
    where
        Self: Sized,
        T: Clone,
        C: ThrowingConsumer<T, E2>,
        E2: Into<E>,
    {
        move |arg: T| {
            self.accept(arg.clone())?;
            after.accept(arg).map_err(Into::into)
        }
    }
}

impl<T, E, F: ThrowingFunction<T, (), E>> ThrowingConsumer<T, E> for F {}

/// An operation on two arguments that returns nothing and may fail with `E`.
pub trait ThrowingBiConsumer<T, U, E>: ThrowingBiFunction<T, U, (), E> {
    /// Perform this operation on the given arguments.
    fn accept(&self, first: T, second: U) -> Result<(), E> {
        self.apply(first, second)
    }

    /// Run `after` on the same arguments once this operation has succeeded.
    ///
    /// `after` is not called if this operation fails.
    fn and_then_consume<E2, C>(self, after: C) -> impl Fn(T, U) -> Result<(), E>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        C: ThrowingBiConsumer<T, U, E2>,
        E2: Into<E>,
    {
        move |first: T, second: U| {
            self.accept(first.clone(), second.clone())?;
            after.accept(first, second).map_err(Into::into)
        }
    }
}

impl<T, U, E, F: ThrowingBiFunction<T, U, (), E>> ThrowingBiConsumer<T, U, E> for F {}
