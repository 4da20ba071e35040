use crate::{BoxError, WrappedError};
use std::any::type_name;
use std::panic::resume_unwind;

pub trait Sealed {}

/// The three ways of getting rid of a declared error.
///
/// Implemented for [`Result`] only. Every adapter of the `Throwing*` traits is a thin closure
/// around one of these methods, and they can be used directly when a one-off call needs to fit
/// into a signature that has no room for an error:
///
/// ```
/// use throwing::{checked_as, example::{Uri, UriSyntaxError}, Outcome};
///
/// let result: Result<Vec<Uri>, UriSyntaxError> = checked_as(|| {
///     ["a", ". ."]
///         .into_iter()
///         .map(|s| Uri::parse(s).unwrap_or_wrap())
///         .collect()
/// });
/// assert_eq!(result.unwrap_err().index(), 1);
/// ```
///
/// `unwrap_or_wrap` and `unwrap_or_sneak` propagate the error by unwinding, so they require
/// `panic = "unwind"`. With `panic = "abort"` the process is terminated instead.
#[must_use]
pub trait Outcome: Sealed {
    /// The type of the success value.
    type Output;

    /// The type of the error value.
    type Error;

    /// Return the success value, or unwind with the error wrapped in a [`WrappedError`].
    ///
    /// The unwind can be turned back into the original error with [`checked`](crate::checked)
    /// or [`checked_as`](crate::checked_as).
    fn unwrap_or_wrap(self) -> Self::Output
    where
        Self::Error: Into<BoxError> + 'static;

    /// Return the success value, or unwind with the error itself as the payload.
    ///
    /// No carrier is involved: whoever catches the unwind receives exactly the value that was
    /// returned as the error.
    ///
    /// ```
    /// use std::panic;
    /// use throwing::Outcome;
    ///
    /// let payload = panic::catch_unwind(|| Err::<(), _>(7u8).unwrap_or_sneak()).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<u8>(), Some(&7));
    /// ```
    fn unwrap_or_sneak(self) -> Self::Output
    where
        Self::Error: Send + 'static;

    /// Return the success value in `Some`, or `None` on error.
    ///
    /// This is the lossy strategy: the error is dropped.
    ///
    /// ```compile_fail
    /// #![deny(unused_must_use)]
    /// use throwing::Outcome;
    ///
    /// "42".parse::<i32>().lift();
    /// ```
    #[must_use]
    fn lift(self) -> Option<Self::Output>;
}

impl<T, E> Sealed for Result<T, E> {}

impl<T, E> Outcome for Result<T, E> {
    type Output = T;

    type Error = E;

    fn unwrap_or_wrap(self) -> T
    where
        E: Into<BoxError> + 'static,
    {
        self.unwrap_or_else(|error| throw_wrapped(error))
    }

    fn unwrap_or_sneak(self) -> T
    where
        E: Send + 'static,
    {
        self.unwrap_or_else(|error| throw_sneaky(error))
    }

    fn lift(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::trace!(error = type_name::<E>(), "discarding error of lifted call");
                None
            }
        }
    }
}

#[cold]
fn throw_wrapped<E: Into<BoxError> + 'static>(error: E) -> ! {
    // resume_unwind skips the panic hook, so nothing is printed.
    resume_unwind(Box::new(WrappedError::new(error)))
}

#[cold]
fn throw_sneaky<E: Send + 'static>(error: E) -> ! {
    resume_unwind(Box::new(error))
}
