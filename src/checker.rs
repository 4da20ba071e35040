use crate::wrapped::{BoxError, WrappedError};
use std::any::Any;
use std::error::Error;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

/// Run `deferred`, turning a [`WrappedError`] unwind back into its cause.
///
/// This is the counterpart of the `unchecked` adapters. Code that has to pass fallible work
/// through an API without room for errors (most often an iterator chain) wraps the error on the
/// way in, and `checked` strips the carrier on the way out.
///
/// - If `deferred` returns, its value is returned in `Ok`.
/// - If it unwinds with a [`WrappedError`], the wrapped error is returned in `Err`.
/// - Any other unwind, including ordinary panics, is resumed untouched.
///
/// # Example
///
/// ```
/// use throwing::{checked, example::Uri, ThrowingFunction};
///
/// let result = checked(|| {
///     [".", "a", ". ."]
///         .into_iter()
///         .map(ThrowingFunction::unchecked(Uri::parse))
///         .collect::<Vec<_>>()
/// });
///
/// let error = result.unwrap_err();
/// assert_eq!(error.to_string(), "Illegal character in path at index 1: . .");
/// ```
pub fn checked<T>(deferred: impl FnOnce() -> T) -> Result<T, BoxError> {
    catch_unwind(AssertUnwindSafe(deferred)).map_err(recover)
}

/// Run `deferred`, turning a [`WrappedError`] unwind back into its cause if the cause is an `E`.
///
/// - If `deferred` returns, its value is returned in `Ok`.
/// - If it unwinds with a [`WrappedError`] whose cause is an `E`, that `E` is returned in `Err`.
/// - If the cause is of any other type, unwinding is resumed with the carrier unchanged, so that
///   an outer boundary can deal with it.
/// - Any other unwind is resumed untouched.
///
/// # Example
///
/// ```
/// use std::{io, panic};
/// use throwing::{checked_as, example::{Uri, UriSyntaxError}, ThrowingFunction, WrappedError};
///
/// let parse_all = || {
///     [". ."]
///         .into_iter()
///         .map(ThrowingFunction::unchecked(Uri::parse))
///         .collect::<Vec<_>>()
/// };
///
/// let error = checked_as::<UriSyntaxError, _>(parse_all).unwrap_err();
/// assert_eq!(error.index(), 1);
///
/// // Not the error we asked for: the carrier keeps unwinding.
/// let payload = panic::catch_unwind(|| checked_as::<io::Error, _>(parse_all)).unwrap_err();
/// assert!(payload.downcast_ref::<WrappedError>().is_some());
/// ```
pub fn checked_as<E, T>(deferred: impl FnOnce() -> T) -> Result<T, E>
where
    E: Error + 'static,
{
    catch_unwind(AssertUnwindSafe(deferred)).map_err(recover_as)
}

#[cold]
fn take_wrapped(payload: Box<dyn Any + Send>) -> WrappedError {
    match payload.downcast::<WrappedError>() {
        Ok(wrapped) => *wrapped,
        Err(payload) => resume_unwind(payload),
    }
}

#[cold]
fn recover(payload: Box<dyn Any + Send>) -> BoxError {
    let wrapped = take_wrapped(payload);
    tracing::trace!(cause = wrapped.cause_type_name(), "unwrapping carried error");
    wrapped.into_cause()
}

#[cold]
fn recover_as<E: Error + 'static>(payload: Box<dyn Any + Send>) -> E {
    match take_wrapped(payload).downcast::<E>() {
        Ok(cause) => {
            tracing::trace!(cause = std::any::type_name::<E>(), "unwrapping carried error");
            cause
        }
        Err(wrapped) => {
            tracing::trace!(
                cause = wrapped.cause_type_name(),
                expected = std::any::type_name::<E>(),
                "carried error is not the expected one, resuming unwind"
            );
            resume_unwind(Box::new(wrapped))
        }
    }
}
