use std::any::{type_name, TypeId};
use std::error::Error;

/// A type-erased error that is safe to move across threads.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The carrier raised by the `unchecked` adapters.
///
/// A `WrappedError` owns exactly one cause: the error value returned by the wrapped callable. The
/// carrier renders as its cause and reports it as its [`source`](Error::source), so nothing is
/// lost when it surfaces unhandled.
///
/// Anything that converts into a [`BoxError`] can be carried, including `BoxError` itself and
/// `anyhow::Error`. Matching with [`is`](Self::is) and the downcasts looks at the error inside the
/// box, so a cause that was already boxed is found by its own type. The type the cause was wrapped
/// as is recorded separately, see [`cause_type_id`](Self::cause_type_id).
///
/// # Example
///
/// ```
/// use std::error::Error;
/// use throwing::example::Uri;
/// use throwing::WrappedError;
///
/// let cause = Uri::parse(". .").unwrap_err();
/// let wrapped = WrappedError::new(cause.clone());
///
/// assert_eq!(wrapped.to_string(), "Illegal character in path at index 1: . .");
/// assert!(wrapped.source().is_some());
/// assert_eq!(wrapped.downcast_ref(), Some(&cause));
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct WrappedError {
    #[source]
    cause: BoxError,
    type_id: TypeId,
    type_name: &'static str,
}

impl WrappedError {
    /// Wrap `cause`, capturing its type.
    pub fn new<E>(cause: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        Self {
            type_id: typeid::of::<E>(),
            type_name: type_name::<E>(),
            cause: cause.into(),
        }
    }

    /// The wrapped error.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Discard the carrier and return the wrapped error.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// The [`TypeId`] of the type the error was wrapped as.
    ///
    /// For a boxed cause this is the id of the box type, not of the error inside.
    pub fn cause_type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name of the type the error was wrapped as, for diagnostics only.
    pub fn cause_type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the wrapped error is an `E`.
    ///
    /// ```
    /// use std::fmt;
    /// use throwing::{BoxError, WrappedError};
    ///
    /// let boxed: BoxError = Box::new(fmt::Error);
    /// let wrapped = WrappedError::new(boxed);
    /// assert!(wrapped.is::<fmt::Error>());
    /// assert_eq!(wrapped.downcast::<fmt::Error>().ok(), Some(fmt::Error));
    /// ```
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.cause.is::<E>()
    }

    /// Borrow the wrapped error as an `E`, if it is one.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref()
    }

    /// Recover the wrapped error as an `E`.
    ///
    /// On a type mismatch the carrier is handed back untouched.
    pub fn downcast<E: Error + 'static>(self) -> Result<E, Self> {
        let Self {
            cause,
            type_id,
            type_name,
        } = self;
        match cause.downcast::<E>() {
            Ok(cause) => Ok(*cause),
            Err(cause) => Err(Self {
                cause,
                type_id,
                type_name,
            }),
        }
    }
}
