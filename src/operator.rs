use crate::{ThrowingBiFunction, ThrowingFunction};
use std::cmp::Ordering;

/// A [`ThrowingFunction`] whose argument and result have the same type.
///
/// Useful as a bound; the adapters are those of [`ThrowingFunction`].
///
/// ```
/// use throwing::{example, ThrowingUnaryOperator};
///
/// fn twice<E>(op: impl ThrowingUnaryOperator<i32, E>, value: i32) -> Result<i32, E> {
///     op.apply(op.apply(value)?)
/// }
///
/// assert_eq!(twice(|n: i32| example::add(n, n), 3), Ok(12));
/// assert!(twice(|n: i32| example::add(n, n), i32::MAX / 2).is_err());
/// ```
pub trait ThrowingUnaryOperator<T, E>: ThrowingFunction<T, T, E> {}

impl<T, E, F: ThrowingFunction<T, T, E>> ThrowingUnaryOperator<T, E> for F {}

/// A [`ThrowingBiFunction`] whose arguments and result all have the same type.
///
/// Useful as a bound; the adapters are those of [`ThrowingBiFunction`].
pub trait ThrowingBinaryOperator<T, E>: ThrowingBiFunction<T, T, T, E> {}

impl<T, E, F: ThrowingBiFunction<T, T, T, E>> ThrowingBinaryOperator<T, E> for F {}

/// A unary operator that returns its argument and never fails.
///
/// ```
/// use throwing::{identity, ThrowingFunction};
///
/// let id = identity::<&str, std::fmt::Error>();
/// assert_eq!(id.apply("a"), Ok("a"));
/// ```
pub fn identity<T, E>() -> impl Fn(T) -> Result<T, E> + Copy {
    Ok
}

/// A binary operator that returns the lesser of its arguments according to `compare`.
///
/// On a tie the first argument is returned.
///
/// ```
/// use throwing::{min_by, ThrowingBiFunction};
///
/// let shortest = min_by::<&str, std::fmt::Error>(|a, b| a.len().cmp(&b.len()));
/// assert_eq!(shortest.apply("abc", "de"), Ok("de"));
/// assert_eq!(["ab", "cd", "e"].into_iter().reduce(shortest.unchecked()), Some("e"));
/// ```
pub fn min_by<T, E>(compare: impl Fn(&T, &T) -> Ordering) -> impl Fn(T, T) -> Result<T, E> {
    move |a, b| match compare(&a, &b) {
        Ordering::Greater => Ok(b),
        Ordering::Less | Ordering::Equal => Ok(a),
    }
}

/// A binary operator that returns the greater of its arguments according to `compare`.
///
/// On a tie the first argument is returned.
pub fn max_by<T, E>(compare: impl Fn(&T, &T) -> Ordering) -> impl Fn(T, T) -> Result<T, E> {
    move |a, b| match compare(&a, &b) {
        Ordering::Less => Ok(b),
        Ordering::Greater | Ordering::Equal => Ok(a),
    }
}
