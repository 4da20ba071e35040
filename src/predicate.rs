use crate::{ThrowingBiFunction, ThrowingFunction};

/// A boolean test of one argument that may fail with `E`.
///
/// Every `Fn(T) -> Result<bool, E>` is a predicate. The combinators build new predicates and
/// keep the usual evaluation order: [`and`](Self::and) and [`or`](Self::or) short-circuit,
/// [`xor`](Self::xor) always evaluates both sides. A failure of the first operand is returned
/// without evaluating the second.
///
/// ```
/// use throwing::{ThrowingFunction, ThrowingPredicate};
///
/// let positive = |s: &str| s.parse::<i32>().map(|n| n > 0);
/// let even = |s: &str| s.parse::<i32>().map(|n| n % 2 == 0);
///
/// let positive_and_even = positive.and(even);
/// assert_eq!(positive_and_even.test("4"), Ok(true));
/// assert_eq!(positive_and_even.test("-4"), Ok(false));
/// assert!(positive_and_even.test("four").is_err());
///
/// assert!(["1", "3", "4"].into_iter().any(positive_and_even.unchecked()));
/// ```
pub trait ThrowingPredicate<T, E>: ThrowingFunction<T, bool, E> {
    /// Evaluate this predicate on `arg`.
    fn test(&self, arg: T) -> Result<bool, E> {
        self.apply(arg)
    }

    /// Logical AND. `other` is only evaluated if this predicate returns `true`.
    fn and<E2, P>(self, other: P) -> impl Fn(T) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        P: ThrowingPredicate<T, E2>,
        E2: Into<E>,
    {
        move |arg: T| Ok(self.test(arg.clone())? && other.test(arg).map_err(Into::<E>::into)?)
    }

    /// Logical OR. `other` is only evaluated if this predicate returns `false`.
    fn or<E2, P>(self, other: P) -> impl Fn(T) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        P: ThrowingPredicate<T, E2>,
        E2: Into<E>,
    {
        move |arg: T| Ok(self.test(arg.clone())? || other.test(arg).map_err(Into::<E>::into)?)
    }

    /// Logical XOR. Both predicates are always evaluated.
    fn xor<E2, P>(self, other: P) -> impl Fn(T) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        P: ThrowingPredicate<T, E2>,
        E2: Into<E>,
    {
        move |arg: T| {
            let first = self.test(arg.clone())?;
            let second = other.test(arg).map_err(Into::<E>::into)?;
            Ok(first ^ second)
        }
    }

    /// Logical NOT.
    fn negate(self) -> impl Fn(T) -> Result<bool, E>
    where
        Self: Sized,
    {
        move |arg: T| Ok(!self.test(arg)?)
    }

    /// Convert into a function that returns its argument in `Some` if it passes, and `None`
    /// otherwise.
    ///
    /// ```
    /// use throwing::{ThrowingFunction, ThrowingPredicate};
    ///
    /// let short = |s: &str| Ok::<_, std::fmt::Error>(s.len() < 3);
    /// let kept: Vec<_> = ["a", "abcd", "bc"]
    ///     .into_iter()
    ///     .filter_map(short.to_option().unchecked())
    ///     .collect();
    /// assert_eq!(kept, ["a", "bc"]);
    /// ```
    fn to_option(self) -> impl Fn(T) -> Result<Option<T>, E>
    where
        Self: Sized,
        T: Clone,
    {
        move |arg: T| Ok(self.test(arg.clone())?.then_some(arg))
    }
}

impl<T, E, F: ThrowingFunction<T, bool, E>> ThrowingPredicate<T, E> for F {}

/// A boolean test of two arguments that may fail with `E`.
///
/// The two-argument counterpart of [`ThrowingPredicate`], with the same combinators.
pub trait ThrowingBiPredicate<T, U, E>: ThrowingBiFunction<T, U, bool, E> {
    /// Evaluate this predicate on the given arguments.
    fn test(&self, first: T, second: U) -> Result<bool, E> {
        self.apply(first, second)
    }

    /// Logical AND. `other` is only evaluated if this predicate returns `true`.
    fn and<E2, P>(self, other: P) -> impl Fn(T, U) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        P: ThrowingBiPredicate<T, U, E2>,
        E2: Into<E>,
    {
        move |first: T, second: U| {
            Ok(self.test(first.clone(), second.clone())?
                && other.test(first, second).map_err(Into::<E>::into)?)
        }
    }

    /// Logical OR. `other` is only evaluated if this predicate returns `false`.
    fn or<E2, P>(self, other: P) -> impl Fn(T, U) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        P: ThrowingBiPredicate<T, U, E2>,
        E2: Into<E>,
    {
        move |first: T, second: U| {
            Ok(self.test(first.clone(), second.clone())?
                || other.test(first, second).map_err(Into::<E>::into)?)
        }
    }

    /// Logical XOR. Both predicates are always evaluated.
    fn xor<E2, P>(self, other: P) -> impl Fn(T, U) -> Result<bool, E>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        P: ThrowingBiPredicate<T, U, E2>,
        E2: Into<E>,
    {
        move |first: T, second: U| {
            let left = self.test(first.clone(), second.clone())?;
            let right = other.test(first, second).map_err(Into::<E>::into)?;
            Ok(left ^ right)
        }
    }

    /// Logical NOT.
    fn negate(self) -> impl Fn(T, U) -> Result<bool, E>
    where
        Self: Sized,
    {
        move |first: T, second: U| Ok(!self.test(first, second)?)
    }
}

impl<T, U, E, F: ThrowingBiFunction<T, U, bool, E>> ThrowingBiPredicate<T, U, E> for F {}
