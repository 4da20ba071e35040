//! Fallible closures for infallible APIs.
//!
//! Plenty of APIs take a closure and have no room for errors in its signature:
//! [`Iterator::map`], [`Iterator::for_each`], [`Option::map`], callbacks of all kinds. This crate
//! lets you pass a fallible function to them anyway, and get the error back on the other side.
//!
//! # Crash course
//!
//! Every closure or `fn` item returning a [`Result`] implements one of the `Throwing*` traits
//! ([`ThrowingFunction`] for one argument, [`ThrowingBiFunction`] for two, [`ThrowingSupplier`]
//! for none). Each trait offers three adapters that produce an ordinary closure of the same
//! shape:
//! - [`unchecked`](ThrowingFunction::unchecked) wraps the error in a [`WrappedError`] and unwinds
//!   with it. [`checked`] and [`checked_as`] catch the unwind and hand the original error back.
//! - [`sneaky`](ThrowingFunction::sneaky) unwinds with the original error itself, without a
//!   carrier.
//! - [`lift`](ThrowingFunction::lift) returns `None` on failure. This is the only lossy strategy:
//!   the error is dropped.
//!
//! On top of that, predicates get `and`/`or`/`xor`/`negate`, functions get `and_then`/`compose`
//! and consumers get `and_then_consume`, all of which build new fallible closures.
//!
//! # Example
//!
//! ```
//! use throwing::{checked, checked_as, example::{Uri, UriSyntaxError}, ThrowingFunction};
//!
//! let inputs = [".", "a", ". ."];
//!
//! // Unwinds with a WrappedError, and `checked_as` restores the original error.
//! let result: Result<Vec<Uri>, UriSyntaxError> = checked_as(|| {
//!     inputs.into_iter().map(ThrowingFunction::unchecked(Uri::parse)).collect()
//! });
//! assert_eq!(result.unwrap_err().to_string(), "Illegal character in path at index 1: . .");
//!
//! // Failures turn into `None`.
//! let parsed = inputs
//!     .into_iter()
//!     .map(ThrowingFunction::lift(Uri::parse))
//!     .filter(Option::is_some)
//!     .count();
//! assert_eq!(parsed, 2);
//!
//! // No errors, no difference.
//! let paths = checked(|| {
//!     ["a"].into_iter().map(ThrowingFunction::unchecked(Uri::parse)).count()
//! });
//! assert_eq!(paths.unwrap(), 1);
//! ```
//!
//! # All you need to know
//!
//! `unchecked` and `sneaky` propagate errors by unwinding (via [`std::panic::resume_unwind`],
//! which does not run the panic hook, so nothing is printed). They therefore do not work with
//! `panic = "abort"`: the process is terminated instead.
//!
//! Unwinding through code that is not prepared for it can leave data in an inconsistent state,
//! just like a panic would. The boundary functions ([`checked`], [`checked_as`]) assert unwind
//! safety on your behalf; do not observe half-updated state after they return an error.
//!
//! A [`WrappedError`] whose cause is not the one [`checked_as`] was asked for keeps unwinding,
//! carrier included, so an outer boundary can catch it. Unwinds that did not come from this crate,
//! such as ordinary panics, are never intercepted.
//!
//! Passing a missing function to an adapter is impossible: adapters take the function by value,
//! so `None` or a null pointer are rejected at compile time.

mod bi_function;
mod checker;
mod consumer;
mod function;
mod operator;
mod outcome;
mod predicate;
mod supplier;
mod wrapped;

pub use bi_function::ThrowingBiFunction;
pub use checker::{checked, checked_as};
pub use consumer::{ThrowingBiConsumer, ThrowingConsumer};
pub use function::ThrowingFunction;
pub use operator::{identity, max_by, min_by, ThrowingBinaryOperator, ThrowingUnaryOperator};
pub use outcome::Outcome;
pub use predicate::{ThrowingBiPredicate, ThrowingPredicate};
pub use supplier::{ThrowingRunnable, ThrowingSupplier};
pub use wrapped::{BoxError, WrappedError};

#[cfg(feature = "anyhow")]
mod anyhow_compat;
#[cfg(feature = "anyhow")]
pub use anyhow_compat::checked_anyhow;

pub mod example;
