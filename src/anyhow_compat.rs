use crate::wrapped::BoxError;

/// [`anyhow`](https://docs.rs/anyhow/latest/anyhow/) flavor of [`checked`](crate::checked).
///
/// Same recovery rule, but the recovered error is an [`anyhow::Error`], so the call fits into
/// functions returning [`anyhow::Result`] and composes with [`anyhow::Context`]. The error keeps
/// the message and the source chain of the original error.
///
/// # Example
///
/// ```rust
/// use anyhow::{Context, Result};
/// use throwing::{checked_anyhow, example::Uri, ThrowingFunction};
///
/// fn parse_all(inputs: &[&str]) -> Result<Vec<Uri>> {
///     checked_anyhow(|| {
///         inputs
///             .iter()
///             .copied()
///             .map(ThrowingFunction::unchecked(Uri::parse))
///             .collect()
///     })
///     .context("In parse_all()")
/// }
///
/// let error = parse_all(&["a", ". ."]).unwrap_err();
/// assert_eq!(error.to_string(), "In parse_all()");
/// assert_eq!(error.root_cause().to_string(), "Illegal character in path at index 1: . .");
/// ```
pub fn checked_anyhow<T>(deferred: impl FnOnce() -> T) -> anyhow::Result<T> {
    crate::checked(deferred).map_err(|cause| anyhow::Error::new(Recovered(cause)))
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct Recovered(BoxError);
