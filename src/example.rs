//! Small fallible functions used throughout the documentation.
//!
//! Nothing here is needed to use the crate. [`Uri::parse`] is the kind of function one would
//! like to pass to [`Iterator::map`] and cannot, because it returns a [`Result`].

/// A (very) simplified URI: a path made of characters that are legal in a URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uri {
    path: String,
}

impl Uri {
    /// Parse a URI, rejecting whitespace and the characters a URI may never contain.
    ///
    /// ```
    /// use throwing::example::Uri;
    ///
    /// assert_eq!(Uri::parse("a").unwrap().path(), "a");
    /// assert_eq!(
    ///     Uri::parse(". .").unwrap_err().to_string(),
    ///     "Illegal character in path at index 1: . .",
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Uri, UriSyntaxError> {
        match input.chars().position(is_illegal) {
            Some(index) => Err(UriSyntaxError {
                input: input.to_string(),
                index,
                reason: "Illegal character in path",
            }),
            None => Ok(Uri {
                path: input.to_string(),
            }),
        }
    }

    /// The path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_illegal(c: char) -> bool {
    c.is_whitespace() || c.is_control() || "\"<>\\^`{|}".contains(c)
}

/// The error returned by [`Uri::parse`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at index {index}: {input}")]
pub struct UriSyntaxError {
    input: String,
    index: usize,
    reason: &'static str,
}

impl UriSyntaxError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The index of the offending character, in characters.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Why parsing failed.
    pub fn reason(&self) -> &str {
        self.reason
    }
}

/// Add numbers and check for overflow.
///
/// This function tries to compute the sum of the two arguments and returns an error if the sum
/// doesn't fit in the result type. The error carries the overflowed sum.
pub fn add(a: i32, b: i32) -> Result<i32, Overflow> {
    a.checked_add(b).ok_or(Overflow(a.wrapping_add(b)))
}

/// The error returned by [`add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("integer overflow (wrapped to {0})")]
pub struct Overflow(pub i32);
