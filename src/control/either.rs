//! Either type - failure with a reason, or success with a value.
//!
//! `Either<L, R>` is a disjoint union: it holds an `L` tagged as failure or an
//! `R` tagged as success, never both and never neither. It is the backbone of
//! railway-oriented code: `map` and `bind` act on the success track only,
//! while a failure rides along untouched until [`Either::match_with`] forces
//! the caller to handle both tracks.
//!
//! The representation is private, so the wrong side can never be read by
//! accident.
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::Either;
//!
//! fn first_char(text: String) -> Either<String, char> {
//!     text.chars().next().map_or_else(
//!         || Either::failure("empty input".to_string()),
//!         Either::success,
//!     )
//! }
//!
//! let success: Either<String, String> = Either::success("hello".to_string());
//! assert_eq!(success.bind(first_char), Either::success('h'));
//!
//! let message = Either::<String, String>::success(String::new())
//!     .bind(first_char)
//!     .match_with(|error| format!("Rejected because: {error}"), |c| c.to_string());
//! assert_eq!(message, "Rejected because: empty input");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
enum Track<L, R> {
    Failure(L),
    Success(R),
}

/// A value that is either a failure carrying `L` or a success carrying `R`.
///
/// # Type Parameters
///
/// * `L` - The failure (reason) type
/// * `R` - The success (value) type
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::control::Either;
///
/// let success: Either<String, i32> = Either::success(42);
/// assert_eq!(success.map(|x| x * 2), Either::success(84));
///
/// let failure: Either<String, i32> = Either::failure("error".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::failure("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Either<L, R> {
    track: Track<L, R>,
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn success(value: R) -> Self {
        Self {
            track: Track::Success(value),
        }
    }

    /// Creates a failure.
    #[inline]
    pub const fn failure(error: L) -> Self {
        Self {
            track: Track::Failure(error),
        }
    }

    /// Runs a fallible operation and converts its outcome.
    ///
    /// This is the single boundary where an operation that can fail is turned
    /// into a value on the railway, so its error never escapes a pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let parsed = Either::attempt(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Either::success(12));
    ///
    /// let overflow = Either::attempt(|| "1200".parse::<u8>());
    /// assert!(overflow.is_failure());
    /// ```
    #[inline]
    pub fn attempt<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        operation().into()
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.track, Track::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.track, Track::Failure(_))
    }

    // =========================================================================
    // Map / Bind / Match
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// A failure passes through unchanged and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let html: Either<String, String> = Either::success("<html>".to_string());
    /// assert_eq!(html.map(|x| x[..1].to_string()), Either::success("<".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self.track {
            Track::Failure(error) => Either::failure(error),
            Track::Success(value) => Either::success(function(value)),
        }
    }

    /// Applies a function to the failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::failure("boom");
    /// assert_eq!(failure.map_failure(str::len), Either::failure(4));
    /// ```
    #[inline]
    pub fn map_failure<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self.track {
            Track::Failure(error) => Either::failure(function(error)),
            Track::Success(value) => Either::success(value),
        }
    }

    /// Chains a step that may fail.
    ///
    /// The first failure short-circuits: later steps are not invoked and the
    /// error they would have received is returned exactly as produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let result: Either<&str, i32> = Either::success(1)
    ///     .bind(|_| Either::<&str, i32>::failure("first"))
    ///     .bind(|_| Either::failure("second"));
    /// assert_eq!(result, Either::failure("first"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self.track {
            Track::Failure(error) => Either::failure(error),
            Track::Success(value) => function(value),
        }
    }

    /// Eliminates the `Either` by handling both tracks.
    ///
    /// Exactly one of the two handlers is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert_eq!(failure.match_with(|x| x.to_string(), |s| s), "42");
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// assert_eq!(success.match_with(|x| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn match_with<T, F, S>(self, on_failure: F, on_success: S) -> T
    where
        F: FnOnce(L) -> T,
        S: FnOnce(R) -> T,
    {
        match self.track {
            Track::Failure(error) => on_failure(error),
            Track::Success(value) => on_success(value),
        }
    }

    /// Borrows both tracks, producing an `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match &self.track {
            Track::Failure(error) => Either::failure(error),
            Track::Success(value) => Either::success(value),
        }
    }
}

// =============================================================================
// Debug / Display
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.track {
            Track::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
            Track::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.track {
            Track::Failure(error) => write!(formatter, "Left({error})"),
            Track::Success(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes a success, `Err(e)` a failure.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// A success becomes `Ok(r)`, a failure `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::failure("error".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.match_with(Err, Ok)
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    /// Yields the success value once, or nothing for a failure.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.match_with(|_| None, Some).into_iter()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.bind(|first| other.map(|second| function(first, second)))
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}
