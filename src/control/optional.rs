//! Optional type - a value that may be absent, without null.
//!
//! `Optional<T>` holds exactly one `T` ("present") or nothing ("absent").
//! Its representation is private: the contained value can only be reached
//! through [`Optional::match_with`], which requires a handler for both cases,
//! or through the total conversions at the bottom of this file.
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//!
//! fn get_value(has_value: bool) -> Optional<&'static str> {
//!     if has_value { Optional::present("Bob") } else { Optional::absent() }
//! }
//!
//! let greeting = get_value(true)
//!     .match_with(|name| format!("Hello, {name}"), || "Goodbye".to_string());
//! assert_eq!(greeting, "Hello, Bob");
//!
//! // The function passed to map is never invoked for an absent value
//! let mapped = get_value(false).map(|name| format!("Hello, {name}"));
//! assert!(mapped.is_absent());
//! ```

use std::fmt;

use crate::error::ConstructionError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::control::Optional;
///
/// let name = Optional::present("Bob").map(str::to_uppercase);
/// assert_eq!(name, Optional::present("BOB".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Optional<T> {
    value: Option<T>,
}

/// Types that have a value standing for "nothing here".
///
/// [`Optional::try_present`] refuses such values, so an absence marker is
/// never smuggled into a present `Optional`.
pub trait Nullable {
    /// Returns `true` if this value is the type's absence marker.
    fn is_absence_marker(&self) -> bool;
}

impl<U> Nullable for Option<U> {
    #[inline]
    fn is_absence_marker(&self) -> bool {
        self.is_none()
    }
}

impl<U> Nullable for Optional<U> {
    #[inline]
    fn is_absence_marker(&self) -> bool {
        self.is_absent()
    }
}

impl<U: ?Sized> Nullable for *const U {
    #[inline]
    fn is_absence_marker(&self) -> bool {
        self.is_null()
    }
}

impl<U: ?Sized> Nullable for *mut U {
    #[inline]
    fn is_absence_marker(&self) -> bool {
        self.is_null()
    }
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// assert!(Optional::present(42).is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let nothing: Optional<i32> = Optional::absent();
    /// assert!(nothing.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self { value: None }
    }

    /// Creates a present value, rejecting values that are themselves absence markers.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidArgument`] if `value` is an absence
    /// marker, such as `None` or a null pointer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// assert!(Optional::try_present(Some(1)).is_ok());
    /// assert!(Optional::<Option<i32>>::try_present(None).is_err());
    /// ```
    pub fn try_present(value: T) -> Result<Self, ConstructionError>
    where
        T: Nullable,
    {
        if value.is_absence_marker() {
            Err(ConstructionError::InvalidArgument {
                constructor: "Optional::try_present",
                reason: "value is an absence marker",
            })
        } else {
            Ok(Self::present(value))
        }
    }

    /// Wraps the success value of a fallible operation, dropping its error.
    ///
    /// Use `Either` instead when the reason for the failure matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let parsed = Optional::from_ok("42".parse::<i32>());
    /// assert_eq!(parsed, Optional::present(42));
    ///
    /// let failed = Optional::from_ok("forty-two".parse::<i32>());
    /// assert!(failed.is_absent());
    /// ```
    #[inline]
    pub fn from_ok<E>(result: Result<T, E>) -> Self {
        Self { value: result.ok() }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    // =========================================================================
    // Map / Bind / Match
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// `function` is invoked exactly once when present and never when absent.
    /// A panic inside `function` propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let html = Optional::present("aa".to_string());
    /// let short = html.map(|x| x[..1].to_string());
    /// assert_eq!(short, Optional::present("a".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            value: self.value.map(function),
        }
    }

    /// Chains a step that may itself produce no value.
    ///
    /// The result of `function` is returned as is, never wrapped twice.
    /// A chain of `bind` calls stops at the first absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let name = Optional::present("Joe")
    ///     .bind(|first| Optional::present(format!("{first} Bloggs")));
    /// assert_eq!(name, Optional::present("Joe Bloggs".to_string()));
    ///
    /// let stopped = Optional::<&str>::absent()
    ///     .bind(|first| Optional::present(format!("{first} Bloggs")));
    /// assert!(stopped.is_absent());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Optional::absent(),
        }
    }

    /// Collapses the container by handling both cases.
    ///
    /// Exactly one of the two handlers is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let none: Optional<String> = Optional::absent();
    /// assert_eq!(none.match_with(|x| x, || "none returned".to_string()), "none returned");
    ///
    /// let some = Optional::present("html here".to_string());
    /// assert_eq!(some.match_with(|x| x, || "none returned".to_string()), "html here");
    /// ```
    #[inline]
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.value {
            Some(value) => on_present(value),
            None => on_absent(),
        }
    }

    // =========================================================================
    // Derived Operations
    // =========================================================================

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// assert_eq!(Optional::present(4).filter(|x| x % 2 == 0), Optional::present(4));
    /// assert!(Optional::present(3).filter(|x| x % 2 == 0).is_absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Returns the contained value or computes a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let html: Optional<String> = Optional::absent();
    /// assert_eq!(html.or_else_with(|| "No html returned".to_string()), "No html returned");
    /// ```
    #[inline]
    pub fn or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, fallback)
    }

    /// Borrows the contained value, producing an `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// assert_eq!(Optional::present(Optional::present(1)).flatten(), Optional::present(1));
    /// assert!(Optional::present(Optional::<i32>::absent()).flatten().is_absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    /// The default `Optional` is absent.
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

// =============================================================================
// Debug / Display
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Present").field(value).finish(),
            None => formatter.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Some({value})"),
            None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Wraps a nullable result at a boundary: `Some` becomes present, `None` absent.
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the contained value once, or nothing when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    ///
    /// let values: Vec<i32> = Optional::present(1).into_iter().collect();
    /// assert_eq!(values, vec![1]);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Applicative for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.bind(|first| other.map(|second| function(first, second)))
    }
}

impl<T> Monad for Optional<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Optional<String>: Clone, Send, Sync);
