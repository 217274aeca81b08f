//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: a present `Optional` stays present, a failed `Either` stays failed
//! with the same error.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//! use fp_abstractions::typeclass::Functor;
//!
//! let present = Optional::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::present("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::absent());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::control::Either;
/// use fp_abstractions::typeclass::Functor;
///
/// let success: Either<String, i32> = Either::success(5);
/// assert_eq!(success.fmap(|n| n * 2), Either::success(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// The function is invoked at most once; when the container holds no
    /// value it is not invoked at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    /// use fp_abstractions::typeclass::Functor;
    ///
    /// let x = Optional::present(5);
    /// assert_eq!(x.fmap(|n| n * 2), Optional::present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    /// use fp_abstractions::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::present("replaced"));
    /// assert_eq!(Optional::<i32>::absent().replace("replaced"), Optional::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
