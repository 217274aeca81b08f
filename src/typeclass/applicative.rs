//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the context (`Optional::present`,
//!   `Either::success`)
//! - `map2`: combine two independent computations with a binary function
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(x).fmap(|x| x) == Self::pure(x)
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//! use fp_abstractions::typeclass::Applicative;
//!
//! let first = Optional::present("Joe");
//! let last = Optional::present("Bloggs");
//! let full = first.map2(last, |first, last| format!("{first} {last}"));
//! assert_eq!(full, Optional::present("Joe Bloggs".to_string()));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::{Either, Optional};
    /// use fp_abstractions::typeclass::Applicative;
    ///
    /// let x: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(x, Optional::present(42));
    ///
    /// let y: Either<String, &str> = <Either<String, ()>>::pure("hello");
    /// assert_eq!(y, Either::success("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is absent (or failed), the result is absent (or the
    /// first failure encountered, left to right).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    /// use fp_abstractions::typeclass::Applicative;
    ///
    /// let sum = Optional::present(1).map2(Optional::present(2), |x, y| x + y);
    /// assert_eq!(sum, Optional::present(3));
    ///
    /// let missing = Optional::present(1).map2(Optional::<i32>::absent(), |x, y| x + y);
    /// assert_eq!(missing, Optional::absent());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Optional};
    use rstest::rstest;

    #[rstest]
    fn optional_product_present() {
        let pair = Optional::present(1).product(Optional::present("one"));
        assert_eq!(pair, Optional::present((1, "one")));
    }

    #[rstest]
    fn either_map2_reports_first_failure() {
        let first: Either<&str, i32> = Either::failure("first");
        let second: Either<&str, i32> = Either::failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Either::failure("first"));
    }

    #[rstest]
    fn either_map2_second_failure() {
        let first: Either<&str, i32> = Either::success(1);
        let second: Either<&str, i32> = Either::failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Either::failure("second"));
    }

    /// Homomorphism: pure(a).map2(pure(b), f) == pure(f(a, b))
    #[rstest]
    fn optional_homomorphism() {
        let left = <Optional<()>>::pure(3).map2(<Optional<()>>::pure(4), |a, b| a * b);
        assert_eq!(left, <Optional<()>>::pure(12));
    }
}
