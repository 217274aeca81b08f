//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map` (bind): the next step is
//! chosen from the value produced by the previous one, and the nested
//! container it returns is flattened rather than double-wrapped. On
//! `Optional` and `Either` a chain of `flat_map` calls short-circuits at the
//! first absence or failure.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//! use fp_abstractions::typeclass::Monad;
//!
//! fn shorten(html: String) -> Optional<String> {
//!     if html.is_empty() { Optional::absent() } else { Optional::present(html[..1].to_string()) }
//! }
//!
//! let result = Optional::present("aa".to_string())
//!     .flat_map(shorten)
//!     .flat_map(|short| Optional::present(format!("https://{short}")));
//! assert_eq!(result, Optional::present("https://a".to_string()));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Either;
    /// use fp_abstractions::typeclass::Monad;
    ///
    /// let x: Either<&str, i32> = Either::success(5);
    /// assert_eq!(x.flat_map(|n| Either::success(n * 2)), Either::success(10));
    ///
    /// let y: Either<&str, i32> = Either::success(5);
    /// assert_eq!(y.flat_map(|_| Either::<&str, i32>::failure("too small")), Either::failure("too small"));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching the standard library's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent or failed, that propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Optional;
    /// use fp_abstractions::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("hello")), Optional::present("hello"));
    /// assert_eq!(Optional::<i32>::absent().then(Optional::present("hello")), Optional::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Optional};
    use rstest::rstest;

    /// A step written once against the trait and reused for both containers.
    fn halve_even<M>(value: M) -> M::WithType<i32>
    where
        M: Monad<Inner = i32>,
        M::WithType<i32>: Default,
    {
        value.flat_map(|n| {
            if n % 2 == 0 {
                <M as Applicative>::pure(n / 2)
            } else {
                Default::default()
            }
        })
    }

    #[rstest]
    #[case(Optional::present(8), Optional::present(4))]
    #[case(Optional::present(7), Optional::absent())]
    #[case(Optional::absent(), Optional::absent())]
    fn generic_step_over_optional(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(halve_even(input), expected);
    }

    #[rstest]
    fn option_and_then_alias() {
        let x = Optional::present(5);
        assert_eq!(
            x.flat_map(|n| Optional::present(n * 2)),
            x.and_then(|n| Optional::present(n * 2))
        );
    }

    #[rstest]
    fn either_then_failure() {
        let x: Either<&str, i32> = Either::failure("error");
        assert_eq!(x.then(Either::success("hello")), Either::failure("error"));
    }

    #[rstest]
    fn either_then_success() {
        let x: Either<&str, i32> = Either::success(1);
        assert_eq!(x.then(Either::success("hello")), Either::success("hello"));
    }
}
