//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] works around this with a GAT: an implementing type
//! names the type it is applied to (`Inner`) and how to re-apply the same
//! constructor to another type (`WithType<B>`). `Functor`, `Applicative` and
//! `Monad` are defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//! use fp_abstractions::typeclass::TypeConstructor;
//!
//! fn retarget<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::present(42);
//! let absent: Optional<String> = retarget(present);
//! assert!(absent.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// For a two-parameter container such as `Either<L, R>` the constructor is
/// `Either<L, _>`: the failure type stays fixed and only the success type
/// varies.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor, so transformations can
    /// be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
