//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, so `Functor` and `Monad` can be written once and implemented
//! by `Optional` and `Either`. `Sequence` keeps its own `map` and `bind`,
//! which need replayable `Fn` closures rather than `FnOnce`.
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::{Either, Optional};
//! use fp_abstractions::typeclass::{Applicative, Functor, Monad};
//!
//! let x = Optional::present(5).fmap(|n| n + 1);
//! assert_eq!(x, Optional::present(6));
//!
//! let y: Either<String, i32> = <Either<String, ()>>::pure(20)
//!     .flat_map(|n| Either::success(n + 1));
//! assert_eq!(y, Either::success(21));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
