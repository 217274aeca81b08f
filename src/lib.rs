//! # fp-abstractions
//!
//! Optional values, a success/failure disjoint union and lazily produced,
//! replayable sequences, with the Functor/Applicative/Monad vocabulary
//! shared between them.
//!
//! ## Overview
//!
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Applicative`, `Monad`
//! - **Optional**: presence or absence of a value without null
//! - **Either**: failure with a reason, or success with a value
//! - **Sequence**: lazy `filter`/`sort_by`/`map`/`bind` pipelines that can be
//!   iterated again from the start
//! - **Railway**: N-step validation pipelines that stop at the first failure
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Optional`, `Either`, `Sequence` and railway pipelines
//! - `serde`: Serialization for `Optional` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_abstractions::prelude::*;
//!
//! let name = Optional::present("Joe")
//!     .bind(|first| Optional::present(format!("{first} Bloggs")))
//!     .match_with(|full| full, || "nobody".to_string());
//! assert_eq!(name, "Joe Bloggs");
//!
//! let percentages: Vec<String> = Sequence::range(1..=100)
//!     .filter(|x| x % 20 == 0)
//!     .sort_by(|x| *x, SortOrder::Descending)
//!     .map(|x| format!("{x}%"))
//!     .to_vec();
//! assert_eq!(percentages, ["100%", "80%", "60%", "40%", "20%"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fp_abstractions::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    pub use crate::error::ConstructionError;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
