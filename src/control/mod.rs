//! Containers and pipelines for functional-style control flow.
//!
//! - [`Optional`]: A value that is present or absent, without null
//! - [`Either`]: Failure with a reason, or success with a value
//! - [`Sequence`]: Lazily produced, replayable ordered sequence
//! - [`Pipeline`]: Railway-oriented chain of fallible steps
//!
//! # Examples
//!
//! ## Chaining steps that may produce nothing
//!
//! ```rust
//! use fp_abstractions::control::Optional;
//!
//! fn put_on_https(html: String) -> Optional<String> {
//!     if html.len() < 3 { Optional::absent() } else { Optional::present(format!("https://{html}")) }
//! }
//!
//! let result = Optional::present("abcdef".to_string())
//!     .bind(put_on_https)
//!     .match_with(|url| url, || "No html returned".to_string());
//! assert_eq!(result, "https://abcdef");
//! ```
//!
//! ## Flattening a sequence of optional results
//!
//! ```rust
//! use fp_abstractions::control::{Optional, Sequence};
//!
//! let lengths = Sequence::from_fn(|| ["a", "", "abc"])
//!     .bind(|s| if s.is_empty() { Optional::absent() } else { Optional::present(s.len()) });
//! assert_eq!(lengths.to_vec(), vec![1, 3]);
//! ```

mod either;
mod optional;
mod railway;
mod sequence;

pub use either::Either;
pub use optional::{Nullable, Optional};
pub use railway::{Pipeline, Step, run_pipeline};
pub use sequence::{Sequence, SequenceIter, SortOrder};
