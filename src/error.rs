//! Error types for container construction.
//!
//! Absence (`Optional`) and failure (`Either`) are values, not errors, so this
//! module is deliberately small: it covers the one contract violation a caller
//! can hit at construction time.

use thiserror::Error;

/// Represents an error when a container cannot be built from the given value.
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::error::ConstructionError;
///
/// let error = ConstructionError::InvalidArgument {
///     constructor: "Optional::try_present",
///     reason: "value is an absence marker",
/// };
/// assert_eq!(
///     error.to_string(),
///     "Optional::try_present: invalid argument (value is an absence marker)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The value passed to a constructor violates its precondition.
    #[error("{constructor}: invalid argument ({reason})")]
    InvalidArgument {
        /// The constructor that rejected the value.
        constructor: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
