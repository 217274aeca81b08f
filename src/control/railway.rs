//! Railway-oriented pipelines.
//!
//! A railway step takes an input and either passes it on (`success`) or
//! switches to the failure track with a reason. A pipeline is the sequential
//! `bind` composition of its steps: once an input is on the failure track no
//! further step runs, and the error returned is the one produced by the step
//! that rejected it.
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::{Either, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .step(|url: String| {
//!         if url.starts_with("http") { Either::success(url) } else { Either::failure("not http") }
//!     })
//!     .step(|url: String| {
//!         if url.ends_with(".com") { Either::success(url) } else { Either::failure("not .com") }
//!     });
//!
//! assert_eq!(pipeline.run("https://example.com".to_string()), Either::success("https://example.com".to_string()));
//! assert_eq!(pipeline.run("ftp://example.com".to_string()), Either::failure("not http"));
//! ```

use std::fmt;

use super::either::Either;

/// A single railway step: pass the input on or reject it with a reason.
pub type Step<'a, E, T> = Box<dyn Fn(T) -> Either<E, T> + 'a>;

/// An ordered list of railway steps that can be run on many inputs.
pub struct Pipeline<'a, E, T> {
    steps: Vec<Step<'a, E, T>>,
}

impl<'a, E, T> Pipeline<'a, E, T> {
    /// Creates a pipeline with no steps; running it returns the input as a success.
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to the end of the pipeline.
    #[must_use]
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(T) -> Either<E, T> + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the pipeline has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs `input` through every step until one rejects it.
    pub fn run(&self, input: T) -> Either<E, T> {
        run_pipeline(input, self.steps.iter())
    }
}

impl<E, T> Default for Pipeline<'_, E, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T> fmt::Debug for Pipeline<'_, E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Runs `input` through `steps` in order, stopping at the first failure.
///
/// Steps after a failure are not invoked.
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::control::{run_pipeline, Either};
///
/// let steps: [fn(i32) -> Either<&'static str, i32>; 2] = [
///     |n| if n > 0 { Either::success(n) } else { Either::failure("not positive") },
///     |n| if n < 100 { Either::success(n) } else { Either::failure("too large") },
/// ];
/// assert_eq!(run_pipeline(42, steps), Either::success(42));
/// assert_eq!(run_pipeline(-1, steps), Either::failure("not positive"));
/// ```
pub fn run_pipeline<E, T, I, F>(input: T, steps: I) -> Either<E, T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Either<E, T>,
{
    tracing::trace!("running railway pipeline");
    steps
        .into_iter()
        .enumerate()
        .fold(Either::success(input), |current, (index, step)| {
            current.bind(|value| {
                let next = step(value);
                if next.is_failure() {
                    tracing::debug!(step = index, "railway step rejected input");
                }
                next
            })
        })
}
