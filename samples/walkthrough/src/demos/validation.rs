//! Railway-oriented url validation.
//!
//! A url runs through three checks. The first rejection moves it onto the
//! failure track and the remaining checks are skipped.

use fp_abstractions::control::{Either, Pipeline};
use thiserror::Error;

/// Why a url was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{reason}")]
pub struct UrlRejection {
    /// Human readable reason.
    pub reason: String,
}

impl UrlRejection {
    /// Creates a rejection with `reason`.
    #[must_use]
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

/// Accepts urls that start with `http`.
pub fn starts_with_http(url: String) -> Either<UrlRejection, String> {
    if url.starts_with("http") {
        Either::success(url)
    } else {
        Either::failure(UrlRejection::new("Does not start with http"))
    }
}

/// Accepts urls that use `https://`.
pub fn starts_with_https(url: String) -> Either<UrlRejection, String> {
    if url.starts_with("https://") {
        Either::success(url)
    } else {
        Either::failure(UrlRejection::new("Does not start with https"))
    }
}

/// Which urls are allowed through.
///
/// The default policy allows no suffix at all, so every url that reaches the
/// suffix check is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPolicy {
    allowed_suffixes: Vec<String>,
}

impl UrlPolicy {
    /// Creates a policy allowing the given suffixes.
    #[must_use]
    pub fn new<I, S>(allowed_suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_suffixes: allowed_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed suffixes.
    pub fn allowed_suffixes(&self) -> &[String] {
        &self.allowed_suffixes
    }

    /// Accepts urls ending in one of the allowed suffixes.
    pub fn check_suffix(&self, url: String) -> Either<UrlRejection, String> {
        if self
            .allowed_suffixes
            .iter()
            .any(|suffix| url.ends_with(suffix.as_str()))
        {
            Either::success(url)
        } else {
            Either::failure(UrlRejection::new("Is not in allowed suffixes"))
        }
    }

    /// Builds the validation pipeline borrowing this policy.
    pub fn pipeline(&self) -> Pipeline<'_, UrlRejection, String> {
        Pipeline::new()
            .step(starts_with_http)
            .step(starts_with_https)
            .step(|url| self.check_suffix(url))
    }

    /// Runs `url` through the pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use walkthrough::demos::{UrlPolicy, UrlRejection};
    /// use fp_abstractions::control::Either;
    ///
    /// let result = UrlPolicy::default().validate("https://davemateer.com");
    /// assert_eq!(result, Either::failure(UrlRejection::new("Is not in allowed suffixes")));
    /// ```
    pub fn validate(&self, url: &str) -> Either<UrlRejection, String> {
        self.pipeline().run(url.to_string())
    }
}

/// Renders a validation outcome.
pub fn render(result: Either<UrlRejection, String>) -> String {
    result.match_with(
        |rejection| format!("Rejected because: {rejection}"),
        |_| "Success".to_string(),
    )
}

/// Validates `url` and writes the outcome.
pub fn show(sink: &mut dyn FnMut(&str), policy: &UrlPolicy, url: &str) {
    sink(&render(policy.validate(url)));
}
