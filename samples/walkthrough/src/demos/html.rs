//! Fallible page fetches lifted into `Optional` and `Either`.
//!
//! The fetch itself sits behind [`HtmlSource`]; the demos use the
//! [`InMemoryHtml`] fake so they stay deterministic.

use std::collections::BTreeMap;

use fp_abstractions::control::{Either, Optional};
use thiserror::Error;

/// Text shown when a chain ends without html.
pub const NO_HTML: &str = "No html returned";

/// Errors raised while fetching a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The url was empty or had no recognizable form.
    #[error("invalid url: {url:?}")]
    InvalidUrl {
        /// The rejected url.
        url: String,
    },
    /// Nothing is served at the url.
    #[error("no page found at {url}")]
    NotFound {
        /// The requested url.
        url: String,
    },
}

/// Source of page contents.
pub trait HtmlSource {
    /// Fetches the html served at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the url cannot be fetched.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// An [`HtmlSource`] backed by a fixed map of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHtml {
    pages: BTreeMap<String, String>,
}

impl InMemoryHtml {
    /// Creates a source with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the source with one more page.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    /// Pages used by the walkthrough.
    #[must_use]
    pub fn sample() -> Self {
        Self::new()
            .with_page("a", "aa")
            .with_page("b", "bb")
            .with_page("test.com", "html here")
            .with_page("https://davemateer.com", "<html><body>dave mateer</body></html>")
    }
}

impl HtmlSource for InMemoryHtml {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}

/// Fetches a page, dropping the reason on failure.
pub fn get_html(source: &impl HtmlSource, url: &str) -> Optional<String> {
    Optional::from_ok(source.fetch(url))
}

/// Fetches a page, keeping the reason on failure.
pub fn get_html_either(source: &impl HtmlSource, url: &str) -> Either<FetchError, String> {
    Either::attempt(|| source.fetch(url))
}

/// Keeps the first ten characters; empty html has nothing to shorten.
pub fn shorten_html(html: String) -> Optional<String> {
    if html.is_empty() {
        Optional::absent()
    } else {
        Optional::present(html.chars().take(10).collect())
    }
}

/// Prefixes `https://`; anything shorter than three characters is rejected.
pub fn put_on_https(html: String) -> Optional<String> {
    if html.chars().count() < 3 {
        Optional::absent()
    } else {
        Optional::present(format!("https://{html}"))
    }
}

/// Takes the first character, mapping each step with `map`.
pub fn first_character_on_https(source: &impl HtmlSource, url: &str) -> String {
    get_html(source, url)
        .map(|html| html.chars().take(1).collect::<String>())
        .map(|short| format!("https://{short}"))
        .match_with(|text| text, || NO_HTML.to_string())
}

/// Shortens and prefixes a page, chaining the fallible steps with `bind`.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::InMemoryHtml;
/// use walkthrough::demos::html::shortened_on_https;
///
/// let source = InMemoryHtml::sample();
/// assert_eq!(shortened_on_https(&source, "test.com"), "https://html here");
/// assert_eq!(shortened_on_https(&source, "a"), "No html returned");
/// ```
pub fn shortened_on_https(source: &impl HtmlSource, url: &str) -> String {
    get_html(source, url)
        .bind(shorten_html)
        .bind(put_on_https)
        .match_with(|text| text, || NO_HTML.to_string())
}

/// Describes a fetch that keeps its failure reason.
pub fn describe_fetch(source: &impl HtmlSource, url: &str) -> String {
    get_html_either(source, url)
        .bind(|html| {
            html.chars()
                .next()
                .map_or_else(
                    || Either::failure(FetchError::NotFound { url: url.to_string() }),
                    |first| Either::success(first.to_string()),
                )
        })
        .match_with(
            |error| {
                tracing::warn!(%error, "fetch failed");
                format!("failed: {error}")
            },
            |first| format!("first character: {first}"),
        )
}

/// Runs the fetch demos against the sample pages.
pub fn show(sink: &mut dyn FnMut(&str)) {
    let source = InMemoryHtml::sample();
    sink(&get_html(&source, "badurl").to_string());
    sink(&get_html(&source, "test.com").to_string());
    sink(&first_character_on_https(&source, "a"));
    sink(&first_character_on_https(&source, "c"));
    sink(&shortened_on_https(&source, "https://davemateer.com"));
    sink(&shortened_on_https(&source, "a"));
    sink(&describe_fetch(&source, "invalidurl"));
    sink(&describe_fetch(&source, "test.com"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", Optional::present("aa".to_string()))]
    #[case("b", Optional::present("bb".to_string()))]
    #[case("c", Optional::absent())]
    #[case("", Optional::absent())]
    fn test_get_html(#[case] url: &str, #[case] expected: Optional<String>) {
        assert_eq!(get_html(&InMemoryHtml::sample(), url), expected);
    }

    #[rstest]
    fn test_get_html_either_keeps_reason() {
        let source = InMemoryHtml::sample();
        assert_eq!(
            get_html_either(&source, "invalidurl"),
            Either::failure(FetchError::NotFound {
                url: "invalidurl".to_string()
            })
        );
        assert_eq!(
            get_html_either(&source, " "),
            Either::failure(FetchError::InvalidUrl { url: " ".to_string() })
        );
    }

    #[rstest]
    #[case("a", "https://a")]
    #[case("c", NO_HTML)]
    fn test_first_character_on_https(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(first_character_on_https(&InMemoryHtml::sample(), url), expected);
    }

    #[rstest]
    #[case("", Optional::absent())]
    #[case("aa", Optional::present("aa".to_string()))]
    #[case("abcdefghijklm", Optional::present("abcdefghij".to_string()))]
    fn test_shorten_html(#[case] html: &str, #[case] expected: Optional<String>) {
        assert_eq!(shorten_html(html.to_string()), expected);
    }

    #[rstest]
    #[case("aa", Optional::absent())]
    #[case("abc", Optional::present("https://abc".to_string()))]
    fn test_put_on_https(#[case] html: &str, #[case] expected: Optional<String>) {
        assert_eq!(put_on_https(html.to_string()), expected);
    }

    #[rstest]
    fn test_shortened_on_https_for_long_page() {
        let source = InMemoryHtml::sample();
        assert_eq!(
            shortened_on_https(&source, "https://davemateer.com"),
            "https://<html><bod"
        );
    }

    #[rstest]
    fn test_describe_fetch() {
        let source = InMemoryHtml::sample().with_page("empty", "");
        assert_eq!(describe_fetch(&source, "test.com"), "first character: h");
        assert_eq!(
            describe_fetch(&source, "invalidurl"),
            "failed: no page found at invalidurl"
        );
        assert_eq!(describe_fetch(&source, "empty"), "failed: no page found at empty");
    }

    #[rstest]
    fn test_show_renders_options() {
        let mut lines = Vec::new();
        show(&mut |line| lines.push(line.to_string()));
        assert_eq!(lines[0], "None");
        assert_eq!(lines[1], "Some(html here)");
    }
}
