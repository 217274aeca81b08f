//! Resolving scraped hrefs with `Sequence::bind`.
//!
//! Each href is classified first; [`process_url`] may return nothing, so the
//! sequence is flattened with `bind` and unknown links disappear.

use fp_abstractions::control::{Optional, Sequence};

/// Kind of link found in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlType {
    /// Starts with `https://`.
    Absolute,
    /// Starts with `/`.
    Relative,
    /// Anything else (`mailto:`, fragments, plain http).
    Unknown,
}

/// An href tagged with its [`UrlType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedUrl {
    /// The href as it appeared in the page.
    pub href: String,
    /// Its classification.
    pub kind: UrlType,
}

/// Classifies one href.
pub fn classify(href: &str) -> ClassifiedUrl {
    let kind = if href.starts_with("https://") {
        UrlType::Absolute
    } else if href.starts_with('/') {
        UrlType::Relative
    } else {
        UrlType::Unknown
    };
    ClassifiedUrl {
        href: href.to_string(),
        kind,
    }
}

/// Turns a classified href into a full url, if it can be resolved.
pub fn process_url(url: ClassifiedUrl, base_url: &str) -> Optional<String> {
    match url.kind {
        UrlType::Absolute => Optional::present(url.href),
        UrlType::Relative => Optional::present(format!("{base_url}{}", url.href)),
        UrlType::Unknown => {
            tracing::debug!(href = %url.href, "dropping unresolvable href");
            Optional::absent()
        }
    }
}

/// Hrefs scraped from the sample page.
pub fn sample_hrefs() -> Sequence<String> {
    Sequence::from_fn(|| {
        [
            "/programming-in-c-sharp",
            "https://bbc.co.uk",
            "mailto:davemateer@gmail.com",
        ]
        .map(String::from)
    })
}

/// Classifies every href and keeps the resolvable ones, in order.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::resolve_urls;
/// use walkthrough::demos::urls::sample_hrefs;
///
/// let urls = resolve_urls(sample_hrefs(), "https://davemateer.com");
/// assert_eq!(
///     urls.to_vec(),
///     vec![
///         "https://davemateer.com/programming-in-c-sharp".to_string(),
///         "https://bbc.co.uk".to_string(),
///     ]
/// );
/// ```
pub fn resolve_urls(hrefs: Sequence<String>, base_url: &str) -> Sequence<String> {
    let base_url = base_url.to_string();
    hrefs
        .map(|href| classify(&href))
        .bind(move |url| process_url(url, &base_url))
}

/// Writes the resolved sample hrefs.
pub fn show(sink: &mut dyn FnMut(&str), base_url: &str) {
    for url in &resolve_urls(sample_hrefs(), base_url) {
        sink(&url);
    }
}
