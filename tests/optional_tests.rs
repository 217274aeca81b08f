//! Unit tests for `Optional<T>`.
//!
//! Covers the present/absent constructors, `map`/`bind` chains that stop at
//! the first absence, and `match_with` as the way back to a plain value.

#![cfg(feature = "control")]

use fp_abstractions::control::Optional;
use fp_abstractions::error::ConstructionError;
use fp_abstractions::typeclass::Applicative;
use rstest::rstest;
use std::cell::Cell;

fn get_html(url: &str) -> Optional<String> {
    match url {
        "a" => Optional::present("aa".to_string()),
        "b" => Optional::present("bb".to_string()),
        _ => Optional::absent(),
    }
}

fn shorten_html(html: String) -> Optional<String> {
    if html.is_empty() {
        Optional::absent()
    } else {
        Optional::present(html.chars().take(10).collect())
    }
}

fn put_on_https(html: String) -> Optional<String> {
    if html.len() < 3 {
        Optional::absent()
    } else {
        Optional::present(format!("https://{html}"))
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn present_holds_value() {
    let value = Optional::present("html here");
    assert_eq!(value.match_with(|x| x, || "none"), "html here");
}

#[rstest]
fn try_present_rejects_absence_marker() {
    let result = Optional::<Option<&str>>::try_present(None);
    assert!(matches!(
        result,
        Err(ConstructionError::InvalidArgument { .. })
    ));
}

#[rstest]
fn from_ok_drops_the_error() {
    let failed: Result<String, std::io::Error> =
        Err(std::io::Error::other("connection refused"));
    assert!(Optional::from_ok(failed).is_absent());
}

// =============================================================================
// Map chains
// =============================================================================

#[rstest]
#[case("a", "https://a")]
#[case("c", "No html returned")]
fn map_chain_then_match(#[case] url: &str, #[case] expected: &str) {
    let final_text = get_html(url)
        .map(|x| x[..1].to_string())
        .map(|x| format!("https://{x}"))
        .match_with(|x| x, || "No html returned".to_string());
    assert_eq!(final_text, expected);
}

#[rstest]
fn map_uppercases_like_a_sequence_select() {
    let name = Optional::present("Bob").map(str::to_uppercase);
    assert_eq!(name, Optional::present("BOB".to_string()));
}

// =============================================================================
// Bind chains
// =============================================================================

#[rstest]
fn bind_flattens_nested_steps() {
    let name = Optional::present("Joe").bind(|first| Optional::present(format!("{first} Bloggs")));
    assert_eq!(name.to_string(), "Some(Joe Bloggs)");
}

#[rstest]
#[case("a", "No html returned")] // "aa" is too short for put_on_https
#[case("c", "No html returned")]
fn bind_chain_stops_at_first_absence(#[case] url: &str, #[case] expected: &str) {
    let final_text = get_html(url)
        .bind(shorten_html)
        .bind(put_on_https)
        .match_with(|x| x, || "No html returned".to_string());
    assert_eq!(final_text, expected);
}

#[rstest]
fn bind_chain_reaches_the_end() {
    let result = Optional::present("abcdefghijklmnop".to_string())
        .bind(shorten_html)
        .bind(put_on_https);
    assert_eq!(result, Optional::present("https://abcdefghij".to_string()));
}

#[rstest]
fn bind_does_not_invoke_later_steps_after_absence() {
    let later = Cell::new(0);
    let result = get_html("missing").bind(|html| {
        later.set(later.get() + 1);
        Optional::present(html)
    });
    assert!(result.is_absent());
    assert_eq!(later.get(), 0);
}

// =============================================================================
// Applicative combination
// =============================================================================

#[rstest]
#[case(Optional::present("Joe"), Optional::present("Bloggs"), Optional::present("Joe Bloggs".to_string()))]
#[case(Optional::present("Joe"), Optional::absent(), Optional::absent())]
#[case(Optional::absent(), Optional::present("Bloggs"), Optional::absent())]
fn map2_combines_first_and_last_name(
    #[case] first: Optional<&str>,
    #[case] last: Optional<&str>,
    #[case] expected: Optional<String>,
) {
    assert_eq!(first.map2(last, |first, last| format!("{first} {last}")), expected);
}

// =============================================================================
// Filter / fallback
// =============================================================================

#[rstest]
fn filter_then_fallback() {
    let short = Optional::present("hi").filter(|s| s.len() > 3);
    assert_eq!(short.or_else_with(|| "too short"), "too short");
}

#[rstest]
fn iterating_an_optional_yields_at_most_one_value() {
    let present: Vec<i32> = Optional::present(1).into_iter().collect();
    let absent: Vec<i32> = Optional::<i32>::absent().into_iter().collect();
    assert_eq!(present, vec![1]);
    assert!(absent.is_empty());
}
