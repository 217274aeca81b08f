//! End-to-end tests for the walkthrough demos
//!
//! Each test drives a demo through its public functions with fake I/O and
//! checks the exact values the walkthrough is meant to show.

use fp_abstractions::control::Either;
use rstest::rstest;
use walkthrough::config::{Demo, WalkthroughConfig};
use walkthrough::demos::bmi;
use walkthrough::demos::html::shortened_on_https;
use walkthrough::demos::urls::sample_hrefs;
use walkthrough::demos::{
    BmiRange, FetchError, InMemoryHtml, UrlPolicy, UrlRejection, calculate_bmi, full_name,
    get_html_either, is_prime, percentages, resolve_urls, sum_of_multiples_sequence,
};
use walkthrough::runner;

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
fn test_percentages_scenario() {
    assert_eq!(
        percentages().to_vec(),
        vec!["100%", "80%", "60%", "40%", "20%"]
    );
}

#[rstest]
#[case(10, 23)]
#[case(1000, 233_168)]
fn test_euler_scenario(#[case] limit: u64, #[case] expected: u64) {
    assert_eq!(sum_of_multiples_sequence(limit), expected);
}

#[rstest]
fn test_urls_resolve_against_custom_base() {
    let urls = resolve_urls(sample_hrefs(), "https://example.org").to_vec();
    assert_eq!(
        urls,
        vec![
            "https://example.org/programming-in-c-sharp".to_string(),
            "https://bbc.co.uk".to_string(),
        ]
    );
}

// =============================================================================
// Pure functions
// =============================================================================

#[rstest]
#[case(3, true)]
#[case(4, false)]
#[case(5, true)]
fn test_is_prime_scenario(#[case] number: u64, #[case] expected: bool) {
    assert_eq!(is_prime(number), expected);
}

#[rstest]
#[case(1.80, 77.0, 23.77, BmiRange::Healthy)]
#[case(1.60, 77.0, 30.08, BmiRange::Overweight)]
fn test_bmi_scenario(
    #[case] height: f64,
    #[case] weight: f64,
    #[case] expected_bmi: f64,
    #[case] expected_range: BmiRange,
) {
    assert!((calculate_bmi(height, weight) - expected_bmi).abs() < 1e-9);

    let mut asked = Vec::new();
    let mut written = Vec::new();
    bmi::run(
        |field| {
            asked.push(field.to_string());
            if field == "height" { height } else { weight }
        },
        |range| written.push(range),
    );
    assert_eq!(asked, vec!["weight", "height"]);
    assert_eq!(written, vec![expected_range]);
}

// =============================================================================
// Optional / Either
// =============================================================================

#[rstest]
fn test_names_bind() {
    assert_eq!(full_name().to_string(), "Some(Joe Bloggs)");
}

#[rstest]
fn test_html_chains() {
    let source = InMemoryHtml::sample();
    assert_eq!(shortened_on_https(&source, "test.com"), "https://html here");
    assert_eq!(
        get_html_either(&source, "invalidurl"),
        Either::failure(FetchError::NotFound {
            url: "invalidurl".to_string()
        })
    );
}

#[rstest]
fn test_validation_scenario() {
    let result = UrlPolicy::default().validate("https://davemateer.com");
    assert_eq!(
        result,
        Either::failure(UrlRejection::new("Is not in allowed suffixes"))
    );
}

// =============================================================================
// Runner
// =============================================================================

#[rstest]
fn test_runner_writes_percentages_through_sink() {
    let config = WalkthroughConfig {
        demo: Demo::Percentages,
        ..WalkthroughConfig::default()
    };
    let mut lines = Vec::new();
    runner::run(&config, &mut |line| lines.push(line.to_string()));
    assert_eq!(
        lines,
        vec!["== percentages ==", "100%", "80%", "60%", "40%", "20%"]
    );
}
