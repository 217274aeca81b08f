//! Unit tests for `Either<L, R>` and railway pipelines.
//!
//! Either represents a value that can be one of two tracks:
//! - failure: carries the reason the computation stopped
//! - success: carries the computed value

#![cfg(feature = "control")]

use fp_abstractions::control::{Either, Pipeline, run_pipeline};
use rstest::rstest;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rejection {
    reason: String,
}

fn reject(reason: &str) -> Rejection {
    Rejection {
        reason: reason.to_string(),
    }
}

fn starts_with_http(url: String) -> Either<Rejection, String> {
    Either::success(url)
}

fn starts_with_https(url: String) -> Either<Rejection, String> {
    Either::success(url)
}

fn in_allowed_suffixes(_url: String) -> Either<Rejection, String> {
    Either::failure(reject("Is not in allowed suffixes"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("fp_abstractions=trace"))
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Map / Bind
// =============================================================================

#[rstest]
fn map_applies_only_on_success() {
    let html: Either<String, String> = Either::success("<html>".to_string());
    assert_eq!(html.map(|x| x[..1].to_string()), Either::success("<".to_string()));
}

#[rstest]
fn map_skips_function_on_failure() {
    let calls = Cell::new(0);
    let failure: Either<String, String> = Either::failure("InvalidOperation".to_string());
    let result = failure.map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(result, Either::failure("InvalidOperation".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bind_returns_the_failing_step_error_unwrapped() {
    let result = starts_with_http("https://davemateer.com".to_string())
        .bind(starts_with_https)
        .bind(in_allowed_suffixes);
    assert_eq!(result, Either::failure(reject("Is not in allowed suffixes")));
}

#[rstest]
fn attempt_converts_an_error_at_the_boundary() {
    let result: Either<std::num::ParseIntError, u8> = Either::attempt(|| "300".parse::<u8>());
    let message = result.match_with(|error| error.to_string(), |value| value.to_string());
    assert_eq!(message, "number too large to fit in target type");
}

// =============================================================================
// Match totality
// =============================================================================

#[rstest]
#[case(Either::success(1))]
#[case(Either::failure("boom"))]
fn match_invokes_exactly_one_handler(#[case] value: Either<&str, i32>) {
    let failure_calls = Cell::new(0);
    let success_calls = Cell::new(0);
    value.match_with(
        |_| failure_calls.set(failure_calls.get() + 1),
        |_| success_calls.set(success_calls.get() + 1),
    );
    assert_eq!(failure_calls.get() + success_calls.get(), 1);
    assert_eq!(success_calls.get() == 1, value.is_success());
}

// =============================================================================
// Railway pipeline
// =============================================================================

#[rstest]
fn validation_pipeline_renders_rejection() {
    init_tracing();
    let pipeline = Pipeline::new()
        .step(starts_with_http)
        .step(starts_with_https)
        .step(in_allowed_suffixes);

    let message = pipeline.run("https://davemateer.com".to_string()).match_with(
        |rejection| format!("Rejected because: {}", rejection.reason),
        |_| "Success".to_string(),
    );
    assert_eq!(message, "Rejected because: Is not in allowed suffixes");
}

#[rstest]
#[case(0, Either::success(0))]
#[case(1, Either::failure(1))]
#[case(3, Either::failure(3))]
#[case(5, Either::failure(5))]
fn pipeline_failure_is_from_the_first_failing_step(
    #[case] failing_step: usize,
    #[case] expected: Either<usize, usize>,
) {
    init_tracing();
    let invoked = Cell::new(0_usize);
    let steps = (1..=5).map(|index| {
        let invoked = &invoked;
        move |value: usize| {
            invoked.set(invoked.get() + 1);
            if index == failing_step {
                Either::failure(index)
            } else {
                Either::success(value)
            }
        }
    });

    assert_eq!(run_pipeline(0, steps), expected);
    let expected_invocations = if failing_step == 0 { 5 } else { failing_step };
    assert_eq!(invoked.get(), expected_invocations);
}

#[rstest]
fn pipeline_steps_can_borrow_configuration() {
    let allowed = vec![".com".to_string(), ".org".to_string()];
    let pipeline = Pipeline::new().step(|url: String| {
        if allowed.iter().any(|suffix| url.ends_with(suffix.as_str())) {
            Either::success(url)
        } else {
            Either::failure(reject("Is not in allowed suffixes"))
        }
    });
    assert!(pipeline.run("https://example.org".to_string()).is_success());
    assert!(pipeline.run("https://example.net".to_string()).is_failure());
}
