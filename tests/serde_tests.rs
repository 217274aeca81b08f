#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `Optional` serializes like `Option` (the value or `null`); `Either`
//! serializes as an externally tagged `failure` / `success` object.

use fp_abstractions::control::{Either, Optional};
use rstest::rstest;

#[rstest]
fn test_optional_json_shape() {
    let present = Optional::present(42);
    let absent: Optional<i32> = Optional::absent();

    assert_eq!(serde_json::to_string(&present).unwrap(), "42");
    assert_eq!(serde_json::to_string(&absent).unwrap(), "null");
}

#[rstest]
fn test_optional_json_roundtrip() {
    let present = Optional::present("html here".to_string());
    let json = serde_json::to_string(&present).unwrap();
    let restored: Optional<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(present, restored);

    let restored_absent: Optional<String> = serde_json::from_str("null").unwrap();
    assert!(restored_absent.is_absent());
}

#[rstest]
fn test_either_json_shape() {
    let success: Either<String, i32> = Either::success(42);
    let failure: Either<String, i32> = Either::failure("error".to_string());

    assert_eq!(serde_json::to_string(&success).unwrap(), r#"{"success":42}"#);
    assert_eq!(
        serde_json::to_string(&failure).unwrap(),
        r#"{"failure":"error"}"#
    );
}

#[rstest]
fn test_either_json_roundtrip() {
    let failure: Either<String, i32> = Either::failure("Is not in allowed suffixes".to_string());
    let json = serde_json::to_string(&failure).unwrap();
    let restored: Either<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(failure, restored);
}
