#![cfg(feature = "assertion")]
//! Unit tests for the assertion helpers.

use std::time::Duration;

use domain_kit::assertion::{self, AssertionError, AssertionResult, Validatable};
use regex::Regex;
use rstest::rstest;

struct ValidatableMock {
    valid: bool,
}

impl Validatable for ValidatableMock {
    fn is_valid(&self) -> bool {
        self.valid
    }
}

fn is_argument_error(result: AssertionResult) -> bool {
    result.is_err_and(|error| error.is_argument_error())
}

fn is_state_error(result: AssertionResult) -> bool {
    result.is_err_and(|error| error.is_state_error())
}

// =============================================================================
// Condition
// =============================================================================

#[rstest]
fn test_condition_false_is_argument_error() {
    assert!(is_argument_error(assertion::condition(false, "message")));
}

#[rstest]
fn test_condition_true_is_ok() {
    assert_eq!(assertion::condition(true, "message"), Ok(()));
}

// =============================================================================
// Zero
// =============================================================================

#[rstest]
fn test_is_zero() {
    assert!(is_argument_error(assertion::is_zero(&Duration::from_secs(1), "argument")));
    assert_eq!(assertion::is_zero(&Duration::ZERO, "argument"), Ok(()));
}

#[rstest]
fn test_not_zero() {
    assert!(is_argument_error(assertion::not_zero(&0_u64, "argument")));
    assert_eq!(assertion::not_zero(&7_u64, "argument"), Ok(()));
}

#[rstest]
fn test_zero_messages() {
    assert_eq!(
        assertion::is_zero("text", "label"),
        Err(AssertionError::Argument("label should be zero".to_string()))
    );
    assert_eq!(
        assertion::not_zero(&None::<i32>, "label"),
        Err(AssertionError::Argument("label should not be zero".to_string()))
    );
}

// =============================================================================
// Validity and equality
// =============================================================================

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn test_is_valid(#[case] valid: bool, #[case] fails: bool) {
    let result = assertion::is_valid(&ValidatableMock { valid }, "argument");
    assert_eq!(is_argument_error(result), fails);
}

#[rstest]
fn test_equals() {
    assert!(is_argument_error(assertion::equals("Foo", "Baz", "argument")));
    assert_eq!(assertion::equals("Foo", "Foo", "argument"), Ok(()));
}

#[rstest]
fn test_not_equals() {
    assert!(is_argument_error(assertion::not_equals("Foo", "Foo", "argument")));
    assert_eq!(assertion::not_equals("Foo", "Baz", "argument"), Ok(()));
}

#[rstest]
fn test_equals_message_shows_expected() {
    let error = assertion::equals(&3, &4, "quantity").unwrap_err();
    assert_eq!(error.message(), "quantity must be equal to 4");
}

// =============================================================================
// Booleans
// =============================================================================

#[rstest]
fn test_is_false() {
    assert!(is_argument_error(assertion::is_false(true, "argument")));
    assert_eq!(assertion::is_false(false, "argument"), Ok(()));
}

#[rstest]
fn test_is_true() {
    assert!(is_argument_error(assertion::is_true(false, "argument")));
    assert_eq!(assertion::is_true(true, "argument"), Ok(()));
}

// =============================================================================
// String length
// =============================================================================

#[rstest]
#[case("foo", true)]
#[case("foob", false)]
#[case("foobaz", false)]
#[case("  foo  ", true)]
fn test_min_length(#[case] value: &str, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::min_length(value, 4, "argument")), fails);
}

#[rstest]
#[case("foobaz", true)]
#[case("foob", false)]
#[case("foo", false)]
#[case(" foob ", false)]
fn test_max_length(#[case] value: &str, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::max_length(value, 4, "argument")), fails);
}

#[rstest]
#[case("foobaz", true)]
#[case("f", true)]
#[case("fo", false)]
#[case("foob", false)]
#[case("foo", false)]
fn test_length_between(#[case] value: &str, #[case] fails: bool) {
    assert_eq!(
        is_argument_error(assertion::length_between(value, 2, 4, "argument")),
        fails
    );
}

#[rstest]
fn test_length_messages() {
    assert_eq!(
        assertion::min_length("ab", 3, "code").unwrap_err().message(),
        "code must be 3 characters or more"
    );
    assert_eq!(
        assertion::max_length("abcd", 3, "code").unwrap_err().message(),
        "code must be 3 characters or less"
    );
    assert_eq!(
        assertion::length_between("a", 2, 4, "code").unwrap_err().message(),
        "code must be between 2 and 4 characters"
    );
}

#[rstest]
fn test_length_counts_characters_not_bytes() {
    assert_eq!(assertion::max_length("ñandú", 5, "argument"), Ok(()));
}

// =============================================================================
// Emptiness
// =============================================================================

#[rstest]
#[case("foo", true)]
#[case("", false)]
#[case("   ", false)]
fn test_empty(#[case] value: &str, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::empty(value, "argument")), fails);
}

#[rstest]
#[case("", true)]
#[case("  ", true)]
#[case("foo", false)]
fn test_not_empty(#[case] value: &str, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::not_empty(value, "argument")), fails);
}

// =============================================================================
// Options
// =============================================================================

#[rstest]
fn test_is_none() {
    let present = Some(String::new());
    assert!(is_argument_error(assertion::is_none(present.as_ref(), "argument")));
    assert_eq!(assertion::is_none(None::<&str>, "argument"), Ok(()));
}

#[rstest]
fn test_is_some() {
    assert!(is_argument_error(assertion::is_some(None::<i32>, "argument")));
    assert_eq!(assertion::is_some(Some(""), "argument"), Ok(()));
}

// =============================================================================
// Patterns
// =============================================================================

#[rstest]
fn test_matches() {
    let pattern = Regex::new(r"^[a-z]+$").unwrap();
    assert!(is_argument_error(assertion::matches("Foo1", &pattern, "argument")));
    assert_eq!(assertion::matches("foo", &pattern, "argument"), Ok(()));
}

#[rstest]
fn test_not_matches() {
    let pattern = Regex::new(r"\d").unwrap();
    assert!(is_argument_error(assertion::not_matches("foo1", &pattern, "argument")));
    assert_eq!(assertion::not_matches("foo", &pattern, "argument"), Ok(()));
}

// =============================================================================
// Numeric bounds
// =============================================================================

#[rstest]
#[case(3, true)]
#[case(4, false)]
#[case(7, false)]
fn test_min(#[case] value: i32, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::min(value, 4, "argument")), fails);
}

#[rstest]
#[case(5, true)]
#[case(4, false)]
#[case(1, false)]
fn test_max(#[case] value: i32, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::max(value, 4, "argument")), fails);
}

#[rstest]
#[case(5, true)]
#[case(1, true)]
#[case(4, false)]
#[case(2, false)]
#[case(3, false)]
fn test_range(#[case] value: i32, #[case] fails: bool) {
    assert_eq!(is_argument_error(assertion::range(value, 2, 4, "argument")), fails);
}

#[rstest]
fn test_bound_messages() {
    assert_eq!(
        assertion::min(1.5, 2.0, "ratio").unwrap_err().message(),
        "ratio must be greater than or equal to 2"
    );
    assert_eq!(
        assertion::max(9, 4, "retries").unwrap_err().message(),
        "retries must be less than or equal to 4"
    );
    assert_eq!(
        assertion::range(0, 2, 4, "size").unwrap_err().message(),
        "size must be between 2 and 4"
    );
}

// =============================================================================
// State
// =============================================================================

#[rstest]
fn test_state() {
    assert!(is_state_error(assertion::state(false, "message")));
    assert_eq!(assertion::state(true, "message"), Ok(()));
}

#[rstest]
fn test_state_not() {
    assert!(is_state_error(assertion::state_not(true, "message")));
    assert_eq!(assertion::state_not(false, "message"), Ok(()));
}

#[rstest]
fn test_state_error_is_not_argument_error() {
    let result = assertion::state(false, "order already shipped");
    assert_eq!(
        result,
        Err(AssertionError::State("order already shipped".to_string()))
    );
}
