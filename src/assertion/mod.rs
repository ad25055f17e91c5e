//! Precondition and state assertions.
//!
//! Each helper turns a boolean check into an [`AssertionResult`]: `Ok(())`
//! when the check holds, otherwise an [`AssertionError`] carrying a message
//! built from the argument name.
//!
//! - Argument helpers fail with [`AssertionError::Argument`]
//! - [`state`] and [`state_not`] fail with [`AssertionError::State`]
//!
//! String length checks trim surrounding whitespace and count characters,
//! not bytes.
//!
//! # Examples
//!
//! ```rust
//! use domain_kit::assertion::{self, AssertionResult};
//!
//! fn rename(name: &str, closed: bool) -> AssertionResult {
//!     assertion::length_between(name, 2, 32, "name")?;
//!     assertion::state_not(closed, "account is closed")?;
//!     Ok(())
//! }
//!
//! assert!(rename("Alice", false).is_ok());
//! assert!(rename("A", false).unwrap_err().is_argument_error());
//! assert!(rename("Alice", true).unwrap_err().is_state_error());
//! ```

mod error;
mod traits;

pub use error::{AssertionError, AssertionResult};
pub use traits::{Validatable, Zeroable};

use std::fmt;

use regex::Regex;

fn trimmed_length(value: &str) -> usize {
    value.trim().chars().count()
}

/// Fails with `message` unless `condition` holds.
pub fn condition(condition: bool, message: impl Into<String>) -> AssertionResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::argument(message))
    }
}

/// Fails unless `value` is zero.
///
/// Message: `<name> should be zero`.
pub fn is_zero<Z: Zeroable + ?Sized>(value: &Z, name: &str) -> AssertionResult {
    if value.is_zero() {
        Ok(())
    } else {
        Err(AssertionError::argument(format!("{name} should be zero")))
    }
}

/// Fails if `value` is zero.
///
/// Message: `<name> should not be zero`.
pub fn not_zero<Z: Zeroable + ?Sized>(value: &Z, name: &str) -> AssertionResult {
    if value.is_zero() {
        Err(AssertionError::argument(format!("{name} should not be zero")))
    } else {
        Ok(())
    }
}

/// Fails unless `value` reports itself valid.
///
/// Message: `<name> is not valid`.
pub fn is_valid<T: Validatable + ?Sized>(value: &T, name: &str) -> AssertionResult {
    if value.is_valid() {
        Ok(())
    } else {
        Err(AssertionError::argument(format!("{name} is not valid")))
    }
}

/// Fails unless `actual == expected`.
///
/// Message: `<name> must be equal to <expected>`.
///
/// # Examples
///
/// ```rust
/// use domain_kit::assertion;
///
/// assert!(assertion::equals("Foo", "Foo", "argument").is_ok());
/// assert_eq!(
///     assertion::equals(&1, &2, "count").unwrap_err().message(),
///     "count must be equal to 2"
/// );
/// ```
pub fn equals<T>(actual: &T, expected: &T, name: &str) -> AssertionResult
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::argument(format!(
            "{name} must be equal to {expected:?}"
        )))
    }
}

/// Fails if `actual == unexpected`.
///
/// Message: `<name> must not be equal to <unexpected>`.
pub fn not_equals<T>(actual: &T, unexpected: &T, name: &str) -> AssertionResult
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    if actual == unexpected {
        Err(AssertionError::argument(format!(
            "{name} must not be equal to {unexpected:?}"
        )))
    } else {
        Ok(())
    }
}

/// Fails if `value` is `true`.
pub fn is_false(value: bool, name: &str) -> AssertionResult {
    if value {
        Err(AssertionError::argument(format!("{name} must be false")))
    } else {
        Ok(())
    }
}

/// Fails if `value` is `false`.
pub fn is_true(value: bool, name: &str) -> AssertionResult {
    if value {
        Ok(())
    } else {
        Err(AssertionError::argument(format!("{name} must be true")))
    }
}

/// Fails if the trimmed `value` is shorter than `min_length` characters.
pub fn min_length(value: &str, min_length: usize, name: &str) -> AssertionResult {
    if trimmed_length(value) < min_length {
        return Err(AssertionError::argument(format!(
            "{name} must be {min_length} characters or more"
        )));
    }
    Ok(())
}

/// Fails if the trimmed `value` is longer than `max_length` characters.
pub fn max_length(value: &str, max_length: usize, name: &str) -> AssertionResult {
    if trimmed_length(value) > max_length {
        return Err(AssertionError::argument(format!(
            "{name} must be {max_length} characters or less"
        )));
    }
    Ok(())
}

/// Fails unless the trimmed `value` has between `min_length` and
/// `max_length` characters, both inclusive.
pub fn length_between(
    value: &str,
    min_length: usize,
    max_length: usize,
    name: &str,
) -> AssertionResult {
    let length = trimmed_length(value);
    if length < min_length || length > max_length {
        return Err(AssertionError::argument(format!(
            "{name} must be between {min_length} and {max_length} characters"
        )));
    }
    Ok(())
}

/// Fails unless `value` is empty or blank.
pub fn empty(value: &str, name: &str) -> AssertionResult {
    if trimmed_length(value) == 0 {
        Ok(())
    } else {
        Err(AssertionError::argument(format!("{name} must be empty")))
    }
}

/// Fails if `value` is empty or blank.
pub fn not_empty(value: &str, name: &str) -> AssertionResult {
    if trimmed_length(value) == 0 {
        Err(AssertionError::argument(format!("{name} must not be empty")))
    } else {
        Ok(())
    }
}

/// Fails if `value` is `Some`.
///
/// Pass `field.as_ref()` to check a borrowed option.
pub fn is_none<T>(value: Option<T>, name: &str) -> AssertionResult {
    match value {
        None => Ok(()),
        Some(_) => Err(AssertionError::argument(format!("{name} must be none"))),
    }
}

/// Fails if `value` is `None`.
pub fn is_some<T>(value: Option<T>, name: &str) -> AssertionResult {
    match value {
        Some(_) => Ok(()),
        None => Err(AssertionError::argument(format!("{name} must not be none"))),
    }
}

/// Fails unless `pattern` matches somewhere in `value`.
///
/// # Examples
///
/// ```rust
/// use domain_kit::assertion;
/// use regex::Regex;
///
/// let code = Regex::new(r"^[A-Z]{3}$").unwrap();
/// assert!(assertion::matches("EUR", &code, "currency").is_ok());
/// assert!(assertion::matches("euro", &code, "currency").is_err());
/// ```
pub fn matches(value: &str, pattern: &Regex, name: &str) -> AssertionResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(AssertionError::argument(format!(
            "{name} does not match the pattern"
        )))
    }
}

/// Fails if `pattern` matches somewhere in `value`.
pub fn not_matches(value: &str, pattern: &Regex, name: &str) -> AssertionResult {
    if pattern.is_match(value) {
        Err(AssertionError::argument(format!("{name} does match the pattern")))
    } else {
        Ok(())
    }
}

/// Fails if `value < min`.
pub fn min<T: PartialOrd + fmt::Display>(value: T, min: T, name: &str) -> AssertionResult {
    if value < min {
        return Err(AssertionError::argument(format!(
            "{name} must be greater than or equal to {min}"
        )));
    }
    Ok(())
}

/// Fails if `value > max`.
pub fn max<T: PartialOrd + fmt::Display>(value: T, max: T, name: &str) -> AssertionResult {
    if value > max {
        return Err(AssertionError::argument(format!(
            "{name} must be less than or equal to {max}"
        )));
    }
    Ok(())
}

/// Fails unless `min <= value <= max`.
pub fn range<T: PartialOrd + fmt::Display>(value: T, min: T, max: T, name: &str) -> AssertionResult {
    if value < min || value > max {
        return Err(AssertionError::argument(format!(
            "{name} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Fails with a state error carrying `message` unless `state` holds.
pub fn state(state: bool, message: impl Into<String>) -> AssertionResult {
    if state {
        Ok(())
    } else {
        Err(AssertionError::state(message))
    }
}

/// Fails with a state error carrying `message` if `state` holds.
pub fn state_not(state: bool, message: impl Into<String>) -> AssertionResult {
    if state {
        Err(AssertionError::state(message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  ", 0)]
    #[case(" été ", 3)]
    #[case("abc", 3)]
    fn test_trimmed_length_counts_characters(#[case] value: &str, #[case] expected: usize) {
        assert_eq!(trimmed_length(value), expected);
    }

    #[rstest]
    fn test_condition_keeps_message() {
        let error = condition(false, "quantity must be positive").unwrap_err();
        assert_eq!(error, AssertionError::Argument("quantity must be positive".to_string()));
    }
}
