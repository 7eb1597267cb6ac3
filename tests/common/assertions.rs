//! Assertions that log both sides before checking, so a truncated CI panic
//! still leaves the compared values in the captured log.

use std::fmt::Debug;

use colorway::Color;

#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(context, ?expected, ?actual, "assert_eq");
    assert_eq!(actual, expected, "{context}");
}

/// Unwrap an `Ok`, logging the error otherwise.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context, ?result, "assert_ok");
    match result {
        Ok(value) => value,
        Err(err) => panic!("{context}: expected Ok, got Err({err:?})"),
    }
}

/// Unwrap an `Err`, logging the value otherwise.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context, ?result, "assert_err");
    match result {
        Err(err) => err,
        Ok(value) => panic!("{context}: expected Err, got Ok({value:?})"),
    }
}

#[track_caller]
pub fn assert_some_logged<T: Debug>(context: &str, option: Option<T>) -> T {
    tracing::debug!(context, ?option, "assert_some");
    option.unwrap_or_else(|| panic!("{context}: expected Some, got None"))
}

#[track_caller]
pub fn assert_none_logged<T: Debug>(context: &str, option: Option<T>) {
    tracing::debug!(context, ?option, "assert_none");
    if let Some(value) = option {
        panic!("{context}: expected None, got Some({value:?})");
    }
}

#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(context, haystack, needle, "assert_contains");
    assert!(
        haystack.contains(needle),
        "{context}: {haystack:?} does not contain {needle:?}"
    );
}

#[track_caller]
pub fn assert_approx_eq_logged(context: &str, actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    tracing::debug!(context, expected, actual, diff, "assert_approx_eq");
    assert!(
        diff <= epsilon,
        "{context}: expected {expected} within {epsilon}, got {actual}"
    );
}

/// Each RGB channel of `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_rgb_within_logged(context: &str, actual: Color, expected: Color, tolerance: u8) {
    let deltas = [
        actual.red().abs_diff(expected.red()),
        actual.green().abs_diff(expected.green()),
        actual.blue().abs_diff(expected.blue()),
    ];
    tracing::debug!(context, %expected, %actual, ?deltas, "assert_rgb_within");
    assert!(
        deltas.iter().all(|&delta| delta <= tolerance),
        "{context}: expected {expected} within {tolerance} per channel, got {actual}"
    );
}
