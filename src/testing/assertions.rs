//! Assertion functions for reducer outputs.

use crate::number::Number;

/// Assert that a reduction produced "no value".
///
/// # Panics
///
/// Panics if `actual` holds a value, including a non-finite one.
///
/// # Example
///
/// ```
/// use series_reduce::Number;
/// use series_reduce::testing::assert_no_value;
///
/// assert_no_value(Number::no_value());
/// ```
pub fn assert_no_value(actual: Number) {
    assert!(!actual.has_value(), "Expected no value, got {actual}");
}

/// Assert that a reduction produced exactly `expected`.
///
/// Two `NaN`s compare equal here, so a computed `NaN` can be asserted.
///
/// # Panics
///
/// Panics if `actual` is "no value" or differs from `expected`.
pub fn assert_value_eq(actual: Number, expected: f64) {
    let Some(v) = actual.value() else {
        panic!("Expected value {expected}, got no value");
    };
    assert!(
        v == expected || (v.is_nan() && expected.is_nan()),
        "Value mismatch:\n  Expected: {expected}\n  Actual: {v}"
    );
}

/// Assert that a reduction produced a value within `tolerance` of `expected`.
///
/// # Panics
///
/// Panics if `actual` is "no value" or `|actual - expected| > tolerance`.
///
/// # Example
///
/// ```
/// use series_reduce::Number;
/// use series_reduce::testing::assert_value_close;
///
/// assert_value_close(Number::from_value(0.1 + 0.2), 0.3, 1e-12);
/// ```
pub fn assert_value_close(actual: Number, expected: f64, tolerance: f64) {
    let Some(v) = actual.value() else {
        panic!("Expected value close to {expected}, got no value");
    };
    assert!(
        (v - expected).abs() <= tolerance,
        "Value not within tolerance:\n  Expected: {expected} (+/- {tolerance})\n  Actual: {v}"
    );
}

/// Assert that two result lists are equal element by element.
///
/// `NaN` values compare equal to each other.
///
/// # Panics
///
/// Panics if the lists differ in length or at any index.
pub fn assert_numbers_equal(actual: &[Number], expected: &[Number]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Result length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let same = match (a.value(), e.value()) {
            (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
            (None, None) => true,
            _ => false,
        };
        assert!(
            same,
            "Result mismatch at index {i}:\n  Expected: {e}\n  Actual: {a}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}
