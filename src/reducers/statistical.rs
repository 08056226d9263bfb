//! Statistical reducers: median

use crate::number::Number;
use crate::series::{Sample, present};
use ordered_float::OrderedFloat;

/// Median of the non-absent samples.
///
/// Odd counts take the middle element, even counts average the two central
/// elements.
#[must_use]
pub fn median(values: &[Sample]) -> Number {
    let mut sorted: Vec<OrderedFloat<f64>> = present(values).map(OrderedFloat).collect();
    if sorted.is_empty() {
        return Number::no_value();
    }
    sorted.sort_unstable();

    let n = sorted.len();
    let mid = n / 2;
    let value = if n % 2 == 1 {
        *sorted[mid]
    } else {
        (*sorted[mid - 1] + *sorted[mid]) / 2.0
    };
    Number::from_value(value)
}
