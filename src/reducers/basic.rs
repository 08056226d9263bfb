//! Basic reducers: avg, sum, min, max, count, count_not_null, last.
//!
//! Each takes the raw samples and skips absent ones. A reducer that sees no
//! non-absent sample returns "no value" rather than its identity element.

use crate::number::Number;
use crate::series::{Sample, present};

/* ===================== avg / sum ===================== */

#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn avg(values: &[Sample]) -> Number {
    let (sum, n) = present(values).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        Number::no_value()
    } else {
        Number::from_value(sum / n as f64)
    }
}

#[must_use]
pub fn sum(values: &[Sample]) -> Number {
    present(values)
        .fold(None, |acc: Option<f64>, v| Some(acc.unwrap_or(0.0) + v))
        .into()
}

/* ===================== min / max ===================== */

#[must_use]
pub fn min(values: &[Sample]) -> Number {
    present(values).reduce(f64::min).into()
}

#[must_use]
pub fn max(values: &[Sample]) -> Number {
    present(values).reduce(f64::max).into()
}

/* ===================== counts ===================== */

/// Total number of samples, absent ones included.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn count(values: &[Sample]) -> Number {
    Number::from_value(values.len() as f64)
}

/// Number of non-absent samples; "no value" when there are none.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn count_not_null(values: &[Sample]) -> Number {
    match present(values).count() {
        0 => Number::no_value(),
        n => Number::from_value(n as f64),
    }
}

/* ===================== last ===================== */

/// Newest non-absent sample, scanning backward past trailing gaps.
#[must_use]
pub fn last(values: &[Sample]) -> Number {
    present(values).next_back().into()
}
