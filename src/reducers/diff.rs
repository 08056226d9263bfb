//! Newest-versus-oldest difference reducers.
//!
//! The scanner picks the newest non-absent sample by walking backward from
//! the end. Only when that sample sits at index 1 or later does it walk
//! forward from the start to pick the oldest non-absent sample. The gate is
//! positional: `[5, null, null]` yields no value even though a forward scan
//! would find `5`.

use crate::number::Number;
use crate::series::{Sample, is_absent, present};

/// A pure function of `(newest, oldest)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiffTransform {
    /// `newest - oldest`
    Diff,
    /// `|newest - oldest|`
    DiffAbs,
    /// `(newest - oldest) / |oldest| * 100`
    PercentDiff,
    /// `|(newest - oldest) / oldest * 100|`
    PercentDiffAbs,
}

impl DiffTransform {
    pub const ALL: [Self; 4] = [
        Self::Diff,
        Self::DiffAbs,
        Self::PercentDiff,
        Self::PercentDiffAbs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::DiffAbs => "diff_abs",
            Self::PercentDiff => "percent_diff",
            Self::PercentDiffAbs => "percent_diff_abs",
        }
    }

    /// Apply the transform. An `oldest` of zero is not special-cased, so the
    /// percent variants return an infinity or `NaN`.
    #[inline]
    #[must_use]
    pub fn apply(self, newest: f64, oldest: f64) -> f64 {
        match self {
            Self::Diff => newest - oldest,
            Self::DiffAbs => (newest - oldest).abs(),
            Self::PercentDiff => (newest - oldest) / oldest.abs() * 100.0,
            Self::PercentDiffAbs => ((newest - oldest) / oldest * 100.0).abs(),
        }
    }
}

/// Locate the newest non-absent sample, scanning backward. Returns its index and value.
fn newest(values: &[Sample]) -> Option<(usize, f64)> {
    values
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, &s)| if is_absent(s) { None } else { s.map(|v| (i, v)) })
}

/// Locate the oldest non-absent sample, scanning forward.
fn oldest(values: &[Sample]) -> Option<f64> {
    present(values).next()
}

/// Scan `values` and apply `transform` to the newest and oldest samples.
///
/// When the newest present sample sits at index 0 (a single-sample series,
/// or `[5, null, null]`) the result is no value. Older evaluators reported
/// `0` here, their untouched accumulator, rather than a difference.
#[must_use]
pub fn reduce_diff(values: &[Sample], transform: DiffTransform) -> Number {
    let Some((idx, newest)) = newest(values) else {
        return Number::no_value();
    };
    if idx < 1 {
        return Number::no_value();
    }
    // The newest sample itself guarantees the forward scan finds something.
    oldest(values)
        .map(|oldest| transform.apply(newest, oldest))
        .into()
}
