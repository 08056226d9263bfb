//! Reducers that collapse a [`Series`] into a single [`Number`].
//!
//! - [`ReducerKind::Avg`] / [`ReducerKind::Sum`] -- mean and sum of present samples.
//! - [`ReducerKind::Min`] / [`ReducerKind::Max`] -- extremes of present samples.
//! - [`ReducerKind::Count`] -- number of samples, absent ones included.
//! - [`ReducerKind::CountNotNull`] -- number of present samples.
//! - [`ReducerKind::Last`] -- newest present sample.
//! - [`ReducerKind::Median`] -- median of present samples.
//! - [`ReducerKind::Diff`], [`ReducerKind::DiffAbs`], [`ReducerKind::PercentDiff`],
//!   [`ReducerKind::PercentDiffAbs`] -- newest versus oldest present sample.
//!
//! A sample is present unless it is missing or `NaN` (see [`is_absent`](crate::is_absent)).
//! An empty series, or one where every sample the reducer looks at is absent,
//! reduces to [`Number::no_value`].
//!
//! # Examples
//! ```
//! use series_reduce::{reduce, ReducerKind, Series};
//!
//! let s = Series::from_samples(vec![Some(1.0), None, Some(3.0)]);
//!
//! assert_eq!(reduce(&s, ReducerKind::Sum).value(), Some(4.0));
//! assert_eq!(reduce(&s, ReducerKind::Count).value(), Some(3.0));
//! assert_eq!(reduce(&s, ReducerKind::CountNotNull).value(), Some(2.0));
//! assert_eq!(reduce(&s, ReducerKind::Diff).value(), Some(2.0));
//! ```

mod basic;
pub(crate) mod diff;
mod kind;
mod statistical;

pub use diff::DiffTransform;
pub use kind::{COUNT_NON_NULL_ALIAS, ReducerKind, UnknownReducer, is_valid_reduce_func};

use crate::number::Number;
use crate::series::Series;
use tracing::{debug, trace, warn};

/// Reduce `series` with the given reducer.
#[must_use]
pub fn reduce(series: &Series, kind: ReducerKind) -> Number {
    trace!(reducer = %kind, len = series.len(), "reducing series");

    if series.is_empty() {
        debug!(reducer = %kind, series = %series.name, "empty series reduces to no value");
        return Number::no_value();
    }

    let values = series.values();
    let out = match kind {
        ReducerKind::Avg => basic::avg(values),
        ReducerKind::Sum => basic::sum(values),
        ReducerKind::Min => basic::min(values),
        ReducerKind::Max => basic::max(values),
        ReducerKind::Count => basic::count(values),
        ReducerKind::Last => basic::last(values),
        ReducerKind::Median => statistical::median(values),
        ReducerKind::CountNotNull => basic::count_not_null(values),
        ReducerKind::Diff => diff::reduce_diff(values, DiffTransform::Diff),
        ReducerKind::DiffAbs => diff::reduce_diff(values, DiffTransform::DiffAbs),
        ReducerKind::PercentDiff => diff::reduce_diff(values, DiffTransform::PercentDiff),
        ReducerKind::PercentDiffAbs => diff::reduce_diff(values, DiffTransform::PercentDiffAbs),
    };

    if !out.has_value() {
        debug!(reducer = %kind, series = %series.name, "all considered samples absent");
    }
    out
}

/// Reduce by reducer name.
///
/// Unknown names reduce to [`Number::no_value`] instead of failing; callers
/// that need to reject them should check [`is_valid_reduce_func`] first or
/// parse into a [`ReducerKind`].
///
/// ```
/// use series_reduce::{reduce_by_name, Series};
///
/// let s = Series::from_values(vec![1.0, 2.0, 3.0]);
/// assert_eq!(reduce_by_name(&s, "avg").value(), Some(2.0));
/// assert!(!reduce_by_name(&s, "mode").has_value());
/// ```
#[must_use]
pub fn reduce_by_name(series: &Series, name: &str) -> Number {
    match name.parse::<ReducerKind>() {
        Ok(kind) => reduce(series, kind),
        Err(e) => {
            warn!(error = %e, series = %series.name, "reducing to no value");
            Number::no_value()
        }
    }
}
