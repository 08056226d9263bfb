//! Reducer identifiers and the supported-name validator.

use crate::reducers::diff::DiffTransform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which reduction to apply to a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReducerKind {
    Avg,
    Sum,
    Min,
    Max,
    /// Number of samples, absent ones included.
    Count,
    /// Newest non-absent sample.
    Last,
    Median,
    Diff,
    DiffAbs,
    PercentDiff,
    PercentDiffAbs,
    /// Number of non-absent samples.
    ///
    /// Also accepts the legacy spelling `count_non_null` when parsed, although
    /// [`is_valid_reduce_func`] does not list that spelling.
    #[serde(alias = "count_non_null")]
    CountNotNull,
}

/// Legacy spelling of [`ReducerKind::CountNotNull`] that older evaluators
/// dispatched on. Parses, but is not a supported name.
pub const COUNT_NON_NULL_ALIAS: &str = "count_non_null";

impl ReducerKind {
    /// Every reducer, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Avg,
        Self::Sum,
        Self::Min,
        Self::Max,
        Self::Count,
        Self::Last,
        Self::Median,
        Self::Diff,
        Self::DiffAbs,
        Self::PercentDiff,
        Self::PercentDiffAbs,
        Self::CountNotNull,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
            Self::Count => "count",
            Self::Last => "last",
            Self::Median => "median",
            Self::Diff => "diff",
            Self::DiffAbs => "diff_abs",
            Self::PercentDiff => "percent_diff",
            Self::PercentDiffAbs => "percent_diff_abs",
            Self::CountNotNull => "count_not_null",
        }
    }

    /// The transform applied by the difference family, `None` otherwise.
    #[must_use]
    pub const fn diff_transform(self) -> Option<DiffTransform> {
        match self {
            Self::Diff => Some(DiffTransform::Diff),
            Self::DiffAbs => Some(DiffTransform::DiffAbs),
            Self::PercentDiff => Some(DiffTransform::PercentDiff),
            Self::PercentDiffAbs => Some(DiffTransform::PercentDiffAbs),
            Self::Avg
            | Self::Sum
            | Self::Min
            | Self::Max
            | Self::Count
            | Self::Last
            | Self::Median
            | Self::CountNotNull => None,
        }
    }

    #[must_use]
    pub const fn is_diff(self) -> bool {
        self.diff_transform().is_some()
    }
}

impl fmt::Display for ReducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReducerKind {
    type Err = UnknownReducer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == COUNT_NON_NULL_ALIAS {
            return Ok(Self::CountNotNull);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownReducer::new(s))
    }
}

/// Returns `true` only for the supported reducer names.
///
/// This is the check callers run before reducing. The legacy
/// `count_non_null` spelling is deliberately not in the list.
///
/// ```
/// use series_reduce::is_valid_reduce_func;
///
/// assert!(is_valid_reduce_func("percent_diff_abs"));
/// assert!(is_valid_reduce_func("count_not_null"));
/// assert!(!is_valid_reduce_func("count_non_null"));
/// assert!(!is_valid_reduce_func("AVG"));
/// ```
#[must_use]
pub fn is_valid_reduce_func(name: &str) -> bool {
    ReducerKind::ALL.iter().any(|k| k.as_str() == name)
}

/// Error returned when a reducer name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReducer {
    /// The name that failed to parse.
    pub name: String,
}

impl UnknownReducer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported reducer '{}'", self.name)
    }
}

impl std::error::Error for UnknownReducer {}
