//! # series-reduce
//!
//! Reduce one labeled time series to a single scalar, the way alert
//! conditions do: pick a reducer (`avg`, `sum`, `min`, `max`, `count`, `last`,
//! `median`, the difference family, `count_not_null`) and get back a
//! [`Number`] that either holds a value or says there was nothing to reduce.
//!
//! ## Key Features
//!
//! - **Absent-aware** - missing samples and `NaN`s are skipped identically
//! - **No value is not zero** - an all-absent series never reduces to `0.0`
//! - **Closed reducer set** - [`ReducerKind`] is matched exhaustively; unknown names
//!   are rejected when parsed
//! - **Batch execution** - reduce many series sequentially or on rayon
//!
//! ## Quick Start
//!
//! ```
//! use series_reduce::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let cpu = Series::from_samples(vec![Some(10.0), None, Some(12.0), Some(f64::NAN), Some(15.0)])
//!     .with_name("cpu")
//!     .with_label("host", "web-1");
//!
//! let kind: ReducerKind = "diff".parse()?;
//! assert_eq!(reduce(&cpu, kind).value(), Some(5.0));
//! assert_eq!(reduce(&cpu, ReducerKind::Last).value(), Some(15.0));
//!
//! let empty = Series::new();
//! assert!(!reduce(&empty, ReducerKind::Count).has_value());
//! # Ok(())
//! # }
//! ```
//!
//! ## Validating reducer names
//!
//! Reducer names usually arrive as strings from an expression model. Check them
//! with [`is_valid_reduce_func`] (or parse into [`ReducerKind`]) before reducing.
//! [`reduce_by_name`] keeps the lenient behavior of older evaluators: an
//! unrecognized name reduces to "no value" and is logged as a warning.
//!
//! ## Feature Flags
//!
//! - `parallel` - run [`ExecMode::Parallel`] and [`ExecMode::ParallelWith`] on rayon
//!   (enabled by default; without it every mode runs sequentially)
//!
//! ## Module Overview
//!
//! - [`series`] - the input series and the absent-sample predicate
//! - [`number`] - the nullable scalar result
//! - [`reducers`] - reducer kinds, the validator, and the reduction algorithms
//! - [`runner`] - reducing batches of series
//! - [`testing`] - assertions and builders for tests

pub mod number;
pub mod reducers;
pub mod runner;
pub mod series;
pub mod testing;

pub use number::Number;
pub use reducers::{
    COUNT_NON_NULL_ALIAS, DiffTransform, ReducerKind, UnknownReducer, is_valid_reduce_func, reduce,
    reduce_by_name,
};
pub use runner::{ExecMode, reduce_all};
pub use series::{Sample, Series, is_absent};
