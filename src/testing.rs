//! Testing utilities for reducers.
//!
//! - **Assertions**: compare [`Number`](crate::Number) results, with and without tolerance
//! - **Builders**: assemble [`Series`](crate::Series) with gaps and `NaN`s fluently
//!
//! # Quick Start
//!
//! ```
//! use series_reduce::*;
//! use series_reduce::testing::*;
//!
//! let s = SeriesBuilder::new()
//!     .add_value(1.0)
//!     .add_null()
//!     .add_value(3.0)
//!     .build();
//!
//! assert_value_eq(reduce(&s, ReducerKind::Sum), 4.0);
//! assert_no_value(reduce(&Series::new(), ReducerKind::Sum));
//! ```

pub mod assertions;
pub mod builders;

pub use assertions::*;
pub use builders::*;
