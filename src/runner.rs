//! Reducing many independent series at once.
//!
//! Each series is reduced in isolation, so parallel execution needs no
//! coordination and produces exactly the sequential results, in input order.

use crate::number::Number;
use crate::reducers::{ReducerKind, reduce};
use crate::series::Series;
#[cfg(feature = "parallel")]
use anyhow::Context;
use anyhow::Result;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    Sequential,
    /// Reduce on the global rayon pool.
    #[default]
    Parallel,
    /// Reduce inside a dedicated pool of `threads` workers.
    ParallelWith { threads: usize },
}

/// Reduce every series with the same reducer.
///
/// Results line up with `series` by index. Without the `parallel` feature
/// every mode runs sequentially.
///
/// ```
/// use series_reduce::{reduce_all, ExecMode, ReducerKind, Series};
///
/// let batch = vec![
///     Series::from_values(vec![1.0, 2.0]),
///     Series::from_samples(vec![None, None]),
/// ];
/// let out = reduce_all(&batch, ReducerKind::Max, ExecMode::Sequential)?;
/// assert_eq!(out[0].value(), Some(2.0));
/// assert!(!out[1].has_value());
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn reduce_all(series: &[Series], kind: ReducerKind, mode: ExecMode) -> Result<Vec<Number>> {
    debug!(reducer = %kind, count = series.len(), ?mode, "reducing batch");
    match mode {
        ExecMode::Sequential => Ok(exec_seq(series, kind)),
        #[cfg(feature = "parallel")]
        ExecMode::Parallel => Ok(exec_par(series, kind)),
        #[cfg(feature = "parallel")]
        ExecMode::ParallelWith { threads } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .with_context(|| format!("failed to build a {threads}-thread reduce pool"))?;
            Ok(pool.install(|| exec_par(series, kind)))
        }
        #[cfg(not(feature = "parallel"))]
        ExecMode::Parallel | ExecMode::ParallelWith { .. } => Ok(exec_seq(series, kind)),
    }
}

fn exec_seq(series: &[Series], kind: ReducerKind) -> Vec<Number> {
    series.iter().map(|s| reduce(s, kind)).collect()
}

#[cfg(feature = "parallel")]
fn exec_par(series: &[Series], kind: ReducerKind) -> Vec<Number> {
    series.par_iter().map(|s| reduce(s, kind)).collect()
}
