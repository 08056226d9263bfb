//! Labeled time series input and the absent-sample predicate.
//!
//! A [`Series`] is an ordered (oldest to newest) sequence of nullable `f64`
//! samples. A sample is *absent* when it is missing (`None`) or `NaN`; every
//! reducer treats the two identically via [`is_absent`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single, possibly missing, sample.
pub type Sample = Option<f64>;

/// Returns `true` when the sample is missing or `NaN`.
///
/// # Example
///
/// ```
/// use series_reduce::is_absent;
///
/// assert!(is_absent(None));
/// assert!(is_absent(Some(f64::NAN)));
/// assert!(!is_absent(Some(0.0)));
/// assert!(!is_absent(Some(f64::INFINITY)));
/// ```
#[inline]
#[must_use]
pub fn is_absent(sample: Sample) -> bool {
    sample.is_none_or(f64::is_nan)
}

/// Iterate over the non-absent samples of `values` in order.
pub fn present(values: &[Sample]) -> impl DoubleEndedIterator<Item = f64> + '_ {
    values.iter().copied().filter(|s| !is_absent(*s)).flatten()
}

/// An ordered, labeled sequence of samples.
///
/// The series is owned by the caller and only read by the reducers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Display name of the series (e.g. the metric it was queried from).
    #[serde(default)]
    pub name: String,
    /// Identifying labels.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Samples, oldest first. JSON `null` deserializes to a missing sample.
    pub values: Vec<Sample>,
}

impl Series {
    /// Create an empty, unnamed series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a series from samples that may be missing.
    #[must_use]
    pub fn from_samples(values: Vec<Sample>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Create a series where every sample is present (NaN still counts as absent).
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self::from_samples(values.into_iter().map(Some).collect())
    }

    /// Parse a series from JSON.
    ///
    /// ```
    /// use series_reduce::Series;
    ///
    /// let s = Series::from_json(r#"{"name":"cpu","labels":{"host":"a"},"values":[1.0,null,3.0]}"#)?;
    /// assert_eq!(s.len(), 3);
    /// assert_eq!(s.absent_count(), 1);
    /// # anyhow::Result::<()>::Ok(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse series from JSON")
    }

    /// Set the series name.
    #[must_use]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Add (or replace) a label.
    #[must_use]
    pub fn with_label<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Number of samples, including absent ones.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw samples, oldest first.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Sample] {
        &self.values
    }

    /// Iterate over the non-absent samples in order.
    pub fn valid_values(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        present(&self.values)
    }

    /// Number of absent samples.
    #[must_use]
    pub fn absent_count(&self) -> usize {
        self.values.iter().filter(|s| is_absent(**s)).count()
    }
}

impl From<Vec<Sample>> for Series {
    fn from(values: Vec<Sample>) -> Self {
        Self::from_samples(values)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}
