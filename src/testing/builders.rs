//! Test series builders.

use crate::series::{Sample, Series};
use std::ops::RangeInclusive;

/// A fluent builder for test series.
///
/// # Example
///
/// ```
/// use series_reduce::testing::SeriesBuilder;
///
/// let s = SeriesBuilder::new()
///     .add_range(1..=10)
///     .add_null()
///     .add_repeated(42.0, 5)
///     .build();
///
/// assert_eq!(s.len(), 16); // 10 + 1 + 5
/// assert_eq!(s.absent_count(), 1);
/// ```
#[derive(Default)]
pub struct SeriesBuilder {
    series: Series,
}

impl SeriesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.series.name = name.into();
        self
    }

    #[must_use]
    pub fn label<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.series.labels.insert(key.into(), value.into());
        self
    }

    /// Append a present sample.
    #[must_use]
    pub fn add_value(mut self, value: f64) -> Self {
        self.series.values.push(Some(value));
        self
    }

    /// Append present samples.
    #[must_use]
    pub fn add_values(mut self, values: Vec<f64>) -> Self {
        self.series.values.extend(values.into_iter().map(Some));
        self
    }

    /// Append raw samples, missing ones included.
    #[must_use]
    pub fn add_samples(mut self, samples: Vec<Sample>) -> Self {
        self.series.values.extend(samples);
        self
    }

    /// Append a missing sample.
    #[must_use]
    pub fn add_null(mut self) -> Self {
        self.series.values.push(None);
        self
    }

    /// Append a `NaN` sample.
    #[must_use]
    pub fn add_nan(mut self) -> Self {
        self.series.values.push(Some(f64::NAN));
        self
    }

    /// Append `value` `count` times.
    ///
    /// ```
    /// use series_reduce::testing::SeriesBuilder;
    ///
    /// let s = SeriesBuilder::new().add_repeated(1.5, 3).build();
    /// assert_eq!(s.values(), &[Some(1.5), Some(1.5), Some(1.5)]);
    /// ```
    #[must_use]
    pub fn add_repeated(mut self, value: f64, count: usize) -> Self {
        self.series.values.extend(std::iter::repeat_n(Some(value), count));
        self
    }

    /// Append each integer in `range` as a present sample.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.series.values.extend(range.map(|i| Some(f64::from(i))));
        self
    }

    #[must_use]
    pub fn build(self) -> Series {
        self.series
    }

    /// Number of samples added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
