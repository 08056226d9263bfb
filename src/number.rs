//! The scalar produced by a reduction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A nullable scalar: either a value or "no value".
///
/// "No value" means there was nothing to reduce (empty series, or every
/// considered sample was absent). It is distinct from `0.0`, and a non-finite
/// computed value (e.g. a division by zero) is still a value.
///
/// Serialized as `null` for no value, a number for finite values, and the
/// strings `"NaN"`, `"+Inf"` or `"-Inf"` for non-finite ones, so JSON keeps
/// the two outcomes apart.
///
/// ```
/// use series_reduce::Number;
///
/// let inf = Number::from_value(f64::INFINITY);
/// assert_eq!(serde_json::to_string(&inf)?, r#""+Inf""#);
/// assert_eq!(serde_json::from_str::<Number>(r#""+Inf""#)?, inf);
/// assert_eq!(serde_json::to_string(&Number::no_value())?, "null");
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Option<WireValue>", into = "Option<WireValue>")]
pub struct Number {
    value: Option<f64>,
}

impl Number {
    /// The "nothing to reduce" result.
    #[must_use]
    pub const fn no_value() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub const fn from_value(value: f64) -> Self {
        Self { value: Some(value) }
    }

    /// The reduced value, or `None` for "no value".
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// `true` only when there is a value and it is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }
}

impl From<Option<f64>> for Number {
    fn from(value: Option<f64>) -> Self {
        Self { value }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<Number> for Option<f64> {
    fn from(n: Number) -> Self {
        n.value
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "<no value>"),
        }
    }
}

const NAN: &str = "NaN";
const POS_INF: &str = "+Inf";
const NEG_INF: &str = "-Inf";

/// JSON shape of a present value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireValue {
    Finite(f64),
    NonFinite(String),
}

impl From<Number> for Option<WireValue> {
    fn from(n: Number) -> Self {
        n.value.map(|v| {
            if v.is_finite() {
                WireValue::Finite(v)
            } else if v.is_nan() {
                WireValue::NonFinite(NAN.to_string())
            } else if v.is_sign_positive() {
                WireValue::NonFinite(POS_INF.to_string())
            } else {
                WireValue::NonFinite(NEG_INF.to_string())
            }
        })
    }
}

impl TryFrom<Option<WireValue>> for Number {
    type Error = String;

    fn try_from(wire: Option<WireValue>) -> Result<Self, Self::Error> {
        let value = match wire {
            None => return Ok(Self::no_value()),
            Some(WireValue::Finite(v)) => v,
            Some(WireValue::NonFinite(s)) => match s.as_str() {
                NAN => f64::NAN,
                POS_INF => f64::INFINITY,
                NEG_INF => f64::NEG_INFINITY,
                other => return Err(format!("invalid non-finite number '{other}'")),
            },
        };
        Ok(Self::from_value(value))
    }
}
