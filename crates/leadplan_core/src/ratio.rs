//! Division results that may be undefined
//!
//! A zero denominator or a non-finite quotient never leaks out as `NaN` or
//! `Infinity`. It becomes [`Ratio::Undefined`], which displays as `N/A`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown for an undefined ratio
pub const UNDEFINED_LABEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    /// `numerator / denominator`, or `Undefined` if the result is not a finite number
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Ratio::Undefined;
        }
        Self::from_value(numerator / denominator)
    }

    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined
        }
    }

    /// Percentage change from `current` to `projected`.
    ///
    /// Undefined when `current` is zero, since there is no baseline to grow from.
    pub fn percent_change(current: f64, projected: f64) -> Self {
        Self::of(projected - current, current).map(|r| r * 100.0)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(*v),
            Ratio::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Ratio::Undefined)
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Ratio::Defined(v) => Self::from_value(f(v)),
            Ratio::Undefined => Ratio::Undefined,
        }
    }

    /// Combine with another ratio; undefined if either side is
    pub fn and_then(self, f: impl FnOnce(f64) -> Ratio) -> Self {
        match self {
            Ratio::Defined(v) => f(v),
            Ratio::Undefined => Ratio::Undefined,
        }
    }

    pub fn rounded(self) -> Self {
        self.map(round_half_up)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Defined(v) => write!(f, "{v}"),
            Ratio::Undefined => f.write_str(UNDEFINED_LABEL),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Defined(v) => serializer.serialize_f64(*v),
            Ratio::Undefined => serializer.serialize_str(UNDEFINED_LABEL),
        }
    }
}

/// Round to the nearest integer with halves going up (`2.5 -> 3`, `-2.5 -> -2`)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
