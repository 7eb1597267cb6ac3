//! Fractional values used for color channels.
//!
//! A [`Percentage`] stores a fraction that is nominally in `0.0..=1.0`.
//! Values outside that range are kept as-is and reported through
//! [`Percentage::is_overflowing`], so callers can decide whether to clamp or
//! reject them.
//!
//! # Examples
//!
//! ```
//! use colorway::percentage::Percentage;
//!
//! let half = Percentage::from_percent(50.0);
//! assert_eq!(half.value(), 0.5);
//! assert_eq!(half.to_string(), "50%");
//!
//! // Component parsing accepts either form.
//! assert_eq!(Percentage::from_component(0.5), Percentage::from_component(50.0));
//!
//! assert!(Percentage::new(1.5).is_overflowing());
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A fraction, nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage {
    value: f64,
}

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self { value: 0.0 };
    /// One hundred percent.
    pub const FULL: Self = Self { value: 1.0 };

    /// Wrap a raw fraction. Out-of-range values are kept and flagged as overflowing.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Wrap a fraction, clamping it into `0.0..=1.0`. NaN becomes zero.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Build from a percent number, `50.0` meaning one half.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }

    /// Interpret a channel value written either as a fraction or as a percent.
    ///
    /// Values up to `1.0` are taken as already-normalized fractions, larger
    /// values as percent numbers. `0.5` and `50.0` therefore both yield one
    /// half, and so does `0.5` written as `"0.5%"`.
    #[must_use]
    pub fn from_component(value: f64) -> Self {
        if value <= 1.0 {
            Self::new(value)
        } else {
            Self::from_percent(value)
        }
    }

    /// Interpret an alpha value written either as a fraction or on the 0-255 scale.
    #[must_use]
    pub fn from_alpha_component(value: f64) -> Self {
        if value <= 1.0 {
            Self::new(value)
        } else {
            Self::new(value / 255.0)
        }
    }

    /// Build from a byte on the 0-255 scale.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self::new(f64::from(byte) / 255.0)
    }

    /// The raw fraction.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The fraction expressed as a percent number.
    #[must_use]
    pub fn to_percent(&self) -> f64 {
        self.value * 100.0
    }

    /// Scale to the 0-255 byte range, rounding to nearest and saturating.
    #[must_use]
    pub fn to_byte(&self) -> u8 {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to 0-255 before the cast"
        )]
        let byte = (self.value * 255.0).round().clamp(0.0, 255.0) as u8;
        byte
    }

    /// True if the value lies outside `0.0..=1.0` or is NaN.
    #[must_use]
    pub fn is_overflowing(&self) -> bool {
        !(0.0..=1.0).contains(&self.value)
    }

    /// The same value clamped into `0.0..=1.0`.
    #[must_use]
    pub fn clamp(self) -> Self {
        Self::clamped(self.value)
    }

    /// Add `delta` and clamp the result.
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self::clamped(self.value + delta)
    }

    /// Total comparison for sorting; NaN sorts last.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}%", precision, self.to_percent())
        } else {
            write!(f, "{}%", self.to_percent().round())
        }
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(percentage: Percentage) -> Self {
        percentage.value
    }
}
