//! The immutable RGBA [`Color`] value.
//!
//! This module provides:
//! - Validated factories for every supported color model
//! - Reverse conversions into named channel structs
//! - Packed 32-bit ARGB interop and a total order over it
//! - Derived operations (lighten, darken, invert, midpoint mix)
//!
//! # Examples
//!
//! ## Creating Colors
//!
//! ```
//! use colorway::color::Color;
//!
//! let red = Color::of_rgb(255, 0, 0).unwrap();
//! let also_red = Color::of_hsl(0.0, 1.0, 0.5);
//! assert_eq!(red, also_red);
//!
//! let translucent = Color::of_rgba(0, 128, 255, 0.5).unwrap();
//! assert!(!translucent.is_opaque());
//!
//! // Out-of-range channels are rejected.
//! assert!(Color::of_rgb(300, 0, 0).is_err());
//! ```
//!
//! ## Converting
//!
//! ```
//! use colorway::color::Color;
//!
//! let color = Color::from_rgb(255, 0, 0);
//! let hsl = color.to_hsl();
//! assert_eq!(hsl.hue, 0.0);
//! assert_eq!(color.to_hex(), "#FF0000");
//! ```
//!
//! ## Deriving New Colors
//!
//! ```
//! use colorway::color::Color;
//!
//! let gray = Color::from_rgb(128, 128, 128);
//! assert!(gray.lighten(0.2).luminosity() > gray.luminosity());
//! assert_eq!(gray.invert(), Color::from_rgb(127, 127, 127));
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::model::{
    CmykColor, HsbColor, HslColor, HsvColor, HwbColor, LabColor, RgbColor, WithAlpha, XyzColor,
};
use crate::percentage::Percentage;

/// Error type for color parsing and construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// A known notation prefix was found but the rest does not fit its grammar.
    #[error("malformed {format} color: {input:?}")]
    Malformed {
        format: &'static str,
        input: String,
    },
    /// No notation prefix matched the input.
    #[error("no matching color format for {0:?}")]
    NoMatchingFormat(String),
    /// One or more components are outside their valid range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Components rejected by a validated factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color components: {}", .violations.join(", "))]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    /// Human-readable description of each rejected component.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// An immutable RGBA color.
///
/// Equality compares all four channels exactly. Ordering follows the packed
/// ARGB integer from [`Color::to_rgb_int`], with the exact alpha fraction as
/// tie-breaker so it agrees with equality.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Percentage,
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl Color {
    // ------------------------------------------------------------------------
    // Trusted construction
    // ------------------------------------------------------------------------

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Percentage::FULL,
        }
    }

    /// Create a color from RGBA bytes, alpha on the 0-255 scale.
    #[must_use]
    pub fn from_rgba_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Percentage::from_byte(alpha),
        }
    }

    /// Create an opaque color from an RGB triplet.
    #[must_use]
    pub const fn from_triplet(rgb: RgbColor) -> Self {
        Self::from_rgb(rgb.red, rgb.green, rgb.blue)
    }

    /// Internal constructor for results already known to be in range.
    pub(crate) fn with_rgb_alpha(rgb: RgbColor, alpha: Percentage) -> Self {
        Self {
            red: rgb.red,
            green: rgb.green,
            blue: rgb.blue,
            alpha,
        }
    }

    // ------------------------------------------------------------------------
    // Validated factories
    // ------------------------------------------------------------------------

    /// Opaque color from integer channels.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] naming each channel outside 0-255.
    pub fn of_rgb(red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        Self::of_rgba(red, green, blue, Percentage::FULL)
    }

    /// Color from integer channels and a fractional alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] naming each channel outside 0-255
    /// and the alpha if it overflows `0.0..=1.0`.
    pub fn of_rgba(
        red: i32,
        green: i32,
        blue: i32,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        let alpha = alpha.into();
        let mut violations = Vec::new();

        let mut channel = |name: &str, value: i32| match u8::try_from(value) {
            Ok(byte) => byte,
            Err(_) => {
                violations.push(format!("{name} = {value} (expected 0..=255)"));
                0
            }
        };
        let rgb = RgbColor::new(
            channel("red", red),
            channel("green", green),
            channel("blue", blue),
        );

        if let Some(violation) = alpha_violation(alpha) {
            violations.push(violation);
        }

        if violations.is_empty() {
            Ok(Self::with_rgb_alpha(rgb, alpha))
        } else {
            Err(ValidationError { violations }.into())
        }
    }

    /// Decode a packed `0xAARRGGBB` integer.
    #[must_use]
    pub fn of_rgb_int(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        Self::from_rgba_u8(red, green, blue, alpha)
    }

    /// Opaque color from hue (degrees), saturation and lightness.
    #[must_use]
    pub fn of_hsl(
        hue: f64,
        saturation: impl Into<Percentage>,
        lightness: impl Into<Percentage>,
    ) -> Self {
        Self::from(HslColor::new(hue, saturation, lightness))
    }

    /// HSL color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_hsla(
        hue: f64,
        saturation: impl Into<Percentage>,
        lightness: impl Into<Percentage>,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(
            HslColor::new(hue, saturation, lightness),
            alpha.into(),
        ))
    }

    /// Opaque color from hue, saturation and value.
    #[must_use]
    pub fn of_hsv(hue: f64, saturation: impl Into<Percentage>, value: impl Into<Percentage>) -> Self {
        Self::from(HsvColor::new(hue, saturation, value))
    }

    /// HSV color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_hsva(
        hue: f64,
        saturation: impl Into<Percentage>,
        value: impl Into<Percentage>,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(
            HsvColor::new(hue, saturation, value),
            alpha.into(),
        ))
    }

    /// Opaque color from hue, saturation and brightness.
    #[must_use]
    pub fn of_hsb(
        hue: f64,
        saturation: impl Into<Percentage>,
        brightness: impl Into<Percentage>,
    ) -> Self {
        Self::from(HsbColor::new(hue, saturation, brightness))
    }

    /// HSB color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_hsba(
        hue: f64,
        saturation: impl Into<Percentage>,
        brightness: impl Into<Percentage>,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(
            HsbColor::new(hue, saturation, brightness),
            alpha.into(),
        ))
    }

    /// Opaque color from CMYK inks.
    #[must_use]
    pub fn of_cmyk(
        cyan: impl Into<Percentage>,
        magenta: impl Into<Percentage>,
        yellow: impl Into<Percentage>,
        key: impl Into<Percentage>,
    ) -> Self {
        Self::from(CmykColor::new(cyan, magenta, yellow, key))
    }

    /// CMYK color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_cmyka(
        cyan: impl Into<Percentage>,
        magenta: impl Into<Percentage>,
        yellow: impl Into<Percentage>,
        key: impl Into<Percentage>,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(
            CmykColor::new(cyan, magenta, yellow, key),
            alpha.into(),
        ))
    }

    /// Opaque color from hue, whiteness and blackness.
    #[must_use]
    pub fn of_hwb(
        hue: f64,
        whiteness: impl Into<Percentage>,
        blackness: impl Into<Percentage>,
    ) -> Self {
        Self::from(HwbColor::new(hue, whiteness, blackness))
    }

    /// HWB color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_hwba(
        hue: f64,
        whiteness: impl Into<Percentage>,
        blackness: impl Into<Percentage>,
        alpha: impl Into<Percentage>,
    ) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(
            HwbColor::new(hue, whiteness, blackness),
            alpha.into(),
        ))
    }

    /// Opaque color from CIE XYZ on the 0-100 scale.
    #[must_use]
    pub fn of_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from(XyzColor::new(x, y, z))
    }

    /// Opaque color from CIE L\*a\*b\*.
    #[must_use]
    pub fn of_lab(l: f64, a: f64, b: f64) -> Self {
        Self::from(LabColor::new(l, a, b))
    }

    /// LAB color with alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn of_laba(l: f64, a: f64, b: f64, alpha: impl Into<Percentage>) -> Result<Self, ColorError> {
        Self::try_from(WithAlpha::new(LabColor::new(l, a, b), alpha.into()))
    }

    // ------------------------------------------------------------------------
    // Channels
    // ------------------------------------------------------------------------

    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Opacity, `1.0` meaning fully opaque.
    #[must_use]
    pub const fn alpha(&self) -> Percentage {
        self.alpha
    }

    /// Returns true if alpha is exactly one.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha == Percentage::FULL
    }

    /// The same color with a different alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if the alpha overflows.
    pub fn with_alpha(self, alpha: impl Into<Percentage>) -> Result<Self, ColorError> {
        let alpha = alpha.into();
        match alpha_violation(alpha) {
            None => Ok(Self { alpha, ..self }),
            Some(violation) => Err(ValidationError {
                violations: vec![violation],
            }
            .into()),
        }
    }

    /// Pack into `0xAARRGGBB`, alpha scaled to a byte.
    #[must_use]
    pub fn to_rgb_int(&self) -> u32 {
        u32::from_be_bytes([self.alpha.to_byte(), self.red, self.green, self.blue])
    }

    // ------------------------------------------------------------------------
    // Reverse conversions
    // ------------------------------------------------------------------------

    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.red, self.green, self.blue)
    }

    #[must_use]
    pub const fn to_rgba(&self) -> WithAlpha<RgbColor> {
        WithAlpha::new(self.to_rgb(), self.alpha)
    }

    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        HslColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_hsla(&self) -> WithAlpha<HslColor> {
        WithAlpha::new(self.to_hsl(), self.alpha)
    }

    #[must_use]
    pub fn to_hsv(&self) -> HsvColor {
        HsvColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_hsva(&self) -> WithAlpha<HsvColor> {
        WithAlpha::new(self.to_hsv(), self.alpha)
    }

    #[must_use]
    pub fn to_hsb(&self) -> HsbColor {
        HsbColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_hsba(&self) -> WithAlpha<HsbColor> {
        WithAlpha::new(self.to_hsb(), self.alpha)
    }

    #[must_use]
    pub fn to_cmyk(&self) -> CmykColor {
        CmykColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_cmyka(&self) -> WithAlpha<CmykColor> {
        WithAlpha::new(self.to_cmyk(), self.alpha)
    }

    #[must_use]
    pub fn to_hwb(&self) -> HwbColor {
        HwbColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_hwba(&self) -> WithAlpha<HwbColor> {
        WithAlpha::new(self.to_hwb(), self.alpha)
    }

    #[must_use]
    pub fn to_xyz(&self) -> XyzColor {
        XyzColor::from_rgb(self.to_rgb())
    }

    #[must_use]
    pub fn to_lab(&self) -> LabColor {
        LabColor::from_rgb(self.to_rgb())
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().hex()
    }

    /// Uppercase `#RRGGBBAA`.
    #[must_use]
    pub fn to_hexa(&self) -> String {
        format!("{}{:02X}", self.to_hex(), self.alpha.to_byte())
    }

    // ------------------------------------------------------------------------
    // Derived operations
    // ------------------------------------------------------------------------

    /// HSL lightness of this color.
    #[must_use]
    pub fn luminosity(&self) -> Percentage {
        self.to_hsl().lightness
    }

    /// Raise HSL lightness by `amount`, clamped at white.
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        self.shift_lightness(amount)
    }

    /// Lower HSL lightness by `amount`, clamped at black.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        self.shift_lightness(-amount)
    }

    fn shift_lightness(&self, delta: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.lightness = hsl.lightness.offset(delta);
        Self::with_rgb_alpha(hsl.to_rgb(), self.alpha)
    }

    /// `255 - channel` for red, green and blue. Alpha is unchanged.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            red: 255 - self.red,
            green: 255 - self.green,
            blue: 255 - self.blue,
            alpha: self.alpha,
        }
    }

    /// Component-wise midpoint of two colors, alpha included.
    ///
    /// This is a plain average, not alpha compositing.
    #[must_use]
    pub fn mix(&self, other: &Self) -> Self {
        Self {
            red: u8::midpoint(self.red, other.red),
            green: u8::midpoint(self.green, other.green),
            blue: u8::midpoint(self.blue, other.blue),
            alpha: Percentage::new(f64::midpoint(self.alpha.value(), other.alpha.value())),
        }
    }

    /// Alpha byte and RGB bytes first, then the exact alpha fraction.
    fn sort_key(&self) -> (u32, Percentage) {
        (self.to_rgb_int(), self.alpha)
    }
}

fn alpha_violation(alpha: Percentage) -> Option<String> {
    alpha
        .is_overflowing()
        .then(|| format!("alpha = {} (expected 0.0..=1.0)", alpha.value()))
}

// ============================================================================
// Equality, Ordering, Hashing
// ============================================================================

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && self.alpha == other.alpha
    }
}

/// Matches a `[r, g, b, a]` byte quadruple once alpha is rounded to a byte.
impl PartialEq<[u8; 4]> for Color {
    fn eq(&self, other: &[u8; 4]) -> bool {
        [self.red, self.green, self.blue, self.alpha.to_byte()] == *other
    }
}

impl PartialEq<Color> for [u8; 4] {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

// Alpha is never NaN: validated factories reject it and trusted paths
// produce finite fractions.
impl Eq for Color {}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs_packed, lhs_alpha) = self.sort_key();
        let (rhs_packed, rhs_alpha) = other.sort_key();
        lhs_packed.cmp(&rhs_packed).then_with(|| {
            lhs_alpha
                .partial_cmp(&rhs_alpha)
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red.hash(state);
        self.green.hash(state);
        self.blue.hash(state);
        // Adding zero folds -0.0 into 0.0 so equal values hash equally.
        (self.alpha.value() + 0.0).to_bits().hash(state);
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Self::from_triplet(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::from_rgba_u8(red, green, blue, alpha)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue, color.alpha.to_byte()]
    }
}

macro_rules! impl_model_conversions {
    ($($model:ty),* $(,)?) => {
        $(
            impl From<$model> for Color {
                fn from(model: $model) -> Self {
                    Self::from_triplet(model.to_rgb())
                }
            }

            impl TryFrom<WithAlpha<$model>> for Color {
                type Error = ColorError;

                fn try_from(value: WithAlpha<$model>) -> Result<Self, Self::Error> {
                    Self::from(value.color).with_alpha(value.alpha)
                }
            }
        )*
    };
}

impl_model_conversions!(HslColor, HsvColor, HsbColor, CmykColor, HwbColor, XyzColor, LabColor);

impl TryFrom<WithAlpha<RgbColor>> for Color {
    type Error = ColorError;

    fn try_from(value: WithAlpha<RgbColor>) -> Result<Self, Self::Error> {
        Self::from_triplet(value.color).with_alpha(value.alpha)
    }
}

impl Add for Color {
    type Output = Self;

    /// Midpoint mix, see [`Color::mix`].
    fn add(self, rhs: Self) -> Self::Output {
        self.mix(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_of_rgb_valid() {
        let c = Color::of_rgb(255, 0, 0).unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (255, 0, 0));
        assert_eq!(c.alpha(), Percentage::FULL);
    }

    #[test]
    fn test_of_rgb_names_every_bad_channel() {
        let err = Color::of_rgb(300, 0, -1).unwrap_err();
        let ColorError::Validation(validation) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(validation.violations().len(), 2);
        let message = err.to_string();
        assert!(message.contains("red = 300"), "{message}");
        assert!(message.contains("blue = -1"), "{message}");
        assert!(!message.contains("green"), "{message}");
    }

    #[test]
    fn test_of_rgba_rejects_overflowing_alpha() {
        let err = Color::of_rgba(0, 0, 0, 1.5).unwrap_err();
        assert!(err.to_string().contains("alpha = 1.5"));
        assert!(Color::of_rgba(0, 0, 0, -0.1).is_err());
        assert!(Color::of_rgba(0, 0, 0, f64::NAN).is_err());
        assert!(Color::of_rgba(0, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn test_rgb_int_roundtrip() {
        let c = Color::of_rgb_int(0xFF12_3456);
        assert_eq!((c.red(), c.green(), c.blue()), (0x12, 0x34, 0x56));
        assert!(c.is_opaque());
        assert_eq!(c.to_rgb_int(), 0xFF12_3456);

        let transparent = Color::of_rgb_int(0x0000_00FF);
        assert_eq!(transparent.alpha(), Percentage::ZERO);
        assert_eq!(transparent.blue(), 255);
    }

    #[test]
    fn test_cmyk_red() {
        let red = Color::of_cmyk(0.0, 1.0, 1.0, 0.0);
        assert_eq!(red, Color::from_rgb(255, 0, 0));
        let same = Color::of_cmyk(
            Percentage::from_percent(0.0),
            Percentage::from_percent(100.0),
            Percentage::from_percent(100.0),
            Percentage::from_percent(0.0),
        );
        assert_eq!(same, red);
    }

    #[test]
    fn test_black_to_cmyk() {
        let cmyk = Color::from_rgb(0, 0, 0).to_cmyk();
        assert_eq!(cmyk.cyan, Percentage::ZERO);
        assert_eq!(cmyk.magenta, Percentage::ZERO);
        assert_eq!(cmyk.yellow, Percentage::ZERO);
        assert_eq!(cmyk.key, Percentage::FULL);
    }

    #[test]
    fn test_hsl_hue_boundary() {
        assert_eq!(Color::of_hsl(360.0, 0.7, 0.3), Color::of_hsl(0.0, 0.7, 0.3));
    }

    #[test]
    fn test_alpha_factories_validate() {
        assert!(Color::of_hsla(10.0, 0.5, 0.5, 0.5).is_ok());
        assert!(Color::of_hsla(10.0, 0.5, 0.5, 2.0).is_err());
        assert!(Color::of_hsva(10.0, 0.5, 0.5, 2.0).is_err());
        assert!(Color::of_hsba(10.0, 0.5, 0.5, 2.0).is_err());
        assert!(Color::of_cmyka(0.0, 0.0, 0.0, 0.0, 2.0).is_err());
        assert!(Color::of_hwba(0.0, 0.0, 0.0, 2.0).is_err());
        assert!(Color::of_laba(50.0, 0.0, 0.0, 2.0).is_err());
    }

    #[test]
    fn test_hex_output() {
        let c = Color::of_rgba(255, 0, 128, 0.8).unwrap();
        assert_eq!(c.to_hex(), "#FF0080");
        assert_eq!(c.to_hexa(), "#FF0080CC");
    }

    #[test]
    fn test_invert() {
        let c = Color::of_rgba(10, 20, 30, 0.5).unwrap();
        let inverted = c.invert();
        assert_eq!(inverted.to_rgb(), RgbColor::new(245, 235, 225));
        assert_eq!(inverted.alpha(), c.alpha());
        assert_eq!(inverted.invert(), c);
    }

    #[test]
    fn test_mix_is_midpoint() {
        let black = Color::of_rgba(0, 0, 0, 0.0).unwrap();
        let white = Color::from_rgb(255, 255, 255);
        let mixed = black.mix(&white);
        assert_eq!(mixed.to_rgb(), RgbColor::new(127, 127, 127));
        assert_eq!(mixed.alpha(), Percentage::new(0.5));
        assert_eq!(black + white, mixed);
    }

    #[test]
    fn test_lighten_and_darken_clamp() {
        let c = Color::from_rgb(100, 50, 50);
        assert_eq!(c.lighten(1.0), Color::from_rgb(255, 255, 255));
        assert_eq!(c.darken(1.0), Color::from_rgb(0, 0, 0));
        assert!(c.lighten(0.1).luminosity() > c.luminosity());
        assert!(c.darken(0.1).luminosity() < c.luminosity());
    }

    #[test]
    fn test_lighten_keeps_alpha() {
        let c = Color::of_rgba(100, 50, 50, 0.25).unwrap();
        assert_eq!(c.lighten(0.1).alpha(), Percentage::new(0.25));
    }

    #[test]
    fn test_ordering_by_packed_argb() {
        let transparent_white = Color::of_rgba(255, 255, 255, 0.0).unwrap();
        let opaque_black = Color::from_rgb(0, 0, 0);
        let opaque_blue = Color::from_rgb(0, 0, 1);
        assert!(transparent_white < opaque_black);
        assert!(opaque_black < opaque_blue);

        let mut colors = vec![opaque_blue, transparent_white, opaque_black];
        colors.sort();
        assert_eq!(colors, vec![transparent_white, opaque_black, opaque_blue]);
    }

    #[test]
    fn test_ordering_agrees_with_equality() {
        let a = Color::of_rgba(1, 2, 3, 0.5).unwrap();
        let b = Color::of_rgba(1, 2, 3, 0.5001).unwrap();
        assert_eq!(a.to_rgb_int(), b.to_rgb_int());
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_eq_byte_quadruple_rounds_alpha() {
        let c = Color::of_rgba(10, 20, 30, 0.999).unwrap();
        assert_eq!(c, [10, 20, 30, 255]);
        assert_eq!([10, 20, 30, 255], c);
        assert_ne!(c, Color::from([10, 20, 30, 255]));
        assert_ne!(c, [10, 20, 31, 255]);
        assert_ne!(Color::of_rgba(10, 20, 30, 0.5).unwrap(), [10, 20, 30, 255]);
        assert_eq!(Color::of_rgba(10, 20, 30, 0.5).unwrap(), [10, 20, 30, 128]);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Color::from_rgb(1, 2, 3));
        assert!(set.contains(&Color::from_rgb(1, 2, 3)));
        assert!(!set.contains(&Color::from_rgb(1, 2, 4)));
    }

    #[test]
    fn test_model_struct_conversions() {
        let hsl = HslColor::new(120.0, 1.0, 0.5);
        assert_eq!(Color::from(hsl), Color::from_rgb(0, 255, 0));

        let with_alpha = WithAlpha::new(hsl, Percentage::new(0.5));
        let color = Color::try_from(with_alpha).unwrap();
        assert_eq!(color.alpha(), Percentage::new(0.5));

        let bytes: [u8; 4] = Color::from([1, 2, 3, 255]).into();
        assert_eq!(bytes, [1, 2, 3, 255]);
    }
}
