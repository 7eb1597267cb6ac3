//! Channel structs for each color model and the conversion math between them.
//!
//! Every model has a named struct so that channels cannot be swapped by
//! position. All conversions go through RGB: each struct can be built from an
//! [`RgbColor`] (`from_rgb`) and turned back into one (`to_rgb`).
//!
//! Hue inputs are normalized modulo 360 before use. Saturation, lightness,
//! value, whiteness, blackness and CMYK channels are clamped to `0.0..=1.0`
//! on the way into RGB, so forward conversions are total.
//!
//! XYZ uses the 0-100 scale with the D65 reference white; LAB is CIE L\*a\*b\*
//! relative to that white.

use crate::percentage::Percentage;

/// D65 reference white on the 0-100 XYZ scale.
pub const REFERENCE_WHITE: XyzColor = XyzColor {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// RGB triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    /// Create a new triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns uppercase hex format `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Build from normalized floats, rounding to nearest and clamping.
    #[must_use]
    pub fn from_normalized(red: f64, green: f64, blue: f64) -> Self {
        Self::new(unit_to_byte(red), unit_to_byte(green), unit_to_byte(blue))
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// A model value paired with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithAlpha<T> {
    pub color: T,
    pub alpha: Percentage,
}

impl<T> WithAlpha<T> {
    #[must_use]
    pub const fn new(color: T, alpha: Percentage) -> Self {
        Self { color, alpha }
    }
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    /// Hue in degrees.
    pub hue: f64,
    pub saturation: Percentage,
    pub lightness: Percentage,
}

impl HslColor {
    #[must_use]
    pub fn new(hue: f64, saturation: impl Into<Percentage>, lightness: impl Into<Percentage>) -> Self {
        Self {
            hue,
            saturation: saturation.into(),
            lightness: lightness.into(),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = f64::midpoint(max, min);

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Self {
            hue: hue_of(r, g, b, max, delta),
            saturation: Percentage::clamped(saturation),
            lightness: Percentage::new(lightness),
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let hue = normalize_hue(self.hue);
        let saturation = self.saturation.clamp().value();
        let lightness = self.lightness.clamp().value();

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let (r, g, b) = sextant(hue, chroma);
        let m = lightness - chroma / 2.0;
        RgbColor::from_normalized(r + m, g + m, b + m)
    }
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    pub hue: f64,
    pub saturation: Percentage,
    pub value: Percentage,
}

impl HsvColor {
    #[must_use]
    pub fn new(hue: f64, saturation: impl Into<Percentage>, value: impl Into<Percentage>) -> Self {
        Self {
            hue,
            saturation: saturation.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            hue: hue_of(r, g, b, max, delta),
            saturation: Percentage::new(saturation),
            value: Percentage::new(max),
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let (r, g, b) = hsv_unit(self.hue, self.saturation, self.value);
        RgbColor::from_normalized(r, g, b)
    }
}

/// Hue, saturation, brightness. Same space as [`HsvColor`] under another name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbColor {
    pub hue: f64,
    pub saturation: Percentage,
    pub brightness: Percentage,
}

impl HsbColor {
    #[must_use]
    pub fn new(
        hue: f64,
        saturation: impl Into<Percentage>,
        brightness: impl Into<Percentage>,
    ) -> Self {
        Self {
            hue,
            saturation: saturation.into(),
            brightness: brightness.into(),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        HsvColor::from_rgb(rgb).into()
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        HsvColor::from(*self).to_rgb()
    }
}

impl From<HsvColor> for HsbColor {
    fn from(hsv: HsvColor) -> Self {
        Self::new(hsv.hue, hsv.saturation, hsv.value)
    }
}

impl From<HsbColor> for HsvColor {
    fn from(hsb: HsbColor) -> Self {
        Self::new(hsb.hue, hsb.saturation, hsb.brightness)
    }
}

/// Cyan, magenta, yellow, key (black).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmykColor {
    pub cyan: Percentage,
    pub magenta: Percentage,
    pub yellow: Percentage,
    pub key: Percentage,
}

impl CmykColor {
    #[must_use]
    pub fn new(
        cyan: impl Into<Percentage>,
        magenta: impl Into<Percentage>,
        yellow: impl Into<Percentage>,
        key: impl Into<Percentage>,
    ) -> Self {
        Self {
            cyan: cyan.into(),
            magenta: magenta.into(),
            yellow: yellow.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.normalized();
        let key = 1.0 - r.max(g).max(b);
        if key >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = |channel: f64| Percentage::new((1.0 - channel - key) / (1.0 - key));
        Self {
            cyan: ink(r),
            magenta: ink(g),
            yellow: ink(b),
            key: Percentage::new(key),
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let key = self.key.clamp().value();
        let channel = |ink: Percentage| (1.0 - ink.clamp().value()) * (1.0 - key);
        RgbColor::from_normalized(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        )
    }
}

/// Hue, whiteness, blackness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HwbColor {
    pub hue: f64,
    pub whiteness: Percentage,
    pub blackness: Percentage,
}

impl HwbColor {
    #[must_use]
    pub fn new(hue: f64, whiteness: impl Into<Percentage>, blackness: impl Into<Percentage>) -> Self {
        Self {
            hue,
            whiteness: whiteness.into(),
            blackness: blackness.into(),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Self {
            hue: hue_of(r, g, b, max, max - min),
            whiteness: Percentage::new(min),
            blackness: Percentage::new(1.0 - max),
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let whiteness = self.whiteness.clamp().value();
        let blackness = self.blackness.clamp().value();
        let (r, g, b) = hsv_unit(self.hue, Percentage::FULL, Percentage::FULL);

        let factor = 1.0 - whiteness - blackness;
        let blend = |pure: f64| pure * factor + whiteness;
        RgbColor::from_normalized(blend(r), blend(g), blend(b))
    }
}

/// CIE XYZ on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XyzColor {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.normalized();
        let (r, g, b) = (
            linearize(r) * 100.0,
            linearize(g) * 100.0,
            linearize(b) * 100.0,
        );

        Self {
            x: r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5,
            y: r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175_0,
            z: r * 0.019_333_9 + g * 0.119_192_0 + b * 0.950_304_1,
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let (x, y, z) = (self.x / 100.0, self.y / 100.0, self.z / 100.0);

        let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
        let g = x * -0.969_266_0 + y * 1.876_010_8 + z * 0.041_556_0;
        let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;

        RgbColor::from_normalized(compand(r), compand(g), compand(b))
    }
}

/// CIE L\*a\*b\* relative to [`REFERENCE_WHITE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self::from_xyz(XyzColor::from_rgb(rgb))
    }

    #[must_use]
    pub fn from_xyz(xyz: XyzColor) -> Self {
        let fx = lab_f(xyz.x / REFERENCE_WHITE.x);
        let fy = lab_f(xyz.y / REFERENCE_WHITE.y);
        let fz = lab_f(xyz.z / REFERENCE_WHITE.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    #[must_use]
    pub fn to_xyz(&self) -> XyzColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        XyzColor {
            x: lab_f_inverse(fx) * REFERENCE_WHITE.x,
            y: lab_f_inverse(fy) * REFERENCE_WHITE.y,
            z: lab_f_inverse(fz) * REFERENCE_WHITE.z,
        }
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        self.to_xyz().to_rgb()
    }
}

// ============================================================================
// Shared Math
// ============================================================================

/// Wrap a hue into `0.0..360.0`. NaN maps to zero.
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if hue.is_nan() {
        return 0.0;
    }
    hue.rem_euclid(360.0)
}

fn unit_to_byte(value: f64) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to 0-255 before the cast"
    )]
    let byte = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    byte
}

/// Hue in degrees from normalized channels, using whichever channel is max.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    normalize_hue(60.0 * sector)
}

/// Chroma-based channels for a hue, before the lightness/value offset.
fn sextant(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());

    match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    }
}

fn hsv_unit(hue: f64, saturation: Percentage, value: Percentage) -> (f64, f64, f64) {
    let hue = normalize_hue(hue);
    let saturation = saturation.clamp().value();
    let value = value.clamp().value();

    let chroma = value * saturation;
    let (r, g, b) = sextant(hue, chroma);
    let m = value - chroma;
    (r + m, g + m, b + m)
}

/// sRGB inverse gamma: encoded channel to linear light.
fn linearize(channel: f64) -> f64 {
    if channel > 0.040_45 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// sRGB gamma companding: linear light to encoded channel, clamped.
fn compand(linear: f64) -> f64 {
    let encoded = if linear > 0.003_130_8 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    };
    encoded.clamp(0.0, 1.0)
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    let cube = t.powi(3);
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA
    }
}
