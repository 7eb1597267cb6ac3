//! Textual rendering of colors in every supported notation.
//!
//! Each channel struct implements [`Display`](fmt::Display) in its canonical
//! notation. The alternate flag (`{:#}`) switches hue, percentages and LAB
//! channels from rounded integers to one decimal place:
//!
//! ```
//! use colorway::color::Color;
//! use colorway::format::ColorModel;
//!
//! let color = Color::from_rgb(64, 149, 191);
//! assert_eq!(color.to_hsl().to_string(), "hsl(200, 50%, 50%)");
//! assert_eq!(
//!     color.to_string_as(ColorModel::Hsl, true),
//!     format!("{:#}", color.to_hsl()),
//! );
//!
//! // Without a model, opaque colors print as HEX and translucent ones as HEXA.
//! assert_eq!(color.to_string(), "#4095BF");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, ColorError};
use crate::model::{
    CmykColor, HsbColor, HslColor, HsvColor, HwbColor, LabColor, RgbColor, WithAlpha, XyzColor,
};
use crate::percentage::Percentage;

/// Every notation a [`Color`] can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorModel {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
    Hsb,
    Hsba,
    Cmyk,
    Cmyka,
    Hwb,
    Hwba,
    Hex,
    Hexa,
    Xyz,
    Lab,
}

impl ColorModel {
    /// All models in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
        Self::Hsb,
        Self::Hsba,
        Self::Cmyk,
        Self::Cmyka,
        Self::Hwb,
        Self::Hwba,
        Self::Hex,
        Self::Hexa,
        Self::Xyz,
        Self::Lab,
    ];

    /// Lowercase notation keyword.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
            Self::Hsb => "hsb",
            Self::Hsba => "hsba",
            Self::Cmyk => "cmyk",
            Self::Cmyka => "cmyka",
            Self::Hwb => "hwb",
            Self::Hwba => "hwba",
            Self::Hex => "hex",
            Self::Hexa => "hexa",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
        }
    }

    /// Returns true for the variants that carry an alpha channel.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            Self::Rgba | Self::Hsla | Self::Hsva | Self::Hsba | Self::Cmyka | Self::Hwba | Self::Hexa
        )
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| ColorError::NoMatchingFormat(s.to_string()))
    }
}

// ============================================================================
// Channel Formatting
// ============================================================================

/// Round to the requested precision, folding `-0` into `0`.
fn number(value: f64, decimal: bool) -> String {
    if decimal {
        format!("{:.1}", (value * 10.0).round() / 10.0 + 0.0)
    } else {
        format!("{}", value.round() + 0.0)
    }
}

fn percent(value: Percentage, decimal: bool) -> String {
    format!("{}%", number(value.to_percent(), decimal))
}

fn alpha(value: Percentage) -> String {
    percent(value, false)
}

/// A notation written as `name(channel, channel, ...)`.
trait Notation {
    const NAME: &'static str;

    fn channels(&self, decimal: bool) -> Vec<String>;
}

fn write_function(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    suffix: &str,
    channels: &[String],
) -> fmt::Result {
    write!(f, "{name}{suffix}({})", channels.join(", "))
}

macro_rules! impl_notation_display {
    ($($model:ty),* $(,)?) => {
        $(
            impl fmt::Display for $model {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let channels = self.channels(f.alternate());
                    write_function(f, <$model as Notation>::NAME, "", &channels)
                }
            }

            impl fmt::Display for WithAlpha<$model> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut channels = self.color.channels(f.alternate());
                    channels.push(alpha(self.alpha));
                    write_function(f, <$model as Notation>::NAME, "a", &channels)
                }
            }
        )*
    };
}

impl Notation for RgbColor {
    const NAME: &'static str = "rgb";

    fn channels(&self, _decimal: bool) -> Vec<String> {
        vec![
            self.red.to_string(),
            self.green.to_string(),
            self.blue.to_string(),
        ]
    }
}

impl Notation for HslColor {
    const NAME: &'static str = "hsl";

    fn channels(&self, decimal: bool) -> Vec<String> {
        vec![
            number(self.hue, decimal),
            percent(self.saturation, decimal),
            percent(self.lightness, decimal),
        ]
    }
}

impl Notation for HsvColor {
    const NAME: &'static str = "hsv";

    fn channels(&self, decimal: bool) -> Vec<String> {
        vec![
            number(self.hue, decimal),
            percent(self.saturation, decimal),
            percent(self.value, decimal),
        ]
    }
}

impl Notation for HsbColor {
    const NAME: &'static str = "hsb";

    fn channels(&self, decimal: bool) -> Vec<String> {
        vec![
            number(self.hue, decimal),
            percent(self.saturation, decimal),
            percent(self.brightness, decimal),
        ]
    }
}

impl Notation for CmykColor {
    const NAME: &'static str = "cmyk";

    fn channels(&self, decimal: bool) -> Vec<String> {
        [self.cyan, self.magenta, self.yellow, self.key]
            .into_iter()
            .map(|ink| percent(ink, decimal))
            .collect()
    }
}

impl Notation for HwbColor {
    const NAME: &'static str = "hwb";

    fn channels(&self, decimal: bool) -> Vec<String> {
        vec![
            number(self.hue, decimal),
            percent(self.whiteness, decimal),
            percent(self.blackness, decimal),
        ]
    }
}

impl Notation for LabColor {
    const NAME: &'static str = "lab";

    fn channels(&self, decimal: bool) -> Vec<String> {
        vec![
            number(self.l, decimal),
            number(self.a, decimal),
            number(self.b, decimal),
        ]
    }
}

impl_notation_display!(RgbColor, HslColor, HsvColor, HsbColor, CmykColor, HwbColor, LabColor);

/// XYZ prints as fractions of the reference scale, the form the parser reads back.
impl fmt::Display for XyzColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xyz({:.4}, {:.4}, {:.4})",
            self.x / 100.0 + 0.0,
            self.y / 100.0 + 0.0,
            self.z / 100.0 + 0.0
        )
    }
}

// ============================================================================
// Color Rendering
// ============================================================================

/// Builder for rendering a [`Color`] in a chosen notation.
///
/// ```
/// use colorway::color::Color;
/// use colorway::format::ColorModel;
///
/// let color = Color::of_rgba(255, 0, 0, 0.8).unwrap();
/// let text = color.display(ColorModel::Hsla).decimal(true).to_string();
/// assert_eq!(text, "hsla(0.0, 100.0%, 50.0%, 80%)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColorDisplay {
    color: Color,
    model: ColorModel,
    decimal: bool,
}

impl ColorDisplay {
    /// Render with one decimal place instead of rounded integers.
    #[must_use]
    pub fn decimal(mut self, decimal: bool) -> Self {
        self.decimal = decimal;
        self
    }

    /// Change the notation.
    #[must_use]
    pub fn model(mut self, model: ColorModel) -> Self {
        self.model = model;
        self
    }
}

fn write_model<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: &T, decimal: bool) -> fmt::Result {
    if decimal {
        write!(f, "{value:#}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for ColorDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = &self.color;
        let decimal = self.decimal;
        match self.model {
            ColorModel::Rgb => write_model(f, &color.to_rgb(), false),
            ColorModel::Rgba => write_model(f, &color.to_rgba(), false),
            ColorModel::Hsl => write_model(f, &color.to_hsl(), decimal),
            ColorModel::Hsla => write_model(f, &color.to_hsla(), decimal),
            ColorModel::Hsv => write_model(f, &color.to_hsv(), decimal),
            ColorModel::Hsva => write_model(f, &color.to_hsva(), decimal),
            ColorModel::Hsb => write_model(f, &color.to_hsb(), decimal),
            ColorModel::Hsba => write_model(f, &color.to_hsba(), decimal),
            ColorModel::Cmyk => write_model(f, &color.to_cmyk(), decimal),
            ColorModel::Cmyka => write_model(f, &color.to_cmyka(), decimal),
            ColorModel::Hwb => write_model(f, &color.to_hwb(), decimal),
            ColorModel::Hwba => write_model(f, &color.to_hwba(), decimal),
            ColorModel::Hex => f.write_str(&color.to_hex()),
            ColorModel::Hexa => f.write_str(&color.to_hexa()),
            ColorModel::Xyz => write_model(f, &color.to_xyz(), decimal),
            ColorModel::Lab => write_model(f, &color.to_lab(), decimal),
        }
    }
}

impl Color {
    /// Start a [`ColorDisplay`] for `model`, integer rendering by default.
    #[must_use]
    pub fn display(&self, model: ColorModel) -> ColorDisplay {
        ColorDisplay {
            color: *self,
            model,
            decimal: false,
        }
    }

    /// Render in `model`; `decimal` selects one decimal place over rounding.
    #[must_use]
    pub fn to_string_as(&self, model: ColorModel, decimal: bool) -> String {
        self.display(model).decimal(decimal).to_string()
    }

    /// The model used by [`Display`](fmt::Display): HEX when the alpha byte
    /// is `FF`, HEXA otherwise.
    #[must_use]
    pub fn default_model(&self) -> ColorModel {
        if self.alpha().to_byte() == u8::MAX {
            ColorModel::Hex
        } else {
            ColorModel::Hexa
        }
    }

    /// The text of this color in every model.
    #[must_use]
    pub fn to_model_map(&self) -> BTreeMap<ColorModel, String> {
        ColorModel::ALL
            .into_iter()
            .map(|model| (model, self.to_string_as(model, false)))
            .collect()
    }

    /// Every scalar component, keyed `model.component`.
    ///
    /// Percent-like channels are fractions in `0.0..=1.0`, hue is in degrees,
    /// RGB channels are 0-255 and XYZ uses the 0-100 scale.
    #[must_use]
    pub fn to_component_map(&self) -> BTreeMap<&'static str, f64> {
        let hsl = self.to_hsl();
        let hsv = self.to_hsv();
        let cmyk = self.to_cmyk();
        let hwb = self.to_hwb();
        let xyz = self.to_xyz();
        let lab = self.to_lab();

        BTreeMap::from([
            ("rgb.red", f64::from(self.red())),
            ("rgb.green", f64::from(self.green())),
            ("rgb.blue", f64::from(self.blue())),
            ("alpha", self.alpha().value()),
            ("hsl.hue", hsl.hue),
            ("hsl.saturation", hsl.saturation.value()),
            ("hsl.lightness", hsl.lightness.value()),
            ("hsv.hue", hsv.hue),
            ("hsv.saturation", hsv.saturation.value()),
            ("hsv.value", hsv.value.value()),
            ("hsb.hue", hsv.hue),
            ("hsb.saturation", hsv.saturation.value()),
            ("hsb.brightness", hsv.value.value()),
            ("cmyk.cyan", cmyk.cyan.value()),
            ("cmyk.magenta", cmyk.magenta.value()),
            ("cmyk.yellow", cmyk.yellow.value()),
            ("cmyk.key", cmyk.key.value()),
            ("hwb.hue", hwb.hue),
            ("hwb.whiteness", hwb.whiteness.value()),
            ("hwb.blackness", hwb.blackness.value()),
            ("xyz.x", xyz.x),
            ("xyz.y", xyz.y),
            ("xyz.z", xyz.z),
            ("lab.l", lab.l),
            ("lab.a", lab.a),
            ("lab.b", lab.b),
        ])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(self.default_model()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_formats() {
        let c = Color::of_rgba(12, 34, 56, 0.8).unwrap();
        assert_eq!(c.to_string_as(ColorModel::Rgb, false), "rgb(12, 34, 56)");
        assert_eq!(c.to_string_as(ColorModel::Rgb, true), "rgb(12, 34, 56)");
        assert_eq!(
            c.to_string_as(ColorModel::Rgba, false),
            "rgba(12, 34, 56, 80%)"
        );
    }

    #[test]
    fn test_hsl_formats() {
        let c = Color::from_rgb(64, 149, 191);
        assert_eq!(c.to_string_as(ColorModel::Hsl, false), "hsl(200, 50%, 50%)");
        assert_eq!(
            c.to_string_as(ColorModel::Hsl, true),
            "hsl(199.8, 49.8%, 50.0%)"
        );
    }

    #[test]
    fn test_cmyk_format() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(
            red.to_string_as(ColorModel::Cmyk, false),
            "cmyk(0%, 100%, 100%, 0%)"
        );
        assert_eq!(
            red.to_string_as(ColorModel::Cmyka, true),
            "cmyka(0.0%, 100.0%, 100.0%, 0.0%, 100%)"
        );
    }

    #[test]
    fn test_hwb_and_hsv_formats() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.to_string_as(ColorModel::Hwb, false), "hwb(0, 0%, 0%)");
        assert_eq!(red.to_string_as(ColorModel::Hsv, false), "hsv(0, 100%, 100%)");
        assert_eq!(red.to_string_as(ColorModel::Hsb, false), "hsb(0, 100%, 100%)");
        assert_eq!(
            red.to_string_as(ColorModel::Hsba, false),
            "hsba(0, 100%, 100%, 100%)"
        );
    }

    #[test]
    fn test_lab_and_xyz_formats() {
        let white = Color::from_rgb(255, 255, 255);
        assert_eq!(white.to_string_as(ColorModel::Lab, false), "lab(100, 0, 0)");
        assert_eq!(
            white.to_string_as(ColorModel::Lab, true),
            "lab(100.0, 0.0, 0.0)"
        );
        assert_eq!(
            white.to_string_as(ColorModel::Xyz, false),
            "xyz(0.9505, 1.0000, 1.0888)"
        );
    }

    #[test]
    fn test_default_display_picks_hex_or_hexa() {
        assert_eq!(Color::from_rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!(
            Color::of_rgba(255, 0, 0, 0.0).unwrap().to_string(),
            "#FF000000"
        );
    }

    #[test]
    fn test_near_opaque_alpha_renders_as_hex() {
        let c = Color::of_rgba(1, 2, 3, 0.999).unwrap();
        assert!(!c.is_opaque());
        assert_eq!(c.default_model(), ColorModel::Hex);
        let text = c.to_string();
        assert_eq!(text, "#010203");
        assert_eq!(Color::parse(&text).unwrap().to_string(), text);

        let below = Color::of_rgba(1, 2, 3, 0.99).unwrap();
        assert_eq!(below.to_string(), "#010203FC");
    }

    #[test]
    fn test_alpha_variants() {
        let with_alpha: Vec<_> = ColorModel::ALL
            .into_iter()
            .filter(ColorModel::has_alpha)
            .map(|model| model.name())
            .collect();
        assert_eq!(
            with_alpha,
            ["rgba", "hsla", "hsva", "hsba", "cmyka", "hwba", "hexa"]
        );
    }

    #[test]
    fn test_display_model_can_be_switched() {
        let red = Color::from_rgb(255, 0, 0);
        let text = red.display(ColorModel::Hex).model(ColorModel::Hsl).to_string();
        assert_eq!(text, "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_model_map_covers_every_model() {
        let map = Color::from_rgb(1, 2, 3).to_model_map();
        assert_eq!(map.len(), 16);
        assert_eq!(map[&ColorModel::Hex], "#010203");
        assert_eq!(map[&ColorModel::Rgb], "rgb(1, 2, 3)");
    }

    #[test]
    fn test_component_map() {
        let map = Color::from_rgb(255, 0, 0).to_component_map();
        assert_eq!(map["rgb.red"], 255.0);
        assert_eq!(map["alpha"], 1.0);
        assert_eq!(map["cmyk.magenta"], 1.0);
        assert!((map["hsl.lightness"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_model_names_parse() {
        for model in ColorModel::ALL {
            assert_eq!(model.name().parse::<ColorModel>().unwrap(), model);
        }
        assert!("rgbz".parse::<ColorModel>().is_err());
    }
}
