//! # colorway
//!
//! An immutable RGBA color value with conversions to and from RGB, HSL, HSV,
//! HSB, CMYK, HWB, XYZ, CIE LAB and hex, plus parsing and formatting of the
//! textual notation for each.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorway::prelude::*;
//!
//! let color = Color::parse("hsl(200, 50%, 50%)").unwrap();
//! assert_eq!(color.to_string(), "#4095BF");
//! assert_eq!(color.display(ColorModel::Rgb).to_string(), "rgb(64, 149, 191)");
//!
//! let translucent = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
//! assert!(!translucent.is_opaque());
//! assert_eq!(translucent.to_string_as(ColorModel::Rgba, false), "rgba(255, 0, 0, 50%)");
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: RGB bytes plus an alpha [`Percentage`], ordered by packed ARGB
//! - **Models**: plain channel structs (`HslColor`, `LabColor`, ...) that
//!   convert to and from RGB
//! - **Notations**: `rgb(...)`, `hsla(...)`, `#RRGGBB` and friends, parsed by
//!   [`Color::parse`] and rendered with [`Color::display`]
//! - **Named and Pantone colors**: a fixed name table and a pluggable
//!   [`PantoneCatalog`](pantone::PantoneCatalog)
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Color`] and [`ColorModel`]
//! - `tracing`: a span around each [`Color::parse`] call

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod format;
pub mod gradient;
pub mod model;
pub mod named;
pub mod pantone;
pub mod parse;
pub mod percentage;
pub mod sync;

#[cfg(feature = "serde")]
mod serialize;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Color, ColorError, ValidationError};
    pub use crate::format::{ColorDisplay, ColorModel};
    pub use crate::gradient::{generate_gradient, sort_by_luminosity};
    pub use crate::model::{
        CmykColor, HsbColor, HslColor, HsvColor, HwbColor, LabColor, RgbColor, WithAlpha,
        XyzColor,
    };
    pub use crate::pantone::{PantoneCatalog, PantoneNameCase, StaticPantoneCatalog};
    pub use crate::percentage::Percentage;
}

// Re-export key types at crate root
pub use color::{Color, ColorError, ValidationError};
pub use format::{ColorDisplay, ColorModel};
pub use percentage::Percentage;
