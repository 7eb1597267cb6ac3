//! Pantone lookups.
//!
//! Pantone data is not bundled. A [`PantoneCatalog`] supplies it, and colors
//! move through the catalog as hex strings: code or name to hex to color, and
//! color to hex to code or name. [`StaticPantoneCatalog`] is an in-memory
//! implementation for callers that already hold the table.
//!
//! ```
//! use colorway::color::Color;
//! use colorway::pantone::{PantoneNameCase, StaticPantoneCatalog};
//!
//! let catalog = StaticPantoneCatalog::new([("11-4201", "cloud-dancer", "#F0EEE9")]);
//!
//! let color = Color::of_pantone_code("11-4201", &catalog).unwrap();
//! assert_eq!(color, Color::from_rgb(0xF0, 0xEE, 0xE9));
//!
//! let by_name = Color::of_pantone_name("Cloud Dancer", PantoneNameCase::Kebab, &catalog);
//! assert_eq!(by_name, Some(color));
//! assert_eq!(
//!     color.to_pantone_name(PantoneNameCase::Title, &catalog).as_deref(),
//!     Some("Cloud Dancer"),
//! );
//! ```

use crate::color::Color;

/// Source of Pantone code, name and hex associations.
pub trait PantoneCatalog {
    /// Hex string for a Pantone code such as `"11-4201"`.
    fn hex_for_code(&self, code: &str) -> Option<String>;

    /// Hex string for a Pantone name, written in the catalog's own convention.
    fn hex_for_name(&self, name: &str) -> Option<String>;

    /// Pantone code for a hex string (`#RRGGBB`).
    fn code_for_hex(&self, hex: &str) -> Option<String>;

    /// Pantone name for a hex string (`#RRGGBB`).
    fn name_for_hex(&self, hex: &str) -> Option<String>;
}

/// Word casing applied to Pantone names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PantoneNameCase {
    /// Leave the name untouched.
    #[default]
    AsIs,
    /// `cloud dancer`
    Lower,
    /// `CLOUD DANCER`
    Upper,
    /// `Cloud Dancer`
    Title,
    /// `cloud-dancer`
    Kebab,
}

impl PantoneNameCase {
    /// Rewrite `name` in this casing. Words are split on whitespace, `-` and `_`.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        let words = || {
            name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
                .filter(|word| !word.is_empty())
        };

        match self {
            Self::AsIs => name.to_string(),
            Self::Lower => words().map(str::to_lowercase).collect::<Vec<_>>().join(" "),
            Self::Upper => words().map(str::to_uppercase).collect::<Vec<_>>().join(" "),
            Self::Title => words().map(title_word).collect::<Vec<_>>().join(" "),
            Self::Kebab => words().map(str::to_lowercase).collect::<Vec<_>>().join("-"),
        }
    }
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// One row of a Pantone table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantoneEntry {
    pub code: String,
    pub name: String,
    pub hex: String,
}

/// An in-memory [`PantoneCatalog`].
///
/// Codes and names match exactly; hex strings match case-insensitively with
/// or without a leading `#`.
#[derive(Debug, Clone, Default)]
pub struct StaticPantoneCatalog {
    entries: Vec<PantoneEntry>,
}

impl StaticPantoneCatalog {
    /// Build from `(code, name, hex)` rows.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        Self {
            entries: rows
                .into_iter()
                .map(|(code, name, hex)| PantoneEntry {
                    code: code.into(),
                    name: name.into(),
                    hex: hex.into(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[PantoneEntry] {
        &self.entries
    }

    fn find_by_hex(&self, hex: &str) -> Option<&PantoneEntry> {
        let wanted = normalize_hex(hex);
        self.entries
            .iter()
            .find(|entry| normalize_hex(&entry.hex) == wanted)
    }
}

fn normalize_hex(hex: &str) -> String {
    hex.trim().trim_start_matches('#').to_ascii_uppercase()
}

impl PantoneCatalog for StaticPantoneCatalog {
    fn hex_for_code(&self, code: &str) -> Option<String> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.hex.clone())
    }

    fn hex_for_name(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.hex.clone())
    }

    fn code_for_hex(&self, hex: &str) -> Option<String> {
        self.find_by_hex(hex).map(|entry| entry.code.clone())
    }

    fn name_for_hex(&self, hex: &str) -> Option<String> {
        self.find_by_hex(hex).map(|entry| entry.name.clone())
    }
}

fn color_from_catalog_hex(hex: &str) -> Option<Color> {
    match Color::of_hex(hex) {
        Ok(color) => Some(color),
        Err(err) => {
            log::warn!("pantone catalog returned unusable hex {hex:?}: {err}");
            None
        }
    }
}

impl Color {
    /// Look up a Pantone code through `catalog`.
    #[must_use]
    pub fn of_pantone_code(code: &str, catalog: &impl PantoneCatalog) -> Option<Self> {
        catalog
            .hex_for_code(code)
            .and_then(|hex| color_from_catalog_hex(&hex))
    }

    /// Look up a Pantone name through `catalog`, first rewriting it in `case`,
    /// the catalog's naming convention.
    #[must_use]
    pub fn of_pantone_name(
        name: &str,
        case: PantoneNameCase,
        catalog: &impl PantoneCatalog,
    ) -> Option<Self> {
        catalog
            .hex_for_name(&case.apply(name))
            .and_then(|hex| color_from_catalog_hex(&hex))
    }

    /// The Pantone code for this color's hex value, if the catalog has one.
    #[must_use]
    pub fn to_pantone_code(&self, catalog: &impl PantoneCatalog) -> Option<String> {
        catalog.code_for_hex(&self.to_hex())
    }

    /// The Pantone name for this color's hex value, rewritten in `case`.
    #[must_use]
    pub fn to_pantone_name(
        &self,
        case: PantoneNameCase,
        catalog: &impl PantoneCatalog,
    ) -> Option<String> {
        catalog
            .name_for_hex(&self.to_hex())
            .map(|name| case.apply(&name))
    }
}
