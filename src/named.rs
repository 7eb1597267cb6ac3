//! Named colors.
//!
//! A fixed, read-only table of lowercase names. Lookup is case-insensitive
//! and exact; there is no fuzzy matching.
//!
//! ```
//! use colorway::color::Color;
//!
//! assert_eq!(Color::of_name("Light Gray"), Some(Color::from_rgb(192, 192, 192)));
//! assert_eq!(Color::of_name("not-a-color"), None);
//! assert_eq!(Color::from_rgb(255, 0, 0).to_name(), Some("red"));
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::Color;

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);
    pub const CYAN: Self = Self::from_rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::from_rgb(255, 0, 255);
    pub const ORANGE: Self = Self::from_rgb(255, 200, 0);
    pub const PINK: Self = Self::from_rgb(255, 175, 175);
    pub const LIGHT_GRAY: Self = Self::from_rgb(192, 192, 192);
    pub const GRAY: Self = Self::from_rgb(128, 128, 128);
    pub const DARK_GRAY: Self = Self::from_rgb(64, 64, 64);
}

/// Every named color, in reverse-lookup priority order.
pub static NAMED_COLORS: [(&str, Color); 60] = [
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("cyan", Color::CYAN),
    ("magenta", Color::MAGENTA),
    ("orange", Color::ORANGE),
    ("pink", Color::PINK),
    ("light gray", Color::LIGHT_GRAY),
    ("gray", Color::GRAY),
    ("dark gray", Color::DARK_GRAY),
    ("silver", Color::from_rgb(192, 192, 192)),
    ("dim gray", Color::from_rgb(105, 105, 105)),
    ("slate gray", Color::from_rgb(112, 128, 144)),
    ("maroon", Color::from_rgb(128, 0, 0)),
    ("dark red", Color::from_rgb(139, 0, 0)),
    ("brown", Color::from_rgb(165, 42, 42)),
    ("firebrick", Color::from_rgb(178, 34, 34)),
    ("crimson", Color::from_rgb(220, 20, 60)),
    ("indian red", Color::from_rgb(205, 92, 92)),
    ("tomato", Color::from_rgb(255, 99, 71)),
    ("coral", Color::from_rgb(255, 127, 80)),
    ("salmon", Color::from_rgb(250, 128, 114)),
    ("dark orange", Color::from_rgb(255, 140, 0)),
    ("gold", Color::from_rgb(255, 215, 0)),
    ("khaki", Color::from_rgb(240, 230, 140)),
    ("olive", Color::from_rgb(128, 128, 0)),
    ("dark green", Color::from_rgb(0, 100, 0)),
    ("forest green", Color::from_rgb(34, 139, 34)),
    ("sea green", Color::from_rgb(46, 139, 87)),
    ("medium sea green", Color::from_rgb(60, 179, 113)),
    ("lime green", Color::from_rgb(50, 205, 50)),
    ("light green", Color::from_rgb(144, 238, 144)),
    ("teal", Color::from_rgb(0, 128, 128)),
    ("dark cyan", Color::from_rgb(0, 139, 139)),
    ("turquoise", Color::from_rgb(64, 224, 208)),
    ("light blue", Color::from_rgb(173, 216, 230)),
    ("sky blue", Color::from_rgb(135, 206, 235)),
    ("steel blue", Color::from_rgb(70, 130, 180)),
    ("royal blue", Color::from_rgb(65, 105, 225)),
    ("medium blue", Color::from_rgb(0, 0, 205)),
    ("dark blue", Color::from_rgb(0, 0, 139)),
    ("navy", Color::from_rgb(0, 0, 128)),
    ("midnight blue", Color::from_rgb(25, 25, 112)),
    ("indigo", Color::from_rgb(75, 0, 130)),
    ("purple", Color::from_rgb(128, 0, 128)),
    ("dark magenta", Color::from_rgb(139, 0, 139)),
    ("dark violet", Color::from_rgb(148, 0, 211)),
    ("medium purple", Color::from_rgb(147, 112, 219)),
    ("violet", Color::from_rgb(238, 130, 238)),
    ("orchid", Color::from_rgb(218, 112, 214)),
    ("plum", Color::from_rgb(221, 160, 221)),
    ("medium violet red", Color::from_rgb(199, 21, 133)),
    ("deep pink", Color::from_rgb(255, 20, 147)),
    ("hot pink", Color::from_rgb(255, 105, 180)),
    ("light pink", Color::from_rgb(255, 182, 193)),
    ("chocolate", Color::from_rgb(210, 105, 30)),
    ("tan", Color::from_rgb(210, 180, 140)),
];

static BY_NAME: LazyLock<HashMap<&'static str, Color>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

/// Iterate over every known name.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name)
}

impl Color {
    /// Look up a named color, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn of_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        let found = BY_NAME.get(key.as_str()).copied();
        if found.is_none() {
            log::debug!("unknown color name {name:?}");
        }
        found
    }

    /// The first table name whose color equals this one, if any.
    #[must_use]
    pub fn to_name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }
}
