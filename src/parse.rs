//! Parsing colors from text.
//!
//! Supported notations, tried by prefix in this order so that longer keywords
//! win over their shorter prefixes:
//!
//! | Prefix | Grammar |
//! |--------|---------|
//! | `rgba`, `rgb` | `rgb(r, g, b)`, `rgba(r, g, b, a)` with 1-3 digit channels |
//! | `hsla`, `hsl` | `hsl(h, s, l)` |
//! | `hsva`, `hsv` | `hsv(h, s, v)` |
//! | `hsba`, `hsb` | `hsb(h, s, b)` |
//! | `cmyka`, `cmyk` | `cmyk(c, m, y, k)` |
//! | `hwba`, `hwb` | `hwb(h, w, b)` |
//! | `#`, `0x` | 3, 4, 6 or 8 hex digits |
//! | `xyz` | `xyz(x, y, z)`, fractions of the 0-100 scale |
//! | `lab` | `lab(l, a, b)`, `a` and `b` may be negative |
//!
//! Percent-like channels accept a fraction or a percent number with an
//! optional `%`: values up to `1.0` are fractions, larger values are percents.
//! Alpha accepts a fraction, a 0-255 number, or a percent written with `%`.
//!
//! ```
//! use colorway::color::Color;
//!
//! let red = Color::parse("rgb(255, 0, 0)").unwrap();
//! assert_eq!(Color::parse("#ff0000").unwrap(), red);
//! assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap(), red);
//! assert_eq!(Color::parse("hsl(0, 1.0, 0.5)").unwrap(), red);
//! ```

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use regex::{Captures, Regex};

use crate::color::{Color, ColorError};
use crate::percentage::Percentage;
use crate::sync::lock_recover;

/// Number of successfully parsed inputs kept in the parse cache.
pub const PARSE_CACHE_CAPACITY: usize = 1024;

const INTEGER: &str = r"(\d{1,3})";
const NUMBER: &str = r"(\d+(?:\.\d+)?|\.\d+)";
const SIGNED: &str = r"(-?(?:\d+(?:\.\d+)?|\.\d+))";
const PERCENT: &str = r"(\d+(?:\.\d+)?|\.\d+)\s*%?";
const ALPHA: &str = r"(\d+(?:\.\d+)?|\.\d+)\s*(%?)";

/// One textual notation: its keyword, grammar and builder.
struct Grammar {
    prefix: &'static str,
    regex: Regex,
    build: fn(&Captures<'_>, &str) -> Result<Color, ColorError>,
}

fn function_regex(name: &str, args: &[&str]) -> Regex {
    let pattern = format!(r"^{name}\s*\(\s*{}\s*\)$", args.join(r"\s*,\s*"));
    Regex::new(&pattern).expect("valid regex")
}

fn grammar(
    prefix: &'static str,
    args: &[&str],
    build: fn(&Captures<'_>, &str) -> Result<Color, ColorError>,
) -> Grammar {
    Grammar {
        prefix,
        regex: function_regex(prefix, args),
        build,
    }
}

/// Function notations in dispatch order. Hex is handled separately.
static FUNCTION_GRAMMARS: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    vec![
        grammar("rgba", &[INTEGER, INTEGER, INTEGER, ALPHA], |caps, input| {
            Color::of_rgba(
                integer(caps, 1, input)?,
                integer(caps, 2, input)?,
                integer(caps, 3, input)?,
                alpha(caps, 4, input)?,
            )
        }),
        grammar("rgb", &[INTEGER, INTEGER, INTEGER], |caps, input| {
            Color::of_rgb(
                integer(caps, 1, input)?,
                integer(caps, 2, input)?,
                integer(caps, 3, input)?,
            )
        }),
        grammar("hsla", &[NUMBER, PERCENT, PERCENT, ALPHA], |caps, input| {
            Color::of_hsla(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
                alpha(caps, 4, input)?,
            )
        }),
        grammar("hsl", &[NUMBER, PERCENT, PERCENT], |caps, input| {
            Ok(Color::of_hsl(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
            ))
        }),
        grammar("hsva", &[NUMBER, PERCENT, PERCENT, ALPHA], |caps, input| {
            Color::of_hsva(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
                alpha(caps, 4, input)?,
            )
        }),
        grammar("hsv", &[NUMBER, PERCENT, PERCENT], |caps, input| {
            Ok(Color::of_hsv(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
            ))
        }),
        grammar("hsba", &[NUMBER, PERCENT, PERCENT, ALPHA], |caps, input| {
            Color::of_hsba(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
                alpha(caps, 4, input)?,
            )
        }),
        grammar("hsb", &[NUMBER, PERCENT, PERCENT], |caps, input| {
            Ok(Color::of_hsb(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
            ))
        }),
        grammar(
            "cmyka",
            &[PERCENT, PERCENT, PERCENT, PERCENT, ALPHA],
            |caps, input| {
                Color::of_cmyka(
                    component(caps, 1, input)?,
                    component(caps, 2, input)?,
                    component(caps, 3, input)?,
                    component(caps, 4, input)?,
                    alpha(caps, 5, input)?,
                )
            },
        ),
        grammar("cmyk", &[PERCENT, PERCENT, PERCENT, PERCENT], |caps, input| {
            Ok(Color::of_cmyk(
                component(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
                component(caps, 4, input)?,
            ))
        }),
        grammar("hwba", &[NUMBER, PERCENT, PERCENT, ALPHA], |caps, input| {
            Color::of_hwba(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
                alpha(caps, 4, input)?,
            )
        }),
        grammar("hwb", &[NUMBER, PERCENT, PERCENT], |caps, input| {
            Ok(Color::of_hwb(
                float(caps, 1, input)?,
                component(caps, 2, input)?,
                component(caps, 3, input)?,
            ))
        }),
    ]
});

/// Function notations tried after hex.
static TRAILING_GRAMMARS: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    vec![
        grammar("xyz", &[NUMBER, NUMBER, NUMBER], |caps, input| {
            Ok(Color::of_xyz(
                float(caps, 1, input)? * 100.0,
                float(caps, 2, input)? * 100.0,
                float(caps, 3, input)? * 100.0,
            ))
        }),
        grammar("lab", &[NUMBER, SIGNED, SIGNED], |caps, input| {
            Ok(Color::of_lab(
                float(caps, 1, input)?,
                float(caps, 2, input)?,
                float(caps, 3, input)?,
            ))
        }),
    ]
});

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#|0[xX])?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("valid regex")
});

// ============================================================================
// Capture Helpers
// ============================================================================

fn capture<'h>(
    caps: &Captures<'h>,
    index: usize,
    format: &'static str,
    input: &str,
) -> Result<&'h str, ColorError> {
    caps.get(index)
        .map(|m| m.as_str())
        .ok_or_else(|| malformed(format, input))
}

fn malformed(format: &'static str, input: &str) -> ColorError {
    ColorError::Malformed {
        format,
        input: input.to_string(),
    }
}

fn integer(caps: &Captures<'_>, index: usize, input: &str) -> Result<i32, ColorError> {
    capture(caps, index, "integer", input)?
        .parse::<i32>()
        .map_err(|_| malformed("integer", input))
}

fn float(caps: &Captures<'_>, index: usize, input: &str) -> Result<f64, ColorError> {
    capture(caps, index, "number", input)?
        .parse::<f64>()
        .map_err(|_| malformed("number", input))
}

fn component(caps: &Captures<'_>, index: usize, input: &str) -> Result<Percentage, ColorError> {
    float(caps, index, input).map(Percentage::from_component)
}

/// Alpha at `index`; the following group holds an optional `%`.
fn alpha(caps: &Captures<'_>, index: usize, input: &str) -> Result<Percentage, ColorError> {
    let value = float(caps, index, input)?;
    let is_percent = caps.get(index + 1).is_some_and(|m| m.as_str() == "%");
    Ok(if is_percent {
        Percentage::from_percent(value)
    } else {
        Percentage::from_alpha_component(value)
    })
}

// ============================================================================
// Hex
// ============================================================================

/// Decode 3, 4, 6 or 8 hex digits; short forms repeat each nibble.
fn decode_hex(digits: &str) -> Option<[u8; 4]> {
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };

    let byte = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    let alpha = if expanded.len() == 8 { byte(6)? } else { 255 };
    Some([byte(0)?, byte(2)?, byte(4)?, alpha])
}

fn parse_hex(input: &str) -> Result<Color, ColorError> {
    HEX_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| decode_hex(digits.as_str()))
        .map(Color::from)
        .ok_or_else(|| malformed("hex", input))
}

fn is_hex_prefixed(input: &str) -> bool {
    input.starts_with('#') || input.starts_with("0x") || input.starts_with("0X")
}

// ============================================================================
// Entry Points
// ============================================================================

impl Color {
    /// Parse a color string (cached).
    ///
    /// See the [module documentation](crate::parse) for the accepted
    /// notations.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the text is not a valid color:
    /// - `NoMatchingFormat` if no notation prefix matches (including empty input)
    /// - `Malformed` if the prefix matches but the grammar does not
    /// - `Validation` if a channel is out of range, e.g. `rgb(300, 0, 0)`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(input = color))
    )]
    pub fn parse(color: &str) -> Result<Self, ColorError> {
        static CACHE: LazyLock<Mutex<LruCache<String, Color>>> = LazyLock::new(|| {
            Mutex::new(LruCache::new(
                NonZeroUsize::new(PARSE_CACHE_CAPACITY).expect("non-zero"),
            ))
        });

        let input = color.trim();

        if let Some(cached) = lock_recover(&CACHE).get(input) {
            return Ok(*cached);
        }

        let result = Self::parse_uncached(input);
        match &result {
            Ok(parsed) => {
                lock_recover(&CACHE).put(input.to_string(), *parsed);
            }
            Err(err) => log::debug!("rejected color input {input:?}: {err}"),
        }
        result
    }

    fn parse_uncached(input: &str) -> Result<Self, ColorError> {
        if let Some(grammar) = FUNCTION_GRAMMARS
            .iter()
            .find(|grammar| input.starts_with(grammar.prefix))
        {
            return Self::parse_with(grammar, input);
        }

        if is_hex_prefixed(input) {
            log::trace!("parsing {input:?} as hex");
            return parse_hex(input);
        }

        if let Some(grammar) = TRAILING_GRAMMARS
            .iter()
            .find(|grammar| input.starts_with(grammar.prefix))
        {
            return Self::parse_with(grammar, input);
        }

        Err(ColorError::NoMatchingFormat(input.to_string()))
    }

    fn parse_with(grammar: &Grammar, input: &str) -> Result<Self, ColorError> {
        log::trace!("parsing {input:?} as {}", grammar.prefix);
        let caps = grammar
            .regex
            .captures(input)
            .ok_or_else(|| malformed(grammar.prefix, input))?;
        (grammar.build)(&caps, input)
    }

    /// Parse hex digits with an optional `#` or `0x` prefix.
    ///
    /// Accepts 3, 4, 6 or 8 digits in either case; the 4 and 8 digit forms
    /// carry alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] for any other length or a non-hex digit.
    pub fn of_hex(hex: &str) -> Result<Self, ColorError> {
        parse_hex(hex.trim())
    }

    /// Like [`Color::of_hex`], but requires the alpha-bearing 4 or 8 digit form.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] unless the input has 4 or 8 hex digits.
    pub fn of_hexa(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if matches!(digits.len(), 4 | 8) {
            parse_hex(trimmed)
        } else {
            Err(malformed("hexa", trimmed))
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}
