//! Gradients and luminosity ordering.
//!
//! Interpolation uses exact rationals so that evenly spaced stops land on
//! the same byte no matter how many steps are requested; rounding happens once
//! per channel, half away from zero.
//!
//! ```
//! use colorway::color::Color;
//! use colorway::gradient::generate_gradient;
//!
//! let stops = generate_gradient(Color::BLACK, Color::WHITE, 3);
//! assert_eq!(stops[1], Color::from_rgb(128, 128, 128));
//! ```

use num_rational::Ratio;

use crate::color::Color;

/// `steps` colors from `start` to `end` inclusive, R/G/B linearly interpolated.
///
/// Alpha is not interpolated; every stop is opaque. Zero steps yields an empty
/// list and one step yields just `start`.
#[must_use]
pub fn generate_gradient(start: Color, end: Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![Color::from_rgb(start.red(), start.green(), start.blue())],
        _ => {
            let last = i64::try_from(steps - 1).unwrap_or(i64::MAX);
            (0..=last)
                .map(|index| {
                    let t = Ratio::new(index, last);
                    Color::from_rgb(
                        lerp(start.red(), end.red(), t),
                        lerp(start.green(), end.green(), t),
                        lerp(start.blue(), end.blue(), t),
                    )
                })
                .collect()
        }
    }
}

fn lerp(from: u8, to: u8, t: Ratio<i64>) -> u8 {
    let from = i64::from(from);
    let span = i64::from(to) - from;
    let value = (Ratio::from_integer(span) * t).round().to_integer() + from;
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// Stable ascending sort by HSL lightness.
pub fn sort_by_luminosity(colors: &mut [Color]) {
    colors.sort_by(|a, b| a.luminosity().total_cmp(&b.luminosity()));
}

impl Color {
    /// Gradient from this color to `end`. See [`generate_gradient`].
    #[must_use]
    pub fn gradient_to(&self, end: Color, steps: usize) -> Vec<Color> {
        generate_gradient(*self, end, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_step_gray() {
        let stops = generate_gradient(Color::BLACK, Color::WHITE, 3);
        assert_eq!(
            stops,
            vec![
                Color::BLACK,
                Color::from_rgb(128, 128, 128),
                Color::WHITE
            ]
        );
    }

    #[test]
    fn test_degenerate_steps() {
        assert!(generate_gradient(Color::RED, Color::BLUE, 0).is_empty());
        assert_eq!(generate_gradient(Color::RED, Color::BLUE, 1), vec![Color::RED]);
    }

    #[test]
    fn test_endpoints_are_exact() {
        let start = Color::from_rgb(10, 200, 33);
        let end = Color::from_rgb(250, 3, 77);
        for steps in 2..40 {
            let stops = generate_gradient(start, end, steps);
            assert_eq!(stops.len(), steps);
            assert_eq!(stops[0], start);
            assert_eq!(stops[steps - 1], end);
        }
    }

    #[test]
    fn test_descending_channel() {
        let stops = Color::WHITE.gradient_to(Color::BLACK, 5);
        let reds: Vec<u8> = stops.iter().map(Color::red).collect();
        assert_eq!(reds, vec![255, 191, 127, 64, 0]);
    }

    #[test]
    fn test_alpha_not_interpolated() {
        let start = Color::RED.with_alpha(0.2).unwrap();
        let end = Color::BLUE.with_alpha(0.4).unwrap();
        for stop in generate_gradient(start, end, 4) {
            assert!(stop.is_opaque());
        }
    }

    #[test]
    fn test_sort_by_luminosity_is_stable() {
        let mut colors = vec![
            Color::WHITE,
            Color::RED,
            Color::BLACK,
            Color::BLUE,
            Color::GRAY,
        ];
        sort_by_luminosity(&mut colors);
        assert_eq!(
            colors,
            vec![
                Color::BLACK,
                Color::RED,
                Color::BLUE,
                Color::GRAY,
                Color::WHITE
            ]
        );
    }
}
