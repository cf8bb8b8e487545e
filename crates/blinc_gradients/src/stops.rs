//! Stop list helpers
//!
//! Hard-edged gradients are built by placing every color twice, once at the
//! start and once at the end of its band, so the renderer never blends
//! between neighbouring bands.

use crate::color::Color;

/// Repeat every color twice, preserving order
///
/// `[a, b]` becomes `[a, a, b, b]`.
pub fn duplicate_colors(colors: &[Color]) -> Vec<Color> {
    let mut out = Vec::with_capacity(colors.len() * 2);
    for &color in colors {
        out.push(color);
        out.push(color);
    }
    out
}

/// Repeat every stop twice, offsetting the second copy by `additive`
///
/// `[s0, s1]` becomes `[s0, s0 + additive, s1, s1 + additive]`. With an
/// `additive` of zero adjacent stops are equal, which renderers treat as a
/// hard edge.
pub fn duplicate_stops_with_offset(stops: &[f32], additive: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(stops.len() * 2);
    for &stop in stops {
        out.push(stop);
        out.push(stop + additive);
    }
    out
}

/// Resolve an optional stop list
///
/// Explicit stops are returned as given. Otherwise `required_count` stops
/// are spread evenly from 0.0 to 1.0 inclusive, the same layout renderers
/// assume for a gradient without stops.
pub fn interpret_stops(stops: Option<&[f32]>, required_count: usize) -> Vec<f32> {
    if let Some(stops) = stops {
        return stops.to_vec();
    }

    match required_count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f32;
            (0..n).map(|i| i as f32 / last).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_colors() {
        let colors = [Color::RED, Color::GREEN, Color::BLUE];
        let out = duplicate_colors(&colors);

        assert_eq!(out.len(), 6);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(out[2 * i], *color);
            assert_eq!(out[2 * i + 1], *color);
        }
    }

    #[test]
    fn test_duplicate_colors_empty() {
        assert!(duplicate_colors(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_stops_with_offset() {
        let out = duplicate_stops_with_offset(&[0.0, 0.5], 0.01);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.01).abs() < 1e-6);
        assert_eq!(out[2], 0.5);
        assert!((out[3] - 0.51).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_stops_zero_offset_is_exact() {
        assert_eq!(
            duplicate_stops_with_offset(&[0.0, 0.25], 0.0),
            vec![0.0, 0.0, 0.25, 0.25]
        );
    }

    #[test]
    fn test_interpret_explicit_stops_unchanged() {
        let stops = [0.0, 0.1, 0.9];
        assert_eq!(interpret_stops(Some(&stops), 7), vec![0.0, 0.1, 0.9]);
    }

    #[test]
    fn test_interpret_even_stops() {
        assert_eq!(interpret_stops(None, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(interpret_stops(None, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(interpret_stops(None, 1), vec![0.0]);
        assert!(interpret_stops(None, 0).is_empty());
    }

    #[test]
    fn test_interpret_even_stops_ends_exactly_at_one() {
        for n in 2..20 {
            let stops = interpret_stops(None, n);
            assert_eq!(*stops.last().unwrap(), 1.0);
        }
    }
}
