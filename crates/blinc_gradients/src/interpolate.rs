//! Interpolation primitives shared by every gradient type
//!
//! - scalar lerp (unclamped `t`)
//! - `interpolate_from`: pairwise cross-fade of two equal-length color ramps
//! - ramp sampling and stop merging for cross-kind ("stretch") interpolation

use smallvec::SmallVec;

use crate::color::Color;
use crate::error::{GradientError, Result};
use crate::stops::interpret_stops;

/// Linear interpolation between two scalars, `t` unconstrained
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// How a gradient kind lays out stops when none are given
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopLayout {
    /// `n` colors spread over `[0, 1]` inclusive (`i / (n - 1)`)
    Continuous,
    /// `n` bands starting at `i / n`; the closing 1.0 is implicit
    Stepped,
}

impl StopLayout {
    /// Stops for `count` colors under this layout
    pub fn interpret(self, stops: Option<&[f32]>, count: usize) -> Vec<f32> {
        match self {
            StopLayout::Continuous => interpret_stops(stops, count),
            StopLayout::Stepped => {
                let mut interpreted = interpret_stops(stops, count + 1);
                if stops.is_none() {
                    interpreted.pop();
                }
                interpreted
            }
        }
    }
}

/// A borrowed color ramp: colors plus optional stops
#[derive(Clone, Copy, Debug)]
pub struct Ramp<'a> {
    pub colors: &'a [Color],
    pub stops: Option<&'a [f32]>,
}

impl<'a> Ramp<'a> {
    pub fn new(colors: &'a [Color], stops: Option<&'a [f32]>) -> Self {
        Self { colors, stops }
    }
}

/// Colors and stops produced by `interpolate_from`
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolated {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
}

/// Cross-fade two color ramps of equal length
///
/// Colors are interpolated pairwise. Stops stay `None` when neither side
/// has explicit stops; otherwise both sides are interpreted with `layout`
/// and interpolated pairwise.
pub fn interpolate_from(
    a: Ramp<'_>,
    b: Ramp<'_>,
    t: f32,
    layout: StopLayout,
) -> Result<Interpolated> {
    if a.colors.len() != b.colors.len() {
        tracing::warn!(
            "refusing to interpolate gradients with {} and {} colors",
            a.colors.len(),
            b.colors.len()
        );
        return Err(GradientError::ShapeMismatch {
            left: a.colors.len(),
            right: b.colors.len(),
        });
    }

    let colors = a
        .colors
        .iter()
        .zip(b.colors)
        .map(|(from, to)| Color::lerp(from, to, t))
        .collect();

    let stops = if a.stops.is_none() && b.stops.is_none() {
        None
    } else {
        let count = a.colors.len();
        let from = layout.interpret(a.stops, count);
        let to = layout.interpret(b.stops, count);
        if from.len() != to.len() {
            tracing::warn!(
                "refusing to interpolate gradients with {} and {} stops",
                from.len(),
                to.len()
            );
            return Err(GradientError::StopCountMismatch {
                left: from.len(),
                right: to.len(),
            });
        }
        Some(
            from.iter()
                .zip(&to)
                .map(|(&s0, &s1)| lerp_f32(s0, s1, t))
                .collect(),
        )
    };

    Ok(Interpolated { colors, stops })
}

/// Stop positions shared by two ramps, each tagged with its repeat index
///
/// A position that appears `k` times in either list (a hard edge) appears
/// `k` times in the result. Both inputs are expected in ascending order.
pub(crate) fn merge_stop_positions(a: &[f32], b: &[f32]) -> SmallVec<[(f32, usize); 16]> {
    fn run_len(stops: &[f32], position: f32) -> usize {
        stops.iter().take_while(|&&s| s == position).count()
    }

    let mut merged = SmallVec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        let take_b = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => y < x,
            (None, Some(_)) => true,
            _ => false,
        };
        let position = if take_b { b[j] } else { a[i] };

        let run_a = run_len(&a[i..], position);
        let run_b = run_len(&b[j..], position);
        // Non-comparable positions (NaN) still consume their own entry
        let (run_a, run_b) = if take_b {
            (run_a, run_b.max(1))
        } else {
            (run_a.max(1), run_b)
        };

        for occurrence in 0..run_a.max(run_b) {
            merged.push((position, occurrence));
        }
        i += run_a;
        j += run_b;
    }

    merged
}

/// Color of a resolved ramp at `position`
///
/// When `position` coincides with a run of equal stops, `occurrence`
/// selects which entry of the run is returned so hard edges survive.
pub(crate) fn sample_ramp(
    colors: &[Color],
    stops: &[f32],
    position: f32,
    occurrence: usize,
) -> Color {
    let Some(first) = colors.first() else {
        return Color::TRANSPARENT;
    };

    if let Some(start) = stops.iter().position(|&s| s == position) {
        let run = stops[start..].iter().take_while(|&&s| s == position).count();
        let index = (start + occurrence.min(run - 1)).min(colors.len() - 1);
        return colors[index];
    }

    match stops.iter().position(|&s| s > position) {
        Some(0) => *first,
        Some(upper) if upper < colors.len() => {
            let (s0, s1) = (stops[upper - 1], stops[upper]);
            let local = (position - s0) / (s1 - s0);
            Color::lerp(&colors[upper - 1], &colors[upper], local)
        }
        _ => colors[colors.len() - 1],
    }
}
