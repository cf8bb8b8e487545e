//! Gradient interpolation
//!
//! Every gradient kind implements [`GradientLerp`]; the free function
//! [`lerp`] adds the rules for a missing side:
//!
//! | a | b | result |
//! |---|---|---|
//! | `None` | `None` | `None` |
//! | `None` | `b` | `b.scale(t)` |
//! | `a` | `None` | `a.scale(1 - t)` |
//! | `a` | `b` | `a.lerp_to(b, t)` |
//!
//! `t` is never clamped. Only radii and angles are floored at zero after
//! interpolation; colors clamp per channel, everything else extrapolates.

use crate::color::{lerp_color, Color};
use crate::error::Result;
use crate::geometry::{Alignment, GradientTransform, TileMode};
use crate::interpolate::{interpolate_from, lerp_f32, Interpolated, Ramp, StopLayout};

/// A gradient kind that can be faded and interpolated
pub trait GradientLerp: Sized {
    /// Fade every color toward transparent by `factor`
    ///
    /// `factor <= 0` is fully transparent, `factor >= 1` leaves the colors
    /// unchanged. Stops and geometry are untouched.
    fn scale(&self, factor: f32) -> Self;

    /// Interpolate toward `other` of the same kind
    ///
    /// Fails with [`GradientError::ShapeMismatch`](crate::GradientError)
    /// when the two gradients have different color counts, and with
    /// `StopCountMismatch` when their stops resolve to different lengths.
    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self>;
}

/// Interpolate two optional gradients of the same kind
pub fn lerp<G: GradientLerp>(a: Option<&G>, b: Option<&G>, t: f32) -> Result<Option<G>> {
    match (a, b) {
        (None, None) => Ok(None),
        (None, Some(b)) => Ok(Some(b.scale(t))),
        (Some(a), None) => Ok(Some(a.scale(1.0 - t))),
        (Some(a), Some(b)) => a.lerp_to(b, t).map(Some),
    }
}

/// Fields every gradient kind carries, borrowed for interpolation
#[derive(Clone, Copy, Debug)]
pub(crate) struct RampFields<'a> {
    pub colors: &'a [Color],
    pub stops: Option<&'a [f32]>,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

/// Interpolated common fields, ready for a constructor
#[derive(Clone, Debug)]
pub(crate) struct LerpedRamp {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

pub(crate) fn lerp_ramp(
    a: RampFields<'_>,
    b: RampFields<'_>,
    t: f32,
    layout: StopLayout,
) -> Result<LerpedRamp> {
    let Interpolated { colors, stops } = interpolate_from(
        Ramp::new(a.colors, a.stops),
        Ramp::new(b.colors, b.stops),
        t,
        layout,
    )?;

    Ok(LerpedRamp {
        colors,
        stops,
        tile_mode: pick_tile_mode(a.tile_mode, b.tile_mode, t),
        transform: pick_transform(a.transform, b.transform, t),
    })
}

/// Fade colors toward transparent
pub(crate) fn scale_colors(colors: &[Color], factor: f32) -> Vec<Color> {
    colors
        .iter()
        .filter_map(|&color| lerp_color(None, Some(color), factor))
        .collect()
}

// The two tie-breaks point in opposite directions: a transform comes from
// `a` only past the midpoint, a tile mode comes from `a` only before it.

pub(crate) fn pick_transform(
    a: Option<GradientTransform>,
    b: Option<GradientTransform>,
    t: f32,
) -> Option<GradientTransform> {
    if t > 0.5 {
        a
    } else {
        b
    }
}

pub(crate) fn pick_tile_mode(a: TileMode, b: TileMode, t: f32) -> TileMode {
    if t < 0.5 {
        a
    } else {
        b
    }
}

/// Lerp floored at zero; NaN passes through
pub(crate) fn lerp_non_negative(a: f32, b: f32, t: f32) -> f32 {
    let value = lerp_f32(a, b, t);
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Interpolate two optional focal points
///
/// A missing focal sits at its gradient's own center, so that center stands
/// in for it. At the endpoint of a side without a focal the result stays
/// `None`.
pub(crate) fn lerp_focal(
    a: Option<Alignment>,
    a_center: Alignment,
    b: Option<Alignment>,
    b_center: Alignment,
    t: f32,
) -> Option<Alignment> {
    match (a, b) {
        (None, None) => None,
        (None, Some(_)) if t == 0.0 => None,
        (Some(_), None) if t == 1.0 => None,
        _ => Some(Alignment::lerp(
            a.unwrap_or(a_center),
            b.unwrap_or(b_center),
            t,
        )),
    }
}

/// Lerp that falls back to zero when the result is not finite
pub(crate) fn lerp_softness(a: f32, b: f32, t: f32) -> f32 {
    let value = lerp_f32(a, b, t);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradientError;

    #[derive(Clone, Debug, PartialEq)]
    struct Single(f32);

    impl GradientLerp for Single {
        fn scale(&self, factor: f32) -> Self {
            Single(self.0 * factor)
        }

        fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
            if other.0 < 0.0 {
                return Err(GradientError::ShapeMismatch { left: 1, right: 0 });
            }
            Ok(Single(lerp_f32(self.0, other.0, t)))
        }
    }

    #[test]
    fn test_lerp_missing_sides() {
        assert_eq!(lerp::<Single>(None, None, 0.5).unwrap(), None);
        assert_eq!(
            lerp(None, Some(&Single(4.0)), 0.25).unwrap(),
            Some(Single(1.0))
        );
        assert_eq!(
            lerp(Some(&Single(4.0)), None, 0.25).unwrap(),
            Some(Single(3.0))
        );
        assert_eq!(
            lerp(Some(&Single(0.0)), Some(&Single(10.0)), 0.5).unwrap(),
            Some(Single(5.0))
        );
    }

    #[test]
    fn test_lerp_propagates_errors() {
        assert!(lerp(Some(&Single(0.0)), Some(&Single(-1.0)), 0.5).is_err());
    }

    #[test]
    fn test_tie_breaks() {
        let ta = Some(GradientTransform::Rotation(1.0));
        let tb = Some(GradientTransform::Rotation(2.0));

        assert_eq!(pick_transform(ta, tb, 0.0), tb);
        assert_eq!(pick_transform(ta, tb, 0.5), tb);
        assert_eq!(pick_transform(ta, tb, 0.51), ta);

        assert_eq!(pick_tile_mode(TileMode::Mirror, TileMode::Decal, 0.49), TileMode::Mirror);
        assert_eq!(pick_tile_mode(TileMode::Mirror, TileMode::Decal, 0.5), TileMode::Decal);
    }

    #[test]
    fn test_lerp_non_negative() {
        assert_eq!(lerp_non_negative(0.5, 1.0, -2.0), 0.0);
        assert_eq!(lerp_non_negative(0.5, 1.0, 1.0), 1.0);
        assert!(lerp_non_negative(f32::NAN, 1.0, 0.5).is_nan());
    }

    #[test]
    fn test_lerp_focal_uses_own_center() {
        let center = Alignment::TOP_LEFT;
        let focal = Some(Alignment::BOTTOM_RIGHT);

        assert_eq!(lerp_focal(None, center, None, center, 0.5), None);
        assert_eq!(lerp_focal(None, center, focal, center, 0.0), None);
        assert_eq!(lerp_focal(focal, center, None, center, 1.0), None);
        assert_eq!(lerp_focal(None, center, focal, center, 1.0), focal);
        assert_eq!(
            lerp_focal(None, center, focal, Alignment::CENTER, 0.5),
            Some(Alignment::CENTER)
        );
        assert_eq!(
            lerp_focal(focal, Alignment::CENTER, None, Alignment::CENTER_RIGHT, 0.5),
            Some(Alignment::new(1.0, 0.5))
        );
    }

    #[test]
    fn test_lerp_softness_non_finite() {
        assert_eq!(lerp_softness(f32::INFINITY, 0.0, 0.5), 0.0);
        assert_eq!(lerp_softness(0.0, 0.01, f32::NAN), 0.0);
        assert!((lerp_softness(0.0, 0.01, 0.5) - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_scale_colors() {
        let scaled = scale_colors(&[Color::RED, Color::BLUE], 0.0);
        assert!(scaled.iter().all(|c| c.a == 0.0));
        assert_eq!(scaled[0].r, 1.0);
    }
}
