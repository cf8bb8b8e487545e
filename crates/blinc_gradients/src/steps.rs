//! Stepped (hard-edged) gradients
//!
//! A stepped gradient paints each color as a solid band instead of blending
//! into its neighbour. It is built from an ordinary gradient definition by
//! placing every color twice and every band boundary twice:
//!
//! ```text
//! colors [red, blue], no stops, softness 0.0
//!   band starts          [0.0, 0.5]
//!   duplicated           [0.0, 0.0, 0.5, 0.5]
//!   drop leading 0.0     [0.0, 0.5, 0.5]
//!   close at 1.0         [0.0, 0.5, 0.5, 1.0]
//!   colors               [red, red, blue, blue]
//! ```
//!
//! `softness` nudges the second copy of each boundary forward so the edge
//! gets a tiny blend instead of an aliased step. The stepped sequences are
//! always recomputed from `colors`, `stops` and `softness`; nothing is cached.

use crate::color::Color;
use crate::continuous::{DEFAULT_END_ANGLE, DEFAULT_RADIUS};
use crate::error::Result;
use crate::geometry::{Alignment, GradientTransform, TileMode};
use crate::interpolate::StopLayout;
use crate::lerp::{
    self, lerp_focal, lerp_non_negative, lerp_ramp, lerp_softness, scale_colors,
    GradientLerp, RampFields,
};
use crate::stops::{duplicate_colors, duplicate_stops_with_offset};

/// Default softness of [`LinearSteps`]
pub const LINEAR_STEPS_SOFTNESS: f32 = 0.001;

/// Default softness of [`RadialSteps`]
pub const RADIAL_STEPS_SOFTNESS: f32 = 0.0025;

/// Default softness of [`SweepSteps`]
pub const SWEEP_STEPS_SOFTNESS: f32 = 0.0;

/// A gradient whose colors are painted as discrete bands
pub trait Steps {
    /// The base colors, one per band
    fn colors(&self) -> &[Color];

    /// Optional band start positions; must begin at 0.0 when present
    fn stops(&self) -> Option<&[f32]>;

    /// Offset added to the far side of every band boundary
    fn softness(&self) -> f32;

    /// Colors handed to the renderer: every base color twice
    fn stepped_colors(&self) -> Vec<Color> {
        duplicate_colors(self.colors())
    }

    /// Stops handed to the renderer, one per stepped color, ending at 1.0
    fn stepped_stops(&self) -> Vec<f32> {
        stepped_stops(self.colors().len(), self.stops(), self.softness())
    }
}

/// Band boundaries for `color_count` bands
///
/// Shared by every stepped gradient kind.
pub(crate) fn stepped_stops(
    color_count: usize,
    stops: Option<&[f32]>,
    softness: f32,
) -> Vec<f32> {
    if color_count == 0 {
        return Vec::new();
    }

    let band_starts = StopLayout::Stepped.interpret(stops, color_count);
    let mut stepped = duplicate_stops_with_offset(&band_starts, softness);

    // The first band starts at 0.0; its duplicate would open a zero-width band.
    match stepped.iter().position(|&s| s == 0.0) {
        Some(index) => {
            stepped.remove(index);
        }
        None => {
            tracing::warn!(
                first = ?stepped.first(),
                "stepped gradient stops do not start at 0.0"
            );
            stepped.remove(0);
        }
    }
    stepped.push(1.0);

    tracing::trace!(
        bands = color_count,
        softness,
        stops = ?stepped,
        "computed stepped stops"
    );

    stepped
}

// ─────────────────────────────────────────────────────────────────────────────
// LinearSteps
// ─────────────────────────────────────────────────────────────────────────────

/// Hard-edged linear gradient
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub begin: Alignment,
    pub end: Alignment,
    pub softness: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl LinearSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            begin: Alignment::CENTER_LEFT,
            end: Alignment::CENTER_RIGHT,
            softness: LINEAR_STEPS_SOFTNESS,
            tile_mode: TileMode::Clamp,
            transform: None,
        }
    }

    pub fn with_stops(mut self, stops: Vec<f32>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn with_begin(mut self, begin: Alignment) -> Self {
        self.begin = begin;
        self
    }

    pub fn with_end(mut self, end: Alignment) -> Self {
        self.end = end;
        self
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    pub fn with_transform(mut self, transform: GradientTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Result<Option<Self>> {
        lerp::lerp(a, b, t)
    }

    pub(crate) fn ramp_fields(&self) -> RampFields<'_> {
        RampFields {
            colors: &self.colors,
            stops: self.stops.as_deref(),
            tile_mode: self.tile_mode,
            transform: self.transform,
        }
    }
}

impl Steps for LinearSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }
}

impl GradientLerp for LinearSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(
            self.ramp_fields(),
            other.ramp_fields(),
            t,
            StopLayout::Stepped,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            begin: Alignment::lerp(self.begin, other.begin, t),
            end: Alignment::lerp(self.end, other.end, t),
            softness: lerp_softness(self.softness, other.softness, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RadialSteps
// ─────────────────────────────────────────────────────────────────────────────

/// Hard-edged radial gradient: concentric rings
#[derive(Clone, Debug, PartialEq)]
pub struct RadialSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    pub radius: f32,
    pub focal: Option<Alignment>,
    pub focal_radius: f32,
    pub softness: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl RadialSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            radius: DEFAULT_RADIUS,
            focal: None,
            focal_radius: 0.0,
            softness: RADIAL_STEPS_SOFTNESS,
            tile_mode: TileMode::Clamp,
            transform: None,
        }
    }

    pub fn with_stops(mut self, stops: Vec<f32>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn with_center(mut self, center: Alignment) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_focal(mut self, focal: Alignment, focal_radius: f32) -> Self {
        self.focal = Some(focal);
        self.focal_radius = focal_radius;
        self
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    pub fn with_transform(mut self, transform: GradientTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Result<Option<Self>> {
        lerp::lerp(a, b, t)
    }

    pub(crate) fn ramp_fields(&self) -> RampFields<'_> {
        RampFields {
            colors: &self.colors,
            stops: self.stops.as_deref(),
            tile_mode: self.tile_mode,
            transform: self.transform,
        }
    }
}

impl Steps for RadialSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }
}

impl GradientLerp for RadialSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(
            self.ramp_fields(),
            other.ramp_fields(),
            t,
            StopLayout::Stepped,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            radius: lerp_non_negative(self.radius, other.radius, t),
            focal: lerp_focal(self.focal, self.center, other.focal, other.center, t),
            focal_radius: lerp_non_negative(self.focal_radius, other.focal_radius, t),
            softness: lerp_softness(self.softness, other.softness, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SweepSteps
// ─────────────────────────────────────────────────────────────────────────────

/// Hard-edged sweep gradient: pie slices
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    pub start_angle: f32,
    pub end_angle: f32,
    pub softness: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl SweepSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            start_angle: 0.0,
            end_angle: DEFAULT_END_ANGLE,
            softness: SWEEP_STEPS_SOFTNESS,
            tile_mode: TileMode::Clamp,
            transform: None,
        }
    }

    pub fn with_stops(mut self, stops: Vec<f32>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn with_center(mut self, center: Alignment) -> Self {
        self.center = center;
        self
    }

    pub fn with_angles(mut self, start_angle: f32, end_angle: f32) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness;
        self
    }

    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    pub fn with_transform(mut self, transform: GradientTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Result<Option<Self>> {
        lerp::lerp(a, b, t)
    }

    pub(crate) fn ramp_fields(&self) -> RampFields<'_> {
        RampFields {
            colors: &self.colors,
            stops: self.stops.as_deref(),
            tile_mode: self.tile_mode,
            transform: self.transform,
        }
    }
}

impl Steps for SweepSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }
}

impl GradientLerp for SweepSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(
            self.ramp_fields(),
            other.ramp_fields(),
            t,
            StopLayout::Stepped,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            start_angle: lerp_non_negative(self.start_angle, other.start_angle, t),
            end_angle: lerp_non_negative(self.end_angle, other.end_angle, t),
            softness: lerp_softness(self.softness, other.softness, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_color_hard_edge() {
        let g = LinearSteps::new(vec![Color::RED, Color::BLUE]).with_softness(0.0);

        assert_eq!(
            g.stepped_colors(),
            vec![Color::RED, Color::RED, Color::BLUE, Color::BLUE]
        );
        assert_eq!(g.stepped_stops(), vec![0.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_softness_offsets_far_side() {
        let g = LinearSteps::new(vec![Color::RED, Color::BLUE]).with_softness(0.01);
        let stops = g.stepped_stops();

        assert_eq!(stops.len(), 4);
        assert!((stops[0] - 0.01).abs() < 1e-6);
        assert_eq!(stops[1], 0.5);
        assert!((stops[2] - 0.51).abs() < 1e-6);
        assert_eq!(stops[3], 1.0);
    }

    #[test]
    fn test_explicit_stops() {
        let g = SweepSteps::new(vec![Color::RED, Color::GREEN, Color::BLUE])
            .with_stops(vec![0.0, 0.2, 0.7]);

        assert_eq!(g.stepped_stops(), vec![0.0, 0.2, 0.2, 0.7, 0.7, 1.0]);
    }

    #[test]
    fn test_single_color() {
        let g = RadialSteps::new(vec![Color::RED]);
        let stops = g.stepped_stops();

        assert_eq!(g.stepped_colors(), vec![Color::RED, Color::RED]);
        assert_eq!(stops.len(), 2);
        assert!(stops[0] <= stops[1]);
        assert_eq!(stops[1], 1.0);
    }

    #[test]
    fn test_single_color_no_softness() {
        let g = SweepSteps::new(vec![Color::RED]);
        assert_eq!(g.stepped_stops(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_empty_colors() {
        let g = LinearSteps::new(Vec::new());
        assert!(g.stepped_colors().is_empty());
        assert!(g.stepped_stops().is_empty());
    }

    #[test]
    fn test_stepped_lengths_match() {
        for n in 1..12 {
            let colors = vec![Color::ORANGE; n];
            let linear = LinearSteps::new(colors.clone());
            let radial = RadialSteps::new(colors.clone());
            let sweep = SweepSteps::new(colors);

            for (c, s) in [
                (linear.stepped_colors(), linear.stepped_stops()),
                (radial.stepped_colors(), radial.stepped_stops()),
                (sweep.stepped_colors(), sweep.stepped_stops()),
            ] {
                assert_eq!(c.len(), 2 * n);
                assert_eq!(s.len(), c.len());
                assert_eq!(*s.last().unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn test_stops_not_starting_at_zero_keep_lengths() {
        crate::init_test_tracing();
        let g = LinearSteps::new(vec![Color::RED, Color::BLUE])
            .with_stops(vec![0.25, 0.5])
            .with_softness(0.0);
        let stops = g.stepped_stops();

        assert_eq!(stops.len(), g.stepped_colors().len());
        assert_eq!(stops, vec![0.25, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_default_softness() {
        assert_eq!(LinearSteps::new(vec![Color::RED]).softness, 0.001);
        assert_eq!(RadialSteps::new(vec![Color::RED]).softness, 0.0025);
        assert_eq!(SweepSteps::new(vec![Color::RED]).softness, 0.0);
    }

    #[test]
    fn test_recomputed_after_copy() {
        let g = LinearSteps::new(vec![Color::RED, Color::BLUE]).with_softness(0.0);
        let before = g.stepped_stops();
        let three = LinearSteps {
            colors: vec![Color::RED, Color::GREEN, Color::BLUE],
            ..g.clone()
        };

        assert_eq!(g.stepped_stops(), before);
        assert_eq!(three.stepped_stops().len(), 6);
    }

    #[test]
    fn test_radial_steps_lerp_none() {
        assert_eq!(RadialSteps::lerp(None, None, 0.5).unwrap(), None);
    }

    #[test]
    fn test_steps_lerp_endpoints() {
        let a = LinearSteps::new(vec![Color::RED, Color::BLUE]).with_softness(0.0);
        let b = LinearSteps::new(vec![Color::GREEN, Color::YELLOW])
            .with_stops(vec![0.0, 0.3])
            .with_softness(0.02);

        let at_zero = LinearSteps::lerp(Some(&a), Some(&b), 0.0).unwrap().unwrap();
        assert_eq!(at_zero.colors, a.colors);
        assert_eq!(at_zero.stops, Some(vec![0.0, 0.5]));
        assert_eq!(at_zero.stepped_stops(), a.stepped_stops());
        assert_eq!(at_zero.softness, 0.0);

        let at_one = LinearSteps::lerp(Some(&a), Some(&b), 1.0).unwrap().unwrap();
        assert_eq!(at_one.colors, b.colors);
        assert_eq!(at_one.stops, b.stops);
        assert!((at_one.softness - 0.02).abs() < 1e-7);
    }

    #[test]
    fn test_steps_lerp_without_stops_keeps_none() {
        let a = SweepSteps::new(vec![Color::RED, Color::BLUE]);
        let b = SweepSteps::new(vec![Color::BLUE, Color::RED]);

        let mid = SweepSteps::lerp(Some(&a), Some(&b), 0.5).unwrap().unwrap();
        assert!(mid.stops.is_none());
    }

    #[test]
    fn test_steps_lerp_against_none_scales() {
        let b = RadialSteps::new(vec![Color::RED, Color::BLUE]);

        let transparent = RadialSteps::lerp(None, Some(&b), 0.0).unwrap().unwrap();
        assert!(transparent.colors.iter().all(|c| c.a == 0.0));

        let opaque = RadialSteps::lerp(None, Some(&b), 1.0).unwrap().unwrap();
        assert_eq!(opaque, b);

        let half = RadialSteps::lerp(Some(&b), None, 0.5).unwrap().unwrap();
        assert!(half.colors.iter().all(|c| (c.a - 0.5).abs() < 1e-6));
    }

    #[test]
    fn test_scale_two_colors_to_zero() {
        let g = LinearSteps::new(vec![Color::RED, Color::BLUE])
            .with_stops(vec![0.0, 0.4])
            .with_begin(Alignment::TOP_LEFT);
        let faded = g.scale(0.0);

        assert!(faded.colors.iter().all(|c| c.a == 0.0));
        assert_eq!(faded.stops, g.stops);
        assert_eq!(faded.begin, g.begin);
        assert_eq!(faded.end, g.end);
        assert_eq!(faded.softness, g.softness);
    }

    #[test]
    fn test_steps_lerp_mismatch() {
        let a = RadialSteps::new(vec![Color::RED, Color::BLUE]);
        let b = RadialSteps::new(vec![Color::RED]);
        assert!(RadialSteps::lerp(Some(&a), Some(&b), 0.5).is_err());
    }

    #[test]
    fn test_steps_lerp_tie_breaks() {
        let a = RadialSteps::new(vec![Color::RED, Color::BLUE])
            .with_tile_mode(TileMode::Mirror)
            .with_transform(GradientTransform::Rotation(1.0));
        let b = RadialSteps::new(vec![Color::RED, Color::BLUE]).with_tile_mode(TileMode::Repeated);

        let early = RadialSteps::lerp(Some(&a), Some(&b), 0.25).unwrap().unwrap();
        assert_eq!(early.tile_mode, TileMode::Mirror);
        assert_eq!(early.transform, None);

        let late = RadialSteps::lerp(Some(&a), Some(&b), 0.75).unwrap().unwrap();
        assert_eq!(late.tile_mode, TileMode::Repeated);
        assert_eq!(late.transform, Some(GradientTransform::Rotation(1.0)));
    }

    #[test]
    fn test_radial_steps_lerp_missing_focal_keeps_endpoints() {
        use crate::geometry::Rect;
        use crate::gradient::Gradient;

        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let a = RadialSteps::new(vec![Color::RED, Color::BLUE]).with_center(Alignment::TOP_LEFT);
        let b = RadialSteps::new(vec![Color::RED, Color::BLUE])
            .with_center(Alignment::BOTTOM_RIGHT)
            .with_focal(Alignment::TOP_LEFT, 0.0);

        let start = RadialSteps::lerp(Some(&a), Some(&b), 0.0).unwrap().unwrap();
        assert_eq!(start.focal, None);
        assert_eq!(
            Gradient::from(start).resolve(bounds),
            Gradient::from(a.clone()).resolve(bounds)
        );

        let end = RadialSteps::lerp(Some(&a), Some(&b), 1.0).unwrap().unwrap();
        assert_eq!(
            Gradient::from(end).resolve(bounds),
            Gradient::from(b.clone()).resolve(bounds)
        );

        // The missing focal stands at a's center, not the middle of the box
        let mid = RadialSteps::lerp(Some(&a), Some(&b), 0.5).unwrap().unwrap();
        assert_eq!(mid.focal, Some(Alignment::TOP_LEFT));
    }
}
