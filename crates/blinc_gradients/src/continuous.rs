//! Continuous (blended) gradients
//!
//! These are the plain linear, radial and sweep gradients the renderer
//! knows how to paint. Stepped gradients are defined on top of them.

use std::f32::consts::TAU;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Alignment, GradientTransform, TileMode};
use crate::interpolate::StopLayout;
use crate::lerp::{
    self, lerp_focal, lerp_non_negative, lerp_ramp, scale_colors, GradientLerp, RampFields,
};

/// Default radius of a radial gradient, as a fraction of the shortest side
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Default sweep end angle (a full turn)
pub const DEFAULT_END_ANGLE: f32 = TAU;

// ─────────────────────────────────────────────────────────────────────────────
// Linear
// ─────────────────────────────────────────────────────────────────────────────

/// Linear gradient between two alignments
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    /// Where stop 0.0 sits
    pub begin: Alignment,
    /// Where stop 1.0 sits
    pub end: Alignment,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl LinearGradient {
    /// Left-to-right gradient through `colors`
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            begin: Alignment::CENTER_LEFT,
            end: Alignment::CENTER_RIGHT,
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

impl GradientLerp for LinearGradient {
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
            StopLayout::Continuous,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            begin: Alignment::lerp(self.begin, other.begin, t),
            end: Alignment::lerp(self.end, other.end, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Radial
// ─────────────────────────────────────────────────────────────────────────────

/// Radial gradient growing out of `center`
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    /// Radius as a fraction of the shortest side of the painted box
    pub radius: f32,
    /// Optional focal point (if None, same as center)
    pub focal: Option<Alignment>,
    pub focal_radius: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl RadialGradient {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            radius: DEFAULT_RADIUS,
            focal: None,
            focal_radius: 0.0,
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

impl GradientLerp for RadialGradient {
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
            StopLayout::Continuous,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            radius: lerp_non_negative(self.radius, other.radius, t),
            focal: lerp_focal(self.focal, self.center, other.focal, other.center, t),
            focal_radius: lerp_non_negative(self.focal_radius, other.focal_radius, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sweep
// ─────────────────────────────────────────────────────────────────────────────

/// Sweep (conic) gradient around `center`
#[derive(Clone, Debug, PartialEq)]
pub struct SweepGradient {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    /// Angle in radians where stop 0.0 sits
    pub start_angle: f32,
    /// Angle in radians where stop 1.0 sits
    pub end_angle: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl SweepGradient {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            start_angle: 0.0,
            end_angle: DEFAULT_END_ANGLE,
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

impl GradientLerp for SweepGradient {
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
            StopLayout::Continuous,
        )?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            start_angle: lerp_non_negative(self.start_angle, other.start_angle, t),
            end_angle: lerp_non_negative(self.end_angle, other.end_angle, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_defaults() {
        let g = LinearGradient::new(vec![Color::RED, Color::BLUE]);
        assert_eq!(g.begin, Alignment::CENTER_LEFT);
        assert_eq!(g.end, Alignment::CENTER_RIGHT);
        assert_eq!(g.tile_mode, TileMode::Clamp);
        assert!(g.stops.is_none());
    }

    #[test]
    fn test_linear_lerp_endpoints() {
        let a = LinearGradient::new(vec![Color::RED, Color::BLUE]);
        let b = LinearGradient::new(vec![Color::GREEN, Color::YELLOW])
            .with_begin(Alignment::TOP_CENTER)
            .with_end(Alignment::BOTTOM_CENTER);

        let at_zero = LinearGradient::lerp(Some(&a), Some(&b), 0.0).unwrap().unwrap();
        assert_eq!(at_zero.colors, a.colors);
        assert_eq!(at_zero.begin, a.begin);
        assert_eq!(at_zero.end, a.end);

        let at_one = LinearGradient::lerp(Some(&a), Some(&b), 1.0).unwrap().unwrap();
        assert_eq!(at_one.colors, b.colors);
        assert_eq!(at_one.begin, b.begin);
        assert_eq!(at_one.end, b.end);
    }

    #[test]
    fn test_radial_lerp_clamps_radius() {
        let a = RadialGradient::new(vec![Color::RED, Color::BLUE]).with_radius(0.2);
        let b = RadialGradient::new(vec![Color::RED, Color::BLUE]).with_radius(0.8);

        let under = RadialGradient::lerp(Some(&a), Some(&b), -1.0).unwrap().unwrap();
        assert_eq!(under.radius, 0.0);

        let over = RadialGradient::lerp(Some(&a), Some(&b), 2.0).unwrap().unwrap();
        assert!((over.radius - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_radial_lerp_focal() {
        let a = RadialGradient::new(vec![Color::RED, Color::BLUE]);
        let b = RadialGradient::new(vec![Color::RED, Color::BLUE])
            .with_focal(Alignment::CENTER_RIGHT, 0.2);

        let mid = RadialGradient::lerp(Some(&a), Some(&b), 0.5).unwrap().unwrap();
        assert_eq!(mid.focal, Some(Alignment::new(0.5, 0.0)));
        assert!((mid.focal_radius - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_lerp_clamps_angles() {
        let a = SweepGradient::new(vec![Color::RED, Color::BLUE]).with_angles(0.0, 1.0);
        let b = SweepGradient::new(vec![Color::RED, Color::BLUE]).with_angles(1.0, 2.0);

        let g = SweepGradient::lerp(Some(&a), Some(&b), -3.0).unwrap().unwrap();
        assert_eq!(g.start_angle, 0.0);
        assert_eq!(g.end_angle, 0.0);
    }

    #[test]
    fn test_scale_keeps_geometry() {
        let g = SweepGradient::new(vec![Color::RED, Color::BLUE])
            .with_stops(vec![0.0, 1.0])
            .with_angles(0.5, 1.5);

        let faded = g.scale(0.0);
        assert!(faded.colors.iter().all(|c| c.a == 0.0));
        assert_eq!(faded.stops, g.stops);
        assert_eq!(faded.start_angle, 0.5);
        assert_eq!(faded.end_angle, 1.5);
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let a = LinearGradient::new(vec![Color::RED, Color::BLUE]);
        let b = LinearGradient::new(vec![Color::RED, Color::GREEN, Color::BLUE]);
        assert!(LinearGradient::lerp(Some(&a), Some(&b), 0.5).is_err());
    }
}
