//! Shaded stepped gradients
//!
//! Each band starts at its base color, shades toward a derived color over
//! the first `distance` fraction of the band, then holds the shade until the
//! band's hard edge. Three renderer stops are emitted per band:
//!
//! ```text
//! band i:  [start_i, start_i + (end_i - start_i) * distance, end_i]
//! colors:  [c_i,     shade(c_i),                             shade(c_i)]
//! ```
//!
//! Every band but the first starts `softness` after the previous band ends.

use crate::color::Color;
use crate::continuous::{DEFAULT_END_ANGLE, DEFAULT_RADIUS};
use crate::error::Result;
use crate::geometry::{Alignment, GradientTransform, TileMode};
use crate::interpolate::{lerp_f32, StopLayout};
use crate::lerp::{
    self, lerp_focal, lerp_non_negative, lerp_ramp, lerp_softness, scale_colors,
    GradientLerp, RampFields,
};
use crate::steps::{Steps, LINEAR_STEPS_SOFTNESS, RADIAL_STEPS_SOFTNESS, SWEEP_STEPS_SOFTNESS};

/// Default shade factor: darken by 90/255
pub const DEFAULT_SHADE_FACTOR: f32 = -90.0;

/// Default fraction of a band spent shading
pub const DEFAULT_SHADE_DISTANCE: f32 = 0.6;

/// How a band's shade color is derived from its base color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadeFunction {
    /// Add `factor / 255` to each RGB channel (negative darkens)
    #[default]
    WithWhite,
    /// Scale alpha by `1 + factor / 100` (negative fades)
    WithOpacity,
}

impl ShadeFunction {
    pub fn apply(&self, color: Color, factor: f32) -> Color {
        match self {
            ShadeFunction::WithWhite => {
                let shift = factor / 255.0;
                Color::rgba(
                    (color.r + shift).clamp(0.0, 1.0),
                    (color.g + shift).clamp(0.0, 1.0),
                    (color.b + shift).clamp(0.0, 1.0),
                    color.a,
                )
            }
            ShadeFunction::WithOpacity => {
                color.with_alpha((color.a * (1.0 + factor / 100.0)).clamp(0.0, 1.0))
            }
        }
    }
}

pub(crate) fn shaded_stepped_colors(
    colors: &[Color],
    shade: ShadeFunction,
    factor: f32,
) -> Vec<Color> {
    let mut out = Vec::with_capacity(colors.len() * 3);
    for &color in colors {
        let shaded = shade.apply(color, factor);
        out.extend([color, shaded, shaded]);
    }
    out
}

pub(crate) fn shaded_stepped_stops(
    color_count: usize,
    stops: Option<&[f32]>,
    softness: f32,
    distance: f32,
) -> Vec<f32> {
    if color_count == 0 {
        return Vec::new();
    }

    let mut bounds = StopLayout::Stepped.interpret(stops, color_count);
    bounds.push(1.0);

    let mut out = Vec::with_capacity(color_count * 3);
    for (i, band) in bounds.windows(2).enumerate() {
        let start = if i == 0 { band[0] } else { band[0] + softness };
        let end = band[1];
        out.extend([start, start + (end - start) * distance, end]);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// LinearShadedSteps
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct LinearShadedSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub begin: Alignment,
    pub end: Alignment,
    pub softness: f32,
    pub shade_function: ShadeFunction,
    pub shade_factor: f32,
    pub distance: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl LinearShadedSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            begin: Alignment::CENTER_LEFT,
            end: Alignment::CENTER_RIGHT,
            softness: LINEAR_STEPS_SOFTNESS,
            shade_function: ShadeFunction::WithWhite,
            shade_factor: DEFAULT_SHADE_FACTOR,
            distance: DEFAULT_SHADE_DISTANCE,
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

    pub fn with_shading(
        mut self,
        shade_function: ShadeFunction,
        shade_factor: f32,
        distance: f32,
    ) -> Self {
        self.shade_function = shade_function;
        self.shade_factor = shade_factor;
        self.distance = distance;
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

impl Steps for LinearShadedSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }

    fn stepped_colors(&self) -> Vec<Color> {
        shaded_stepped_colors(&self.colors, self.shade_function, self.shade_factor)
    }

    fn stepped_stops(&self) -> Vec<f32> {
        shaded_stepped_stops(self.colors.len(), self.stops.as_deref(), self.softness, self.distance)
    }
}

impl GradientLerp for LinearShadedSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(self.ramp_fields(), other.ramp_fields(), t, StopLayout::Stepped)?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            begin: Alignment::lerp(self.begin, other.begin, t),
            end: Alignment::lerp(self.end, other.end, t),
            softness: lerp_softness(self.softness, other.softness, t),
            shade_function: pick_shade_function(self.shade_function, other.shade_function, t),
            shade_factor: lerp_f32(self.shade_factor, other.shade_factor, t),
            distance: lerp_f32(self.distance, other.distance, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RadialShadedSteps
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct RadialShadedSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    pub radius: f32,
    pub focal: Option<Alignment>,
    pub focal_radius: f32,
    pub softness: f32,
    pub shade_function: ShadeFunction,
    pub shade_factor: f32,
    pub distance: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl RadialShadedSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            radius: DEFAULT_RADIUS,
            focal: None,
            focal_radius: 0.0,
            softness: RADIAL_STEPS_SOFTNESS,
            shade_function: ShadeFunction::WithWhite,
            shade_factor: DEFAULT_SHADE_FACTOR,
            distance: DEFAULT_SHADE_DISTANCE,
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

    pub fn with_shading(
        mut self,
        shade_function: ShadeFunction,
        shade_factor: f32,
        distance: f32,
    ) -> Self {
        self.shade_function = shade_function;
        self.shade_factor = shade_factor;
        self.distance = distance;
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

impl Steps for RadialShadedSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }

    fn stepped_colors(&self) -> Vec<Color> {
        shaded_stepped_colors(&self.colors, self.shade_function, self.shade_factor)
    }

    fn stepped_stops(&self) -> Vec<f32> {
        shaded_stepped_stops(self.colors.len(), self.stops.as_deref(), self.softness, self.distance)
    }
}

impl GradientLerp for RadialShadedSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(self.ramp_fields(), other.ramp_fields(), t, StopLayout::Stepped)?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            radius: lerp_non_negative(self.radius, other.radius, t),
            focal: lerp_focal(self.focal, self.center, other.focal, other.center, t),
            focal_radius: lerp_non_negative(self.focal_radius, other.focal_radius, t),
            softness: lerp_softness(self.softness, other.softness, t),
            shade_function: pick_shade_function(self.shade_function, other.shade_function, t),
            shade_factor: lerp_f32(self.shade_factor, other.shade_factor, t),
            distance: lerp_f32(self.distance, other.distance, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SweepShadedSteps
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SweepShadedSteps {
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f32>>,
    pub center: Alignment,
    pub start_angle: f32,
    pub end_angle: f32,
    pub softness: f32,
    pub shade_function: ShadeFunction,
    pub shade_factor: f32,
    pub distance: f32,
    pub tile_mode: TileMode,
    pub transform: Option<GradientTransform>,
}

impl SweepShadedSteps {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            stops: None,
            center: Alignment::CENTER,
            start_angle: 0.0,
            end_angle: DEFAULT_END_ANGLE,
            softness: SWEEP_STEPS_SOFTNESS,
            shade_function: ShadeFunction::WithWhite,
            shade_factor: DEFAULT_SHADE_FACTOR,
            distance: DEFAULT_SHADE_DISTANCE,
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

    pub fn with_shading(
        mut self,
        shade_function: ShadeFunction,
        shade_factor: f32,
        distance: f32,
    ) -> Self {
        self.shade_function = shade_function;
        self.shade_factor = shade_factor;
        self.distance = distance;
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

impl Steps for SweepShadedSteps {
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    fn stops(&self) -> Option<&[f32]> {
        self.stops.as_deref()
    }

    fn softness(&self) -> f32 {
        self.softness
    }

    fn stepped_colors(&self) -> Vec<Color> {
        shaded_stepped_colors(&self.colors, self.shade_function, self.shade_factor)
    }

    fn stepped_stops(&self) -> Vec<f32> {
        shaded_stepped_stops(self.colors.len(), self.stops.as_deref(), self.softness, self.distance)
    }
}

impl GradientLerp for SweepShadedSteps {
    fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            ..self.clone()
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        let ramp = lerp_ramp(self.ramp_fields(), other.ramp_fields(), t, StopLayout::Stepped)?;

        Ok(Self {
            colors: ramp.colors,
            stops: ramp.stops,
            center: Alignment::lerp(self.center, other.center, t),
            start_angle: lerp_non_negative(self.start_angle, other.start_angle, t),
            end_angle: lerp_non_negative(self.end_angle, other.end_angle, t),
            softness: lerp_softness(self.softness, other.softness, t),
            shade_function: pick_shade_function(self.shade_function, other.shade_function, t),
            shade_factor: lerp_f32(self.shade_factor, other.shade_factor, t),
            distance: lerp_f32(self.distance, other.distance, t),
            tile_mode: ramp.tile_mode,
            transform: ramp.transform,
        })
    }
}

/// Shade functions are discrete; they switch at the midpoint like tile modes
fn pick_shade_function(a: ShadeFunction, b: ShadeFunction, t: f32) -> ShadeFunction {
    if t < 0.5 {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_white_darkens() {
        let shaded = ShadeFunction::WithWhite.apply(Color::WHITE, -51.0);
        assert!((shaded.r - 0.8).abs() < 1e-6);
        assert!((shaded.g - 0.8).abs() < 1e-6);
        assert_eq!(shaded.a, 1.0);

        let clamped = ShadeFunction::WithWhite.apply(Color::BLACK, -90.0);
        assert_eq!(clamped.r, 0.0);
    }

    #[test]
    fn test_with_opacity() {
        let shaded = ShadeFunction::WithOpacity.apply(Color::RED, -50.0);
        assert!((shaded.a - 0.5).abs() < 1e-6);
        assert_eq!(shaded.r, 1.0);
    }

    #[test]
    fn test_shaded_stepped_sequences() {
        let g = LinearShadedSteps::new(vec![Color::WHITE, Color::BLACK])
            .with_softness(0.0)
            .with_shading(ShadeFunction::WithWhite, -51.0, 0.5);

        let colors = g.stepped_colors();
        let stops = g.stepped_stops();

        assert_eq!(colors.len(), 6);
        assert_eq!(stops, vec![0.0, 0.25, 0.5, 0.5, 0.75, 1.0]);
        assert_eq!(colors[0], Color::WHITE);
        assert_eq!(colors[1], colors[2]);
        assert!((colors[1].r - 0.8).abs() < 1e-6);
        assert_eq!(colors[3], Color::BLACK);
    }

    #[test]
    fn test_shaded_softness_offsets_later_bands() {
        let g = SweepShadedSteps::new(vec![Color::RED, Color::BLUE])
            .with_softness(0.1)
            .with_shading(ShadeFunction::WithWhite, 0.0, 0.0);
        let stops = g.stepped_stops();

        assert_eq!(stops[0], 0.0);
        assert!((stops[3] - 0.6).abs() < 1e-6);
        assert_eq!(*stops.last().unwrap(), 1.0);
    }

    #[test]
    fn test_shaded_lengths_match() {
        for n in 1..8 {
            let g = RadialShadedSteps::new(vec![Color::PURPLE; n]);
            assert_eq!(g.stepped_colors().len(), 3 * n);
            assert_eq!(g.stepped_stops().len(), 3 * n);
            assert_eq!(*g.stepped_stops().last().unwrap(), 1.0);
        }
    }

    #[test]
    fn test_shaded_lerp() {
        let a = RadialShadedSteps::new(vec![Color::RED, Color::BLUE])
            .with_shading(ShadeFunction::WithWhite, -100.0, 0.2);
        let b = RadialShadedSteps::new(vec![Color::RED, Color::BLUE])
            .with_shading(ShadeFunction::WithOpacity, 0.0, 0.6);

        let mid = RadialShadedSteps::lerp(Some(&a), Some(&b), 0.5).unwrap().unwrap();
        assert!((mid.shade_factor + 50.0).abs() < 1e-4);
        assert!((mid.distance - 0.4).abs() < 1e-6);
        assert_eq!(mid.shade_function, ShadeFunction::WithOpacity);

        let early = RadialShadedSteps::lerp(Some(&a), Some(&b), 0.1).unwrap().unwrap();
        assert_eq!(early.shade_function, ShadeFunction::WithWhite);
    }
}
