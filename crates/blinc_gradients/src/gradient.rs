//! The gradient sum type
//!
//! [`Gradient`] is what style code holds on to: any of the concrete kinds,
//! a cross-kind blend in flight, a render-ready ramp, or a user extension.
//! The accessors here answer every field question for every kind, falling
//! back to a neutral default when the kind has no such field, so callers
//! (and `copy_with`) never need to match on the variant themselves.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::continuous::{LinearGradient, RadialGradient, SweepGradient};
use crate::copy_with::GradientOverrides;
use crate::error::Result;
use crate::geometry::{Alignment, GradientTransform, Rect, TileMode};
use crate::intermediate::{IntermediateGradient, PrimitiveGradient};
use crate::lerp::{self, pick_tile_mode, pick_transform, scale_colors, GradientLerp};
use crate::shaded::{LinearShadedSteps, RadialShadedSteps, ShadeFunction, SweepShadedSteps};
use crate::shader::ResolvedGradient;
use crate::steps::{LinearSteps, RadialSteps, SweepSteps, Steps};

/// A gradient kind defined outside this crate
///
/// Only the universal fields are visible to the rest of the crate. Overrides
/// applied to a custom gradient rebuild it as a [`RadialGradient`], since
/// there is no way to construct an unknown kind.
pub trait CustomGradient: fmt::Debug + Send + Sync {
    fn colors(&self) -> &[Color];

    fn stops(&self) -> Option<&[f32]>;

    fn tile_mode(&self) -> TileMode {
        TileMode::Clamp
    }

    fn transform(&self) -> Option<GradientTransform> {
        None
    }

    /// Center to keep when rebuilt as a radial gradient
    fn center(&self) -> Option<Alignment> {
        None
    }

    /// Radius to keep when rebuilt as a radial gradient
    fn radius(&self) -> Option<f32> {
        None
    }

    /// Pixel-space geometry for the renderer
    fn resolve(&self, bounds: Rect) -> ResolvedGradient;
}

/// Any gradient
#[derive(Clone, Debug)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
    Sweep(SweepGradient),
    LinearSteps(LinearSteps),
    RadialSteps(RadialSteps),
    SweepSteps(SweepSteps),
    LinearShadedSteps(LinearShadedSteps),
    RadialShadedSteps(RadialShadedSteps),
    SweepShadedSteps(SweepShadedSteps),
    /// Cross-kind blend produced by [`Gradient::lerp`]
    Intermediate(IntermediateGradient),
    /// Explicit color ramp; immune to overrides
    Primitive(PrimitiveGradient),
    Custom(Arc<dyn CustomGradient>),
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        use Gradient::*;
        match (self, other) {
            (Linear(a), Linear(b)) => a == b,
            (Radial(a), Radial(b)) => a == b,
            (Sweep(a), Sweep(b)) => a == b,
            (LinearSteps(a), LinearSteps(b)) => a == b,
            (RadialSteps(a), RadialSteps(b)) => a == b,
            (SweepSteps(a), SweepSteps(b)) => a == b,
            (LinearShadedSteps(a), LinearShadedSteps(b)) => a == b,
            (RadialShadedSteps(a), RadialShadedSteps(b)) => a == b,
            (SweepShadedSteps(a), SweepShadedSteps(b)) => a == b,
            (Intermediate(a), Intermediate(b)) => a == b,
            (Primitive(a), Primitive(b)) => a == b,
            // Extensions compare by identity
            (Custom(a), Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Gradient {
                fn from(value: $ty) -> Self {
                    Gradient::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    LinearGradient => Linear,
    RadialGradient => Radial,
    SweepGradient => Sweep,
    LinearSteps => LinearSteps,
    RadialSteps => RadialSteps,
    SweepSteps => SweepSteps,
    LinearShadedSteps => LinearShadedSteps,
    RadialShadedSteps => RadialShadedSteps,
    SweepShadedSteps => SweepShadedSteps,
    IntermediateGradient => Intermediate,
    PrimitiveGradient => Primitive,
}

impl From<Arc<dyn CustomGradient>> for Gradient {
    fn from(value: Arc<dyn CustomGradient>) -> Self {
        Gradient::Custom(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Universal accessors
// ─────────────────────────────────────────────────────────────────────────────

impl Gradient {
    /// The stepped view of this gradient, if it is a steps kind
    pub fn as_steps(&self) -> Option<&dyn Steps> {
        match self {
            Gradient::LinearSteps(g) => Some(g),
            Gradient::RadialSteps(g) => Some(g),
            Gradient::SweepSteps(g) => Some(g),
            Gradient::LinearShadedSteps(g) => Some(g),
            Gradient::RadialShadedSteps(g) => Some(g),
            Gradient::SweepShadedSteps(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_steps(&self) -> bool {
        self.as_steps().is_some()
    }

    pub fn colors(&self) -> &[Color] {
        match self {
            Gradient::Linear(g) => &g.colors,
            Gradient::Radial(g) => &g.colors,
            Gradient::Sweep(g) => &g.colors,
            Gradient::LinearSteps(g) => &g.colors,
            Gradient::RadialSteps(g) => &g.colors,
            Gradient::SweepSteps(g) => &g.colors,
            Gradient::LinearShadedSteps(g) => &g.colors,
            Gradient::RadialShadedSteps(g) => &g.colors,
            Gradient::SweepShadedSteps(g) => &g.colors,
            Gradient::Intermediate(g) => g.colors(),
            Gradient::Primitive(g) => &g.colors,
            Gradient::Custom(g) => g.colors(),
        }
    }

    pub fn stops(&self) -> Option<&[f32]> {
        match self {
            Gradient::Linear(g) => g.stops.as_deref(),
            Gradient::Radial(g) => g.stops.as_deref(),
            Gradient::Sweep(g) => g.stops.as_deref(),
            Gradient::LinearSteps(g) => g.stops.as_deref(),
            Gradient::RadialSteps(g) => g.stops.as_deref(),
            Gradient::SweepSteps(g) => g.stops.as_deref(),
            Gradient::LinearShadedSteps(g) => g.stops.as_deref(),
            Gradient::RadialShadedSteps(g) => g.stops.as_deref(),
            Gradient::SweepShadedSteps(g) => g.stops.as_deref(),
            Gradient::Intermediate(g) => Some(g.stops()),
            Gradient::Primitive(g) => Some(&g.stops),
            Gradient::Custom(g) => g.stops(),
        }
    }

    pub fn transform(&self) -> Option<GradientTransform> {
        match self {
            Gradient::Linear(g) => g.transform,
            Gradient::Radial(g) => g.transform,
            Gradient::Sweep(g) => g.transform,
            Gradient::LinearSteps(g) => g.transform,
            Gradient::RadialSteps(g) => g.transform,
            Gradient::SweepSteps(g) => g.transform,
            Gradient::LinearShadedSteps(g) => g.transform,
            Gradient::RadialShadedSteps(g) => g.transform,
            Gradient::SweepShadedSteps(g) => g.transform,
            Gradient::Intermediate(g) => {
                pick_transform(g.a().transform(), g.b().transform(), g.t())
            }
            Gradient::Primitive(_) => None,
            Gradient::Custom(g) => g.transform(),
        }
    }

    pub fn tile_mode(&self) -> TileMode {
        match self {
            Gradient::Linear(g) => g.tile_mode,
            Gradient::Radial(g) => g.tile_mode,
            Gradient::Sweep(g) => g.tile_mode,
            Gradient::LinearSteps(g) => g.tile_mode,
            Gradient::RadialSteps(g) => g.tile_mode,
            Gradient::SweepSteps(g) => g.tile_mode,
            Gradient::LinearShadedSteps(g) => g.tile_mode,
            Gradient::RadialShadedSteps(g) => g.tile_mode,
            Gradient::SweepShadedSteps(g) => g.tile_mode,
            Gradient::Intermediate(g) => {
                pick_tile_mode(g.a().tile_mode(), g.b().tile_mode(), g.t())
            }
            Gradient::Primitive(_) => TileMode::Clamp,
            Gradient::Custom(g) => g.tile_mode(),
        }
    }

    pub fn begin(&self) -> Alignment {
        match self {
            Gradient::Linear(g) => g.begin,
            Gradient::LinearSteps(g) => g.begin,
            Gradient::LinearShadedSteps(g) => g.begin,
            _ => Alignment::CENTER,
        }
    }

    pub fn end(&self) -> Alignment {
        match self {
            Gradient::Linear(g) => g.end,
            Gradient::LinearSteps(g) => g.end,
            Gradient::LinearShadedSteps(g) => g.end,
            _ => Alignment::CENTER,
        }
    }

    pub fn center(&self) -> Alignment {
        match self {
            Gradient::Radial(g) => g.center,
            Gradient::Sweep(g) => g.center,
            Gradient::RadialSteps(g) => g.center,
            Gradient::SweepSteps(g) => g.center,
            Gradient::RadialShadedSteps(g) => g.center,
            Gradient::SweepShadedSteps(g) => g.center,
            Gradient::Custom(g) => g.center().unwrap_or(Alignment::CENTER),
            _ => Alignment::CENTER,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            Gradient::Radial(g) => g.radius,
            Gradient::RadialSteps(g) => g.radius,
            Gradient::RadialShadedSteps(g) => g.radius,
            Gradient::Custom(g) => g.radius().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub fn focal(&self) -> Option<Alignment> {
        match self {
            Gradient::Radial(g) => g.focal,
            Gradient::RadialSteps(g) => g.focal,
            Gradient::RadialShadedSteps(g) => g.focal,
            _ => None,
        }
    }

    pub fn focal_radius(&self) -> f32 {
        match self {
            Gradient::Radial(g) => g.focal_radius,
            Gradient::RadialSteps(g) => g.focal_radius,
            Gradient::RadialShadedSteps(g) => g.focal_radius,
            _ => 0.0,
        }
    }

    pub fn start_angle(&self) -> f32 {
        match self {
            Gradient::Sweep(g) => g.start_angle,
            Gradient::SweepSteps(g) => g.start_angle,
            Gradient::SweepShadedSteps(g) => g.start_angle,
            _ => 0.0,
        }
    }

    pub fn end_angle(&self) -> f32 {
        match self {
            Gradient::Sweep(g) => g.end_angle,
            Gradient::SweepSteps(g) => g.end_angle,
            Gradient::SweepShadedSteps(g) => g.end_angle,
            _ => 0.0,
        }
    }

    /// Colors as handed to the renderer; raw colors for non-steps kinds
    pub fn stepped_colors(&self) -> Vec<Color> {
        match self.as_steps() {
            Some(steps) => steps.stepped_colors(),
            None => self.colors().to_vec(),
        }
    }

    /// Stops as handed to the renderer; raw stops for non-steps kinds
    pub fn stepped_stops(&self) -> Option<Vec<f32>> {
        match self.as_steps() {
            Some(steps) => Some(steps.stepped_stops()),
            None => self.stops().map(<[f32]>::to_vec),
        }
    }

    pub fn softness(&self) -> f32 {
        self.as_steps().map_or(0.0, |steps| steps.softness())
    }

    pub fn shade_function(&self) -> ShadeFunction {
        match self {
            Gradient::LinearShadedSteps(g) => g.shade_function,
            Gradient::RadialShadedSteps(g) => g.shade_function,
            Gradient::SweepShadedSteps(g) => g.shade_function,
            _ => ShadeFunction::WithWhite,
        }
    }

    pub fn shade_factor(&self) -> f32 {
        match self {
            Gradient::LinearShadedSteps(g) => g.shade_factor,
            Gradient::RadialShadedSteps(g) => g.shade_factor,
            Gradient::SweepShadedSteps(g) => g.shade_factor,
            _ => 0.0,
        }
    }

    pub fn distance(&self) -> f32 {
        match self {
            Gradient::LinearShadedSteps(g) => g.distance,
            Gradient::RadialShadedSteps(g) => g.distance,
            Gradient::SweepShadedSteps(g) => g.distance,
            _ => 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived gradients
// ─────────────────────────────────────────────────────────────────────────────

impl Gradient {
    /// Same gradient with its colors in reverse order
    ///
    /// Stops are reversed positionally, not reflected, so explicit stops
    /// come out decreasing. Intermediate and primitive gradients ignore
    /// color overrides and are returned as they are.
    pub fn reversed(&self) -> Gradient {
        let mut overrides =
            GradientOverrides::new().colors(self.colors().iter().rev().copied().collect());
        if let Some(stops) = self.stops() {
            overrides = overrides.stops(stops.iter().rev().copied().collect());
        }
        self.copy_with(&overrides)
    }

    /// Interpolate two optional gradients of any kinds
    ///
    /// Matching kinds interpolate field by field and fail when their color
    /// counts differ. Different kinds produce an [`IntermediateGradient`].
    pub fn lerp(a: Option<&Gradient>, b: Option<&Gradient>, t: f32) -> Result<Option<Gradient>> {
        lerp::lerp(a, b, t)
    }
}

impl GradientLerp for Gradient {
    fn scale(&self, factor: f32) -> Self {
        match self {
            Gradient::Linear(g) => g.scale(factor).into(),
            Gradient::Radial(g) => g.scale(factor).into(),
            Gradient::Sweep(g) => g.scale(factor).into(),
            Gradient::LinearSteps(g) => g.scale(factor).into(),
            Gradient::RadialSteps(g) => g.scale(factor).into(),
            Gradient::SweepSteps(g) => g.scale(factor).into(),
            Gradient::LinearShadedSteps(g) => g.scale(factor).into(),
            Gradient::RadialShadedSteps(g) => g.scale(factor).into(),
            Gradient::SweepShadedSteps(g) => g.scale(factor).into(),
            Gradient::Intermediate(g) => g.scale(factor).into(),
            Gradient::Primitive(g) => g.scale(factor).into(),
            Gradient::Custom(g) => self.copy_with(
                &GradientOverrides::new().colors(scale_colors(g.colors(), factor)),
            ),
        }
    }

    fn lerp_to(&self, other: &Self, t: f32) -> Result<Self> {
        use Gradient::*;
        Ok(match (self, other) {
            (Linear(a), Linear(b)) => a.lerp_to(b, t)?.into(),
            (Radial(a), Radial(b)) => a.lerp_to(b, t)?.into(),
            (Sweep(a), Sweep(b)) => a.lerp_to(b, t)?.into(),
            (LinearSteps(a), LinearSteps(b)) => a.lerp_to(b, t)?.into(),
            (RadialSteps(a), RadialSteps(b)) => a.lerp_to(b, t)?.into(),
            (SweepSteps(a), SweepSteps(b)) => a.lerp_to(b, t)?.into(),
            (LinearShadedSteps(a), LinearShadedSteps(b)) => a.lerp_to(b, t)?.into(),
            (RadialShadedSteps(a), RadialShadedSteps(b)) => a.lerp_to(b, t)?.into(),
            (SweepShadedSteps(a), SweepShadedSteps(b)) => a.lerp_to(b, t)?.into(),
            (Primitive(_), Primitive(_)) => {
                PrimitiveGradient::from_stretch_lerp(self, other, t).into()
            }
            _ => IntermediateGradient::new(self.clone(), other.clone(), t).into(),
        })
    }
}
