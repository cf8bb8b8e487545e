//! Field overrides for any gradient kind
//!
//! Style code often wants "this gradient, but with other colors" without
//! knowing which kind it holds. [`GradientOverrides`] carries an optional
//! value for every field any kind has; [`Gradient::copy_with`] applies the
//! ones that make sense for the receiver and ignores the rest.

use crate::color::Color;
use crate::continuous::{LinearGradient, RadialGradient, SweepGradient};
use crate::geometry::{Alignment, GradientTransform, TileMode};
use crate::gradient::Gradient;
use crate::intermediate::IntermediateGradient;
use crate::shaded::{LinearShadedSteps, RadialShadedSteps, ShadeFunction, SweepShadedSteps};
use crate::steps::{LinearSteps, RadialSteps, SweepSteps};

/// Sparse set of field overrides
///
/// Every field is optional; `None` keeps the receiver's value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradientOverrides {
    pub colors: Option<Vec<Color>>,
    pub stops: Option<Vec<f32>>,
    pub transform: Option<GradientTransform>,
    pub tile_mode: Option<TileMode>,
    pub begin: Option<Alignment>,
    pub end: Option<Alignment>,
    pub center: Option<Alignment>,
    pub radius: Option<f32>,
    pub focal: Option<Alignment>,
    pub focal_radius: Option<f32>,
    pub start_angle: Option<f32>,
    pub end_angle: Option<f32>,
    pub softness: Option<f32>,
    pub shade_function: Option<ShadeFunction>,
    pub shade_factor: Option<f32>,
    pub distance: Option<f32>,
}

impl GradientOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn stops(mut self, stops: Vec<f32>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn transform(mut self, transform: GradientTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = Some(tile_mode);
        self
    }

    pub fn begin(mut self, begin: Alignment) -> Self {
        self.begin = Some(begin);
        self
    }

    pub fn end(mut self, end: Alignment) -> Self {
        self.end = Some(end);
        self
    }

    pub fn center(mut self, center: Alignment) -> Self {
        self.center = Some(center);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn focal(mut self, focal: Alignment) -> Self {
        self.focal = Some(focal);
        self
    }

    pub fn focal_radius(mut self, focal_radius: f32) -> Self {
        self.focal_radius = Some(focal_radius);
        self
    }

    pub fn start_angle(mut self, start_angle: f32) -> Self {
        self.start_angle = Some(start_angle);
        self
    }

    pub fn end_angle(mut self, end_angle: f32) -> Self {
        self.end_angle = Some(end_angle);
        self
    }

    pub fn softness(mut self, softness: f32) -> Self {
        self.softness = Some(softness);
        self
    }

    pub fn shade_function(mut self, shade_function: ShadeFunction) -> Self {
        self.shade_function = Some(shade_function);
        self
    }

    pub fn shade_factor(mut self, shade_factor: f32) -> Self {
        self.shade_factor = Some(shade_factor);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Same overrides minus the color ramp
    fn without_ramp(&self) -> Self {
        Self {
            colors: None,
            stops: None,
            ..self.clone()
        }
    }
}

impl Gradient {
    /// Copy this gradient, replacing the fields named in `overrides`
    ///
    /// - primitive gradients are returned unchanged
    /// - intermediate gradients pass the overrides (minus colors and stops)
    ///   on to both endpoints and are rebuilt at the same `t`
    /// - concrete kinds keep their kind
    /// - custom gradients are rebuilt as a [`RadialGradient`]
    ///
    /// Overrides for fields the result does not have are ignored.
    pub fn copy_with(&self, overrides: &GradientOverrides) -> Gradient {
        let o = overrides;
        match self {
            Gradient::Primitive(_) => self.clone(),
            Gradient::Intermediate(g) => {
                let forwarded = o.without_ramp();
                IntermediateGradient::new(
                    g.a().copy_with(&forwarded),
                    g.b().copy_with(&forwarded),
                    g.t(),
                )
                .into()
            }
            Gradient::Linear(g) => LinearGradient {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                begin: o.begin.unwrap_or(g.begin),
                end: o.end.unwrap_or(g.end),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::Radial(g) => RadialGradient {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                radius: o.radius.unwrap_or(g.radius),
                focal: o.focal.or(g.focal),
                focal_radius: o.focal_radius.unwrap_or(g.focal_radius),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::Sweep(g) => SweepGradient {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                start_angle: o.start_angle.unwrap_or(g.start_angle),
                end_angle: o.end_angle.unwrap_or(g.end_angle),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::LinearSteps(g) => LinearSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                begin: o.begin.unwrap_or(g.begin),
                end: o.end.unwrap_or(g.end),
                softness: o.softness.unwrap_or(g.softness),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::RadialSteps(g) => RadialSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                radius: o.radius.unwrap_or(g.radius),
                focal: o.focal.or(g.focal),
                focal_radius: o.focal_radius.unwrap_or(g.focal_radius),
                softness: o.softness.unwrap_or(g.softness),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::SweepSteps(g) => SweepSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                start_angle: o.start_angle.unwrap_or(g.start_angle),
                end_angle: o.end_angle.unwrap_or(g.end_angle),
                softness: o.softness.unwrap_or(g.softness),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::LinearShadedSteps(g) => LinearShadedSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                begin: o.begin.unwrap_or(g.begin),
                end: o.end.unwrap_or(g.end),
                softness: o.softness.unwrap_or(g.softness),
                shade_function: o.shade_function.unwrap_or(g.shade_function),
                shade_factor: o.shade_factor.unwrap_or(g.shade_factor),
                distance: o.distance.unwrap_or(g.distance),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::RadialShadedSteps(g) => RadialShadedSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                radius: o.radius.unwrap_or(g.radius),
                focal: o.focal.or(g.focal),
                focal_radius: o.focal_radius.unwrap_or(g.focal_radius),
                softness: o.softness.unwrap_or(g.softness),
                shade_function: o.shade_function.unwrap_or(g.shade_function),
                shade_factor: o.shade_factor.unwrap_or(g.shade_factor),
                distance: o.distance.unwrap_or(g.distance),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::SweepShadedSteps(g) => SweepShadedSteps {
                colors: o.colors.clone().unwrap_or_else(|| g.colors.clone()),
                stops: o.stops.clone().or_else(|| g.stops.clone()),
                center: o.center.unwrap_or(g.center),
                start_angle: o.start_angle.unwrap_or(g.start_angle),
                end_angle: o.end_angle.unwrap_or(g.end_angle),
                softness: o.softness.unwrap_or(g.softness),
                shade_function: o.shade_function.unwrap_or(g.shade_function),
                shade_factor: o.shade_factor.unwrap_or(g.shade_factor),
                distance: o.distance.unwrap_or(g.distance),
                tile_mode: o.tile_mode.unwrap_or(g.tile_mode),
                transform: o.transform.or(g.transform),
            }
            .into(),
            Gradient::Custom(g) => {
                tracing::debug!(gradient = ?g, "rebuilding custom gradient as radial");
                RadialGradient {
                    colors: o.colors.clone().unwrap_or_else(|| self.colors().to_vec()),
                    stops: o.stops.clone().or_else(|| self.stops().map(<[f32]>::to_vec)),
                    center: o.center.unwrap_or_else(|| self.center()),
                    radius: o.radius.unwrap_or_else(|| self.radius()),
                    focal: o.focal.or_else(|| self.focal()),
                    focal_radius: o.focal_radius.unwrap_or_else(|| self.focal_radius()),
                    tile_mode: o.tile_mode.unwrap_or_else(|| self.tile_mode()),
                    transform: o.transform.or_else(|| self.transform()),
                }
                .into()
            }
        }
    }
}
