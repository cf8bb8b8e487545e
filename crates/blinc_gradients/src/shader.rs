//! Hand-off to the renderer
//!
//! Gradients are stored box-relative. [`Gradient::resolve`] turns one into
//! pixel-space geometry plus a flat list of [`GradientStop`]s for a concrete
//! rectangle; a [`ShaderFactory`] turns that into whatever the backend
//! paints with.

use crate::color::Color;
use crate::geometry::{Affine2D, Alignment, Point, Rect, TileMode};
use crate::gradient::Gradient;
use crate::stops::interpret_stops;

/// Gradient color stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this position
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A gradient in pixel space, ready for a shader
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedGradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
        tile_mode: TileMode,
        transform: Option<Affine2D>,
    },
    Radial {
        center: Point,
        /// Radius in pixels
        radius: f32,
        focal: Option<Point>,
        focal_radius: f32,
        stops: Vec<GradientStop>,
        tile_mode: TileMode,
        transform: Option<Affine2D>,
    },
    Sweep {
        center: Point,
        start_angle: f32,
        end_angle: f32,
        stops: Vec<GradientStop>,
        tile_mode: TileMode,
        transform: Option<Affine2D>,
    },
}

impl ResolvedGradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            ResolvedGradient::Linear { stops, .. }
            | ResolvedGradient::Radial { stops, .. }
            | ResolvedGradient::Sweep { stops, .. } => stops,
        }
    }

    pub fn tile_mode(&self) -> TileMode {
        match self {
            ResolvedGradient::Linear { tile_mode, .. }
            | ResolvedGradient::Radial { tile_mode, .. }
            | ResolvedGradient::Sweep { tile_mode, .. } => *tile_mode,
        }
    }

    pub fn transform(&self) -> Option<Affine2D> {
        match self {
            ResolvedGradient::Linear { transform, .. }
            | ResolvedGradient::Radial { transform, .. }
            | ResolvedGradient::Sweep { transform, .. } => *transform,
        }
    }

    /// Keep the geometry, swap the ramp and its tiling
    fn with_ramp(
        mut self,
        new_stops: Vec<GradientStop>,
        new_tile_mode: TileMode,
        new_transform: Option<Affine2D>,
    ) -> Self {
        match &mut self {
            ResolvedGradient::Linear {
                stops,
                tile_mode,
                transform,
                ..
            }
            | ResolvedGradient::Radial {
                stops,
                tile_mode,
                transform,
                ..
            }
            | ResolvedGradient::Sweep {
                stops,
                tile_mode,
                transform,
                ..
            } => {
                *stops = new_stops;
                *tile_mode = new_tile_mode;
                *transform = new_transform;
            }
        }
        self
    }
}

/// Builds backend shaders from resolved gradients
pub trait ShaderFactory {
    type Shader;

    fn create_shader(&self, gradient: &ResolvedGradient) -> Self::Shader;
}

impl Gradient {
    /// Resolve against `bounds`
    ///
    /// Steps kinds hand their stepped sequences to the continuous kind of
    /// the same shape. Radii are fractions of the shortest side.
    pub fn resolve(&self, bounds: Rect) -> ResolvedGradient {
        let stops = self.resolved_stops();
        let tile_mode = self.tile_mode();
        let transform = self.transform().map(|t| t.to_affine(bounds));
        let shortest = bounds.shortest_side();

        match self {
            Gradient::Linear(_) | Gradient::LinearSteps(_) | Gradient::LinearShadedSteps(_) => {
                ResolvedGradient::Linear {
                    start: self.begin().within_rect(bounds),
                    end: self.end().within_rect(bounds),
                    stops,
                    tile_mode,
                    transform,
                }
            }
            Gradient::Radial(_) | Gradient::RadialSteps(_) | Gradient::RadialShadedSteps(_) => {
                ResolvedGradient::Radial {
                    center: self.center().within_rect(bounds),
                    radius: self.radius() * shortest,
                    focal: self.focal().map(|f| f.within_rect(bounds)),
                    focal_radius: self.focal_radius() * shortest,
                    stops,
                    tile_mode,
                    transform,
                }
            }
            Gradient::Sweep(_) | Gradient::SweepSteps(_) | Gradient::SweepShadedSteps(_) => {
                ResolvedGradient::Sweep {
                    center: self.center().within_rect(bounds),
                    start_angle: self.start_angle(),
                    end_angle: self.end_angle(),
                    stops,
                    tile_mode,
                    transform,
                }
            }
            Gradient::Intermediate(g) => g
                .dominant()
                .resolve(bounds)
                .with_ramp(stops, tile_mode, transform),
            Gradient::Primitive(_) => ResolvedGradient::Linear {
                start: Alignment::CENTER_LEFT.within_rect(bounds),
                end: Alignment::CENTER_RIGHT.within_rect(bounds),
                stops,
                tile_mode,
                transform,
            },
            Gradient::Custom(g) => g.resolve(bounds),
        }
    }

    /// Resolve against `bounds` and build a shader for it
    pub fn create_shader<F: ShaderFactory>(&self, bounds: Rect, factory: &F) -> F::Shader {
        factory.create_shader(&self.resolve(bounds))
    }

    fn resolved_stops(&self) -> Vec<GradientStop> {
        let colors = self.stepped_colors();
        let offsets = self
            .stepped_stops()
            .unwrap_or_else(|| interpret_stops(None, colors.len()));

        offsets
            .into_iter()
            .zip(colors)
            .map(|(offset, color)| GradientStop::new(offset, color))
            .collect()
    }
}
