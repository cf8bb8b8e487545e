//! Cross-kind interpolation
//!
//! Two gradients of different kinds (say a `LinearSteps` and a
//! `RadialGradient`) cannot be interpolated field by field. Instead both are
//! flattened into a [`PrimitiveGradient`], a plain list of colors at explicit
//! stops, and the two lists are stretched onto a shared set of stop
//! positions before being blended.
//!
//! [`IntermediateGradient`] keeps both endpoints around so overrides can
//! still be applied to them while an animation is in flight.

use crate::color::{lerp_color, Color};
use crate::gradient::Gradient;
use crate::interpolate::{merge_stop_positions, sample_ramp};
use crate::lerp::{scale_colors, GradientLerp};
use crate::stops::interpret_stops;

/// A render-ready color ramp: colors at explicit stops
///
/// Primitive gradients are opaque to `copy_with`; overrides never apply.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveGradient {
    pub colors: Vec<Color>,
    pub stops: Vec<f32>,
}

impl PrimitiveGradient {
    pub fn new(colors: Vec<Color>, stops: Vec<f32>) -> Self {
        Self { colors, stops }
    }

    /// Flatten any gradient into the ramp it would render with
    ///
    /// Stepped kinds contribute their stepped sequences; missing stops are
    /// spread evenly.
    pub fn from_gradient(gradient: &Gradient) -> Self {
        let colors = gradient.stepped_colors();
        let stops = gradient
            .stepped_stops()
            .unwrap_or_else(|| interpret_stops(None, colors.len()));
        Self { colors, stops }
    }

    /// Blend two gradients of any kind
    ///
    /// Both ramps are sampled at the union of their stop positions (hard
    /// edges keep both of their entries) and the samples are interpolated
    /// pairwise.
    pub fn from_stretch_lerp(a: &Gradient, b: &Gradient, t: f32) -> Self {
        let from = Self::from_gradient(a);
        let to = Self::from_gradient(b);

        if from.colors.is_empty() {
            return to.scale(t);
        }
        if to.colors.is_empty() {
            return from.scale(1.0 - t);
        }

        let positions = merge_stop_positions(&from.stops, &to.stops);
        let mut colors = Vec::with_capacity(positions.len());
        let mut stops = Vec::with_capacity(positions.len());

        for &(position, occurrence) in &positions {
            let start = sample_ramp(&from.colors, &from.stops, position, occurrence);
            let end = sample_ramp(&to.colors, &to.stops, position, occurrence);
            colors.push(lerp_color(Some(start), Some(end), t).unwrap_or(end));
            stops.push(position);
        }

        Self { colors, stops }
    }

    /// Fade every color toward transparent
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            colors: scale_colors(&self.colors, factor),
            stops: self.stops.clone(),
        }
    }
}

/// A gradient caught between two others at parameter `t`
///
/// Its colors and stops are derived from the endpoints when it is built and
/// are never overridden directly.
#[derive(Clone, Debug, PartialEq)]
pub struct IntermediateGradient {
    a: Box<Gradient>,
    b: Box<Gradient>,
    t: f32,
    primitive: PrimitiveGradient,
}

impl IntermediateGradient {
    pub fn new(a: Gradient, b: Gradient, t: f32) -> Self {
        let primitive = PrimitiveGradient::from_stretch_lerp(&a, &b, t);
        tracing::debug!(
            t,
            stops = primitive.stops.len(),
            "built intermediate gradient"
        );
        Self {
            a: Box::new(a),
            b: Box::new(b),
            t,
            primitive,
        }
    }

    /// The gradient at `t = 0`
    pub fn a(&self) -> &Gradient {
        &self.a
    }

    /// The gradient at `t = 1`
    pub fn b(&self) -> &Gradient {
        &self.b
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    /// The endpoint whose geometry is used for rendering
    pub fn dominant(&self) -> &Gradient {
        if self.t < 0.5 {
            &self.a
        } else {
            &self.b
        }
    }

    pub fn primitive(&self) -> &PrimitiveGradient {
        &self.primitive
    }

    pub fn colors(&self) -> &[Color] {
        &self.primitive.colors
    }

    pub fn stops(&self) -> &[f32] {
        &self.primitive.stops
    }

    /// Same endpoints, faded by `factor`
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.a.scale(factor), self.b.scale(factor), self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continuous::{LinearGradient, RadialGradient};
    use crate::steps::LinearSteps;

    #[test]
    fn test_from_gradient_uses_stepped_sequences() {
        let g: Gradient = LinearSteps::new(vec![Color::RED, Color::BLUE])
            .with_softness(0.0)
            .into();
        let p = PrimitiveGradient::from_gradient(&g);

        assert_eq!(p.colors.len(), 4);
        assert_eq!(p.stops, vec![0.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_from_gradient_interprets_missing_stops() {
        let g: Gradient = RadialGradient::new(vec![Color::RED, Color::GREEN, Color::BLUE]).into();
        let p = PrimitiveGradient::from_gradient(&g);
        assert_eq!(p.stops, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_stretch_lerp_endpoints() {
        let a: Gradient = LinearSteps::new(vec![Color::RED, Color::BLUE])
            .with_softness(0.0)
            .into();
        let b: Gradient = LinearGradient::new(vec![Color::GREEN, Color::YELLOW]).into();

        let start = PrimitiveGradient::from_stretch_lerp(&a, &b, 0.0);
        assert_eq!(start.stops, vec![0.0, 0.5, 0.5, 1.0]);
        assert_eq!(start.colors[1], Color::RED);
        assert_eq!(start.colors[2], Color::BLUE);

        let end = PrimitiveGradient::from_stretch_lerp(&a, &b, 1.0);
        assert_eq!(end.colors[0], Color::GREEN);
        assert_eq!(end.colors[3], Color::YELLOW);
        // Both entries at the old hard edge sample the smooth midpoint
        assert_eq!(end.colors[1], end.colors[2]);
    }

    #[test]
    fn test_intermediate_exposes_endpoints() {
        let a: Gradient = LinearGradient::new(vec![Color::RED, Color::BLUE]).into();
        let b: Gradient = RadialGradient::new(vec![Color::RED, Color::BLUE]).into();
        let mid = IntermediateGradient::new(a.clone(), b.clone(), 0.25);

        assert_eq!(mid.a(), &a);
        assert_eq!(mid.b(), &b);
        assert_eq!(mid.t(), 0.25);
        assert_eq!(mid.dominant(), &a);
        assert_eq!(mid.colors().len(), mid.stops().len());
    }

    #[test]
    fn test_intermediate_scale() {
        let a: Gradient = LinearGradient::new(vec![Color::RED, Color::BLUE]).into();
        let b: Gradient = RadialGradient::new(vec![Color::RED, Color::BLUE]).into();
        let faded = IntermediateGradient::new(a, b, 0.5).scale(0.0);

        assert!(faded.colors().iter().all(|c| c.a == 0.0));
    }
}
