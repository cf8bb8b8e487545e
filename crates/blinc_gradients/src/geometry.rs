//! Geometry types used by gradient definitions
//!
//! Gradients are described relative to the box they paint (`Alignment`),
//! and only become pixel-space geometry (`Point`, `Rect`, `Affine2D`) when
//! they are resolved for a renderer.

use std::f32::consts::PI;

// ─────────────────────────────────────────────────────────────────────────────
// Pixel-space geometry
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D rectangle in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// The smaller of width and height
    pub fn shortest_side(&self) -> f32 {
        self.width.abs().min(self.height.abs())
    }
}

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            elements: [c, s, -s, c, 0.0, 0.0],
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(
            a * point.x + c * point.y + tx,
            b * point.x + d * point.y + ty,
        )
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine2D) -> Affine2D {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        Affine2D {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Box-relative geometry
// ─────────────────────────────────────────────────────────────────────────────

/// A position relative to a rectangle
///
/// `(-1, -1)` is the top-left corner, `(0, 0)` the center and `(1, 1)` the
/// bottom-right corner. Values outside `[-1, 1]` lie outside the rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
}

impl Alignment {
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    pub const CENTER: Self = Self::new(0.0, 0.0);
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation, `t` unconstrained
    pub fn lerp(a: Alignment, b: Alignment, t: f32) -> Alignment {
        Alignment::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// Scale both components by `factor`
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// The point this alignment designates inside `rect`
    pub fn within_rect(&self, rect: Rect) -> Point {
        let center = rect.center();
        Point::new(
            center.x + self.x * rect.width / 2.0,
            center.y + self.y * rect.height / 2.0,
        )
    }
}

/// How a gradient extends beyond the `[0, 1]` stop range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    /// Extend the edge colors
    #[default]
    Clamp,
    /// Mirror the gradient back and forth
    Mirror,
    /// Repeat the gradient
    Repeated,
    /// Paint transparent outside the gradient
    Decal,
}

/// A transform applied to a gradient's shader
///
/// The gradient core never interpolates or inspects transforms; they are
/// carried along and only turned into a matrix at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientTransform {
    /// Rotation in radians about the center of the painted bounds
    Rotation(f32),
    /// Arbitrary matrix in pixel space
    Matrix(Affine2D),
}

impl GradientTransform {
    /// Rotation expressed in turns (1.0 = full circle)
    pub fn turns(turns: f32) -> Self {
        GradientTransform::Rotation(turns * 2.0 * PI)
    }

    /// Resolve to a pixel-space matrix for the given bounds
    pub fn to_affine(&self, bounds: Rect) -> Affine2D {
        match self {
            GradientTransform::Rotation(radians) => {
                let center = bounds.center();
                Affine2D::translation(center.x, center.y)
                    .then(&Affine2D::rotation(*radians))
                    .then(&Affine2D::translation(-center.x, -center.y))
            }
            GradientTransform::Matrix(matrix) => *matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_within_rect() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(Alignment::CENTER.within_rect(rect), Point::new(60.0, 45.0));
        assert_eq!(Alignment::TOP_LEFT.within_rect(rect), Point::new(10.0, 20.0));
        assert_eq!(
            Alignment::BOTTOM_RIGHT.within_rect(rect),
            Point::new(110.0, 70.0)
        );
    }

    #[test]
    fn test_shortest_side() {
        assert_eq!(Rect::new(0.0, 0.0, 300.0, 120.0).shortest_side(), 120.0);
    }

    #[test]
    fn test_rotation_keeps_center_fixed() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        let affine = GradientTransform::Rotation(PI / 2.0).to_affine(bounds);

        let center = affine.transform_point(Point::new(100.0, 50.0));
        assert!((center.x - 100.0).abs() < 1e-4);
        assert!((center.y - 50.0).abs() < 1e-4);

        // A point right of center ends up below it
        let p = affine.transform_point(Point::new(110.0, 50.0));
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_matrix_transform_passes_through() {
        let m = Affine2D::translation(5.0, 6.0);
        let t = GradientTransform::Matrix(m);
        assert_eq!(t.to_affine(Rect::new(0.0, 0.0, 10.0, 10.0)), m);
    }

    #[test]
    fn test_turns() {
        assert_eq!(GradientTransform::turns(0.5), GradientTransform::Rotation(PI));
    }
}
