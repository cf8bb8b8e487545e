//! Colors and color interpolation
//!
//! Unlike most animated values, colors interpolate with an unclamped `t` so
//! gradients can be extrapolated past their endpoints. The resulting
//! channels are always clamped back into `[0, 1]`.

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Multiply the alpha channel by `factor`
    ///
    /// `factor <= 0` yields a fully transparent color, `factor >= 1`
    /// leaves the color unchanged.
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor.clamp(0.0, 1.0))
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    ///
    /// `t` may lie outside `[0, 1]`; each channel of the result is clamped.
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let channel = |from: f32, to: f32| (from + (to - from) * t).clamp(0.0, 1.0);
        Color {
            r: channel(a.r, b.r),
            g: channel(a.g, b.g),
            b: channel(a.b, b.b),
            a: channel(a.a, b.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Interpolate between two optional colors
///
/// A missing side stands for "the other color, fully transparent", so
/// `lerp_color(None, Some(c), t)` fades `c` in as `t` goes from 0 to 1.
pub fn lerp_color(a: Option<Color>, b: Option<Color>, t: f32) -> Option<Color> {
    match (a, b) {
        (None, None) => None,
        (None, Some(b)) => Some(b.scale_alpha(t)),
        (Some(a), None) => Some(a.scale_alpha(1.0 - t)),
        (Some(a), Some(b)) => Some(Color::lerp(&a, &b, t)),
    }
}
