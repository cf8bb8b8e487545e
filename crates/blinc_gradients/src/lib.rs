//! Gradients for Blinc
//!
//! Linear, radial and sweep gradients in continuous and stepped flavors,
//! with interpolation between any two of them and kind-agnostic field
//! overrides.
//!
//! Stepped gradients paint hard bands instead of blends. Internally each
//! color is emitted twice so the renderer sees a hard edge at every band
//! boundary; `softness` widens that edge slightly to anti-alias it.
//!
//! # Example
//!
//! ```ignore
//! use blinc_gradients::{Color, Gradient, GradientOverrides, LinearSteps};
//!
//! let bands: Gradient = LinearSteps::new(vec![Color::RED, Color::BLUE]).into();
//! let flipped = bands.reversed();
//! let faded = Gradient::lerp(Some(&bands), None, 0.5)?;
//! let overrides = GradientOverrides::new().colors(vec![Color::GREEN, Color::YELLOW]);
//! let recolored = bands.copy_with(&overrides);
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod continuous;
mod copy_with;
pub mod error;
pub mod geometry;
mod gradient;
pub mod intermediate;
mod interpolate;
mod lerp;
pub mod shaded;
pub mod shader;
pub mod steps;
pub mod stops;

pub use animation::{Easing, GradientTween};
pub use color::{lerp_color, Color};
pub use config::GradientConfig;
pub use continuous::{LinearGradient, RadialGradient, SweepGradient};
pub use copy_with::GradientOverrides;
pub use error::{GradientError, Result};
pub use geometry::{Affine2D, Alignment, GradientTransform, Point, Rect, TileMode};
pub use gradient::{CustomGradient, Gradient};
pub use intermediate::{IntermediateGradient, PrimitiveGradient};
pub use lerp::{lerp, GradientLerp};
pub use shaded::{LinearShadedSteps, RadialShadedSteps, ShadeFunction, SweepShadedSteps};
pub use shader::{GradientStop, ResolvedGradient, ShaderFactory};
pub use steps::{LinearSteps, RadialSteps, Steps, SweepSteps};
pub use stops::{duplicate_colors, duplicate_stops_with_offset, interpret_stops};

/// Install a test subscriber once so `RUST_LOG` works under `cargo test`
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
