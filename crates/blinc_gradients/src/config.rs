//! Gradient defaults from configuration
//!
//! Softness and shading defaults can be tuned per application through a
//! TOML table:
//!
//! ```toml
//! linear_softness = 0.001
//! radial_softness = 0.0025
//! sweep_softness = 0.0
//! shade_factor = -90.0
//! shade_distance = 0.6
//! ```
//!
//! Missing keys keep the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GradientError, Result};
use crate::shaded::{
    LinearShadedSteps, RadialShadedSteps, SweepShadedSteps, DEFAULT_SHADE_DISTANCE,
    DEFAULT_SHADE_FACTOR,
};
use crate::steps::{
    LinearSteps, RadialSteps, SweepSteps, LINEAR_STEPS_SOFTNESS, RADIAL_STEPS_SOFTNESS,
    SWEEP_STEPS_SOFTNESS,
};

/// Default values used when building stepped gradients
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradientConfig {
    #[serde(default = "default_linear_softness")]
    pub linear_softness: f32,
    #[serde(default = "default_radial_softness")]
    pub radial_softness: f32,
    #[serde(default = "default_sweep_softness")]
    pub sweep_softness: f32,
    #[serde(default = "default_shade_factor")]
    pub shade_factor: f32,
    /// Fraction of each band spent shading
    #[serde(default = "default_shade_distance")]
    pub shade_distance: f32,
}

fn default_linear_softness() -> f32 {
    LINEAR_STEPS_SOFTNESS
}

fn default_radial_softness() -> f32 {
    RADIAL_STEPS_SOFTNESS
}

fn default_sweep_softness() -> f32 {
    SWEEP_STEPS_SOFTNESS
}

fn default_shade_factor() -> f32 {
    DEFAULT_SHADE_FACTOR
}

fn default_shade_distance() -> f32 {
    DEFAULT_SHADE_DISTANCE
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            linear_softness: default_linear_softness(),
            radial_softness: default_radial_softness(),
            sweep_softness: default_sweep_softness(),
            shade_factor: default_shade_factor(),
            shade_distance: default_shade_distance(),
        }
    }
}

impl GradientConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GradientError::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded gradient config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GradientError::Config(e.to_string()))
    }

    pub fn linear_steps(&self, colors: Vec<Color>) -> LinearSteps {
        LinearSteps::new(colors).with_softness(self.linear_softness)
    }

    pub fn radial_steps(&self, colors: Vec<Color>) -> RadialSteps {
        RadialSteps::new(colors).with_softness(self.radial_softness)
    }

    pub fn sweep_steps(&self, colors: Vec<Color>) -> SweepSteps {
        SweepSteps::new(colors).with_softness(self.sweep_softness)
    }

    pub fn linear_shaded_steps(&self, colors: Vec<Color>) -> LinearShadedSteps {
        let base = LinearShadedSteps::new(colors).with_softness(self.linear_softness);
        let shade_function = base.shade_function;
        base.with_shading(shade_function, self.shade_factor, self.shade_distance)
    }

    pub fn radial_shaded_steps(&self, colors: Vec<Color>) -> RadialShadedSteps {
        let base = RadialShadedSteps::new(colors).with_softness(self.radial_softness);
        let shade_function = base.shade_function;
        base.with_shading(shade_function, self.shade_factor, self.shade_distance)
    }

    pub fn sweep_shaded_steps(&self, colors: Vec<Color>) -> SweepShadedSteps {
        let base = SweepShadedSteps::new(colors).with_softness(self.sweep_softness);
        let shade_function = base.shade_function;
        base.with_shading(shade_function, self.shade_factor, self.shade_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GradientConfig::from_toml_str("").unwrap();
        assert_eq!(config, GradientConfig::default());
        assert_eq!(config.linear_softness, 0.001);
        assert_eq!(config.radial_softness, 0.0025);
        assert_eq!(config.sweep_softness, 0.0);
    }

    #[test]
    fn test_partial_toml() {
        let config =
            GradientConfig::from_toml_str("radial_softness = 0.01\nshade_factor = -40.0").unwrap();
        assert_eq!(config.radial_softness, 0.01);
        assert_eq!(config.shade_factor, -40.0);
        assert_eq!(config.linear_softness, LINEAR_STEPS_SOFTNESS);
        assert_eq!(config.shade_distance, DEFAULT_SHADE_DISTANCE);
    }

    #[test]
    fn test_invalid_toml() {
        let err = GradientConfig::from_toml_str("linear_softness = \"soft\"").unwrap_err();
        assert!(matches!(err, GradientError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GradientConfig {
            sweep_softness: 0.5,
            ..GradientConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(GradientConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("blinc_gradients_{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "linear_softness = 0.02").unwrap();
        drop(file);

        let config = GradientConfig::load(&path).unwrap();
        assert_eq!(config.linear_softness, 0.02);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GradientConfig::load(Path::new("/nonexistent/gradients.toml")).unwrap_err();
        assert!(matches!(err, GradientError::Io(_)));
    }

    #[test]
    fn test_factories_apply_config() {
        let config = GradientConfig {
            linear_softness: 0.0,
            shade_factor: -10.0,
            shade_distance: 0.5,
            ..GradientConfig::default()
        };

        let steps = config.linear_steps(vec![Color::RED, Color::BLUE]);
        assert_eq!(steps.softness, 0.0);

        let shaded = config.sweep_shaded_steps(vec![Color::RED]);
        assert_eq!(shaded.shade_factor, -10.0);
        assert_eq!(shaded.distance, 0.5);
        assert_eq!(shaded.softness, SWEEP_STEPS_SOFTNESS);
    }
}
