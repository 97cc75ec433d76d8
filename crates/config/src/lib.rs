//! Shared configuration for Tubesketch
//!
//! This crate provides the single source of truth for stroke sampling and
//! smoothing brush settings shared by the drawing tools. Settings can be
//! loaded from JSON; missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default sample spacing as a fraction of the current radius
pub const DEFAULT_SPACING: f32 = 0.25;

/// Default lower bound for a sampled sphere radius (world units)
pub const DEFAULT_MIN_RADIUS: f32 = 0.01;

/// Default one-sided smoothing window
pub const DEFAULT_HALF_WIDTH: u32 = 3;

/// Default smoothing brush radius (world units)
pub const DEFAULT_BRUSH_RADIUS: f32 = 0.5;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

/// Stroke sampling configuration used while the user draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    /// Minimum distance between consecutive samples, as a fraction of radius
    pub spacing: f32,
    /// Radii below this are clamped up
    pub min_radius: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            min_radius: DEFAULT_MIN_RADIUS,
        }
    }
}

/// Smoothing brush configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothConfig {
    /// Number of neighbors averaged on each side of a sample
    pub half_width: u32,
    /// Radius of the brush sphere selecting affected samples
    pub brush_radius: f32,
    /// Read windows from the pre-pass geometry instead of cascading in place
    pub snapshot: bool,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            snapshot: false,
        }
    }
}

/// Top-level tool configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub stroke: StrokeConfig,
    pub smooth: SmoothConfig,
}

impl SketchConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tools cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("stroke.spacing", self.stroke.spacing)?;
        check_non_negative("stroke.min_radius", self.stroke.min_radius)?;
        check_non_negative("smooth.brush_radius", self.smooth.brush_radius)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}
