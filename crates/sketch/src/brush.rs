//! Smoothing brush for sketch paths.
//!
//! The tool layer drags the brush across a stroke; each application smooths
//! the spheres under the brush sphere.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tubesketch_config::SmoothConfig;

use crate::path::SketchPath;
use crate::primitive::Sphere;
use crate::types::{SmoothEffect, SmoothMode};

/// Smoothing brush preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothBrush {
    /// Display name
    pub name: String,
    /// Radius of the brush sphere in world units
    pub radius: f32,
    /// Neighbors averaged on each side of an affected sphere
    pub half_width: usize,
    /// Boundary policy near the path ends
    pub effect: SmoothEffect,
    /// Cascading or snapshot window reads
    pub mode: SmoothMode,
}

impl Default for SmoothBrush {
    fn default() -> Self {
        Self::from_config(&SmoothConfig::default())
    }
}

impl SmoothBrush {
    /// Build the plain smoothing brush from shared settings.
    pub fn from_config(config: &SmoothConfig) -> Self {
        Self {
            name: "Smooth".to_string(),
            radius: config.brush_radius,
            half_width: config.half_width as usize,
            effect: SmoothEffect::None,
            mode: if config.snapshot {
                SmoothMode::Snapshot
            } else {
                SmoothMode::Cascading
            },
        }
    }

    /// Create a smooth brush preset.
    pub fn smooth() -> Self {
        Self::default()
    }

    /// Create a pinch brush preset, tapering radii toward the path ends.
    pub fn pinch() -> Self {
        Self {
            name: "Pinch".to_string(),
            effect: SmoothEffect::Pinch,
            ..Default::default()
        }
    }

    /// Create an embed brush preset, pulling the path ends into the mesh.
    pub fn embed() -> Self {
        Self {
            name: "Embed".to_string(),
            effect: SmoothEffect::EmbedAndAdjust,
            ..Default::default()
        }
    }

    /// The query sphere selecting affected spheres at `position`.
    pub fn range(&self, position: Vec3) -> Sphere {
        Sphere::new(position, self.radius)
    }

    /// Smooth `path` under the brush centered at `position`.
    pub fn apply(
        &self,
        path: &mut SketchPath,
        position: Vec3,
        nearest_to_first: Option<&Sphere>,
        nearest_to_last: Option<&Sphere>,
    ) {
        debug!(
            "{} brush at ({:.3}, {:.3}, {:.3}), radius={:.3}",
            self.name, position.x, position.y, position.z, self.radius
        );
        path.smooth_with_mode(
            &self.range(position),
            self.half_width,
            self.effect,
            nearest_to_first,
            nearest_to_last,
            self.mode,
        );
    }
}
