//! Stroke sampling while the user draws.
//!
//! Input arrives far more often than the path needs samples. The builder
//! appends a sphere only once the pointer has moved at least
//! `spacing * radius` away from the previous sample.

use glam::Vec3;
use tracing::debug;
use tubesketch_config::StrokeConfig;

use crate::path::SketchPath;

/// Appends spaced spheres to a path during a drawing stroke.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    config: StrokeConfig,
    /// Last appended sample (None if not stroking)
    last_sample: Option<Vec3>,
    /// Samples appended during the current stroke
    samples: usize,
}

impl StrokeBuilder {
    pub fn new(config: StrokeConfig) -> Self {
        Self {
            config,
            last_sample: None,
            samples: 0,
        }
    }

    /// Check if a stroke is currently active.
    pub fn is_stroking(&self) -> bool {
        self.last_sample.is_some()
    }

    /// Start a stroke with its first sample.
    pub fn begin(&mut self, path: &mut SketchPath, center: Vec3, radius: f32) {
        self.samples = 0;
        self.append(path, center, radius);
    }

    /// Continue the stroke. Returns true if a sphere was appended.
    ///
    /// Behaves like [`StrokeBuilder::begin`] when no stroke is active.
    pub fn stroke_to(&mut self, path: &mut SketchPath, center: Vec3, radius: f32) -> bool {
        let Some(last) = self.last_sample else {
            self.begin(path, center, radius);
            return true;
        };

        let radius = self.clamp_radius(radius);
        if last.distance(center) < self.config.spacing * radius {
            return false;
        }
        self.append(path, center, radius);
        true
    }

    /// End the current stroke. Returns the number of spheres it appended.
    pub fn end(&mut self) -> usize {
        let samples = self.samples;
        if self.last_sample.take().is_some() {
            debug!("Stroke ended with {} samples", samples);
        }
        self.samples = 0;
        samples
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.max(self.config.min_radius)
    }

    fn append(&mut self, path: &mut SketchPath, center: Vec3, radius: f32) {
        path.add_sphere(center, self.clamp_radius(radius));
        self.last_sample = Some(center);
        self.samples += 1;
    }
}

impl Default for StrokeBuilder {
    fn default() -> Self {
        Self::new(StrokeConfig::default())
    }
}
