use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A weighted sample along a sketch path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Lower corner of the sphere's axis-aligned extent
    pub fn min(&self) -> Vec3 {
        self.center - Vec3::splat(self.radius)
    }

    /// Upper corner of the sphere's axis-aligned extent
    pub fn max(&self) -> Vec3 {
        self.center + Vec3::splat(self.radius)
    }
}
