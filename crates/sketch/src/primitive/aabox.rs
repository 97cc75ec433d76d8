use glam::Vec3;

use super::Sphere;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AaBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl AaBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The "no bounds" sentinel: `min` is +inf and `max` is -inf on every axis.
    pub fn empty() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    /// Returns true if `min` exceeds `max` on any axis.
    pub fn is_empty(&self) -> bool {
        !self.min.cmple(self.max).all()
    }

    /// Grow the box to cover the sphere's extent.
    pub fn include_sphere(&mut self, sphere: &Sphere) {
        self.min = self.min.min(sphere.min());
        self.max = self.max.max(sphere.max());
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns true if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &AaBox) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }
}

impl Default for AaBox {
    fn default() -> Self {
        Self::empty()
    }
}
