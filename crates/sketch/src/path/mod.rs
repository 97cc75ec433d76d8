//! Sketch path: an ordered chain of weighted spheres.
//!
//! The path is the skeleton of a drawn stroke. Sphere order is the stroke's
//! travel order, so index adjacency is adjacency along the stroke. The path
//! caches the tight bounding box of all sphere extents:
//! - `add_sphere` grows the cached corners in O(1)
//! - bulk mutations (`smooth`, `mirror`) rescan every sphere
//! - an empty path holds the +inf/-inf sentinel corners

mod mirror;
mod query;
mod smooth;

use glam::Vec3;

use crate::primitive::{AaBox, Sphere};
use crate::types::PathError;

pub use query::intersect_paths;

/// An ordered chain of spheres with cached bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchPath {
    /// Samples in stroke order
    pub(crate) spheres: Vec<Sphere>,
    /// Lower corner of all sphere extents (+inf when empty)
    pub(crate) minimum: Vec3,
    /// Upper corner of all sphere extents (-inf when empty)
    pub(crate) maximum: Vec3,
}

impl Default for SketchPath {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            minimum: Vec3::INFINITY,
            maximum: Vec3::NEG_INFINITY,
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn minimum(&self) -> Vec3 {
        self.minimum
    }

    pub fn maximum(&self) -> Vec3 {
        self.maximum
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Remove all spheres and return the bounds to the empty sentinel.
    pub fn reset(&mut self) {
        self.reset_min_max();
        self.spheres.clear();
    }

    /// Bounding box of every sphere's extent.
    ///
    /// Returns [`PathError::Empty`] for an empty path, which has no bounds.
    pub fn aabox(&self) -> Result<AaBox, PathError> {
        if self.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(AaBox::new(self.minimum, self.maximum))
    }

    /// Append a sphere, growing the cached bounds to cover its extent.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32) {
        let sphere = Sphere::new(center, radius);
        self.minimum = self.minimum.min(sphere.min());
        self.maximum = self.maximum.max(sphere.max());
        self.spheres.push(sphere);
    }

    /// Cached corners as a box, without the emptiness check.
    pub(crate) fn bounds(&self) -> AaBox {
        AaBox::new(self.minimum, self.maximum)
    }

    fn reset_min_max(&mut self) {
        self.minimum = Vec3::INFINITY;
        self.maximum = Vec3::NEG_INFINITY;
    }

    /// Rebuild the cached bounds from scratch.
    ///
    /// Incremental tracking cannot shrink, so any bulk change to sphere
    /// geometry must end with this.
    pub(crate) fn set_min_max(&mut self) {
        self.reset_min_max();

        for sphere in &self.spheres {
            self.minimum = self.minimum.min(sphere.min());
            self.maximum = self.maximum.max(sphere.max());
        }
    }
}

impl FromIterator<Sphere> for SketchPath {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        let mut path = Self::new();
        for sphere in iter {
            path.add_sphere(sphere.center, sphere.radius);
        }
        path
    }
}
