//! Ray picking against sketch paths

use tracing::trace;

use crate::intersection::PathIntersection;
use crate::primitive::Ray;
use crate::raycast::{ray_aabox_intersects, ray_sphere_intersection};
use crate::types::{PathId, SketchMeshId};

use super::SketchPath;

impl SketchPath {
    /// Offer every sphere hit by `ray` to `intersection`.
    ///
    /// The cached bounds reject the ray before any per-sphere work. Spheres
    /// may overlap, so all of them are tested and the accumulator keeps the
    /// nearest. Returns whether `intersection` holds a hit afterwards, which
    /// may come from an earlier path offered to the same accumulator.
    pub fn intersects(
        &self,
        ray: &Ray,
        mesh: SketchMeshId,
        path: PathId,
        intersection: &mut PathIntersection,
    ) -> bool {
        if !ray_aabox_intersects(ray, &self.bounds()) {
            return intersection.is_intersection();
        }

        for sphere in &self.spheres {
            if let Some(t) = ray_sphere_intersection(ray, sphere) {
                let position = ray.point_at(t);
                let normal = (position - sphere.center).normalize_or_zero();
                if intersection.update(t, position, normal, mesh, path) {
                    trace!("Path {:?}: nearer hit at t={:.4}", path, t);
                }
            }
        }
        intersection.is_intersection()
    }
}

/// Cast a ray against every path of a mesh, identifying each by its index.
pub fn intersect_paths(
    paths: &[SketchPath],
    ray: &Ray,
    mesh: SketchMeshId,
    intersection: &mut PathIntersection,
) -> bool {
    for (index, path) in paths.iter().enumerate() {
        path.intersects(ray, mesh, PathId(index as u32), intersection);
    }
    intersection.is_intersection()
}
