//! Plane mirroring for symmetric editing

use tracing::debug;

use crate::constants::EPSILON;
use crate::primitive::Plane;

use super::SketchPath;

impl SketchPath {
    /// Split the path at `plane` and return the reflected half.
    ///
    /// Spheres with `plane.distance(center) > -EPSILON` are kept in `self`;
    /// all others are dropped. Each kept sphere gets a reflected copy with
    /// the same radius in the returned path. Both paths end with tight bounds.
    pub fn mirror(&mut self, plane: &Plane) -> SketchPath {
        let old_spheres = std::mem::take(&mut self.spheres);
        let total = old_spheres.len();
        let mut mirrored = SketchPath::new();

        self.reset();
        for sphere in old_spheres {
            if plane.distance(sphere.center) > -EPSILON {
                self.add_sphere(sphere.center, sphere.radius);
                mirrored.add_sphere(plane.mirror(sphere.center), sphere.radius);
            }
        }

        debug!(
            "Mirrored path: kept {} of {} spheres, dropped {}",
            self.len(),
            total,
            total - self.len()
        );
        mirrored
    }
}
