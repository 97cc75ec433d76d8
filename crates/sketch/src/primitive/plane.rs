use glam::Vec3;

/// A plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Signed distance, positive on the side the normal points to.
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.point)
    }

    /// Reflect a point across the plane.
    pub fn mirror(&self, point: Vec3) -> Vec3 {
        point - self.normal * (2.0 * self.distance(point))
    }

    /// Reflect a direction across the plane (ignores the plane's offset).
    pub fn mirror_direction(&self, direction: Vec3) -> Vec3 {
        direction - self.normal * (2.0 * self.normal.dot(direction))
    }
}
