//! Intersection tests between primitives.
//!
//! These are the building blocks for path picking: a ray/box slab test used
//! as a fast reject, a ray/sphere test returning the nearest hit distance, and
//! a sphere/sphere overlap test used to select samples under a brush.

use glam::Vec3;

use crate::constants::EPSILON;
use crate::primitive::{AaBox, Ray, Sphere};

/// Ray-sphere intersection test.
///
/// Returns the distance to the nearest intersection in front of the ray
/// origin, or `None` if the ray misses. A ray starting inside the sphere
/// reports the exit point.
pub fn ray_sphere_intersection(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    // Unit direction: the quadratic reduces to t^2 + 2bt + c = 0
    if ray.direction == Vec3::ZERO {
        return None;
    }
    let to_origin = ray.origin - sphere.center;
    let b = to_origin.dot(ray.direction);
    let c = to_origin.length_squared() - sphere.radius * sphere.radius;

    // Origin outside and pointing away
    if c > 0.0 && b > 0.0 {
        return None;
    }

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    [near, far].into_iter().find(|&t| t > EPSILON)
}

/// Ray-box intersection test (slab method).
///
/// An empty box is never hit. Boxes entirely behind the ray origin are
/// rejected; a ray starting inside the box always hits.
pub fn ray_aabox_intersects(ray: &Ray, aabox: &AaBox) -> bool {
    if aabox.is_empty() {
        return false;
    }

    let origin = ray.origin.to_array();
    let direction = ray.direction.to_array();
    let min = aabox.min.to_array();
    let max = aabox.max.to_array();

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        // Only an exactly parallel axis is special-cased; shallow angles still
        // produce finite slab distances below
        if direction[axis] == 0.0 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return false;
            }
            continue;
        }

        let inv = 1.0 / direction[axis];
        let t1 = (min[axis] - origin[axis]) * inv;
        let t2 = (max[axis] - origin[axis]) * inv;

        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));

        if t_enter > t_exit {
            return false;
        }
    }

    t_exit >= 0.0
}

/// Returns true if two spheres overlap or touch.
pub fn sphere_sphere_intersects(a: &Sphere, b: &Sphere) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) <= reach * reach
}
