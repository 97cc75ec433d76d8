//! Geometric primitives used by sketch paths.
//!
//! All primitives are small immutable value types over `glam::Vec3`.

mod aabox;
mod plane;
mod ray;
mod sphere;

pub use aabox::AaBox;
pub use plane::Plane;
pub use ray::Ray;
pub use sphere::Sphere;
