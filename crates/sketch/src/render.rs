//! Render hook for sketch paths.
//!
//! The path never draws anything itself. Each sphere is handed to an
//! instanced mesh collaborator (usually a unit sphere) that is positioned,
//! scaled and submitted with the caller's camera.

use glam::Vec3;

use crate::path::SketchPath;

/// A mesh that can be placed and drawn once per sphere.
pub trait InstanceMesh {
    /// Camera type the renderer draws with
    type Camera: ?Sized;

    fn set_position(&mut self, position: Vec3);
    fn set_scaling(&mut self, scaling: Vec3);
    fn render(&mut self, camera: &Self::Camera);
}

/// Per-sphere instance data for batched GPU upload.
///
/// This struct is designed for GPU compatibility with bytemuck.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SphereInstance {
    /// Sphere center in world space
    pub position: [f32; 3],
    /// Uniform scale (the sphere radius)
    pub scale: f32,
}

impl SketchPath {
    /// Draw every sphere through `mesh`.
    pub fn render<M: InstanceMesh>(&self, camera: &M::Camera, mesh: &mut M) {
        for sphere in &self.spheres {
            mesh.set_position(sphere.center);
            mesh.set_scaling(Vec3::splat(sphere.radius));
            mesh.render(camera);
        }
    }

    /// Instance data for all spheres, in path order.
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.spheres
            .iter()
            .map(|sphere| SphereInstance {
                position: sphere.center.to_array(),
                scale: sphere.radius,
            })
            .collect()
    }
}
