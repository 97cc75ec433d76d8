//! Nearest-hit accumulators for ray queries.
//!
//! A query creates one accumulator and passes it by reference through every
//! path (or mesh) it tests. Each candidate hit is offered via `update`, and
//! only hits nearer than the current best are kept, so after the sweep the
//! accumulator holds the globally nearest hit.

use glam::Vec3;

use crate::types::{PathId, SketchMeshId};

/// Geometry of a single ray hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub t: f32,
    /// World-space hit position
    pub position: Vec3,
    /// Outward surface normal at the hit
    pub normal: Vec3,
}

/// Keeps the hit with the smallest `t` seen so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intersection {
    hit: Option<Hit>,
}

impl Intersection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a hit. Returns true if it became the nearest one.
    pub fn update(&mut self, t: f32, position: Vec3, normal: Vec3) -> bool {
        let dominated = match &self.hit {
            Some(prev) => t >= prev.t,
            None => false,
        };
        if dominated {
            return false;
        }
        self.hit = Some(Hit {
            t,
            position,
            normal,
        });
        true
    }

    pub fn is_intersection(&self) -> bool {
        self.hit.is_some()
    }

    pub fn hit(&self) -> Option<&Hit> {
        self.hit.as_ref()
    }

    pub fn reset(&mut self) {
        self.hit = None;
    }
}

/// Nearest hit against sketch paths, with back-references to its owners.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathIntersection {
    intersection: Intersection,
    owner: Option<(SketchMeshId, PathId)>,
}

impl PathIntersection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a hit on `path` of `mesh`. Returns true if it became the nearest one.
    pub fn update(
        &mut self,
        t: f32,
        position: Vec3,
        normal: Vec3,
        mesh: SketchMeshId,
        path: PathId,
    ) -> bool {
        if self.intersection.update(t, position, normal) {
            self.owner = Some((mesh, path));
            true
        } else {
            false
        }
    }

    pub fn is_intersection(&self) -> bool {
        self.intersection.is_intersection()
    }

    pub fn hit(&self) -> Option<&Hit> {
        self.intersection.hit()
    }

    /// Mesh owning the nearest hit path
    pub fn mesh(&self) -> Option<SketchMeshId> {
        self.owner.map(|(mesh, _)| mesh)
    }

    /// Path owning the nearest hit
    pub fn path(&self) -> Option<PathId> {
        self.owner.map(|(_, path)| path)
    }

    pub fn reset(&mut self) {
        self.intersection.reset();
        self.owner = None;
    }
}
