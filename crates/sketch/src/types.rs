//! Core sketch types shared by paths, brushes and intersection queries.

use serde::{Deserialize, Serialize};

/// Boundary policy applied while smoothing samples near either end of a path.
///
/// An anchor sphere (the mesh sample nearest to a path end) can be blended
/// into the window average of samples within `half_width` of that end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SmoothEffect {
    /// Window average uses only path samples
    #[default]
    None = 0,
    /// Count one extra radius sample with zero mass, tapering the ends
    Pinch = 1,
    /// Blend the anchor center into the center average
    Embed = 2,
    /// Blend the anchor center and radius into both averages
    EmbedAndAdjust = 3,
}

impl SmoothEffect {
    /// Returns true if the anchor center takes part in the center average
    pub fn embeds(&self) -> bool {
        matches!(self, SmoothEffect::Embed | SmoothEffect::EmbedAndAdjust)
    }
}

/// How windows read neighboring samples during one smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SmoothMode {
    /// Samples are updated in place from first to last, so later windows
    /// read values already smoothed earlier in the same pass
    #[default]
    Cascading = 0,
    /// Every window reads the geometry as it was before the pass
    Snapshot = 1,
}

/// Type-safe identifier of the sketch mesh owning a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SketchMeshId(pub u32);

/// Type-safe identifier of a path within its sketch mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(pub u32);

/// Errors that can occur when querying a sketch path
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Sketch path is empty and has no bounds")]
    Empty,
}
