//! Tubesketch skeletal stroke paths.
//!
//! A freehand stroke is stored as an ordered chain of weighted spheres
//! (center + radius) approximating a tubular skeleton. A separate meshing
//! stage turns the chain into a solid surface later on.
//!
//! This crate provides:
//! - [`primitive`] - Ray, plane, axis-aligned box and sphere value types
//! - [`raycast`] - Ray/sphere, ray/box and sphere/sphere tests
//! - [`intersection`] - Nearest-hit accumulator shared across paths
//! - [`path`] - The sketch path: insertion, bounds, picking, mirror, smoothing
//! - [`render`] - Per-sphere instance submission
//! - [`brush`] - Smoothing brush driven by the tool layer
//! - [`stroke`] - Sample spacing while the user draws

pub mod brush;
pub mod constants;
pub mod intersection;
pub mod path;
pub mod primitive;
pub mod raycast;
pub mod render;
pub mod stroke;
pub mod types;

pub use brush::*;
pub use constants::*;
pub use intersection::*;
pub use path::*;
pub use primitive::*;
pub use raycast::*;
pub use render::*;
pub use stroke::*;
pub use types::*;
