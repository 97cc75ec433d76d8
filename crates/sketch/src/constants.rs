/// Shared tolerance for near-degenerate geometric comparisons.
///
/// Used by the mirror side test and by raycasts to reject hits at the origin.
pub const EPSILON: f32 = 1e-5;
