//! Windowed smoothing of sphere centers and radii.
//!
//! Each sphere touched by the brush range is replaced by the mean of a window
//! of `2 * hw + 1` neighbors, where `hw` is the requested half width clamped
//! so the window never leaves the path. Near either end an anchor sphere may
//! be blended in according to the [`SmoothEffect`].

use glam::Vec3;
use tracing::{debug, trace};

use crate::primitive::Sphere;
use crate::raycast::sphere_sphere_intersects;
use crate::types::{SmoothEffect, SmoothMode};

use super::SketchPath;

/// Running sums for one smoothing window.
///
/// Centers and radii keep separate sample counts since boundary effects can
/// add to one without the other.
#[derive(Debug, Clone, Copy)]
struct WindowSum {
    center: Vec3,
    radius: f32,
    center_samples: u32,
    radius_samples: u32,
}

impl WindowSum {
    fn over(window: &[Sphere]) -> Self {
        Self {
            center: window.iter().map(|s| s.center).sum(),
            radius: window.iter().map(|s| s.radius).sum(),
            center_samples: window.len() as u32,
            radius_samples: window.len() as u32,
        }
    }

    /// Blend one end's anchor into the sums.
    fn blend_boundary(&mut self, effect: SmoothEffect, anchor: Option<&Sphere>) {
        if let Some(anchor) = anchor {
            if effect.embeds() {
                self.center += anchor.center;
                self.center_samples += 1;
            }
        }

        match (effect, anchor) {
            (SmoothEffect::EmbedAndAdjust, Some(anchor)) => {
                self.radius += anchor.radius;
                self.radius_samples += 1;
            }
            // Zero-mass sample: shrinks the mean radius toward the end
            (SmoothEffect::Pinch, _) => self.radius_samples += 1,
            _ => {}
        }
    }

    fn mean(&self) -> Sphere {
        Sphere::new(
            self.center / self.center_samples as f32,
            self.radius / self.radius_samples as f32,
        )
    }
}

impl SketchPath {
    /// Smooth every sphere intersecting `range`, cascading in place.
    ///
    /// Spheres are visited first to last and overwritten immediately, so a
    /// window overlapping an earlier affected index reads its smoothed value.
    /// See [`SketchPath::smooth_with_mode`] for a snapshot variant.
    pub fn smooth(
        &mut self,
        range: &Sphere,
        half_width: usize,
        effect: SmoothEffect,
        nearest_to_first: Option<&Sphere>,
        nearest_to_last: Option<&Sphere>,
    ) {
        self.smooth_with_mode(
            range,
            half_width,
            effect,
            nearest_to_first,
            nearest_to_last,
            SmoothMode::Cascading,
        );
    }

    /// Smooth every sphere intersecting `range`.
    ///
    /// - `half_width`: neighbors averaged on each side, clamped at the ends
    /// - `effect`: boundary policy for indices within `half_width` of an end
    /// - `nearest_to_first` / `nearest_to_last`: optional anchors for each end
    /// - `mode`: whether windows read smoothed or pre-pass neighbors
    ///
    /// The sphere count never changes. Bounds are rebuilt afterwards.
    pub fn smooth_with_mode(
        &mut self,
        range: &Sphere,
        half_width: usize,
        effect: SmoothEffect,
        nearest_to_first: Option<&Sphere>,
        nearest_to_last: Option<&Sphere>,
        mode: SmoothMode,
    ) {
        let count = self.spheres.len();
        let snapshot = match mode {
            SmoothMode::Snapshot => Some(self.spheres.clone()),
            SmoothMode::Cascading => None,
        };
        let mut affected = 0usize;

        for i in 0..count {
            if !sphere_sphere_intersects(range, &self.spheres[i]) {
                continue;
            }

            let hw = half_width.min(i).min(count - 1 - i);
            let source = snapshot.as_deref().unwrap_or(&self.spheres[..]);
            let mut sum = WindowSum::over(&source[i - hw..=i + hw]);

            if effect != SmoothEffect::None {
                if i < half_width {
                    sum.blend_boundary(effect, nearest_to_first);
                }
                if half_width >= count - i {
                    sum.blend_boundary(effect, nearest_to_last);
                }
            }

            self.spheres[i] = sum.mean();
            affected += 1;
        }

        if affected == 0 {
            trace!("smooth: no spheres under brush, path unchanged");
        } else {
            debug!(
                "Smoothed {} of {} spheres (half_width={}, effect={:?}, mode={:?})",
                affected, count, half_width, effect, mode
            );
        }

        self.set_min_max();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::tests::{line_path, tight_bounds};

    const EPSILON: f32 = 1e-5;

    fn everywhere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1000.0)
    }

    fn zigzag() -> SketchPath {
        [0.0, 3.0, 0.0, 0.0, 0.0]
            .into_iter()
            .enumerate()
            .map(|(i, y)| Sphere::new(Vec3::new(i as f32, y, 0.0), 1.0))
            .collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_straight_line_is_stable() {
        let mut path = line_path(5, 1.0);
        let before = path.clone();

        path.smooth(&everywhere(), 1, SmoothEffect::None, None, None);

        assert_eq!(path.len(), 5);
        for (a, b) in path.spheres().iter().zip(before.spheres()) {
            assert!((a.center - b.center).length() < EPSILON);
            assert_close(a.radius, b.radius);
        }
    }

    #[test]
    fn test_cascading_reads_smoothed_neighbors() {
        let mut path = zigzag();
        path.smooth(&everywhere(), 1, SmoothEffect::None, None, None);

        let ys: Vec<f32> = path.spheres().iter().map(|s| s.center.y).collect();
        for (actual, expected) in ys.into_iter().zip([0.0, 1.0, 1.0 / 3.0, 1.0 / 9.0, 0.0]) {
            assert_close(actual, expected);
        }
    }

    #[test]
    fn test_snapshot_reads_original_neighbors() {
        let mut path = zigzag();
        path.smooth_with_mode(
            &everywhere(),
            1,
            SmoothEffect::None,
            None,
            None,
            SmoothMode::Snapshot,
        );

        let ys: Vec<f32> = path.spheres().iter().map(|s| s.center.y).collect();
        for (actual, expected) in ys.into_iter().zip([0.0, 1.0, 1.0, 0.0, 0.0]) {
            assert_close(actual, expected);
        }
    }

    #[test]
    fn test_spheres_outside_range_untouched() {
        let mut path = zigzag();
        let before = path.clone();

        // Only touches the sphere at (1, 3, 0)
        let range = Sphere::new(Vec3::new(1.0, 5.0, 0.0), 1.5);
        path.smooth(&range, 1, SmoothEffect::None, None, None);

        assert_eq!(path.len(), before.len());
        assert_close(path.spheres()[1].center.y, 1.0);
        for i in [0, 2, 3, 4] {
            assert_eq!(path.spheres()[i], before.spheres()[i]);
        }
    }

    #[test]
    fn test_range_missing_everything_is_noop() {
        let mut path = zigzag();
        let before = path.clone();

        path.smooth(
            &Sphere::new(Vec3::new(100.0, 0.0, 0.0), 1.0),
            2,
            SmoothEffect::Pinch,
            None,
            None,
        );
        assert_eq!(path, before);
    }

    #[test]
    fn test_embed_blends_anchor_center_only() {
        let mut path = line_path(3, 1.0);
        let anchor = Sphere::new(Vec3::new(-1.0, 0.0, 0.0), 5.0);

        path.smooth(&everywhere(), 1, SmoothEffect::Embed, Some(&anchor), None);

        let s = path.spheres();
        assert_close(s[0].center.x, -0.5);
        assert_close(s[0].radius, 1.0);
        assert_close(s[1].center.x, 2.5 / 3.0);
        assert_close(s[1].radius, 1.0);
        // No anchor for the last end
        assert_close(s[2].center.x, 2.0);
        assert_close(s[2].radius, 1.0);
    }

    #[test]
    fn test_embed_and_adjust_blends_radius() {
        let mut path = line_path(3, 1.0);
        let anchor = Sphere::new(Vec3::new(-1.0, 0.0, 0.0), 5.0);

        path.smooth(
            &everywhere(),
            1,
            SmoothEffect::EmbedAndAdjust,
            Some(&anchor),
            None,
        );

        let s = path.spheres();
        assert_close(s[0].center.x, -0.5);
        assert_close(s[0].radius, 3.0);
        assert_close(s[1].center.x, 2.5 / 3.0);
        assert_close(s[1].radius, 5.0 / 3.0);
        assert_close(s[2].radius, 1.0);
    }

    #[test]
    fn test_pinch_tapers_radius_only() {
        let mut path = line_path(3, 1.0);
        path.smooth(&everywhere(), 1, SmoothEffect::Pinch, None, None);

        let s = path.spheres();
        assert_close(s[0].center.x, 0.0);
        assert_close(s[0].radius, 0.5);
        assert_close(s[1].center.x, 1.0);
        assert_close(s[1].radius, 2.5 / 3.0);
        assert_close(s[2].center.x, 2.0);
        assert_close(s[2].radius, 0.5);

        // Radii shrank, so the rebuilt bounds shrink too
        let aabox = path.aabox().expect("non-empty path");
        assert_eq!(aabox, tight_bounds(&path));
        assert_close(aabox.min.x, -0.5);
        assert_close(aabox.max.x, 2.5);
    }

    #[test]
    fn test_anchor_ignored_without_effect() {
        let mut path = line_path(3, 1.0);
        let anchor = Sphere::new(Vec3::new(-10.0, 0.0, 0.0), 9.0);
        let before = path.clone();

        path.smooth(&everywhere(), 1, SmoothEffect::None, Some(&anchor), Some(&anchor));
        for (a, b) in path.spheres().iter().zip(before.spheres()) {
            assert!((a.center - b.center).length() < EPSILON);
            assert_close(a.radius, b.radius);
        }
    }

    #[test]
    fn test_half_width_larger_than_path() {
        let mut path = line_path(2, 1.0);
        path.smooth(&everywhere(), 5, SmoothEffect::Pinch, None, None);

        // Both ends are within reach of every index
        assert_eq!(path.len(), 2);
        for sphere in path.spheres() {
            assert_close(sphere.radius, 1.0 / 3.0);
        }
    }

    #[test]
    fn test_unbounded_half_width_clamps() {
        let mut path = line_path(3, 1.0);
        path.smooth(&everywhere(), usize::MAX, SmoothEffect::Pinch, None, None);

        // Every index is near both ends: one window sample plus two zero-mass samples
        let s = path.spheres();
        assert_eq!(s.len(), 3);
        assert_close(s[0].radius, 1.0 / 3.0);
        assert_close(s[1].center.x, 1.0);
        assert_close(s[2].radius, 1.0 / 3.0);
    }

    #[test]
    fn test_embed_and_adjust_last_anchor() {
        let mut path = line_path(3, 1.0);
        let anchor = Sphere::new(Vec3::new(3.0, 0.0, 0.0), 5.0);

        path.smooth(
            &everywhere(),
            1,
            SmoothEffect::EmbedAndAdjust,
            None,
            Some(&anchor),
        );

        let s = path.spheres();
        assert_close(s[0].center.x, 0.0);
        assert_close(s[0].radius, 1.0);
        assert_close(s[1].center.x, 1.0);
        assert_close(s[1].radius, 1.0);
        assert_close(s[2].center.x, 2.5);
        assert_close(s[2].radius, 3.0);
    }

    #[test]
    fn test_embed_last_anchor_keeps_radius() {
        let mut path = line_path(3, 1.0);
        let anchor = Sphere::new(Vec3::new(3.0, 0.0, 0.0), 5.0);

        path.smooth(&everywhere(), 1, SmoothEffect::Embed, None, Some(&anchor));

        let s = path.spheres();
        assert_close(s[2].center.x, 2.5);
        assert_close(s[2].radius, 1.0);
        assert_close(s[0].center.x, 0.0);
    }

    #[test]
    fn test_smoothing_empty_path() {
        let mut path = SketchPath::new();
        path.smooth(&everywhere(), 3, SmoothEffect::Embed, None, None);
        assert!(path.is_empty());
        assert_eq!(path.minimum(), Vec3::INFINITY);
    }

    #[test]
    fn test_bounds_tight_after_smoothing() {
        let mut path = zigzag();
        path.smooth(&everywhere(), 2, SmoothEffect::None, None, None);
        assert_eq!(path.aabox().expect("non-empty path"), tight_bounds(&path));
        // The peak at y = 3 was flattened
        assert!(path.maximum().y < 4.0);
    }
}
