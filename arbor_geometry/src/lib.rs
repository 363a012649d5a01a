// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives for the Arbor scene graph.
//!
//! This crate holds the pieces of 2D math that the scene graph needs but that
//! do not depend on nodes, events, or a drawing surface:
//!
//! - [`Vector2Ext`] – small helpers on top of [`kurbo::Vec2`] (rotation,
//!   component-wise scale, distance, clamped interpolation).
//! - [`BoundingBox`] – an immutable axis-aligned box in world coordinates
//!   with inclusive containment and strict overlap.
//! - [`PathGeometry`] – a command list with lazily computed centroid and
//!   world-space ("calculated") commands, point simplification, a bounding
//!   box, and a stroke hit test.
//! - [`PreciseHitTest`] – a narrow-phase hit test trait, implemented here for
//!   [`RotatedBox`], [`Disk`], and [`stroke::StrokedLine`].
//!
//! All coordinates are world coordinates. Rotations are in radians and
//! follow the screen convention (positive angles turn clockwise on a
//! y-down surface).

use kurbo::{Point, Vec2};

mod bounds;
mod path;
/// Stroke-oriented helpers and primitives.
pub mod stroke;
mod vector;

pub use bounds::BoundingBox;
pub use path::{
    DEFAULT_HIT_TOLERANCE, DEFAULT_SIMPLIFY_TOLERANCE, DEFAULT_SUBDIVISIONS, PathCommand,
    PathGeometry, PathTransform, simplify, subdivide_bezier,
};
pub use vector::{Vector2Ext, rotate_about};

/// Kind of hit produced by a precise test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    /// Hit the interior of a shape.
    Fill,
    /// Hit the stroked outline of a shape.
    Stroke,
}

/// Parameters controlling precise hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Tolerance in world units.
    ///
    /// Only stroke tests widen their pick region by this amount. Filled
    /// regions are tested exactly.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }
}

/// Score returned from a precise hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Geometric distance from the query point to the hit geometry.
    pub distance: f64,
    /// Classification of what was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// Convenience constructor for a filled hit at distance 0.
    pub const fn filled() -> Self {
        Self {
            distance: 0.0,
            kind: HitKind::Fill,
        }
    }
}

/// Trait for precise 2D hit testing in world coordinates.
pub trait PreciseHitTest {
    /// Perform a precise hit test against `pt`.
    ///
    /// Returns `Some(HitScore)` when the point is considered a hit.
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

/// An axis-aligned box rotated about its own center.
///
/// This is the generic hit region for shapes that do not define their own:
/// the query point is rotated by the inverse rotation about the box center
/// and then tested for inclusive containment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedBox {
    /// The unrotated box.
    pub bounds: BoundingBox,
    /// Rotation in radians about the box center.
    pub rotation: f64,
}

impl PreciseHitTest for RotatedBox {
    fn hit_test(&self, pt: Point, _params: &HitParams) -> Option<HitScore> {
        let local = if self.rotation == 0.0 {
            pt
        } else {
            rotate_about(pt, self.bounds.center(), -self.rotation)
        };
        self.bounds.contains(local).then(HitScore::filled)
    }
}

/// A filled disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    /// Center in world coordinates.
    pub center: Point,
    /// Radius in world units.
    pub radius: f64,
}

impl PreciseHitTest for Disk {
    fn hit_test(&self, pt: Point, _params: &HitParams) -> Option<HitScore> {
        let d: Vec2 = pt - self.center;
        (d.hypot2() <= self.radius * self.radius).then(HitScore::filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_4;

    #[test]
    fn disk_boundary_is_inclusive() {
        let disk = Disk {
            center: Point::ORIGIN,
            radius: 100.0,
        };
        let params = HitParams::default();
        assert!(disk.hit_test(Point::new(99.0, 0.0), &params).is_some());
        assert_eq!(
            disk.hit_test(Point::new(100.0, 0.0), &params),
            Some(HitScore::filled())
        );
        assert!(disk.hit_test(Point::new(101.0, 0.0), &params).is_none());
    }

    #[test]
    fn rotated_box_unrotates_query_point() {
        let bounds = BoundingBox::new(-50.0, -10.0, 50.0, 10.0);
        let flat = RotatedBox {
            bounds,
            rotation: 0.0,
        };
        let turned = RotatedBox {
            bounds,
            rotation: FRAC_PI_4,
        };
        let params = HitParams::default();
        let corner = Point::new(45.0, 0.0);
        let diagonal = Point::new(30.0, 30.0);
        assert!(flat.hit_test(corner, &params).is_some());
        assert!(flat.hit_test(diagonal, &params).is_none());
        assert!(turned.hit_test(diagonal, &params).is_some());
        assert!(turned.hit_test(corner, &params).is_none());
    }

    #[test]
    fn fill_tests_ignore_tolerance() {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let rb = RotatedBox {
            bounds,
            rotation: 0.0,
        };
        let wide = HitParams { tolerance: 50.0 };
        assert!(rb.hit_test(Point::new(11.0, 5.0), &wide).is_none());
    }
}
